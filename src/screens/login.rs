//! Login screen: email, password, role toggle and the way into signup.

use crate::components::{Header, AUTH_HEADER_HEIGHT};
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{Credentials, NavCommand, Screen as ScreenId, UserRole};
use crate::styles::theme;
use crate::utils::{center_column, focus_move, stack_rows, FocusRing, FormField, FIELD_HEIGHT};
use crate::widgets::{Button, Toggle};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const FORM_WIDTH: u16 = 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginControl {
    Email,
    Password,
    SignIn,
    ForgotPassword,
    Google,
    Role,
    GetStarted,
}

impl LoginControl {
    const ORDER: [LoginControl; 7] = [
        LoginControl::Email,
        LoginControl::Password,
        LoginControl::SignIn,
        LoginControl::ForgotPassword,
        LoginControl::Google,
        LoginControl::Role,
        LoginControl::GetStarted,
    ];
}

pub fn title_for(role: UserRole) -> &'static str {
    match role {
        UserRole::Donor => "Welcome Back, Donor!",
        UserRole::Ngo => "NGO Portal Login",
    }
}

#[derive(Debug, Clone)]
pub struct LoginScreen {
    email: FormField,
    password: FormField,
    focus: FocusRing<LoginControl>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            email: FormField::new("Email Address", "example@mail.com"),
            password: FormField::password("Password"),
            focus: FocusRing::new(LoginControl::ORDER.to_vec()),
        }
    }

    pub fn focused(&self) -> Option<LoginControl> {
        self.focus.current()
    }

    pub fn email(&self) -> &str {
        self.email.value()
    }

    pub fn password(&self) -> &str {
        self.password.value()
    }

    fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus.current()? {
            LoginControl::Email => Some(&mut self.email),
            LoginControl::Password => Some(&mut self.password),
            _ => None,
        }
    }

    fn sign_in(&self, role: UserRole) -> ScreenAction {
        ScreenAction::Dispatch(NavCommand::RequestLogin {
            role,
            credentials: Credentials::new(self.email.value(), self.password.value()),
        })
    }

    fn activate(&mut self, role: UserRole) -> ScreenAction {
        let Some(control) = self.focus.current() else {
            return ScreenAction::None;
        };
        match control {
            LoginControl::Email => {
                self.focus.focus(LoginControl::Password);
                ScreenAction::None
            }
            LoginControl::Password | LoginControl::SignIn => self.sign_in(role),
            LoginControl::ForgotPassword => ScreenAction::not_available("Password recovery"),
            LoginControl::Google => ScreenAction::not_available("Google sign-in"),
            LoginControl::Role => ScreenAction::Dispatch(NavCommand::SelectRole(role.toggled())),
            LoginControl::GetStarted => ScreenAction::Dispatch(NavCommand::RequestSignup(role)),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        let action = ctx.keymap().action_for(&key);
        let role = ctx.navigation.last_selected_role();

        if let Some(field) = self.focused_field_mut() {
            if field.handle_key(&key, action) {
                return ScreenAction::None;
            }
        }

        if let Some(step) = focus_move(action) {
            self.focus.apply(step);
            return ScreenAction::None;
        }

        match action {
            Some(Action::Confirm | Action::ToggleSelect) => self.activate(role),
            Some(Action::MoveLeft | Action::MoveRight) if self.focus.is(LoginControl::Role) => {
                ScreenAction::Dispatch(NavCommand::SelectRole(role.toggled()))
            }
            _ => ScreenAction::None,
        }
    }
}

impl Screen for LoginScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Login
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let role = ctx.navigation.last_selected_role();

        let [header, body] =
            Layout::vertical([Constraint::Length(AUTH_HEADER_HEIGHT), Constraint::Min(0)])
                .areas(area);
        Header::render_auth(frame, header, title_for(role), "Enter your details below");

        let column = center_column(body.inner(Margin::new(1, 1)), FORM_WIDTH);
        let error = ctx.navigation.login_error();

        // Row order mirrors LoginControl::ORDER with the error line after the
        // password.
        let heights = [
            FIELD_HEIGHT,
            FIELD_HEIGHT,
            u16::from(error.is_some()),
            2,
            1,
            2,
            1,
            1,
            3,
            2,
        ];
        let focus_row = match self.focus.current() {
            Some(LoginControl::Email) | None => 0,
            Some(LoginControl::Password) => 1,
            Some(LoginControl::SignIn) => 3,
            Some(LoginControl::ForgotPassword) => 4,
            Some(LoginControl::Google) => 6,
            Some(LoginControl::Role) => 8,
            Some(LoginControl::GetStarted) => 9,
        };
        let rows = stack_rows(column, &heights, focus_row);

        if let Some(area) = rows[0] {
            self.email.render(frame, area, self.focus.is(LoginControl::Email));
        }
        if let Some(area) = rows[1] {
            self.password
                .render(frame, area, self.focus.is(LoginControl::Password));
        }
        if let (Some(area), Some(message)) = (rows[2], error) {
            frame.render_widget(Paragraph::new(Span::styled(message, t.error_style())), area);
        }
        if let Some(area) = rows[3] {
            frame.render_widget(
                Button::primary("Sign In").focused(self.focus.is(LoginControl::SignIn)),
                Rect { height: 1, ..area },
            );
        }
        if let Some(area) = rows[4] {
            frame.render_widget(
                Button::link("Forgot your password?")
                    .focused(self.focus.is(LoginControl::ForgotPassword)),
                area,
            );
        }
        if let Some(area) = rows[5] {
            frame.render_widget(
                Paragraph::new(Span::styled("──── Or sign in with ────", t.muted_style()))
                    .alignment(Alignment::Center),
                Rect {
                    y: area.y + 1,
                    height: 1,
                    ..area
                },
            );
        }
        if let Some(area) = rows[6] {
            frame.render_widget(
                Button::secondary("G  Google").focused(self.focus.is(LoginControl::Google)),
                area,
            );
        }
        if let Some(area) = rows[8] {
            frame.render_widget(
                Toggle::new(UserRole::Donor.label(), UserRole::Ngo.label())
                    .right_selected(role == UserRole::Ngo)
                    .focused(self.focus.is(LoginControl::Role)),
                area,
            );
        }
        if let Some(area) = rows[9] {
            let [prompt, button] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(Rect {
                        y: area.y + 1,
                        height: 1,
                        ..area
                    });
            frame.render_widget(
                Paragraph::new(Span::styled("Don't have an account?", t.muted_style()))
                    .alignment(Alignment::Right),
                prompt,
            );
            frame.render_widget(
                Button::secondary("Get Started")
                    .focused(self.focus.is(LoginControl::GetStarted))
                    .alignment(Alignment::Left),
                button,
            );
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.handle_key(key, ctx)),
            _ => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        matches!(
            self.focus.current(),
            Some(LoginControl::Email | LoginControl::Password)
        )
    }

    fn footer_hint(&self, keymap: &Keymap) -> String {
        format!(
            "{}: Next field | {}: Sign in | {}: Show password | {}: Help",
            keymap.field_display(),
            keymap.key_display(Action::Confirm),
            keymap.key_display(Action::RevealPassword),
            keymap.key_display(Action::Help)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::NavigationController;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(screen: &mut LoginScreen, nav: &NavigationController, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let ctx = ScreenContext::new(&config, nav);
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    fn type_text(screen: &mut LoginScreen, nav: &NavigationController, text: &str) {
        for c in text.chars() {
            press(screen, nav, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_enter_on_email_moves_to_password() {
        let nav = NavigationController::new();
        let mut screen = LoginScreen::new();
        type_text(&mut screen, &nav, "123");
        assert_eq!(press(&mut screen, &nav, KeyCode::Enter), ScreenAction::None);
        assert_eq!(screen.focused(), Some(LoginControl::Password));
    }

    #[test]
    fn test_enter_on_password_requests_login_with_selected_role() {
        let mut nav = NavigationController::new();
        nav.select_role(UserRole::Ngo);
        let mut screen = LoginScreen::new();
        type_text(&mut screen, &nav, "123");
        press(&mut screen, &nav, KeyCode::Tab);
        type_text(&mut screen, &nav, "123");

        let action = press(&mut screen, &nav, KeyCode::Enter);
        assert_eq!(
            action,
            ScreenAction::Dispatch(NavCommand::RequestLogin {
                role: UserRole::Ngo,
                credentials: Credentials::new("123", "123"),
            })
        );
    }

    #[test]
    fn test_q_is_typed_in_email() {
        let nav = NavigationController::new();
        let mut screen = LoginScreen::new();
        assert_eq!(press(&mut screen, &nav, KeyCode::Char('q')), ScreenAction::None);
        assert_eq!(screen.email(), "q");
        assert!(screen.is_input_focused());
    }

    #[test]
    fn test_role_toggle_emits_select_role() {
        let nav = NavigationController::new();
        let mut screen = LoginScreen::new();
        screen.focus.focus(LoginControl::Role);
        assert!(!screen.is_input_focused());
        assert_eq!(
            press(&mut screen, &nav, KeyCode::Right),
            ScreenAction::Dispatch(NavCommand::SelectRole(UserRole::Ngo))
        );
        assert_eq!(
            press(&mut screen, &nav, KeyCode::Char(' ')),
            ScreenAction::Dispatch(NavCommand::SelectRole(UserRole::Ngo))
        );
    }

    #[test]
    fn test_get_started_uses_current_role() {
        let mut nav = NavigationController::new();
        nav.select_role(UserRole::Ngo);
        let mut screen = LoginScreen::new();
        screen.focus.focus(LoginControl::GetStarted);
        assert_eq!(
            press(&mut screen, &nav, KeyCode::Enter),
            ScreenAction::Dispatch(NavCommand::RequestSignup(UserRole::Ngo))
        );
    }

    #[test]
    fn test_decorative_links_only_notify() {
        let nav = NavigationController::new();
        let mut screen = LoginScreen::new();
        for control in [LoginControl::ForgotPassword, LoginControl::Google] {
            screen.focus.focus(control);
            assert!(matches!(
                press(&mut screen, &nav, KeyCode::Enter),
                ScreenAction::Notify(_)
            ));
        }
    }

    #[test]
    fn test_focus_wraps_backwards_to_get_started() {
        let nav = NavigationController::new();
        let mut screen = LoginScreen::new();
        press(&mut screen, &nav, KeyCode::BackTab);
        assert_eq!(screen.focused(), Some(LoginControl::GetStarted));
    }

    #[test]
    fn test_title_follows_role() {
        assert_eq!(title_for(UserRole::Donor), "Welcome Back, Donor!");
        assert_eq!(title_for(UserRole::Ngo), "NGO Portal Login");
    }
}
