//! NGO registration. "Verify & Sign Up" goes straight to the dashboard.

use crate::components::auth_form::{render_otp_row, render_sign_in_prompt, render_submit};
use crate::components::{Header, AUTH_HEADER_HEIGHT};
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{NavCommand, Screen as ScreenId};
use crate::utils::{center_column, focus_move, stack_rows, FocusRing, FormField, FIELD_HEIGHT};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;

const FORM_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NgoControl {
    SignIn,
    NgoId,
    OrganizationName,
    Mobile,
    Password,
    ConfirmPassword,
    Otp,
    GetOtp,
    VerifyAndSignUp,
}

impl NgoControl {
    pub const ORDER: [NgoControl; 9] = [
        NgoControl::SignIn,
        NgoControl::NgoId,
        NgoControl::OrganizationName,
        NgoControl::Mobile,
        NgoControl::Password,
        NgoControl::ConfirmPassword,
        NgoControl::Otp,
        NgoControl::GetOtp,
        NgoControl::VerifyAndSignUp,
    ];

    fn is_field(self) -> bool {
        !matches!(
            self,
            NgoControl::SignIn | NgoControl::GetOtp | NgoControl::VerifyAndSignUp
        )
    }
}

#[derive(Debug, Clone)]
pub struct NgoSignupScreen {
    focus: FocusRing<NgoControl>,
    ngo_id: FormField,
    organization_name: FormField,
    mobile: FormField,
    password: FormField,
    confirm_password: FormField,
    otp: FormField,
}

impl Default for NgoSignupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NgoSignupScreen {
    pub fn new() -> Self {
        let mut focus = FocusRing::new(NgoControl::ORDER.to_vec());
        focus.focus(NgoControl::NgoId);
        Self {
            focus,
            ngo_id: FormField::new("NGO ID / Reg Number", "NGO-123456"),
            organization_name: FormField::new("Organization Name", "Helping Hands Foundation"),
            mobile: FormField::new("Mobile Number", "+1 234 567 890"),
            password: FormField::password("Password"),
            confirm_password: FormField::password("Confirm Password"),
            otp: FormField::new("Enter OTP", "123456"),
        }
    }

    pub fn focused(&self) -> Option<NgoControl> {
        self.focus.current()
    }

    /// Text box behind a control, if the control is one.
    pub fn field(&self, control: NgoControl) -> Option<&FormField> {
        match control {
            NgoControl::NgoId => Some(&self.ngo_id),
            NgoControl::OrganizationName => Some(&self.organization_name),
            NgoControl::Mobile => Some(&self.mobile),
            NgoControl::Password => Some(&self.password),
            NgoControl::ConfirmPassword => Some(&self.confirm_password),
            NgoControl::Otp => Some(&self.otp),
            NgoControl::SignIn | NgoControl::GetOtp | NgoControl::VerifyAndSignUp => None,
        }
    }

    fn field_mut(&mut self, control: NgoControl) -> Option<&mut FormField> {
        match control {
            NgoControl::NgoId => Some(&mut self.ngo_id),
            NgoControl::OrganizationName => Some(&mut self.organization_name),
            NgoControl::Mobile => Some(&mut self.mobile),
            NgoControl::Password => Some(&mut self.password),
            NgoControl::ConfirmPassword => Some(&mut self.confirm_password),
            NgoControl::Otp => Some(&mut self.otp),
            NgoControl::SignIn | NgoControl::GetOtp | NgoControl::VerifyAndSignUp => None,
        }
    }

    fn activate(&mut self) -> ScreenAction {
        match self.focus.current() {
            Some(NgoControl::SignIn) => ScreenAction::Dispatch(NavCommand::ReturnToLogin),
            Some(NgoControl::GetOtp) => ScreenAction::not_available("Get OTP"),
            Some(NgoControl::VerifyAndSignUp) => {
                ScreenAction::Dispatch(NavCommand::CompleteNgoSignup)
            }
            Some(_) => {
                self.focus.next();
                ScreenAction::None
            }
            None => ScreenAction::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        let action = ctx.keymap().action_for(&key);

        if let Some(field) = self.focus.current().and_then(|c| self.field_mut(c)) {
            if field.handle_key(&key, action) {
                return ScreenAction::None;
            }
        }

        if let Some(step) = focus_move(action) {
            self.focus.apply(step);
            return ScreenAction::None;
        }

        match action {
            Some(Action::Cancel) => ScreenAction::Dispatch(NavCommand::ReturnToLogin),
            Some(Action::Confirm | Action::ToggleSelect) => self.activate(),
            _ => ScreenAction::None,
        }
    }
}

impl Screen for NgoSignupScreen {
    fn id(&self) -> ScreenId {
        ScreenId::SignupNgo
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let [header, body] =
            Layout::vertical([Constraint::Length(AUTH_HEADER_HEIGHT), Constraint::Min(0)])
                .areas(area);
        Header::render_auth(
            frame,
            header,
            "NGO Registration",
            "Join our network to help others",
        );

        let column = center_column(body.inner(Margin::new(1, 0)), FORM_WIDTH);
        let heights = NgoControl::ORDER.map(|c| match c {
            NgoControl::SignIn | NgoControl::VerifyAndSignUp => 2,
            NgoControl::GetOtp => 0,
            _ => FIELD_HEIGHT,
        });
        let focused_row = match self.focus.current() {
            Some(NgoControl::GetOtp) => self.focus.position().saturating_sub(1),
            _ => self.focus.position(),
        };
        let rows = stack_rows(column, &heights, focused_row);

        for (control, row) in NgoControl::ORDER.into_iter().zip(rows) {
            let Some(row) = row else { continue };
            let focused = self.focus.is(control);
            match control {
                NgoControl::SignIn => {
                    render_sign_in_prompt(frame, Rect { height: 1, ..row }, focused);
                }
                NgoControl::Otp => render_otp_row(
                    frame,
                    row,
                    &self.otp,
                    focused,
                    self.focus.is(NgoControl::GetOtp),
                ),
                NgoControl::GetOtp => {}
                NgoControl::VerifyAndSignUp => {
                    render_submit(frame, row, "Verify & Sign Up", focused);
                }
                field => {
                    if let Some(input) = self.field(field) {
                        input.render(frame, row, focused);
                    }
                }
            }
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
        self.focus.current().is_some_and(NgoControl::is_field)
    }

    fn footer_hint(&self, keymap: &Keymap) -> String {
        keymap.footer_form()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::NavigationController;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(screen: &mut NgoSignupScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let nav = NavigationController::new();
        let ctx = ScreenContext::new(&config, &nav);
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    #[test]
    fn test_enter_walks_fields_then_submits() {
        let mut screen = NgoSignupScreen::new();
        assert_eq!(screen.focused(), Some(NgoControl::NgoId));
        for _ in 0..6 {
            assert_eq!(press(&mut screen, KeyCode::Enter), ScreenAction::None);
        }
        assert_eq!(screen.focused(), Some(NgoControl::GetOtp));
        assert!(matches!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Notify(_)
        ));
        press(&mut screen, KeyCode::Down);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Dispatch(NavCommand::CompleteNgoSignup)
        );
    }

    #[test]
    fn test_typed_ngo_id_is_kept_in_field() {
        let mut screen = NgoSignupScreen::new();
        for c in "NGO-1".chars() {
            press(&mut screen, KeyCode::Char(c));
        }
        assert_eq!(
            screen.field(NgoControl::NgoId).map(FormField::value),
            Some("NGO-1")
        );
    }

    #[test]
    fn test_back_paths() {
        let mut screen = NgoSignupScreen::new();
        assert_eq!(
            press(&mut screen, KeyCode::Esc),
            ScreenAction::Dispatch(NavCommand::ReturnToLogin)
        );
        press(&mut screen, KeyCode::Up);
        assert_eq!(screen.focused(), Some(NgoControl::SignIn));
        assert!(!screen.is_input_focused());
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Dispatch(NavCommand::ReturnToLogin)
        );
    }
}
