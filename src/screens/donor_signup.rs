//! Donor registration with an Individual / Restaurant switch.
//!
//! Nothing typed here is submitted anywhere. "Sign Up" and "Get OTP" only
//! report that they are mock-ups; the way out is back to login.

use crate::components::auth_form::{render_otp_row, render_sign_in_prompt, render_submit};
use crate::components::{Header, AUTH_HEADER_HEIGHT};
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{DonorType, NavCommand, Screen as ScreenId};
use crate::utils::{center_column, focus_move, stack_rows, FocusRing, FormField, FIELD_HEIGHT};
use crate::widgets::Toggle;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;

const FORM_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonorField {
    FullName,
    Email,
    Mobile,
    Password,
    ConfirmPassword,
    Otp,
    RestaurantName,
    BranchLocation,
    RestaurantEmail,
    RestaurantMobile,
    RestaurantPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonorControl {
    SignIn,
    DonorType,
    Field(DonorField),
    GetOtp,
    SignUp,
}

/// Focus order for each donor type, top to bottom.
pub fn controls_for(donor_type: DonorType) -> Vec<DonorControl> {
    use DonorControl::{Field, GetOtp, SignIn, SignUp};
    use DonorField::*;

    let mut controls = vec![SignIn, DonorControl::DonorType];
    match donor_type {
        DonorType::Individual => {
            controls.extend(
                [FullName, Email, Mobile, Password, ConfirmPassword, Otp].map(Field),
            );
            controls.push(GetOtp);
        }
        DonorType::Restaurant => controls.extend(
            [
                RestaurantName,
                BranchLocation,
                RestaurantEmail,
                RestaurantMobile,
                RestaurantPassword,
            ]
            .map(Field),
        ),
    }
    controls.push(SignUp);
    controls
}

#[derive(Debug, Clone)]
pub struct DonorSignupScreen {
    donor_type: DonorType,
    focus: FocusRing<DonorControl>,

    full_name: FormField,
    email: FormField,
    mobile: FormField,
    password: FormField,
    confirm_password: FormField,
    otp: FormField,

    restaurant_name: FormField,
    branch_location: FormField,
    restaurant_email: FormField,
    restaurant_mobile: FormField,
    restaurant_password: FormField,
}

impl Default for DonorSignupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DonorSignupScreen {
    pub fn new() -> Self {
        let mut focus = FocusRing::new(controls_for(DonorType::Individual));
        focus.focus(DonorControl::Field(DonorField::FullName));
        Self {
            donor_type: DonorType::Individual,
            focus,
            full_name: FormField::new("Full Name", "John Doe"),
            email: FormField::new("Email Address", "john@example.com"),
            mobile: FormField::new("Mobile Number", "+1 234 567 890"),
            password: FormField::password("Password"),
            confirm_password: FormField::password("Confirm Password"),
            otp: FormField::new("Enter OTP", "123456"),
            restaurant_name: FormField::new("Restaurant Name", "Tasty Bites"),
            branch_location: FormField::new("Branch Location", "City Center, Block A"),
            restaurant_email: FormField::new("Email Address", "contact@tastybites.com"),
            restaurant_mobile: FormField::new("Mobile Number", "+1 234 567 890"),
            restaurant_password: FormField::password("Password"),
        }
    }

    pub fn donor_type(&self) -> DonorType {
        self.donor_type
    }

    pub fn focused(&self) -> Option<DonorControl> {
        self.focus.current()
    }

    pub fn field(&self, field: DonorField) -> &FormField {
        match field {
            DonorField::FullName => &self.full_name,
            DonorField::Email => &self.email,
            DonorField::Mobile => &self.mobile,
            DonorField::Password => &self.password,
            DonorField::ConfirmPassword => &self.confirm_password,
            DonorField::Otp => &self.otp,
            DonorField::RestaurantName => &self.restaurant_name,
            DonorField::BranchLocation => &self.branch_location,
            DonorField::RestaurantEmail => &self.restaurant_email,
            DonorField::RestaurantMobile => &self.restaurant_mobile,
            DonorField::RestaurantPassword => &self.restaurant_password,
        }
    }

    fn field_mut(&mut self, field: DonorField) -> &mut FormField {
        match field {
            DonorField::FullName => &mut self.full_name,
            DonorField::Email => &mut self.email,
            DonorField::Mobile => &mut self.mobile,
            DonorField::Password => &mut self.password,
            DonorField::ConfirmPassword => &mut self.confirm_password,
            DonorField::Otp => &mut self.otp,
            DonorField::RestaurantName => &mut self.restaurant_name,
            DonorField::BranchLocation => &mut self.branch_location,
            DonorField::RestaurantEmail => &mut self.restaurant_email,
            DonorField::RestaurantMobile => &mut self.restaurant_mobile,
            DonorField::RestaurantPassword => &mut self.restaurant_password,
        }
    }

    pub fn set_donor_type(&mut self, donor_type: DonorType) {
        if self.donor_type != donor_type {
            tracing::debug!(donor_type = donor_type.label(), "Donor type switched");
        }
        self.donor_type = donor_type;
        self.focus.replace_items(controls_for(donor_type));
    }

    fn activate(&mut self) -> ScreenAction {
        match self.focus.current() {
            Some(DonorControl::SignIn) => ScreenAction::Dispatch(NavCommand::ReturnToLogin),
            Some(DonorControl::DonorType) => {
                self.set_donor_type(self.donor_type.toggled());
                ScreenAction::None
            }
            Some(DonorControl::Field(_)) => {
                self.focus.next();
                ScreenAction::None
            }
            Some(DonorControl::GetOtp) => ScreenAction::not_available("Get OTP"),
            Some(DonorControl::SignUp) => ScreenAction::not_available("Donor sign up"),
            None => ScreenAction::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        let action = ctx.keymap().action_for(&key);

        if let Some(DonorControl::Field(field)) = self.focus.current() {
            if self.field_mut(field).handle_key(&key, action) {
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
            Some(Action::MoveLeft | Action::MoveRight)
                if self.focus.is(DonorControl::DonorType) =>
            {
                self.set_donor_type(self.donor_type.toggled());
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }

    fn row_height(control: DonorControl) -> u16 {
        match control {
            DonorControl::SignIn => 2,
            DonorControl::DonorType | DonorControl::Field(_) => FIELD_HEIGHT,
            // Drawn on the OTP field's row.
            DonorControl::GetOtp => 0,
            DonorControl::SignUp => 2,
        }
    }
}

impl Screen for DonorSignupScreen {
    fn id(&self) -> ScreenId {
        ScreenId::SignupDonor
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let [header, body] =
            Layout::vertical([Constraint::Length(AUTH_HEADER_HEIGHT), Constraint::Min(0)])
                .areas(area);
        Header::render_auth(frame, header, "Donor Registration", "Create your donor account");

        let column = center_column(body.inner(Margin::new(1, 0)), FORM_WIDTH);
        let controls = self.focus.items().to_vec();
        let heights: Vec<u16> = controls.iter().map(|c| Self::row_height(*c)).collect();
        let focused_row = match self.focus.current() {
            // Keep the OTP row on screen while its button has focus.
            Some(DonorControl::GetOtp) => self.focus.position().saturating_sub(1),
            _ => self.focus.position(),
        };
        let rows = stack_rows(column, &heights, focused_row);

        for (control, row) in controls.iter().zip(rows) {
            let Some(row) = row else { continue };
            let focused = self.focus.is(*control);
            match control {
                DonorControl::SignIn => {
                    render_sign_in_prompt(frame, Rect { height: 1, ..row }, focused);
                }
                DonorControl::DonorType => frame.render_widget(
                    Toggle::new(DonorType::Individual.label(), DonorType::Restaurant.label())
                        .right_selected(self.donor_type == DonorType::Restaurant)
                        .focused(focused),
                    row,
                ),
                DonorControl::Field(DonorField::Otp) => render_otp_row(
                    frame,
                    row,
                    &self.otp,
                    focused,
                    self.focus.is(DonorControl::GetOtp),
                ),
                DonorControl::Field(field) => self.field(*field).render(frame, row, focused),
                DonorControl::GetOtp => {}
                DonorControl::SignUp => render_submit(frame, row, "Sign Up", focused),
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
        matches!(self.focus.current(), Some(DonorControl::Field(_)))
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

    fn press(screen: &mut DonorSignupScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let nav = NavigationController::new();
        let ctx = ScreenContext::new(&config, &nav);
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    #[test]
    fn test_starts_on_full_name() {
        let screen = DonorSignupScreen::new();
        assert_eq!(screen.donor_type(), DonorType::Individual);
        assert_eq!(
            screen.focused(),
            Some(DonorControl::Field(DonorField::FullName))
        );
        assert!(screen.is_input_focused());
    }

    #[test]
    fn test_individual_and_restaurant_fields() {
        let individual = controls_for(DonorType::Individual);
        assert!(individual.contains(&DonorControl::Field(DonorField::Otp)));
        assert!(individual.contains(&DonorControl::GetOtp));
        assert!(!individual.contains(&DonorControl::Field(DonorField::RestaurantName)));

        let restaurant = controls_for(DonorType::Restaurant);
        assert!(restaurant.contains(&DonorControl::Field(DonorField::BranchLocation)));
        assert!(!restaurant.contains(&DonorControl::GetOtp));
        assert_eq!(restaurant.last(), Some(&DonorControl::SignUp));
    }

    #[test]
    fn test_toggle_switches_fields_and_keeps_focus() {
        let mut screen = DonorSignupScreen::new();
        press(&mut screen, KeyCode::BackTab);
        assert_eq!(screen.focused(), Some(DonorControl::DonorType));
        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.donor_type(), DonorType::Restaurant);
        assert_eq!(screen.focused(), Some(DonorControl::DonorType));
        press(&mut screen, KeyCode::Tab);
        assert_eq!(
            screen.focused(),
            Some(DonorControl::Field(DonorField::RestaurantName))
        );
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut screen = DonorSignupScreen::new();
        for c in "Ann".chars() {
            press(&mut screen, KeyCode::Char(c));
        }
        assert_eq!(screen.field(DonorField::FullName).value(), "Ann");
        assert_eq!(screen.field(DonorField::Email).value(), "");
    }

    #[test]
    fn test_escape_and_sign_in_return_to_login() {
        let mut screen = DonorSignupScreen::new();
        assert_eq!(
            press(&mut screen, KeyCode::Esc),
            ScreenAction::Dispatch(NavCommand::ReturnToLogin)
        );
        screen.focus.focus(DonorControl::SignIn);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Dispatch(NavCommand::ReturnToLogin)
        );
    }

    #[test]
    fn test_sign_up_is_a_mock() {
        let mut screen = DonorSignupScreen::new();
        screen.focus.focus(DonorControl::SignUp);
        assert!(matches!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Notify(_)
        ));
    }
}
