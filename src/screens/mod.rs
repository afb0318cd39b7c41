//! Screen controllers.
//!
//! One controller per top-level [`ScreenId`]. The app keeps exactly one
//! alive and builds a fresh one whenever the navigation controller moves to a
//! different screen, which is what discards half-typed form input.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ App                                          │
//! │   event ──► screen.handle_event ──► action   │
//! │                                     │        │
//! │   NavigationController ◄── Dispatch ┘        │
//! │        │                                     │
//! │        └─ screen changed? ──► screens::build │
//! └──────────────────────────────────────────────┘
//! ```

pub mod dashboard;
pub mod donor_signup;
pub mod login;
pub mod ngo_signup;
pub mod screen_trait;

pub use dashboard::DashboardScreen;
pub use donor_signup::DonorSignupScreen;
pub use login::LoginScreen;
pub use ngo_signup::NgoSignupScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};

use crate::state::Screen as ScreenId;

/// Fresh controller for `id`, with empty forms and default focus.
pub fn build(id: ScreenId) -> Box<dyn Screen> {
    match id {
        ScreenId::Login => Box::new(LoginScreen::new()),
        ScreenId::SignupDonor => Box::new(DonorSignupScreen::new()),
        ScreenId::SignupNgo => Box::new(NgoSignupScreen::new()),
        ScreenId::DashboardNgo => Box::new(DashboardScreen::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_matches_id() {
        for id in [
            ScreenId::Login,
            ScreenId::SignupDonor,
            ScreenId::SignupNgo,
            ScreenId::DashboardNgo,
        ] {
            assert_eq!(build(id).id(), id);
        }
    }
}
