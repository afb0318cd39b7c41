//! Application state.
//!
//! Navigation is the only state that crosses screen boundaries and lives in
//! [`NavigationController`]. Form input belongs to the screen that shows it
//! and is thrown away with that screen. [`GlobalState`] carries overlays that
//! sit on top of whatever screen is active.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                       App                         │
//! │  ┌─────────────────────┐  ┌────────────────────┐  │
//! │  │ NavigationController│  │ GlobalState        │  │
//! │  │ - current_screen    │  │ - help overlay     │  │
//! │  │ - dashboard_tab     │  │ - toast            │  │
//! │  │ - last_selected_role│  └────────────────────┘  │
//! │  │ - login_error       │                          │
//! │  └─────────────────────┘                          │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod global;
pub mod navigation;

pub use global::GlobalState;
pub use navigation::{
    Credentials, DashboardTab, DonorType, LoginOutcome, NavCommand, NavigationController, Screen,
    Transition, UserRole, INVALID_NGO_CREDENTIALS,
};
