//! Donate Away - terminal prototype of a food-donation app connecting donors
//! with NGOs.
//!
//! The core is [`state::NavigationController`], a small state machine over
//! the login, signup and NGO dashboard screens. Everything else draws those
//! screens and turns key presses into navigation commands.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod mock_data;
pub mod screens;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use app::App;
pub use config::Config;
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
pub use state::{DashboardTab, NavCommand, NavigationController, Screen, UserRole};
