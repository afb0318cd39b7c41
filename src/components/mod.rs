pub mod auth_form;
pub mod footer;
pub mod header;
pub mod help_overlay;

pub use footer::{Footer, FOOTER_HEIGHT};
pub use header::{Header, AUTH_HEADER_HEIGHT, BRAND};
pub use help_overlay::HelpOverlay;
