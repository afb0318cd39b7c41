// Reusable UI widgets

pub mod button;
pub mod text_input;
pub mod toast;
pub mod toggle;

pub use button::{Button, ButtonKind};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastVariant, ToastWidget};
pub use toggle::Toggle;
