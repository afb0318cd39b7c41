//! State shared by every screen that is not part of navigation.

use crate::widgets::Toast;

/// Overlay state that persists across screen changes.
#[derive(Debug, Clone, Default)]
pub struct GlobalState {
    /// Whether the keybinding overlay is visible.
    pub show_help_overlay: bool,

    /// Transient notification in the corner of the screen.
    pub toast: Option<Toast>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_help(&mut self) {
        self.show_help_overlay = !self.show_help_overlay;
    }

    /// Replace the current toast, if any.
    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Drop the toast once its display time is over.
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}
