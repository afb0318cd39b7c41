//! Screen trait and associated types.
//!
//! Screens own their transient state (form text, focus, list selection) and
//! never mutate shared state. Event handling returns a [`ScreenAction`]; the
//! app applies it, feeding navigation commands into the controller.

use crate::config::Config;
use crate::keymap::Keymap;
use crate::state::{NavCommand, NavigationController, Screen as ScreenId};
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Read-only state available while drawing.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub navigation: &'a NavigationController,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, navigation: &'a NavigationController) -> Self {
        Self { config, navigation }
    }
}

/// Read-only state available while handling events.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    pub navigation: &'a NavigationController,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, navigation: &'a NavigationController) -> Self {
        Self { config, navigation }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }
}

/// What the app should do after a screen handled an event.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenAction {
    #[default]
    None,
    /// Hand a transition request to the navigation controller.
    Dispatch(NavCommand),
    /// Show a toast. Used by the buttons that only exist as mock-ups.
    Notify(Toast),
}

impl ScreenAction {
    /// Toast for a control that does nothing in the prototype, with a
    /// matching debug line.
    pub fn not_available(control: &str) -> Self {
        tracing::debug!(control, "Mock-up control activated");
        ScreenAction::Notify(Toast::not_available(control))
    }
}

pub trait Screen {
    /// The navigation screen this controller draws.
    fn id(&self) -> ScreenId;

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// While a text field has focus, keys bound to global actions (`q`, `?`)
    /// are typed instead.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called once after the app creates the screen for a transition.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Key hints for the footer.
    fn footer_hint(&self, keymap: &Keymap) -> String {
        keymap.footer_form()
    }
}
