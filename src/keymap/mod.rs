//! Customizable keyboard shortcuts.
//!
//! Keys resolve to semantic [`Action`]s through a preset plus optional
//! overrides from the config file. Overriding an action replaces every
//! preset binding for that action.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    /// Checked before the preset.
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.get_action(key.code, key.modifiers)
    }

    /// Overrides first, then the preset bindings whose action is not
    /// overridden.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Override entries whose key string does not parse, with the reason.
    pub fn invalid_overrides(&self) -> Vec<(String, String)> {
        self.overrides
            .iter()
            .filter_map(|b| b.parse().err().map(|e| (b.key.clone(), e)))
            .collect()
    }

    /// First key bound to `action`, formatted for display.
    pub fn key_display(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map_or_else(|| "unbound".to_string(), KeyBinding::display)
    }

    pub fn navigation_display(&self) -> String {
        format!(
            "{}/{}",
            self.key_display(Action::MoveUp),
            self.key_display(Action::MoveDown)
        )
    }

    pub fn field_display(&self) -> String {
        format!(
            "{}/{}",
            self.key_display(Action::NextTab),
            self.key_display(Action::PrevTab)
        )
    }

    pub fn tab_display(&self) -> String {
        format!(
            "{}/{}",
            self.key_display(Action::MoveLeft),
            self.key_display(Action::MoveRight)
        )
    }

    /// Footer for the form screens.
    pub fn footer_form(&self) -> String {
        format!(
            "{}: Next field | {}: Activate | {}: Show password | {}: Back | {}: Help",
            self.field_display(),
            self.key_display(Action::Confirm),
            self.key_display(Action::RevealPassword),
            self.key_display(Action::Cancel),
            self.key_display(Action::Help)
        )
    }

    /// Footer for the dashboard.
    pub fn footer_dashboard(&self) -> String {
        format!(
            "{}: Tabs | {}: Select | {}: Activate | {}: Help | {}: Quit",
            self.tab_display(),
            self.navigation_display(),
            self.key_display(Action::Confirm),
            self.key_display(Action::Help),
            self.key_display(Action::Quit)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("q", Action::Help)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Help)
        );
        // "?" was a preset Help binding and is shadowed now.
        assert_eq!(keymap.get_action(KeyCode::Char('?'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_key_display_reflects_overrides() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("ctrl+p", Action::RevealPassword)],
        };
        assert_eq!(keymap.key_display(Action::RevealPassword), "Ctrl+P");
        assert_eq!(keymap.key_display(Action::Confirm), "Enter");
    }

    #[test]
    fn test_invalid_overrides_are_reported() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: vec![
                KeyBinding::new("hyper+x", Action::Quit),
                KeyBinding::new("x", Action::Refresh),
            ],
        };
        let invalid = keymap.invalid_overrides();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].0, "hyper+x");
    }

    #[test]
    fn test_footers_mention_keys() {
        let keymap = Keymap::default();
        assert!(keymap.footer_form().contains("Tab/Shift+Tab"));
        assert!(keymap.footer_dashboard().contains("←/→"));
    }
}
