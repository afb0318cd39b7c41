//! Built-in keymaps.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc.
    #[default]
    Standard,
    /// Standard plus hjkl.
    Vim,
}

impl KeymapPreset {
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
        }
    }
}

/// Bindings shared by every preset.
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("space", Action::ToggleSelect),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("f1", Action::Help),
        KeyBinding::new("r", Action::Refresh),
        KeyBinding::new("ctrl+r", Action::RevealPassword),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
    ]
}

fn standard_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
    ];
    bindings.extend(common_bindings());
    bindings
}

fn vim_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
    ];
    bindings.extend(common_bindings());
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_every_action_has_a_binding() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim] {
            let bindings = preset.bindings();
            for action in Action::ALL {
                assert!(
                    bindings.iter().any(|b| b.action == action),
                    "{} preset has no binding for {:?}",
                    preset.name(),
                    action
                );
            }
        }
    }

    #[test]
    fn test_all_preset_keys_parse() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim] {
            for binding in preset.bindings() {
                assert!(binding.parse().is_ok(), "bad key {}", binding.key);
            }
        }
    }

    #[test]
    fn test_vim_adds_hjkl() {
        let vim = KeymapPreset::Vim.bindings();
        assert!(vim
            .iter()
            .any(|b| b.action == Action::MoveDown && b.matches(KeyCode::Char('j'), KeyModifiers::NONE)));
        let standard = KeymapPreset::Standard.bindings();
        assert!(!standard
            .iter()
            .any(|b| b.matches(KeyCode::Char('j'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_preset_serde_lowercase() {
        let json = serde_json::to_string(&KeymapPreset::Vim).unwrap();
        assert_eq!(json, "\"vim\"");
    }
}
