//! Semantic actions a key can trigger.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Home,
    End,

    // Selection
    /// Activate the focused control or submit the form.
    Confirm,
    /// Leave the current screen or close an overlay.
    Cancel,
    ToggleSelect,

    // Global
    Quit,
    Help,

    // Screen-specific
    Refresh,
    /// Show or hide the characters of a password field.
    RevealPassword,

    // Text editing
    Backspace,
    DeleteChar,

    // Field / tab navigation
    NextTab,
    PrevTab,
}

impl Action {
    pub const ALL: [Action; 17] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Home,
        Action::End,
        Action::Confirm,
        Action::Cancel,
        Action::ToggleSelect,
        Action::Quit,
        Action::Help,
        Action::Refresh,
        Action::RevealPassword,
        Action::Backspace,
        Action::DeleteChar,
        Action::NextTab,
        Action::PrevTab,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left / previous tab",
            Action::MoveRight => "Move right / next tab",
            Action::Home => "Start of input",
            Action::End => "End of input",
            Action::Confirm => "Activate / submit",
            Action::Cancel => "Back to login",
            Action::ToggleSelect => "Toggle option",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::Refresh => "Refresh feed",
            Action::RevealPassword => "Show / hide password",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::NextTab => "Next field",
            Action::PrevTab => "Previous field",
        }
    }

    /// Heading the action is listed under in the help overlay.
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End => "Navigation",

            Action::Confirm | Action::Cancel | Action::ToggleSelect => "Selection",

            Action::Quit | Action::Help => "Global",

            Action::Refresh | Action::RevealPassword => "Actions",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::NextTab | Action::PrevTab => "Field Navigation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveUp.category(), "Navigation");
        assert_eq!(Action::Quit.category(), "Global");
        assert_eq!(Action::RevealPassword.category(), "Actions");
    }

    #[test]
    fn test_action_serde_names() {
        let json = serde_json::to_string(&Action::RevealPassword).unwrap();
        assert_eq!(json, "\"reveal_password\"");
        let action: Action = serde_json::from_str("\"next_tab\"").unwrap();
        assert_eq!(action, Action::NextTab);
    }

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for action in Action::ALL {
            assert!(seen.insert(action));
        }
    }
}
