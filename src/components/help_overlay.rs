//! Keybinding reference drawn over the current screen.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

const CATEGORY_ORDER: [&str; 6] = [
    "Global",
    "Navigation",
    "Field Navigation",
    "Selection",
    "Actions",
    "Text Editing",
];

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap) {
        let t = theme();
        let popup = center_popup(area, 70, 80);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" Keyboard Shortcuts - {} ", keymap.preset.name()))
            .title_alignment(Alignment::Center);

        let mut lines = vec![
            Line::from(Span::styled("NGO demo login: 123 / 123", t.muted_style())),
            Line::from(""),
        ];
        lines.extend(Self::lines(keymap));
        lines.push(Line::from(Span::styled(
            format!(
                "Press {} or {} to close",
                keymap.key_display(Action::Help),
                keymap.key_display(Action::Cancel)
            ),
            t.muted_style(),
        )));

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            popup,
        );
    }

    /// Bindings grouped by category; several keys for one action share a row.
    pub fn lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut lines = Vec::new();

        for category in CATEGORY_ORDER {
            let actions: Vec<Action> = Action::ALL
                .into_iter()
                .filter(|a| a.category() == category)
                .collect();
            if actions.is_empty() {
                continue;
            }
            lines.push(Line::from(Span::styled(category, t.title_style())));
            for action in actions {
                let keys: Vec<String> = bindings
                    .iter()
                    .filter(|b| b.action == action)
                    .map(|b| b.display())
                    .collect();
                if keys.is_empty() {
                    continue;
                }
                let description = bindings
                    .iter()
                    .find(|b| b.action == action)
                    .map_or(action.description(), |b| b.get_description())
                    .to_string();
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<18}", keys.join(", ")), t.emphasis_style()),
                    Span::styled(description, t.text_style()),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{KeyBinding, KeymapPreset};

    fn flatten(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_lists_categories_and_keys() {
        let text = flatten(&HelpOverlay::lines(&Keymap::default()));
        assert!(text.contains("Global"));
        assert!(text.contains("Ctrl+R"));
        assert!(text.contains("Show / hide password"));
    }

    #[test]
    fn test_override_description_is_used() {
        let mut binding = KeyBinding::new("x", Action::Refresh);
        binding.description = Some("Reload donations".to_string());
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![binding],
        };
        let text = flatten(&HelpOverlay::lines(&keymap));
        assert!(text.contains("Reload donations"));
    }
}
