use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Height taken by [`Footer::render`]: a border line and a text line.
pub const FOOTER_HEIGHT: u16 = 2;

pub struct Footer;

impl Footer {
    /// Key hints in `"Label: keys | Label: keys"` form. The part before
    /// each `": "` is drawn as the key.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        let t = theme();
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((keys, label)) => {
                    spans.push(Span::styled(
                        keys.to_string(),
                        t.emphasis_style().add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::styled(format!(": {}", label), t.text_style()));
                }
                None => spans.push(Span::styled(part.to_string(), t.text_style())),
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            inner,
        );
    }
}
