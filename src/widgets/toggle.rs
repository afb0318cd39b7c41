//! Two-option segmented switch (Donor | NGO, Individual | Restaurant).

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub struct Toggle<'a> {
    left: &'a str,
    right: &'a str,
    right_selected: bool,
    focused: bool,
}

impl<'a> Toggle<'a> {
    pub fn new(left: &'a str, right: &'a str) -> Self {
        Self {
            left,
            right,
            right_selected: false,
            focused: false,
        }
    }

    pub fn right_selected(mut self, right_selected: bool) -> Self {
        self.right_selected = right_selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn line(&self) -> Line<'a> {
        let t = theme();
        let segment = |label: &'a str, active: bool| {
            let style = if active {
                t.brand_fill_style()
            } else {
                t.muted_style()
            };
            Span::styled(format!("  {}  ", label), style)
        };
        Line::from(vec![
            segment(self.left, !self.right_selected),
            Span::raw(" "),
            segment(self.right, self.right_selected),
        ])
    }
}

impl Widget for Toggle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let border = if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_both_labels() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        Toggle::new("Donor", "NGO").right_selected(true).render(area, &mut buf);
        let row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("Donor"));
        assert!(row.contains("NGO"));
    }
}
