//! Single-line buttons and links.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Filled brand button.
    Primary,
    /// Bracketed outline button.
    Secondary,
    /// Underlined text.
    Link,
}

pub struct Button<'a> {
    label: &'a str,
    kind: ButtonKind,
    focused: bool,
    alignment: Alignment,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, kind: ButtonKind) -> Self {
        Self {
            label,
            kind,
            focused: false,
            alignment: Alignment::Center,
        }
    }

    pub fn primary(label: &'a str) -> Self {
        Self::new(label, ButtonKind::Primary)
    }

    pub fn secondary(label: &'a str) -> Self {
        Self::new(label, ButtonKind::Secondary)
    }

    pub fn link(label: &'a str) -> Self {
        Self::new(label, ButtonKind::Link)
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn text(&self) -> String {
        match (self.kind, self.focused) {
            (ButtonKind::Primary, _) => format!("  {}  ", self.label),
            (ButtonKind::Secondary, true) => format!("[> {} <]", self.label),
            (ButtonKind::Secondary, false) => format!("[ {} ]", self.label),
            (ButtonKind::Link, true) => format!("› {}", self.label),
            (ButtonKind::Link, false) => self.label.to_string(),
        }
    }

    /// The button as a span, for drawing inside a list row.
    pub fn span(&self) -> Span<'static> {
        Span::styled(self.text(), self.style())
    }

    fn style(&self) -> Style {
        let t = theme();
        match self.kind {
            ButtonKind::Primary if self.focused => {
                t.brand_fill_style().add_modifier(Modifier::UNDERLINED)
            }
            ButtonKind::Primary => t.brand_fill_style(),
            ButtonKind::Secondary if self.focused => t.title_style(),
            ButtonKind::Secondary => t.text_style(),
            ButtonKind::Link if self.focused => t.title_style().add_modifier(Modifier::UNDERLINED),
            ButtonKind::Link => t.emphasis_style(),
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.span())
            .alignment(self.alignment)
            .render(area, buf);
    }
}
