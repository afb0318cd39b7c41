//! Bordered, titled text box for a [`TextInput`].

use crate::utils::text_input::TextInput;
use crate::utils::{
    focused_border_style, input_placeholder_style, input_text_style, unfocused_border_style,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const MASK_CHAR: &str = "•";

pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            masked: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Draw one bullet per character instead of the text.
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    fn display_text(&self) -> String {
        let text = self.input.text();
        if text.is_empty() {
            self.placeholder.unwrap_or_default().to_string()
        } else if self.masked {
            MASK_CHAR.repeat(self.input.len())
        } else {
            text.to_string()
        }
    }

    fn text_style(&self) -> Style {
        if self.input.is_empty() {
            input_placeholder_style()
        } else {
            input_text_style()
        }
    }

    fn block(&self) -> Block<'a> {
        let border_style = if self.focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        match self.title {
            Some(title) => block.title(format!(" {} ", title)),
            None => block,
        }
    }

    /// Cursor cell inside `area`, clamped to the visible width.
    fn cursor_position(&self, area: Rect) -> Position {
        let inner = self.block().inner(area);
        let max = inner.width.saturating_sub(1) as usize;
        let x = inner.x + self.input.cursor().min(max) as u16;
        Position::new(x, inner.y)
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.display_text())
            .block(self.block())
            .style(self.text_style())
            .render(area, buf);
    }
}

/// Renders a [`TextInputWidget`] and places the terminal cursor when the
/// field is focused. `Widget::render` has no access to the cursor.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.focused.then(|| widget.cursor_position(area));
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
