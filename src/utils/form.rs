//! Form building blocks shared by the login and signup screens.
//!
//! A [`FormField`] is one labelled text box. A [`FocusRing`] tracks which
//! control of a screen has focus, text fields and buttons alike.

use crate::keymap::Action;
use crate::utils::text_input::TextInput;
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Height of a rendered field: border, text line, border.
pub const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: TextInput,
    /// Masked unless revealed.
    pub secret: bool,
    pub revealed: bool,
}

impl FormField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            input: TextInput::new(),
            secret: false,
            revealed: false,
        }
    }

    pub fn password(label: &'static str) -> Self {
        Self {
            secret: true,
            ..Self::new(label, "••••••••")
        }
    }

    pub fn value(&self) -> &str {
        self.input.text()
    }

    pub fn is_masked(&self) -> bool {
        self.secret && !self.revealed
    }

    /// Feed a key to the field. Printable characters without Ctrl/Alt are
    /// always typed, even when the keymap binds them to something else.
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent, action: Option<Action>) -> bool {
        if let KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.input.insert_char(c);
                return true;
            }
        }

        match action {
            Some(Action::RevealPassword) if self.secret => {
                self.revealed = !self.revealed;
                true
            }
            Some(action) => self.input.handle_action(action),
            None => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let widget = TextInputWidget::new(&self.input)
            .title(self.label)
            .placeholder(self.placeholder)
            .masked(self.is_masked())
            .focused(focused);
        frame.render_text_input_widget(widget, area);
    }
}

/// Ordered, wrapping focus over a screen's controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRing<T> {
    items: Vec<T>,
    index: usize,
}

impl<T: Copy + PartialEq> FocusRing<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    pub fn current(&self) -> Option<T> {
        self.items.get(self.index).copied()
    }

    pub fn is(&self, item: T) -> bool {
        self.current() == Some(item)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.index = self.index.checked_sub(1).unwrap_or(self.items.len() - 1);
        }
    }

    /// Ignored if `item` is not part of the ring.
    pub fn focus(&mut self, item: T) {
        if let Some(i) = self.items.iter().position(|x| *x == item) {
            self.index = i;
        }
    }

    /// Swap the controls, keeping focus on the same control when it still
    /// exists.
    pub fn replace_items(&mut self, items: Vec<T>) {
        let keep = self.current();
        self.items = items;
        self.index = 0;
        if let Some(item) = keep {
            self.focus(item);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Previous,
}

/// Tab/Shift+Tab and Up/Down move focus between controls.
pub fn focus_move(action: Option<Action>) -> Option<FocusMove> {
    match action? {
        Action::NextTab | Action::MoveDown => Some(FocusMove::Next),
        Action::PrevTab | Action::MoveUp => Some(FocusMove::Previous),
        _ => None,
    }
}

impl<T: Copy + PartialEq> FocusRing<T> {
    pub fn apply(&mut self, step: FocusMove) {
        match step {
            FocusMove::Next => self.next(),
            FocusMove::Previous => self.previous(),
        }
    }
}
