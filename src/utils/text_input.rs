use crate::keymap::Action;

/// Single-line text buffer with a character-indexed cursor.
///
/// ```
/// use donate_away::utils::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('1');
/// input.insert_char('3');
/// input.move_left();
/// input.insert_char('2');
/// assert_eq!(input.text(), "123");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor starts at the end of `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Exactly what was typed. Nothing is trimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let byte_index = self.byte_index(self.cursor);
        self.text.insert(byte_index, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_index = self.byte_index(self.cursor);
        self.text.remove(byte_index);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let byte_index = self.byte_index(self.cursor);
            self.text.remove(byte_index);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Apply an editing action. Returns `false` for actions that are not
    /// about editing.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_text("helo");
        input.move_left();
        input.insert_char('l');
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::with_text("abc");
        input.backspace();
        assert_eq!(input.text(), "ab");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "ab");
        input.delete();
        assert_eq!(input.text(), "b");
        input.move_end();
        input.delete();
        assert_eq!(input.text(), "b");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new();
        for c in "café".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.insert_char('-');
        assert_eq!(input.text(), "caf-é");
        input.move_right();
        input.backspace();
        assert_eq!(input.text(), "caf-");
    }

    #[test]
    fn test_whitespace_is_kept() {
        let mut input = TextInput::new();
        input.insert_char(' ');
        input.insert_char('1');
        assert_eq!(input.text(), " 1");
        assert!(!input.is_empty());
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut input = TextInput::new();
        input.insert_char('\n');
        input.insert_char('\t');
        assert!(input.is_empty());
    }

    #[test]
    fn test_handle_action() {
        let mut input = TextInput::with_text("ab");
        assert!(input.handle_action(Action::Home));
        assert_eq!(input.cursor(), 0);
        assert!(input.handle_action(Action::DeleteChar));
        assert_eq!(input.text(), "b");
        assert!(!input.handle_action(Action::Quit));
    }
}
