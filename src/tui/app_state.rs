use crate::binding::{DisplayElement, InputElement};

/// The `msg` field: message text plus a cursor measured in chars.
#[derive(Debug, Clone, Default)]
pub struct MessageField {
    pub text: String,
    pub cursor: usize,
}

impl MessageField {
    pub fn with_text(text: String) -> Self {
        let cursor = text.chars().count();
        MessageField { text, cursor }
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    pub(super) fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.text.insert(offset, c);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let offset = self.byte_offset(self.cursor);
        self.text.remove(offset);
    }

    pub(super) fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let offset = self.byte_offset(self.cursor);
            self.text.remove(offset);
        }
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub(super) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub(super) fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

impl InputElement for MessageField {
    fn value(&self) -> String {
        self.text.clone()
    }
}

/// The `remaining` label under the message field.
#[derive(Debug, Clone, Default)]
pub struct RemainingLabel(pub String);

impl DisplayElement for RemainingLabel {
    fn set_text_content(&mut self, text: &str) {
        self.0 = text.to_string();
    }
}

/// How the terminal reports key events, which decides when the counter runs.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub(super) enum KeyDelivery {
    /// Kitty keyboard protocol: releases arrive too and recount as well.
    PressAndRelease,
    /// Only presses arrive.
    PressOnly,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_respects_multibyte_chars() {
        let mut field = MessageField::with_text("héllo".to_string());
        assert_eq!(field.cursor, 5);
        field.move_left();
        field.move_left();
        field.move_left();
        field.backspace();
        assert_eq!(field.text, "hllo");
        field.insert('e');
        assert_eq!(field.text, "hello");
        assert_eq!(field.cursor, 2);
        field.delete();
        assert_eq!(field.text, "helo");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut field = MessageField::default();
        field.backspace();
        field.delete();
        field.move_left();
        field.move_right();
        assert_eq!(field.cursor, 0);
        field.insert('a');
        field.move_right();
        assert_eq!(field.cursor, 1);
        field.move_home();
        assert_eq!(field.cursor, 0);
        field.move_end();
        assert_eq!(field.cursor, 1);
        field.clear();
        assert!(field.text.is_empty());
        assert_eq!(field.cursor, 0);
    }
}
