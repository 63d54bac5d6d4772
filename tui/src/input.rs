//! Single-line editing for the command prompt.
//!
//! `InputLine` manages a text buffer with cursor movement and editing
//! operations. The buffer is a `Vec<char>` so cursor positions stay correct
//! with multi-byte characters. History lives in the core session, not here;
//! recalled entries arrive through [`InputLine::set_text`].

/// A line editor with cursor movement.
pub struct InputLine {
    buffer: Vec<char>,
    cursor: usize,
}

impl InputLine {
    /// Create a new empty input line.
    pub fn new() -> Self {
        InputLine {
            buffer: Vec::new(),
            cursor: 0,
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the character at the cursor position (forward delete).
    pub fn delete_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Move the cursor one position to the left.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor one position to the right.
    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the beginning of the line.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the line.
    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Move the cursor one word to the left.
    ///
    /// A word boundary is the transition from a non-alphanumeric character
    /// to an alphanumeric character, scanning leftward.
    pub fn move_word_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor - 1;
        // Skip whitespace/punctuation
        while pos > 0 && !self.buffer[pos].is_alphanumeric() {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.buffer[pos - 1].is_alphanumeric() {
            pos -= 1;
        }
        self.cursor = pos;
    }

    /// Move the cursor one word to the right.
    pub fn move_word_right(&mut self) {
        let len = self.buffer.len();
        if self.cursor >= len {
            return;
        }
        let mut pos = self.cursor;
        while pos < len && self.buffer[pos].is_alphanumeric() {
            pos += 1;
        }
        while pos < len && !self.buffer[pos].is_alphanumeric() {
            pos += 1;
        }
        self.cursor = pos;
    }

    /// Delete the word before the cursor (Ctrl-W).
    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let end = self.cursor;
        while self.cursor > 0 && !self.buffer[self.cursor - 1].is_alphanumeric() {
            self.cursor -= 1;
        }
        while self.cursor > 0 && self.buffer[self.cursor - 1].is_alphanumeric() {
            self.cursor -= 1;
        }
        self.buffer.drain(self.cursor..end);
    }

    /// Clear the buffer and reset the cursor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Replace the buffer contents, placing the cursor at the end.
    ///
    /// Used by history recall and tab completion.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.chars().collect();
        self.cursor = self.buffer.len();
    }

    /// Return the buffer contents and clear the editor.
    pub fn take(&mut self) -> String {
        let text = self.text();
        self.clear();
        text
    }

    /// Return the current buffer contents as a String.
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Return the current cursor position (character index).
    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// Return whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for InputLine {
    fn default() -> Self {
        Self::new()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
