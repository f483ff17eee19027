use std::fmt;

/// The reconstructed message plus the edit cursor.
///
/// The cursor is an index in `[0, len]` marking where the next committed
/// character is inserted and where deletions take effect. All edit operations
/// clamp at the buffer bounds: capture logs are reconstructed from possibly
/// noisy hardware, so an edit past an edge is dropped rather than faulted on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters in the message.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current cursor index, always in `[0, len]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The message characters in order.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Inserts `ch` at the cursor and advances the cursor past it.
    pub fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Removes the character before the cursor and moves the cursor onto the
    /// gap. No-op when the cursor is already at the start.
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
    }

    /// Moves the cursor one position left, stopping at the start.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one position right, stopping at the end.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl From<TextBuffer> for String {
    fn from(buffer: TextBuffer) -> String {
        buffer.chars.into_iter().collect()
    }
}
