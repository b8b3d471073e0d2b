//! Byte cursor over a single trimmed source line.
//!
//! Every character the shapes care about is ASCII, so the cursor steps over
//! bytes and only ever slices at ASCII boundaries.

pub(crate) struct Cursor<'src> {
    text: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(text: &'src str) -> Self {
        Self { text, pos: 0 }
    }

    /// Returns the current byte without advancing.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// If the current byte matches, advance and return `true`.
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip spaces, tabs and other ASCII whitespace.
    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Consume a run of word characters (`[A-Za-z0-9_]`) and return it.
    pub(crate) fn word(&mut self) -> &'src str {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == b'_')
        {
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    /// Everything from the current position to the end of the line.
    pub(crate) fn rest(&self) -> &'src str {
        &self.text[self.pos..]
    }
}
