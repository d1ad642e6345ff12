// SPDX-License-Identifier: Apache-2.0

/// A read-only cursor over the caller's input bytes.
///
/// The view ends at the end of the slice or, when constructed with
/// `nul_terminates`, at the first NUL byte, so C-style buffers can be passed
/// with their terminator attached. The underlying data is never modified.
#[derive(Debug, Clone)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer over the given data.
    pub fn new(data: &'a [u8], nul_terminates: bool) -> Self {
        let data = if nul_terminates {
            match data.iter().position(|&b| b == 0) {
                Some(end) => data.get(..end).unwrap_or(data),
                None => data,
            }
        } else {
            data
        };
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// True when every byte of the view has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consumes and returns the next byte, or `None` at end of input.
    pub fn consume_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos = self.pos.saturating_add(1);
        Some(byte)
    }

    /// Consumes the next byte only if it equals `expected`.
    pub fn consume_if(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos = self.pos.saturating_add(1);
            true
        } else {
            false
        }
    }

    /// Advances the cursor by `count` bytes, clamped to the end of input.
    pub fn advance(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.data.len());
    }

    /// Bytes from the cursor to the end of input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    /// Advances past any run of space, tab, line feed or carriage return.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos = self.pos.saturating_add(1);
        }
    }
}
