// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

/// Capacity allocated on the first push into an empty buffer.
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Append-only byte stack used while decoding string escapes.
///
/// Bytes are pushed at `top` and popped off the tail as a contiguous range.
/// A decoder records `top()` before it starts writing and calls
/// [`ScratchBuffer::truncate`] with that checkpoint to discard partial output
/// when it fails.
///
/// Storage is allocated lazily and grows by half of its current capacity
/// until a request fits, so the amortized cost of a push is constant.
#[derive(Debug)]
pub struct ScratchBuffer {
    /// Stack contents; `stack.len()` is the logical top.
    stack: Vec<u8>,
    /// Size of the first allocation.
    initial_capacity: usize,
}

impl ScratchBuffer {
    /// Creates an empty buffer that allocates [`DEFAULT_INITIAL_CAPACITY`] bytes on first use.
    #[cfg(test)]
    pub fn new() -> Self {
        Self::with_initial_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty buffer with a custom first allocation size.
    ///
    /// A zero size is bumped to one byte so that growth always makes progress.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            stack: Vec::new(),
            initial_capacity: initial_capacity.max(1),
        }
    }

    /// Current top-of-stack offset (number of bytes held).
    pub fn top(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Bytes that can be held before the next reallocation.
    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// The bytes currently on the stack.
    #[cfg(test)]
    pub fn as_slice(&self) -> &[u8] {
        &self.stack
    }

    /// Makes room for `additional` more bytes using 1.5x geometric growth.
    fn reserve(&mut self, additional: usize) {
        let needed = self.stack.len().saturating_add(additional);
        let current = self.stack.capacity();
        if needed <= current {
            return;
        }

        let mut size = if current == 0 {
            self.initial_capacity
        } else {
            current
        };
        while size < needed {
            size = size.saturating_add((size >> 1).max(1));
        }

        log::trace!("ScratchBuffer: growing capacity {current} -> {size}");
        self.stack.reserve_exact(size.saturating_sub(self.stack.len()));
    }

    /// Pushes a single byte.
    pub fn push_byte(&mut self, byte: u8) {
        self.reserve(1);
        self.stack.push(byte);
    }

    /// Pushes a contiguous run of bytes.
    pub fn push(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.reserve(bytes.len());
        self.stack.extend_from_slice(bytes);
    }

    /// Removes the top `len` bytes and returns them as an owned vector.
    ///
    /// The buffer keeps its capacity for later pushes.
    pub fn pop(&mut self, len: usize) -> Vec<u8> {
        debug_assert!(len <= self.stack.len(), "pop past the bottom of the stack");
        let start = self.stack.len().saturating_sub(len);
        self.stack.split_off(start)
    }

    /// Restores the stack to a previously recorded `top()` checkpoint.
    pub fn truncate(&mut self, checkpoint: usize) {
        self.stack.truncate(checkpoint);
    }

    /// Frees the storage. The stack must already be empty.
    pub fn release(&mut self) {
        debug_assert!(
            self.is_empty(),
            "scratch buffer released with {} unpopped bytes",
            self.stack.len()
        );
        self.stack = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_lazy_initial_allocation() {
        let mut buffer = ScratchBuffer::new();
        assert_eq!(buffer.capacity(), 0);
        assert!(buffer.is_empty());

        buffer.push_byte(b'a');
        assert!(buffer.capacity() >= DEFAULT_INITIAL_CAPACITY);
        assert_eq!(buffer.top(), 1);
    }

    #[test]
    fn test_geometric_growth() {
        let mut buffer = ScratchBuffer::with_initial_capacity(4);
        buffer.push_byte(b'a');
        let first = buffer.capacity();
        assert!(first >= 4);

        // Fill to exactly the current capacity without reallocating
        let filler = vec![b'b'; first - buffer.top()];
        buffer.push(&filler);
        assert_eq!(buffer.capacity(), first);

        buffer.push_byte(b'c');
        let second = buffer.capacity();
        assert!(second >= first + first / 2);
        assert!(buffer.top() <= buffer.capacity());
    }

    #[test]
    fn test_large_push_grows_past_several_steps() {
        let mut buffer = ScratchBuffer::with_initial_capacity(2);
        let data = [b'x'; 100];
        buffer.push(&data);
        assert_eq!(buffer.top(), 100);
        assert!(buffer.capacity() >= 100);
        assert_eq!(buffer.as_slice(), &data[..]);
    }

    #[test]
    fn test_zero_initial_capacity_still_grows() {
        let mut buffer = ScratchBuffer::with_initial_capacity(0);
        buffer.push(b"hello");
        assert_eq!(buffer.as_slice(), b"hello");
    }

    #[test]
    fn test_pop_returns_tail() {
        let mut buffer = ScratchBuffer::new();
        buffer.push(b"keep");
        let checkpoint = buffer.top();
        buffer.push(b"value");

        let popped = buffer.pop(buffer.top() - checkpoint);
        assert_eq!(popped, b"value");
        assert_eq!(buffer.as_slice(), b"keep");
        // Capacity is retained for reuse
        assert!(buffer.capacity() >= DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn test_pop_zero_bytes() {
        let mut buffer = ScratchBuffer::new();
        let popped = buffer.pop(0);
        assert!(popped.is_empty());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_truncate_to_checkpoint() {
        let mut buffer = ScratchBuffer::new();
        buffer.push(b"ab");
        let checkpoint = buffer.top();
        buffer.push(b"partial");
        buffer.truncate(checkpoint);
        assert_eq!(buffer.as_slice(), b"ab");
    }

    #[test]
    fn test_release_frees_storage() {
        let mut buffer = ScratchBuffer::new();
        buffer.push(b"abc");
        let _ = buffer.pop(3);
        buffer.release();
        assert_eq!(buffer.capacity(), 0);

        // Usable again after release
        buffer.push_byte(b'z');
        assert_eq!(buffer.as_slice(), b"z");
    }
}
