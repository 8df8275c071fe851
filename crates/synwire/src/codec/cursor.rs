// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Advancing cursors into a transmission buffer.
//!
//! The buffer itself is owned and sized by the delivery side; cursors only
//! address positions inside it. Running past the end is a precondition
//! violation (capacity is always known up front via `size()`), so it aborts
//! instead of returning an error.

use crate::config::Word;
use crate::error::{fatal, Error};

/// Generate common cursor methods (offset, remaining, bounds check, skip)
///
/// Shared between `WordCursor` and `WordCursorMut`, which differ only in the
/// mutability of the underlying slice.
macro_rules! impl_cursor_common {
    () => {
        /// Current position in words from the start of the buffer.
        pub fn offset(&self) -> usize {
            self.offset
        }

        pub fn remaining(&self) -> usize {
            self.buffer.len().saturating_sub(self.offset)
        }

        pub fn is_eof(&self) -> bool {
            self.offset >= self.buffer.len()
        }

        /// Advance by `words` without touching the buffer.
        #[track_caller]
        pub fn skip(&mut self, words: usize) {
            self.ensure(words);
            self.offset += words;
        }

        #[inline]
        #[track_caller]
        fn ensure(&self, words: usize) {
            if words > self.remaining() {
                fatal(Error::BufferExhausted {
                    offset: self.offset,
                    requested: words,
                    remaining: self.remaining(),
                });
            }
        }
    };
}

/// Read cursor. Slices handed out borrow the buffer, never copy it.
#[derive(Debug, Clone)]
pub struct WordCursor<'a> {
    buffer: &'a [Word],
    offset: usize,
}

impl<'a> WordCursor<'a> {
    pub fn new(buffer: &'a [Word]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Cursor positioned at `offset` (may equal `buffer.len()`).
    #[track_caller]
    pub fn at(buffer: &'a [Word], offset: usize) -> Self {
        let mut cursor = Self::new(buffer);
        cursor.skip(offset);
        cursor
    }

    /// Borrow the next `words` words and advance past them.
    #[inline]
    #[track_caller]
    pub fn take(&mut self, words: usize) -> &'a [Word] {
        self.ensure(words);
        let slice = &self.buffer[self.offset..self.offset + words];
        self.offset += words;
        slice
    }

    impl_cursor_common!();
}

/// Write cursor.
#[derive(Debug)]
pub struct WordCursorMut<'a> {
    buffer: &'a mut [Word],
    offset: usize,
}

impl<'a> WordCursorMut<'a> {
    pub fn new(buffer: &'a mut [Word]) -> Self {
        Self { buffer, offset: 0 }
    }

    #[track_caller]
    pub fn at(buffer: &'a mut [Word], offset: usize) -> Self {
        let mut cursor = Self::new(buffer);
        cursor.skip(offset);
        cursor
    }

    /// Mutably borrow the next `words` words and advance past them.
    #[inline]
    #[track_caller]
    pub fn take(&mut self, words: usize) -> &mut [Word] {
        self.ensure(words);
        let start = self.offset;
        self.offset += words;
        &mut self.buffer[start..start + words]
    }

    impl_cursor_common!();
}
