// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Word codec: packs scalar values into runs of buffer words.
//!
//! A value of type `T` occupies [`words_for::<T>()`](words_for) consecutive
//! words. Exactly `size_of::<T>()` bytes are copied; when `T` is not a whole
//! number of words, only the leading bytes of the last word are written and
//! the rest of that word is left as it was.
//!
//! ```text
//! f64 (8 bytes), Word = u32:   | b0 b1 b2 b3 | b4 b5 b6 b7 |
//! [u8; 6]:                     | b0 b1 b2 b3 | b4 b5 -- -- |
//! ```

pub mod cursor;
pub mod scalar;

pub use cursor::{WordCursor, WordCursorMut};
pub use scalar::Scalar;

use crate::config::{Word, WORD_BYTES};
use std::mem::size_of;

/// Number of words covered by a value of type `T` (rounded up).
#[inline]
pub const fn words_for<T>() -> usize {
    size_of::<T>().div_ceil(WORD_BYTES)
}

/// Write `value` at `pos` and advance by `words_for::<T>()`.
#[inline]
#[track_caller]
pub fn encode<T: Scalar>(value: T, pos: &mut WordCursorMut<'_>) {
    encode_words(value, pos.take(words_for::<T>()));
}

/// Read a `T` at `pos` and advance by `words_for::<T>()`.
#[inline]
#[track_caller]
pub fn decode<T: Scalar>(pos: &mut WordCursor<'_>) -> T {
    decode_words(pos.take(words_for::<T>()))
}

/// Copy the byte image of `value` into `words` (exactly `words_for::<T>()` long).
#[inline]
pub fn encode_words<T: Scalar>(value: T, words: &mut [Word]) {
    debug_assert_eq!(words.len(), words_for::<T>());
    let bytes = value.to_bytes();
    for (word, chunk) in words.iter_mut().zip(bytes.as_ref().chunks(WORD_BYTES)) {
        let mut raw = word.to_ne_bytes();
        raw[..chunk.len()].copy_from_slice(chunk);
        *word = Word::from_ne_bytes(raw);
    }
}

/// Rebuild a `T` from `words` (exactly `words_for::<T>()` long).
#[inline]
pub fn decode_words<T: Scalar>(words: &[Word]) -> T {
    debug_assert_eq!(words.len(), words_for::<T>());
    let mut bytes = T::zeroed();
    for (chunk, word) in bytes.as_mut().chunks_mut(WORD_BYTES).zip(words) {
        chunk.copy_from_slice(&word.to_ne_bytes()[..chunk.len()]);
    }
    T::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<T: Scalar>(value: T) -> (T, usize) {
        let mut buffer: Vec<Word> = vec![0; words_for::<T>() + 1];
        let mut writer = WordCursorMut::new(&mut buffer);
        encode(value, &mut writer);
        let written = writer.offset();

        let mut reader = WordCursor::new(&buffer);
        let decoded = decode::<T>(&mut reader);
        assert_eq!(reader.offset(), written);
        (decoded, written)
    }

    #[test]
    fn test_words_for() {
        assert_eq!(words_for::<u8>(), 1);
        assert_eq!(words_for::<u16>(), 1);
        assert_eq!(words_for::<u32>(), 1);
        assert_eq!(words_for::<f64>(), 2);
        assert_eq!(words_for::<u128>(), 4);
        assert_eq!(words_for::<[u8; 5]>(), 2);
        assert_eq!(words_for::<[u8; 9]>(), 3);
    }

    #[test]
    fn test_roundtrip_bit_exact() {
        let (v, n) = roundtrip(-2.25f64);
        assert_eq!(v.to_bits(), (-2.25f64).to_bits());
        assert_eq!(n, 2);

        let nan = f64::from_bits(0x7ff8_dead_beef_0001);
        assert_eq!(roundtrip(nan).0.to_bits(), nan.to_bits());
        assert_eq!(roundtrip(-0.0f32).0.to_bits(), (-0.0f32).to_bits());
        assert_eq!(roundtrip(0xABu8), (0xAB, 1));
        assert_eq!(roundtrip(true), (true, 1));
        assert_eq!(roundtrip(i128::MIN), (i128::MIN, 4));
        assert_eq!(roundtrip([1u8, 2, 3, 4, 5, 6]), ([1, 2, 3, 4, 5, 6], 2));
    }

    #[test]
    fn test_partial_word_keeps_trailing_bytes() {
        let mut buffer = [Word::MAX; 2];
        encode([0u8; 5], &mut WordCursorMut::new(&mut buffer));
        assert_eq!(buffer[0], 0);

        let tail = buffer[1].to_ne_bytes();
        assert_eq!(tail[0], 0);
        assert_eq!(&tail[1..], &[0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_sequential_values_advance() {
        let mut buffer = [0; 5];
        let mut writer = WordCursorMut::new(&mut buffer);
        encode(1.5f64, &mut writer);
        encode(7u16, &mut writer);
        encode(-0.5f64, &mut writer);
        assert!(writer.is_eof());

        let mut reader = WordCursor::new(&buffer);
        assert_eq!(decode::<f64>(&mut reader), 1.5);
        assert_eq!(decode::<u16>(&mut reader), 7);
        assert_eq!(decode::<f64>(&mut reader), -0.5);
    }

    #[test]
    #[should_panic(expected = "buffer exhausted")]
    fn test_encode_without_capacity_is_fatal() {
        let mut buffer = [0; 1];
        encode(1.0f64, &mut WordCursorMut::new(&mut buffer));
    }
}
