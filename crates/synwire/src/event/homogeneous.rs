// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Event engine for payloads made of `payload_length` values of one scalar type.

use super::EventKind;
use crate::codec::{self, decode_words, encode_words, words_for, Scalar, WordCursor, WordCursorMut};
use crate::config::{NodeIndex, SynIndex, Word};
use crate::error::{fatal, Error};
use crate::registry::EventRegistry;
use std::iter::FusedIterator;
use std::slice::{ChunksExact, Iter};

/// Words `size()` reserves ahead of the payload (synapse id + node index).
pub const HEADER_WORDS: usize = words_for::<SynIndex>() + words_for::<NodeIndex>();

/// Where an event's payload currently lives.
#[derive(Debug, Clone, Copy)]
pub enum PayloadView<'a, T> {
    /// Nothing attached or read yet.
    Unbound,
    /// Encoded words inside the transmission buffer (after a read).
    RawSlice(&'a [Word]),
    /// Caller-owned values (after `attach_payload`).
    TypedRange(&'a [T]),
}

/// Secondary event whose payload is `payload_length` values of `T`.
///
/// The event never owns payload storage: it borrows either the sender's
/// values or a slice of the receiver's buffer, so it cannot outlive either.
#[derive(Debug, Clone)]
pub struct HomogeneousEvent<'a, T: Scalar> {
    kind: EventKind,
    payload_length: usize,
    view: PayloadView<'a, T>,
}

impl<'a, T: Scalar> HomogeneousEvent<'a, T> {
    /// Unbound event sized by the payload length configured for `kind`.
    #[track_caller]
    pub fn new(kind: EventKind, registry: &EventRegistry) -> Self {
        Self::with_payload_length(kind, registry.payload_length(kind))
    }

    /// Aborts when `T` has zero width: such values occupy no words and
    /// cannot be laid out in the buffer.
    #[track_caller]
    pub fn with_payload_length(kind: EventKind, payload_length: usize) -> Self {
        if words_for::<T>() == 0 {
            fatal(Error::ZeroWidthPayload {
                kind,
                type_name: std::any::type_name::<T>(),
            });
        }
        Self {
            kind,
            payload_length,
            view: PayloadView::Unbound,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn payload_length(&self) -> usize {
        self.payload_length
    }

    /// Reserved words: header plus payload.
    pub fn size(&self) -> usize {
        HEADER_WORDS + self.payload_words()
    }

    /// Words emitted by [`write_to_buffer`](Self::write_to_buffer).
    pub fn payload_words(&self) -> usize {
        self.payload_length * words_for::<T>()
    }

    /// Point the event at `values` for sending.
    ///
    /// Aborts unless `values` holds exactly `payload_length` elements.
    #[track_caller]
    pub fn attach_payload(&mut self, values: &'a [T]) {
        if values.len() != self.payload_length {
            fatal(Error::PayloadLengthMismatch {
                kind: self.kind,
                expected: self.payload_length,
                actual: values.len(),
            });
        }
        self.view = PayloadView::TypedRange(values);
    }

    /// Bind the payload to the next `payload_words()` words at `pos`.
    ///
    /// Nothing is decoded here; values are read on demand through
    /// [`values`](Self::values).
    #[track_caller]
    pub fn read_from_buffer(&mut self, pos: &mut WordCursor<'a>) {
        let raw = pos.take(self.payload_words());
        self.view = PayloadView::RawSlice(raw);
    }

    /// Encode every payload value at `pos`.
    ///
    /// Capacity for the whole payload is checked before the first value is
    /// written.
    #[track_caller]
    pub fn write_to_buffer(&self, pos: &mut WordCursorMut<'_>) {
        if let PayloadView::Unbound = self.view {
            fatal(Error::PayloadUnbound(self.kind));
        }
        let out = pos.take(self.payload_words());
        for (words, value) in out.chunks_exact_mut(words_for::<T>()).zip(self.values()) {
            encode_words(value, words);
        }
    }

    /// Decode one value at an arbitrary `pos`, leaving this event untouched.
    #[track_caller]
    pub fn payload_value(&self, pos: &mut WordCursor<'_>) -> T {
        codec::decode(pos)
    }

    /// Payload values in order, decoded lazily for buffer-backed events.
    pub fn values(&self) -> PayloadValues<'a, T> {
        let inner = match self.view {
            PayloadView::Unbound => ValuesInner::Empty,
            PayloadView::RawSlice(raw) => ValuesInner::Raw(raw.chunks_exact(words_for::<T>())),
            PayloadView::TypedRange(values) => ValuesInner::Typed(values.iter()),
        };
        PayloadValues { inner }
    }

    /// Buffer words backing the payload, when bound by a read.
    pub fn raw_payload(&self) -> Option<&'a [Word]> {
        match self.view {
            PayloadView::RawSlice(raw) => Some(raw),
            _ => None,
        }
    }

    pub fn view(&self) -> PayloadView<'a, T> {
        self.view
    }

    pub fn is_bound(&self) -> bool {
        !matches!(self.view, PayloadView::Unbound)
    }
}

/// Iterator over an event's payload values.
#[derive(Debug, Clone)]
pub struct PayloadValues<'a, T> {
    inner: ValuesInner<'a, T>,
}

#[derive(Debug, Clone)]
enum ValuesInner<'a, T> {
    Empty,
    Raw(ChunksExact<'a, Word>),
    Typed(Iter<'a, T>),
}

impl<T: Scalar> Iterator for PayloadValues<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match &mut self.inner {
            ValuesInner::Empty => None,
            ValuesInner::Raw(chunks) => chunks.next().map(decode_words::<T>),
            ValuesInner::Typed(values) => values.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ValuesInner::Empty => (0, Some(0)),
            ValuesInner::Raw(chunks) => chunks.size_hint(),
            ValuesInner::Typed(values) => values.size_hint(),
        }
    }
}

impl<T: Scalar> ExactSizeIterator for PayloadValues<'_, T> {}

impl<T: Scalar> FusedIterator for PayloadValues<'_, T> {}
