// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # synwire - secondary-event packing for distributed network simulation
//!
//! Secondary events carry fixed-length runs of per-connection scalars
//! (interpolated membrane potentials, rates, diffusion-neuron rates) between
//! compute nodes once per simulation step. This crate packs them into and
//! out of the flat word buffer the delivery layer exchanges.
//!
//! ## Quick Start
//!
//! ```rust
//! use synwire::codec::{WordCursor, WordCursorMut};
//! use synwire::{EventKind, EventRegistry, GapJunctionEvent, SecondaryEvent, Word};
//!
//! // Configuration phase (single thread)
//! let mut registry = EventRegistry::new();
//! registry.register_kind(EventKind::GapJunction, 0);
//! registry.set_payload_length(EventKind::GapJunction, 3);
//!
//! // Sender
//! let potentials = [1.5, -2.25, 0.0];
//! let mut event = GapJunctionEvent::new(&registry);
//! event.attach_payload(&potentials);
//! let mut buffer: Vec<Word> = vec![0; event.size()];
//! event.write_to_buffer(&mut WordCursorMut::new(&mut buffer));
//!
//! // Receiver
//! let mut received = GapJunctionEvent::new(&registry);
//! received.read_from_buffer(&mut WordCursor::new(&buffer));
//! assert_eq!(received.values().collect::<Vec<_>>(), potentials);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |  event     SecondaryEvent trait, 4 concrete kinds, receiver dispatch |
//! +---------------------------------------------------------------------+
//! |  event     HomogeneousEvent<T> engine (size / read / write)          |
//! +---------------------------------------------------------------------+
//! |  registry  synapse id -> kind routing, payload lengths, phases       |
//! +---------------------------------------------------------------------+
//! |  codec     words_for / encode / decode, Word cursors                 |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Error model
//!
//! Broken preconditions (duplicate ids, configuring during delivery, wrong
//! payload length, buffer overrun) abort with a panic after logging. Only
//! config loading and receiver dispatch return [`Result`].

/// Word codec and buffer cursors.
pub mod codec;
/// Buffer layout constants and YAML exchange config.
pub mod config;
/// Error type and fatal-precondition path.
pub mod error;
/// Secondary event engine and concrete kinds.
pub mod event;
/// Synapse-id routing table and phase entry points.
pub mod registry;

pub use codec::{words_for, Scalar, WordCursor, WordCursorMut};
pub use config::{NodeIndex, SynIndex, Weight, Word, WORD_BYTES};
#[cfg(feature = "config-loaders")]
pub use config::{ExchangeConfig, KindConfig};
pub use error::{Error, Result};
pub use event::{
    DelayedRateConnectionEvent, DiffusionConnectionEvent, EventKind, GapJunctionEvent,
    HomogeneousEvent, InstantaneousRateConnectionEvent, PayloadView, SecondaryEvent,
    SecondaryReceiver, HEADER_WORDS,
};
pub use registry::{EventRegistry, SynIdRegistry};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
