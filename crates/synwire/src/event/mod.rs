// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Secondary events: fixed-length scalar payloads exchanged every step.
//!
//! # Lifecycle
//!
//! ```text
//! sender:    attach_payload(&values) -> write_to_buffer(&mut WordCursorMut)
//!                                              |
//!                                  [ transmission buffer ]
//!                                              |
//! receiver:  read_from_buffer(&mut WordCursor) -> values() / payload_value()
//! ```
//!
//! The kind of an event is never written to the buffer: the delivery side
//! assigns each kind its own region, so position alone identifies it.

mod homogeneous;
mod kinds;

pub use homogeneous::{HomogeneousEvent, PayloadValues, PayloadView, HEADER_WORDS};
pub use kinds::{
    DelayedRateConnectionEvent, DiffusionConnectionEvent, GapJunctionEvent,
    InstantaneousRateConnectionEvent,
};

use crate::codec::{WordCursor, WordCursorMut};
use crate::config::SynIndex;
use crate::error::{Error, Result};
use crate::registry::EventRegistry;
use std::fmt;
use std::str::FromStr;

/// Concrete secondary event families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Interpolated membrane potential for gap junctions.
    GapJunction,
    /// Rate transmitted without delay.
    InstantaneousRate,
    /// Rate transmitted with the connection delay.
    DelayedRate,
    /// Rate for diffusion-approximation neurons (carries drift/diffusion factors).
    Diffusion,
}

impl EventKind {
    pub const COUNT: usize = 4;

    pub const ALL: [EventKind; Self::COUNT] = [
        EventKind::GapJunction,
        EventKind::InstantaneousRate,
        EventKind::DelayedRate,
        EventKind::Diffusion,
    ];

    /// Dense index into per-kind tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            EventKind::GapJunction => "gap_junction",
            EventKind::InstantaneousRate => "instantaneous_rate",
            EventKind::DelayedRate => "delayed_rate",
            EventKind::Diffusion => "diffusion",
        }
    }

    /// Whether the scheduler delivers this kind after the connection delay.
    pub const fn is_delayed(self) -> bool {
        matches!(self, EventKind::DelayedRate)
    }

    /// Fresh, unbound event of this kind sized from `registry`.
    #[track_caller]
    pub fn prototype<'a>(self, registry: &EventRegistry) -> Box<dyn SecondaryEvent<'a> + 'a> {
        match self {
            EventKind::GapJunction => Box::new(GapJunctionEvent::new(registry)),
            EventKind::InstantaneousRate => {
                Box::new(InstantaneousRateConnectionEvent::new(registry))
            }
            EventKind::DelayedRate => Box::new(DelayedRateConnectionEvent::new(registry)),
            EventKind::Diffusion => Box::new(DiffusionConnectionEvent::new(registry)),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_owned()))
    }
}

/// Capability set shared by every secondary event.
///
/// `'a` is the lifetime of the buffer or payload slice the event points into;
/// an event never outlives (or owns) its payload storage.
pub trait SecondaryEvent<'a>: fmt::Debug + Send + Sync {
    fn kind(&self) -> EventKind;

    /// Deep copy preserving the concrete kind.
    fn clone_event(&self) -> Box<dyn SecondaryEvent<'a> + 'a>;

    /// Words to reserve for this event in the transmission buffer.
    ///
    /// Includes room for a synapse id and a node index that are not
    /// streamed by [`write_to_buffer`](Self::write_to_buffer).
    fn size(&self) -> usize;

    /// Words actually emitted by [`write_to_buffer`](Self::write_to_buffer).
    fn payload_words(&self) -> usize;

    fn write_to_buffer(&self, pos: &mut WordCursorMut<'_>);

    /// Bind the payload to the words at `pos` (no copy) and advance past them.
    fn read_from_buffer(&mut self, pos: &mut WordCursor<'a>);

    /// Hand the event to the receiving node.
    fn deliver(&self, receiver: &mut dyn SecondaryReceiver) -> Result<()>;

    #[track_caller]
    fn add_syn_id(&self, registry: &mut EventRegistry, syn_id: SynIndex) {
        registry.add_syn_id(self.kind(), syn_id);
    }

    fn supports_syn_id(&self, registry: &EventRegistry, syn_id: SynIndex) -> bool {
        registry.supports_syn_id(self.kind(), syn_id)
    }

    fn supported_syn_ids<'r>(&self, registry: &'r EventRegistry) -> &'r [SynIndex] {
        registry.current_syn_ids(self.kind())
    }

    fn reset_supported_syn_ids(&self, registry: &mut EventRegistry) {
        registry.reset_kind(self.kind());
    }
}

/// Node-side handlers. Implement the kinds the node accepts; the rest
/// report [`Error::UnexpectedEvent`].
pub trait SecondaryReceiver {
    /// Model name used in error reports.
    fn receiver_name(&self) -> &str;

    fn handle_gap_junction(&mut self, _event: &GapJunctionEvent<'_>) -> Result<()> {
        Err(unexpected(self.receiver_name(), EventKind::GapJunction))
    }

    fn handle_instantaneous_rate(
        &mut self,
        _event: &InstantaneousRateConnectionEvent<'_>,
    ) -> Result<()> {
        Err(unexpected(self.receiver_name(), EventKind::InstantaneousRate))
    }

    fn handle_delayed_rate(&mut self, _event: &DelayedRateConnectionEvent<'_>) -> Result<()> {
        Err(unexpected(self.receiver_name(), EventKind::DelayedRate))
    }

    fn handle_diffusion(&mut self, _event: &DiffusionConnectionEvent<'_>) -> Result<()> {
        Err(unexpected(self.receiver_name(), EventKind::Diffusion))
    }
}

fn unexpected(receiver: &str, kind: EventKind) -> Error {
    log::debug!("[event] {} rejected {}", receiver, kind);
    Error::UnexpectedEvent {
        kind,
        receiver: receiver.to_owned(),
    }
}
