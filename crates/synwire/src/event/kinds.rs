// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Concrete event kinds, all carrying real-valued payloads.

use super::{EventKind, HomogeneousEvent, SecondaryEvent, SecondaryReceiver};
use crate::codec::{WordCursor, WordCursorMut};
use crate::config::Weight;
use crate::error::Result;
use crate::registry::EventRegistry;
use std::ops::{Deref, DerefMut};

/// Generate the `SecondaryEvent` impl and engine access for a kind
///
/// Every kind delegates sizing and packing to its `inner` engine and only
/// contributes its own dispatch target.
macro_rules! impl_secondary_event {
    ($name:ident, $handler:ident) => {
        impl<'a> $name<'a> {
            /// Payload length for an event built from the delivery side.
            pub fn with_payload_length(payload_length: usize) -> Self {
                Self::from_engine(HomogeneousEvent::with_payload_length(
                    Self::KIND,
                    payload_length,
                ))
            }

            /// Event sized by the length configured in `registry`.
            #[track_caller]
            pub fn new(registry: &EventRegistry) -> Self {
                Self::from_engine(HomogeneousEvent::new(Self::KIND, registry))
            }
        }

        impl<'a> Deref for $name<'a> {
            type Target = HomogeneousEvent<'a, f64>;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl DerefMut for $name<'_> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.inner
            }
        }

        impl<'a> SecondaryEvent<'a> for $name<'a> {
            fn kind(&self) -> EventKind {
                Self::KIND
            }

            fn clone_event(&self) -> Box<dyn SecondaryEvent<'a> + 'a> {
                Box::new(self.clone())
            }

            fn size(&self) -> usize {
                self.inner.size()
            }

            fn payload_words(&self) -> usize {
                self.inner.payload_words()
            }

            fn write_to_buffer(&self, pos: &mut WordCursorMut<'_>) {
                self.inner.write_to_buffer(pos);
            }

            fn read_from_buffer(&mut self, pos: &mut WordCursor<'a>) {
                self.inner.read_from_buffer(pos);
            }

            fn deliver(&self, receiver: &mut dyn SecondaryReceiver) -> Result<()> {
                receiver.$handler(self)
            }
        }
    };
}

/// Generate a kind with no fields beyond its payload
macro_rules! payload_only_kind {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $handler:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<'a> {
            inner: HomogeneousEvent<'a, f64>,
        }

        impl<'a> $name<'a> {
            pub const KIND: EventKind = $kind;

            fn from_engine(inner: HomogeneousEvent<'a, f64>) -> Self {
                Self { inner }
            }
        }

        impl_secondary_event!($name, $handler);
    };
}

payload_only_kind!(
    /// Interpolated membrane potential sent over gap junctions.
    GapJunctionEvent,
    EventKind::GapJunction,
    handle_gap_junction
);

payload_only_kind!(
    /// Rate sent to connected neurons without scheduling delay.
    InstantaneousRateConnectionEvent,
    EventKind::InstantaneousRate,
    handle_instantaneous_rate
);

payload_only_kind!(
    /// Rate sent to connected neurons after the connection delay.
    DelayedRateConnectionEvent,
    EventKind::DelayedRate,
    handle_delayed_rate
);

/// Rate for diffusion-approximation neurons.
///
/// Drift and diffusion factors belong to the connection and are set by it
/// on the receiving side; they never travel through the buffer.
#[derive(Debug, Clone)]
pub struct DiffusionConnectionEvent<'a> {
    inner: HomogeneousEvent<'a, f64>,
    drift_factor: Weight,
    diffusion_factor: Weight,
}

impl<'a> DiffusionConnectionEvent<'a> {
    pub const KIND: EventKind = EventKind::Diffusion;

    fn from_engine(inner: HomogeneousEvent<'a, f64>) -> Self {
        Self {
            inner,
            drift_factor: 0.0,
            diffusion_factor: 0.0,
        }
    }

    pub fn set_drift_factor(&mut self, factor: Weight) {
        self.drift_factor = factor;
    }

    pub fn drift_factor(&self) -> Weight {
        self.drift_factor
    }

    pub fn set_diffusion_factor(&mut self, factor: Weight) {
        self.diffusion_factor = factor;
    }

    pub fn diffusion_factor(&self) -> Weight {
        self.diffusion_factor
    }
}

impl_secondary_event!(DiffusionConnectionEvent, handle_diffusion);
