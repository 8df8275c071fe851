// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide routing table from synapse ids to event kinds.
//!
//! # Architecture
//!
//! ```text
//! global() -> &'static RwLock<EventRegistry>   (OnceLock, created on first use)
//!
//! EventRegistry
//! +-- kinds: [SynIdRegistry; EventKind::COUNT]
//!     +-- pristine: Vec<SynIndex>   (startup registration)
//!     +-- current:  Vec<SynIndex>   (pristine + copied models)
//!     +-- payload_length: Option<usize>
//! ```
//!
//! # Phases
//!
//! - **Configuration** (single thread): [`configure`] takes the write lock.
//!   It aborts when a delivery guard is alive instead of waiting for it.
//! - **Delivery** (many workers): [`delivery_phase`] returns a read guard
//!   that workers share; lookups are plain slice scans with no further
//!   locking.

mod global;
mod syn_ids;

pub use global::{configure, delivery_phase, global, reset_kernel};
pub use syn_ids::SynIdRegistry;

use crate::config::SynIndex;
use crate::error::{fatal, Error};
use crate::event::{EventKind, SecondaryEvent};

/// Per-kind synapse-id sets and payload lengths.
#[derive(Debug, Clone)]
pub struct EventRegistry {
    kinds: [SynIdRegistry; EventKind::COUNT],
}

impl EventRegistry {
    pub fn new() -> Self {
        Self {
            kinds: EventKind::ALL.map(SynIdRegistry::new),
        }
    }

    pub fn kind(&self, kind: EventKind) -> &SynIdRegistry {
        &self.kinds[kind.index()]
    }

    fn kind_mut(&mut self, kind: EventKind) -> &mut SynIdRegistry {
        &mut self.kinds[kind.index()]
    }

    /// Register `syn_id` for `kind` at model registration.
    ///
    /// Aborts if any kind already routes `syn_id`.
    #[track_caller]
    pub fn register_kind(&mut self, kind: EventKind, syn_id: SynIndex) {
        self.ensure_unclaimed(kind, syn_id);
        self.kind_mut(kind).register_kind(syn_id);
        log::debug!("[registry] registered syn_id {} for {}", syn_id, kind);
    }

    /// Route a copied model's `syn_id` through `kind` until the next reset.
    #[track_caller]
    pub fn add_syn_id(&mut self, kind: EventKind, syn_id: SynIndex) {
        self.ensure_unclaimed(kind, syn_id);
        self.kind_mut(kind).add_syn_id(syn_id);
        log::debug!("[registry] added syn_id {} to {}", syn_id, kind);
    }

    pub fn supports_syn_id(&self, kind: EventKind, syn_id: SynIndex) -> bool {
        self.kind(kind).supports_syn_id(syn_id)
    }

    pub fn current_syn_ids(&self, kind: EventKind) -> &[SynIndex] {
        self.kind(kind).current_syn_ids()
    }

    /// Reset one kind to its startup ids.
    pub fn reset_kind(&mut self, kind: EventKind) {
        self.kind_mut(kind).reset_to_pristine();
    }

    /// Reset every kind to its startup ids (kernel reset).
    pub fn reset_to_pristine(&mut self) {
        for ids in &mut self.kinds {
            ids.reset_to_pristine();
        }
        log::debug!("[registry] all kinds reset to pristine ids");
    }

    pub fn set_payload_length(&mut self, kind: EventKind, length: usize) {
        self.kind_mut(kind).set_payload_length(length);
    }

    /// Configured payload length of `kind`; aborts if never set.
    #[track_caller]
    pub fn payload_length(&self, kind: EventKind) -> usize {
        match self.kind(kind).payload_length() {
            Some(length) => length,
            None => fatal(Error::PayloadLengthUnset(kind)),
        }
    }

    /// Kind whose current set contains `syn_id`.
    pub fn kind_of(&self, syn_id: SynIndex) -> Option<EventKind> {
        self.kinds
            .iter()
            .find(|ids| ids.supports_syn_id(syn_id))
            .map(SynIdRegistry::kind)
    }

    /// Fresh, unbound event of the kind that routes `syn_id`.
    pub fn secondary_event_for<'a>(
        &self,
        syn_id: SynIndex,
    ) -> Option<Box<dyn SecondaryEvent<'a> + 'a>> {
        self.kind_of(syn_id).map(|kind| kind.prototype(self))
    }

    #[track_caller]
    fn ensure_unclaimed(&self, requested: EventKind, syn_id: SynIndex) {
        match self.kind_of(syn_id) {
            Some(owner) if owner != requested => fatal(Error::SynIdClaimed {
                syn_id,
                owner,
                requested,
            }),
            // Same-kind duplicates are reported by the kind itself.
            _ => {}
        }
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_kind_registry() -> EventRegistry {
        let mut registry = EventRegistry::new();
        registry.register_kind(EventKind::GapJunction, 1);
        registry.register_kind(EventKind::GapJunction, 2);
        registry.register_kind(EventKind::InstantaneousRate, 3);
        registry
    }

    #[test]
    fn test_cross_kind_isolation() {
        let registry = two_kind_registry();
        assert!(!registry.supports_syn_id(EventKind::GapJunction, 3));
        assert!(registry.supports_syn_id(EventKind::InstantaneousRate, 3));
        assert_eq!(registry.current_syn_ids(EventKind::GapJunction), &[1, 2]);
        assert_eq!(registry.kind_of(2), Some(EventKind::GapJunction));
        assert_eq!(registry.kind_of(3), Some(EventKind::InstantaneousRate));
        assert_eq!(registry.kind_of(4), None);
    }

    #[test]
    fn test_reset_all_kinds() {
        let mut registry = two_kind_registry();
        registry.add_syn_id(EventKind::GapJunction, 10);
        registry.add_syn_id(EventKind::InstantaneousRate, 11);
        registry.reset_to_pristine();
        assert_eq!(registry.kind_of(10), None);
        assert_eq!(registry.kind_of(11), None);
        assert_eq!(registry.current_syn_ids(EventKind::GapJunction), &[1, 2]);
    }

    #[test]
    fn test_reset_single_kind() {
        let mut registry = two_kind_registry();
        registry.add_syn_id(EventKind::GapJunction, 10);
        registry.add_syn_id(EventKind::InstantaneousRate, 11);
        registry.reset_kind(EventKind::GapJunction);
        assert_eq!(registry.kind_of(10), None);
        assert_eq!(registry.kind_of(11), Some(EventKind::InstantaneousRate));
    }

    #[test]
    fn test_secondary_event_for_routes_to_owner() {
        let mut registry = two_kind_registry();
        registry.set_payload_length(EventKind::InstantaneousRate, 4);
        let event = registry
            .secondary_event_for(3)
            .expect("syn_id 3 is routed");
        assert_eq!(event.kind(), EventKind::InstantaneousRate);
        assert_eq!(event.payload_words(), 8);
        assert!(registry.secondary_event_for(99).is_none());
    }

    #[test]
    #[should_panic(expected = "synapse id 3 requested for gap_junction is owned by instantaneous_rate")]
    fn test_id_claimed_by_other_kind_is_fatal() {
        let mut registry = two_kind_registry();
        registry.add_syn_id(EventKind::GapJunction, 3);
    }

    #[test]
    #[should_panic(expected = "payload length of diffusion was never configured")]
    fn test_unset_payload_length_is_fatal() {
        EventRegistry::new().payload_length(EventKind::Diffusion);
    }
}
