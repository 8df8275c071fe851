// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Synapse-id bookkeeping for a single event kind.

use crate::config::SynIndex;
use crate::error::{fatal, Error};
use crate::event::EventKind;

/// Which connection models route through one event kind.
///
/// Two generations of ids are kept:
///
/// - **pristine**: ids registered by model registration at startup
/// - **current**: pristine ids plus runtime duplicates (copied models)
///
/// Sets stay small (a handful of models per kind), so a `Vec` with linear
/// scans beats any hashed set here.
#[derive(Debug, Clone)]
pub struct SynIdRegistry {
    kind: EventKind,
    pristine: Vec<SynIndex>,
    current: Vec<SynIndex>,
    payload_length: Option<usize>,
}

impl SynIdRegistry {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            pristine: Vec::new(),
            current: Vec::new(),
            payload_length: None,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Register `syn_id` at model registration (pristine and current).
    #[track_caller]
    pub fn register_kind(&mut self, syn_id: SynIndex) {
        self.ensure_absent(syn_id);
        self.pristine.push(syn_id);
        self.current.push(syn_id);
    }

    /// Add `syn_id` for a runtime duplicate (current only).
    #[track_caller]
    pub fn add_syn_id(&mut self, syn_id: SynIndex) {
        self.ensure_absent(syn_id);
        self.current.push(syn_id);
    }

    pub fn supports_syn_id(&self, syn_id: SynIndex) -> bool {
        self.current.contains(&syn_id)
    }

    /// Drop every id added since startup registration.
    pub fn reset_to_pristine(&mut self) {
        self.current.clone_from(&self.pristine);
    }

    pub fn current_syn_ids(&self) -> &[SynIndex] {
        &self.current
    }

    pub fn pristine_syn_ids(&self) -> &[SynIndex] {
        &self.pristine
    }

    pub fn set_payload_length(&mut self, length: usize) {
        if let Some(previous) = self.payload_length.filter(|&prev| prev != length) {
            log::debug!(
                "[registry] {} payload length {} -> {}",
                self.kind,
                previous,
                length
            );
        }
        self.payload_length = Some(length);
    }

    pub fn payload_length(&self) -> Option<usize> {
        self.payload_length
    }

    #[track_caller]
    fn ensure_absent(&self, syn_id: SynIndex) {
        if self.supports_syn_id(syn_id) {
            fatal(Error::DuplicateSynId {
                kind: self.kind,
                syn_id,
            });
        }
    }
}
