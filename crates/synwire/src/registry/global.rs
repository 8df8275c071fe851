// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide registry instance and phase entry points.

use super::EventRegistry;
use crate::error::{fatal, Error};
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::OnceLock;

static GLOBAL_REGISTRY: OnceLock<RwLock<EventRegistry>> = OnceLock::new();

/// Process-wide registry (created empty on first use).
pub fn global() -> &'static RwLock<EventRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| RwLock::new(EventRegistry::new()))
}

/// Run `f` with exclusive access to the global registry.
///
/// Aborts if a [`delivery_phase`] guard is alive: configuration and delivery
/// never interleave. Configuration is single-threaded, so a `configure` call
/// on another thread (or nested inside `f`) aborts the same way.
#[track_caller]
pub fn configure<R>(f: impl FnOnce(&mut EventRegistry) -> R) -> R {
    match global().try_write() {
        Some(mut registry) => f(&mut registry),
        None => fatal(Error::RegistryBusy),
    }
}

/// Shared view for the delivery phase.
///
/// Hand `&*guard` to every worker; drop the guard before configuring again.
pub fn delivery_phase() -> RwLockReadGuard<'static, EventRegistry> {
    global().read()
}

/// Discard runtime-copied ids of every kind.
#[track_caller]
pub fn reset_kernel() {
    configure(EventRegistry::reset_to_pristine);
}
