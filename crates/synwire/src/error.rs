// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type shared by the crate.
//!
//! Two channels exist:
//!
//! - **Recoverable**: configuration loading and receiver dispatch return
//!   [`Result`].
//! - **Fatal**: violated preconditions (duplicate synapse ids, configuring
//!   while delivery runs, payload length mismatch, buffer exhaustion) go
//!   through [`fatal`], which logs and panics. They indicate a broken build or
//!   model configuration and are never returned to the caller.

use crate::config::SynIndex;
use crate::event::EventKind;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration file not found at specified path.
    ConfigFileNotFound(String),
    /// Configuration document could not be read or parsed.
    InvalidConfig(String),
    /// Kind name does not match any [`EventKind`].
    UnknownKind(String),

    // ========================================================================
    // Registry Errors (fatal)
    // ========================================================================
    /// Synapse id is already part of the kind's current set.
    DuplicateSynId { kind: EventKind, syn_id: SynIndex },
    /// Synapse id is already owned by another kind.
    SynIdClaimed {
        syn_id: SynIndex,
        owner: EventKind,
        requested: EventKind,
    },
    /// Registry mutation attempted while a delivery guard or another
    /// configuration holds it.
    RegistryBusy,
    /// Kind used before its payload length was configured.
    PayloadLengthUnset(EventKind),

    // ========================================================================
    // Event Errors
    // ========================================================================
    /// Attached payload does not have the configured length (fatal).
    PayloadLengthMismatch {
        kind: EventKind,
        expected: usize,
        actual: usize,
    },
    /// Event written before any payload was attached or read (fatal).
    PayloadUnbound(EventKind),
    /// Payload scalar type occupies no bytes (fatal).
    ZeroWidthPayload {
        kind: EventKind,
        type_name: &'static str,
    },
    /// Cursor would move past the end of the buffer (fatal).
    BufferExhausted {
        offset: usize,
        requested: usize,
        remaining: usize,
    },
    /// Receiver does not accept events of this kind.
    UnexpectedEvent { kind: EventKind, receiver: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigFileNotFound(path) => write!(f, "config file not found: {}", path),
            Error::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
            Error::UnknownKind(name) => write!(f, "unknown event kind '{}'", name),
            Error::DuplicateSynId { kind, syn_id } => {
                write!(f, "synapse id {} already registered for {}", syn_id, kind)
            }
            Error::SynIdClaimed {
                syn_id,
                owner,
                requested,
            } => write!(
                f,
                "synapse id {} requested for {} is owned by {}",
                syn_id, requested, owner
            ),
            Error::RegistryBusy => write!(
                f,
                "registry busy (delivery phase or concurrent configuration)"
            ),
            Error::PayloadLengthUnset(kind) => {
                write!(f, "payload length of {} was never configured", kind)
            }
            Error::PayloadLengthMismatch {
                kind,
                expected,
                actual,
            } => write!(
                f,
                "{} payload has {} values, expected {}",
                kind, actual, expected
            ),
            Error::PayloadUnbound(kind) => write!(f, "{} has no payload bound", kind),
            Error::ZeroWidthPayload { kind, type_name } => write!(
                f,
                "{} payload type {} has zero width",
                kind, type_name
            ),
            Error::BufferExhausted {
                offset,
                requested,
                remaining,
            } => write!(
                f,
                "buffer exhausted at word {}: requested {} words, {} remaining",
                offset, requested, remaining
            ),
            Error::UnexpectedEvent { kind, receiver } => {
                write!(f, "{} does not handle {}", receiver, kind)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Abort on a violated precondition.
#[cold]
#[track_caller]
pub(crate) fn fatal(err: Error) -> ! {
    log::error!("[synwire] fatal: {}", err);
    panic!("{}", err)
}
