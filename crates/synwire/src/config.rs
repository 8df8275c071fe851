// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Global configuration: buffer word layout and exchange settings.
//!
//! # Architecture
//!
//! - **Level 1 (Static)**: Compile-time constants (word width, index types)
//! - **Level 2 (Dynamic)**: [`ExchangeConfig`] loaded from YAML, applied to an
//!   [`EventRegistry`](crate::registry::EventRegistry) during configuration
//!
//! # Example YAML
//!
//! ```yaml
//! kinds:
//!   gap_junction:
//!     payload_length: 6
//!     syn_ids: [0, 4]
//!   diffusion:
//!     payload_length: 1
//!     syn_ids: [7]
//! ```

use std::mem::size_of;

// =======================================================================
// Transmission buffer layout
// =======================================================================

/// Atomic unit of the transmission buffer.
pub type Word = u32;

/// Width of one [`Word`] in bytes.
pub const WORD_BYTES: usize = size_of::<Word>();

/// Identifier of a connection (synapse) model variant.
pub type SynIndex = u16;

/// Global index of a node (neuron) in the network.
pub type NodeIndex = u64;

/// Per-connection real-valued factor (drift, diffusion).
pub type Weight = f64;

/// Environment variable holding the path of an exchange config file.
pub const CONFIG_ENV_VAR: &str = "SYNWIRE_CONFIG";

#[cfg(feature = "config-loaders")]
pub use loader::{ExchangeConfig, KindConfig};

#[cfg(feature = "config-loaders")]
mod loader {
    use super::{SynIndex, CONFIG_ENV_VAR};
    use crate::error::{Error, Result};
    use crate::event::EventKind;
    use crate::registry::EventRegistry;
    use serde::Deserialize;
    use std::collections::BTreeMap;
    use std::env::VarError;
    use std::fs;
    use std::path::Path;

    /// Root YAML document.
    #[derive(Debug, Default, Deserialize)]
    pub struct ExchangeConfig {
        /// Settings keyed by kind name (`gap_junction`, `instantaneous_rate`,
        /// `delayed_rate`, `diffusion`).
        #[serde(default)]
        pub kinds: BTreeMap<String, KindConfig>,
    }

    /// Settings for one event kind.
    #[derive(Debug, Default, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct KindConfig {
        /// Number of scalars every event of the kind carries.
        pub payload_length: Option<usize>,
        /// Synapse ids registered against the kind at startup.
        pub syn_ids: Vec<SynIndex>,
    }

    impl ExchangeConfig {
        pub fn from_yaml_str(yaml: &str) -> Result<Self> {
            serde_yaml::from_str(yaml).map_err(|e| Error::InvalidConfig(e.to_string()))
        }

        pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
            let path = path.as_ref();
            if !path.exists() {
                return Err(Error::ConfigFileNotFound(path.display().to_string()));
            }
            let content = fs::read_to_string(path).map_err(|e| {
                Error::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
            })?;
            Self::from_yaml_str(&content)
        }

        /// Load the file named by `SYNWIRE_CONFIG`, if the variable is set.
        pub fn from_env() -> Result<Option<Self>> {
            match std::env::var(CONFIG_ENV_VAR) {
                Ok(path) => Self::from_file(path).map(Some),
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(raw)) => Err(Error::InvalidConfig(format!(
                    "{} is not valid unicode: {:?}",
                    CONFIG_ENV_VAR, raw
                ))),
            }
        }

        /// Register ids and payload lengths on `registry`.
        ///
        /// Kind names are all resolved before anything is registered, so an
        /// unknown kind leaves the registry untouched. Id conflicts are
        /// configuration bugs and abort like any other registration.
        pub fn apply(&self, registry: &mut EventRegistry) -> Result<()> {
            let resolved = self
                .kinds
                .iter()
                .map(|(name, cfg)| name.parse::<EventKind>().map(|kind| (kind, cfg)))
                .collect::<Result<Vec<_>>>()?;

            for (kind, cfg) in resolved {
                if let Some(len) = cfg.payload_length {
                    registry.set_payload_length(kind, len);
                }
                for &syn_id in &cfg.syn_ids {
                    registry.register_kind(kind, syn_id);
                }
                log::debug!(
                    "[config] applied {}: payload_length={:?} syn_ids={:?}",
                    kind,
                    cfg.payload_length,
                    cfg.syn_ids
                );
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_and_apply() {
            let yaml = r#"
kinds:
  gap_junction:
    payload_length: 6
    syn_ids: [0, 4]
  diffusion:
    syn_ids: [7]
"#;
            let cfg = ExchangeConfig::from_yaml_str(yaml).expect("valid YAML should parse");
            let mut registry = EventRegistry::new();
            cfg.apply(&mut registry).expect("known kinds should apply");

            assert_eq!(registry.current_syn_ids(EventKind::GapJunction), &[0, 4]);
            assert_eq!(registry.payload_length(EventKind::GapJunction), 6);
            assert_eq!(registry.kind_of(7), Some(EventKind::Diffusion));
            assert_eq!(registry.kind(EventKind::Diffusion).payload_length(), None);
        }

        #[test]
        fn test_unknown_kind_leaves_registry_untouched() {
            let yaml = r#"
kinds:
  gap_junction:
    syn_ids: [1]
  spike:
    syn_ids: [2]
"#;
            let cfg = ExchangeConfig::from_yaml_str(yaml).expect("valid YAML should parse");
            let mut registry = EventRegistry::new();
            match cfg.apply(&mut registry) {
                Err(Error::UnknownKind(name)) => assert_eq!(name, "spike"),
                other => panic!("unexpected result {:?}", other),
            }
            assert_eq!(registry.kind_of(1), None);
        }

        #[test]
        fn test_rejects_unknown_field() {
            let yaml = r#"
kinds:
  delayed_rate:
    payload_lenght: 3
"#;
            assert!(matches!(
                ExchangeConfig::from_yaml_str(yaml),
                Err(Error::InvalidConfig(_))
            ));
        }

        // Only test in this binary touching the variable.
        #[cfg(unix)]
        #[test]
        fn test_from_env_rejects_non_unicode_path() {
            use std::ffi::OsString;
            use std::os::unix::ffi::OsStringExt;

            std::env::set_var(CONFIG_ENV_VAR, OsString::from_vec(vec![b'/', 0xFF, b'x']));
            let result = ExchangeConfig::from_env();
            std::env::remove_var(CONFIG_ENV_VAR);
            match result {
                Err(Error::InvalidConfig(reason)) => {
                    assert!(reason.contains("SYNWIRE_CONFIG is not valid unicode"));
                }
                other => panic!("unexpected result {:?}", other),
            }
            assert!(matches!(ExchangeConfig::from_env(), Ok(None)));
        }

        #[test]
        fn test_missing_file() {
            let err = ExchangeConfig::from_file("/nonexistent/synwire.yaml").unwrap_err();
            assert!(matches!(err, Error::ConfigFileNotFound(_)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_layout() {
        assert_eq!(WORD_BYTES, 4);
        assert_eq!(size_of::<SynIndex>(), 2);
        assert_eq!(size_of::<NodeIndex>(), 8);
    }
}
