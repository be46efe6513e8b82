//! Prefix mapping lookup.
//!
//! # Responsibilities
//! - Store the ordered internal/external prefix pairs
//! - Find the first pair matching an external path (inbound)
//! - Find the first pair matching an internal path (outbound)
//!
//! # Design Decisions
//! - Plain `starts_with` prefix matching, case-sensitive
//! - O(n) scan in configuration order; first match wins
//! - No segment-boundary check: "/app" matches "/application"

use crate::config::MappingConfig;

/// One internal/external prefix pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    internal: String,
    external: String,
}

impl Mapping {
    pub fn new(internal: impl Into<String>, external: impl Into<String>) -> Self {
        Self {
            internal: internal.into(),
            external: external.into(),
        }
    }

    pub fn internal(&self) -> &str {
        &self.internal
    }

    pub fn external(&self) -> &str {
        &self.external
    }
}

impl From<&MappingConfig> for Mapping {
    fn from(config: &MappingConfig) -> Self {
        Self::new(config.internal.clone(), config.external.clone())
    }
}

/// Ordered list of mappings, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    mappings: Vec<Mapping>,
}

impl MappingTable {
    pub fn new(mappings: Vec<Mapping>) -> Self {
        Self { mappings }
    }

    pub fn from_config(configs: &[MappingConfig]) -> Self {
        Self::new(configs.iter().map(Mapping::from).collect())
    }

    /// First mapping whose external prefix is a prefix of `path`.
    pub fn match_external(&self, path: &str) -> Option<&Mapping> {
        self.mappings.iter().find(|m| path.starts_with(&m.external))
    }

    /// First mapping whose internal prefix is a prefix of `path`.
    pub fn match_internal(&self, path: &str) -> Option<&Mapping> {
        self.mappings.iter().find(|m| path.starts_with(&m.internal))
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mapping> {
        self.mappings.iter()
    }
}
