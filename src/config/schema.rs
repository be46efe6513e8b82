//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for iframed.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IframedConfig {
    /// Name of the referer query parameter carrying the embedded sub-path.
    pub query_id: String,

    /// Origin used for outbound URLs when no referer is available
    /// (e.g., "http://parentdomain.com").
    pub default_base: Option<String>,

    /// Prefix the application is mounted under. Reverse-generated URLs start with it.
    pub script_prefix: String,

    /// Rewrite the request path even when the referer matched through an alias.
    pub dispatch_aliased: bool,

    /// Internal/external prefix pairs, checked in order.
    pub mappings: Vec<MappingConfig>,

    /// External path -> canonical external path.
    pub aliases: BTreeMap<String, String>,

    /// Internal path -> literal outbound URL.
    pub rewrites: BTreeMap<String, String>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for IframedConfig {
    fn default() -> Self {
        Self {
            query_id: "id".to_string(),
            default_base: None,
            script_prefix: "/".to_string(),
            dispatch_aliased: true,
            mappings: Vec::new(),
            aliases: BTreeMap::new(),
            rewrites: BTreeMap::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// One internal/external prefix pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MappingConfig {
    /// Prefix as routed inside the application (e.g., "/appname/viewname").
    pub internal: String,

    /// Prefix as seen by the parent page (e.g., "/refererpath").
    pub external: String,
}

impl MappingConfig {
    pub fn new(internal: impl Into<String>, external: impl Into<String>) -> Self {
        Self {
            internal: internal.into(),
            external: external.into(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log line format.
    pub log_format: LogFormat,

    /// Record rewrite counters through the `metrics` facade.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
            metrics_enabled: true,
        }
    }
}
