//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check prefix and path shapes so lookups can actually match
//! - Check the default base is an absolute URL
//! - Warn about mappings hidden behind earlier ones
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: IframedConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::IframedConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("mapping {index}: {side} prefix '{prefix}' must start with '/'")]
    RelativePrefix {
        index: usize,
        side: &'static str,
        prefix: String,
    },
    #[error("query_id must not be empty")]
    EmptyQueryId,
    #[error("query_id '{0}' contains a reserved character")]
    ReservedQueryId(String),
    #[error("default_base '{0}' is not an absolute URL")]
    InvalidDefaultBase(String),
    #[error("default_base '{0}' must not end with '/'")]
    TrailingSlashDefaultBase(String),
    #[error("alias '{0}' ends with '/' and can never match")]
    UnreachableAlias(String),
    #[error("alias '{0}' has an empty target")]
    EmptyAlias(String),
    #[error("rewrite '{0}' has an empty target")]
    EmptyRewrite(String),
    #[error("script_prefix '{0}' must start and end with '/'")]
    InvalidScriptPrefix(String),
}

/// Validate the whole configuration, collecting every error.
pub fn validate_config(config: &IframedConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, mapping) in config.mappings.iter().enumerate() {
        for (side, prefix) in [("internal", &mapping.internal), ("external", &mapping.external)] {
            if !prefix.starts_with('/') {
                errors.push(ValidationError::RelativePrefix {
                    index,
                    side,
                    prefix: prefix.clone(),
                });
            }
        }
    }
    warn_shadowed_mappings(config);

    if config.query_id.is_empty() {
        errors.push(ValidationError::EmptyQueryId);
    } else if config.query_id.contains(['=', '&', '#', '?']) {
        errors.push(ValidationError::ReservedQueryId(config.query_id.clone()));
    }

    if let Some(base) = &config.default_base {
        match Url::parse(base) {
            Ok(url) if !url.cannot_be_a_base() => {
                if base.ends_with('/') {
                    errors.push(ValidationError::TrailingSlashDefaultBase(base.clone()));
                }
            }
            _ => errors.push(ValidationError::InvalidDefaultBase(base.clone())),
        }
    }

    for (from, to) in &config.aliases {
        if from.ends_with('/') {
            errors.push(ValidationError::UnreachableAlias(from.clone()));
        }
        if to.is_empty() {
            errors.push(ValidationError::EmptyAlias(from.clone()));
        }
    }

    for (from, to) in &config.rewrites {
        if to.is_empty() {
            errors.push(ValidationError::EmptyRewrite(from.clone()));
        }
    }

    let prefix = &config.script_prefix;
    if !prefix.starts_with('/') || !prefix.ends_with('/') {
        errors.push(ValidationError::InvalidScriptPrefix(prefix.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// First match wins, so a mapping whose prefixes both extend an earlier
/// mapping's prefixes is never selected in either direction.
fn warn_shadowed_mappings(config: &IframedConfig) {
    for (index, later) in config.mappings.iter().enumerate() {
        let shadowed_by = config.mappings[..index].iter().position(|earlier| {
            later.internal.starts_with(&earlier.internal) && later.external.starts_with(&earlier.external)
        });
        if let Some(earlier) = shadowed_by {
            tracing::warn!(
                mapping = index,
                shadowed_by = earlier,
                internal = %later.internal,
                external = %later.external,
                "Mapping can never match"
            );
        }
    }
}
