//! Inbound path resolution.
//!
//! # Responsibilities
//! - Parse the referer of the embedding page
//! - Normalize its path through the alias table
//! - Map the external prefix to an internal one and append the sub-path
//!
//! # Design Decisions
//! - Absent or unparsable referers are a pass-through, not an error
//! - The sub-path comes from the first non-empty query value, else "/"
//! - The sub-path is appended verbatim, no separator is inserted

use crate::mapping::{AliasTable, MappingTable};
use crate::resolve::context::IframeContext;
use crate::resolve::referer::Referer;

/// A successful inbound resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Path to dispatch to inside the application.
    pub internal_path: String,
    /// Whether the referer path matched through the alias table.
    pub aliased: bool,
    /// Referer and aliased path, for outbound use.
    pub context: IframeContext,
}

/// What happened to a referer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundOutcome {
    NoReferer,
    InvalidReferer,
    NoMatch,
    Resolved(Resolution),
}

impl InboundOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            InboundOutcome::NoReferer => "no_referer",
            InboundOutcome::InvalidReferer => "invalid_referer",
            InboundOutcome::NoMatch => "no_match",
            InboundOutcome::Resolved(r) if r.aliased => "aliased",
            InboundOutcome::Resolved(_) => "rewritten",
        }
    }

    pub fn into_resolution(self) -> Option<Resolution> {
        match self {
            InboundOutcome::Resolved(resolution) => Some(resolution),
            _ => None,
        }
    }
}

/// Maps referer URLs to internal request paths.
#[derive(Debug, Clone)]
pub struct InboundResolver {
    mappings: MappingTable,
    aliases: AliasTable,
    query_id: String,
}

impl InboundResolver {
    pub fn new(mappings: MappingTable, aliases: AliasTable, query_id: impl Into<String>) -> Self {
        Self {
            mappings,
            aliases,
            query_id: query_id.into(),
        }
    }

    pub fn resolve(&self, referer: Option<&str>) -> InboundOutcome {
        let Some(raw) = referer else {
            return InboundOutcome::NoReferer;
        };
        let Some(referer) = Referer::parse(raw) else {
            tracing::debug!(referer = %raw, "Ignoring unparsable referer");
            return InboundOutcome::InvalidReferer;
        };

        let normalized = self.aliases.normalize(referer.path());

        let Some(mapping) = self.mappings.match_external(&normalized.path) else {
            tracing::debug!(referer_path = %normalized.path, "No mapping for referer path");
            return InboundOutcome::NoMatch;
        };

        let mut internal_path = mapping.internal().to_string();
        match referer.query_value(&self.query_id) {
            Some(sub_path) => internal_path.push_str(&sub_path),
            None => internal_path.push('/'),
        }

        tracing::debug!(
            referer = %referer,
            referer_path = %normalized.path,
            aliased = normalized.aliased,
            internal_path = %internal_path,
            "Resolved referer"
        );

        InboundOutcome::Resolved(Resolution {
            internal_path,
            aliased: normalized.aliased,
            context: IframeContext::new(referer).with_aliased_path(normalized.path),
        })
    }

    pub fn query_id(&self) -> &str {
        &self.query_id
    }
}
