//! Outbound URL rewriting.
//!
//! # Responsibilities
//! - Strip the script prefix from framework-generated URLs
//! - Apply literal overrides from the rewrite table
//! - Re-root URLs under a mapped internal prefix onto the embedding page
//!
//! # Design Decisions
//! - Unmapped URLs fall back to the framework's URL unchanged
//! - The default base wins over the request's referer when requested
//! - The remainder is emitted verbatim as the query value

use crate::mapping::{MappingTable, RewriteTable};
use crate::resolve::context::IframeContext;

/// How an outbound URL was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundOutcome {
    Override(String),
    DefaultBase(String),
    Referer(String),
    Fallback,
}

impl OutboundOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            OutboundOutcome::Override(_) => "override",
            OutboundOutcome::DefaultBase(_) => "default_base",
            OutboundOutcome::Referer(_) => "referer",
            OutboundOutcome::Fallback => "fallback",
        }
    }

    /// The rewritten URL, or `absolute_url` on fallback.
    pub fn into_url(self, absolute_url: &str) -> String {
        match self {
            OutboundOutcome::Override(url)
            | OutboundOutcome::DefaultBase(url)
            | OutboundOutcome::Referer(url) => url,
            OutboundOutcome::Fallback => absolute_url.to_string(),
        }
    }
}

/// Maps framework URLs to URLs on the embedding page.
#[derive(Debug, Clone)]
pub struct OutboundRewriter {
    mappings: MappingTable,
    rewrites: RewriteTable,
    query_id: String,
    default_base: Option<String>,
    script_prefix: String,
}

impl OutboundRewriter {
    pub fn new(mappings: MappingTable, rewrites: RewriteTable, query_id: impl Into<String>) -> Self {
        Self {
            mappings,
            rewrites,
            query_id: query_id.into(),
            default_base: None,
            script_prefix: "/".to_string(),
        }
    }

    pub fn with_default_base(mut self, base: Option<String>) -> Self {
        self.default_base = base;
        self
    }

    pub fn with_script_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.script_prefix = prefix.into();
        self
    }

    pub fn rewrite(
        &self,
        absolute_url: &str,
        context: Option<&IframeContext>,
        use_default_base: bool,
    ) -> OutboundOutcome {
        let url = self.strip_script_prefix(absolute_url);

        if let Some(literal) = self.rewrites.get(url) {
            return OutboundOutcome::Override(literal.to_string());
        }

        let Some(mapping) = self.mappings.match_internal(url) else {
            return OutboundOutcome::Fallback;
        };
        let remainder = &url[mapping.internal().len()..];

        if use_default_base {
            if let Some(base) = &self.default_base {
                return OutboundOutcome::DefaultBase(format!(
                    "{}{}?{}={}",
                    base,
                    mapping.external(),
                    self.query_id,
                    remainder
                ));
            }
        }

        match context {
            Some(context) => {
                let referer = context.referer();
                OutboundOutcome::Referer(format!(
                    "{}://{}{}?{}={}",
                    referer.scheme(),
                    referer.netloc(),
                    context.base_path(),
                    self.query_id,
                    remainder
                ))
            }
            None => {
                tracing::debug!(url = %absolute_url, "No referer to rebuild URL on");
                OutboundOutcome::Fallback
            }
        }
    }

    /// Drop the script prefix but keep its leading '/'. URLs outside the
    /// prefix are returned as-is.
    fn strip_script_prefix<'a>(&self, absolute_url: &'a str) -> &'a str {
        let prefix = self.script_prefix.trim_end_matches('/');
        absolute_url
            .strip_prefix(prefix)
            .filter(|rest| rest.starts_with('/'))
            .unwrap_or(absolute_url)
    }
}
