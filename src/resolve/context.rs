//! Per-request iframe context.

use crate::resolve::referer::Referer;

/// What the inbound resolver learned about a request's embedding page.
///
/// Attached to the request by the layer and consumed when generating
/// outbound URLs for the same request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IframeContext {
    referer: Referer,
    aliased_path: Option<String>,
}

impl IframeContext {
    pub fn new(referer: Referer) -> Self {
        Self {
            referer,
            aliased_path: None,
        }
    }

    pub fn with_aliased_path(mut self, path: impl Into<String>) -> Self {
        self.aliased_path = Some(path.into());
        self
    }

    pub fn referer(&self) -> &Referer {
        &self.referer
    }

    pub fn aliased_path(&self) -> Option<&str> {
        self.aliased_path.as_deref()
    }

    /// Path outbound URLs are built on: the aliased path, else the referer's own.
    pub fn base_path(&self) -> &str {
        self.aliased_path().unwrap_or_else(|| self.referer.path())
    }
}
