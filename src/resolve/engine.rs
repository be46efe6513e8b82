//! The `Iframed` facade: both directions behind one shared value.

use crate::config::IframedConfig;
use crate::mapping::{AliasTable, MappingTable, RewriteTable};
use crate::observability::metrics;
use crate::resolve::context::IframeContext;
use crate::resolve::inbound::{InboundOutcome, InboundResolver, Resolution};
use crate::resolve::outbound::{OutboundOutcome, OutboundRewriter};
use crate::reverse::{Reverse, ReverseError};

/// Inbound resolver and outbound rewriter compiled from one configuration.
///
/// Immutable after construction; share it as `Arc<Iframed>`.
#[derive(Debug, Clone)]
pub struct Iframed {
    inbound: InboundResolver,
    outbound: OutboundRewriter,
    dispatch_aliased: bool,
    metrics_enabled: bool,
}

impl Iframed {
    pub fn new(inbound: InboundResolver, outbound: OutboundRewriter) -> Self {
        Self {
            inbound,
            outbound,
            dispatch_aliased: true,
            metrics_enabled: false,
        }
    }

    /// Compile the lookup tables from a validated configuration.
    pub fn from_config(config: &IframedConfig) -> Self {
        let mappings = MappingTable::from_config(&config.mappings);
        let aliases = AliasTable::new(config.aliases.clone());
        let rewrites = RewriteTable::new(config.rewrites.clone());

        let inbound = InboundResolver::new(mappings.clone(), aliases, config.query_id.clone());
        let outbound = OutboundRewriter::new(mappings, rewrites, config.query_id.clone())
            .with_default_base(config.default_base.clone())
            .with_script_prefix(config.script_prefix.clone());

        if config.observability.metrics_enabled {
            metrics::describe_metrics();
        }

        Self {
            inbound,
            outbound,
            dispatch_aliased: config.dispatch_aliased,
            metrics_enabled: config.observability.metrics_enabled,
        }
    }

    /// Resolve a raw `Referer` value to the internal path to dispatch to.
    /// `None` means leave the request alone.
    pub fn resolve_inbound(&self, referer: Option<&str>) -> Option<Resolution> {
        self.inbound_outcome(referer).into_resolution()
    }

    /// Same as [`resolve_inbound`](Self::resolve_inbound) but keeps the reason
    /// for a pass-through.
    pub fn inbound_outcome(&self, referer: Option<&str>) -> InboundOutcome {
        let outcome = self.inbound.resolve(referer);
        if self.metrics_enabled {
            metrics::record_inbound(outcome.label());
        }
        outcome
    }

    /// Rewrite a framework-generated URL for the embedding page.
    pub fn rewrite_outbound(
        &self,
        absolute_url: &str,
        context: Option<&IframeContext>,
        use_default_base: bool,
    ) -> String {
        self.outbound_outcome(absolute_url, context, use_default_base)
            .into_url(absolute_url)
    }

    pub fn outbound_outcome(
        &self,
        absolute_url: &str,
        context: Option<&IframeContext>,
        use_default_base: bool,
    ) -> OutboundOutcome {
        let outcome = self.outbound.rewrite(absolute_url, context, use_default_base);
        if self.metrics_enabled {
            metrics::record_outbound(outcome.label());
        }
        outcome
    }

    /// Reverse lookup through the host framework, then outbound rewriting.
    pub fn reverse<R: Reverse + ?Sized>(
        &self,
        routes: &R,
        name: &str,
        args: &[&str],
        context: Option<&IframeContext>,
        use_default_base: bool,
    ) -> Result<String, ReverseError> {
        let absolute_url = routes.reverse(name, args)?;
        Ok(self.rewrite_outbound(&absolute_url, context, use_default_base))
    }

    pub fn dispatch_aliased(&self) -> bool {
        self.dispatch_aliased
    }

    pub fn with_dispatch_aliased(mut self, dispatch_aliased: bool) -> Self {
        self.dispatch_aliased = dispatch_aliased;
        self
    }
}
