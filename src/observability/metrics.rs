//! Rewrite counters.
//!
//! # Metrics
//! - `iframed_inbound_total` (counter): referer resolutions by outcome
//!   (`rewritten`, `aliased`, `no_referer`, `invalid_referer`, `no_match`)
//! - `iframed_outbound_total` (counter): URL rewrites by outcome
//!   (`override`, `default_base`, `referer`, `fallback`)
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the host installs the exporter
//! - Without an installed recorder every call is a no-op

use metrics::{counter, describe_counter};

pub const INBOUND_TOTAL: &str = "iframed_inbound_total";
pub const OUTBOUND_TOTAL: &str = "iframed_outbound_total";

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    describe_counter!(INBOUND_TOTAL, "Referer resolutions by outcome");
    describe_counter!(OUTBOUND_TOTAL, "Outbound URL rewrites by outcome");
}

pub fn record_inbound(outcome: &'static str) {
    counter!(INBOUND_TOTAL, "outcome" => outcome).increment(1);
}

pub fn record_outbound(outcome: &'static str) {
    counter!(OUTBOUND_TOTAL, "outcome" => outcome).increment(1);
}
