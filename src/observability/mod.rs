//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! resolve/ and http/ produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (outcome counters via the metrics facade)
//!
//! Consumers:
//!     → stderr (CLI) or the host's subscriber
//!     → the host's metrics recorder, if any
//! ```

pub mod logging;
pub mod metrics;
