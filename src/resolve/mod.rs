//! Path resolution in both directions.
//!
//! # Data Flow
//! ```text
//! Inbound (per request):
//!     Referer header
//!     → referer.rs (parse scheme, netloc, path, query)
//!     → inbound.rs (alias, match external prefix, append sub-path)
//!     → Resolution { internal_path, IframeContext }
//!
//! Outbound (per generated URL):
//!     framework URL (+ IframeContext of the current request)
//!     → outbound.rs (strip script prefix, override, match internal prefix)
//!     → URL on the embedding page, or the framework URL unchanged
//! ```
//!
//! # Design Decisions
//! - No match is never an error; both directions fall back to the input
//! - engine.rs ties both directions to one configuration

pub mod context;
pub mod engine;
pub mod inbound;
pub mod outbound;
pub mod referer;

pub use context::IframeContext;
pub use engine::Iframed;
pub use inbound::{InboundOutcome, InboundResolver, Resolution};
pub use outbound::{OutboundOutcome, OutboundRewriter};
pub use referer::Referer;
