//! HTTP integration.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → layer.rs (IframedLayer: referer → rewritten path + IframeContext)
//!     → host Router (routes on the rewritten path)
//!     → handler: extract.rs (Iframe extractor) → Iframed::reverse / rewrite_outbound
//! ```

pub mod extract;
pub mod layer;

pub use extract::Iframe;
pub use layer::{apply, IframedLayer, IframedService};
