//! Seamless iframe embedding for web applications.
//!
//! An application embedded in an iframe is served at its own paths, while the
//! parent page lives at a different one and tells the iframe which sub-page to
//! show through a query parameter (`?id=/sub/page`). iframed maps between the
//! two so the application behaves as if it were served at the parent page's
//! path:
//!
//! - inbound, the `Referer` of each request is resolved to the internal path
//!   to dispatch to ([`http::IframedLayer`]);
//! - outbound, URLs the application generates are rewritten to point back at
//!   the parent page ([`Iframed::reverse`], [`Iframed::rewrite_outbound`]).

// Core
pub mod config;
pub mod mapping;
pub mod resolve;
pub mod reverse;

// Integration
pub mod http;
pub mod observability;

pub use config::IframedConfig;
pub use http::{Iframe, IframedLayer};
pub use resolve::{IframeContext, Iframed};
pub use reverse::{NamedRoutes, Reverse, ReverseError};
