//! Reverse URL lookup.
//!
//! The host framework owns its routes; iframed only needs to turn a route
//! name and arguments into the application's absolute URL, then rewrite it.
//! [`Reverse`] is that seam. [`NamedRoutes`] is a small registry for apps that
//! have no reverse lookup of their own.

pub mod named;

use thiserror::Error;

pub use named::NamedRoutes;

/// Error returned when a reverse lookup fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReverseError {
    #[error("no route named '{name}'")]
    NoMatch { name: String },
    #[error("route '{name}' takes {expected} argument(s), got {got}")]
    ArgumentCount {
        name: String,
        expected: usize,
        got: usize,
    },
}

/// Framework reverse lookup: route name + positional args → absolute URL,
/// including the script prefix.
pub trait Reverse: Send + Sync {
    fn reverse(&self, name: &str, args: &[&str]) -> Result<String, ReverseError>;
}
