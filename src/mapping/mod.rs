//! Lookup tables compiled from configuration.
//!
//! # Data Flow
//! ```text
//! IframedConfig
//!     → table.rs   (ordered internal/external prefix pairs)
//!     → alias.rs   (external path → canonical external path)
//!     → rewrite.rs (internal path → literal outbound URL)
//!     → frozen inside Iframed, shared via Arc
//! ```
//!
//! # Design Decisions
//! - Tables are built once and never mutated
//! - Prefix matching only, first match wins in either direction
//! - Alias and rewrite lookups are exact string matches

pub mod alias;
pub mod rewrite;
pub mod table;

pub use alias::{AliasTable, AliasedPath};
pub use rewrite::RewriteTable;
pub use table::{Mapping, MappingTable};
