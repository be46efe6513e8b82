//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → IframedConfig (validated, immutable)
//!     → compiled into lookup tables by mapping/
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at startup and never changes
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{IframedConfig, LogFormat, MappingConfig, ObservabilityConfig};
pub use validation::ValidationError;
