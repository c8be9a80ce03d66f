//! Core utilities and types shared across all Gnomic crates

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{default_config, load_config, save_config, Config, NotationConfig, OutputConfig};
pub use error::{GnomicError, GnomicResult};

// Re-export core types
pub use types::{alias_table, Accession, Aliased, FeatureType, Organism, OutputFormat};

/// Version information for the Gnomic project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
