//! Test utilities for the Gnomic workspace
//!
//! Shared fixtures, assertions and scratch environments for the integration
//! tests of every crate in the workspace.

pub mod assertions;
pub mod environment;
pub mod fixtures;

pub use assertions::{assert_changes, assert_feature_names, assert_notation};
pub use environment::TestEnvironment;
pub use fixtures::{at, composite, f, fusion, plasmid, typed, variant};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (call once per test module)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
