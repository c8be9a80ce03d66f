//! Scratch directories for configuration tests
//!
//! Cleaned up on drop.

use anyhow::{Context, Result};
use gnomic_core::{save_config, Config};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("gnomic-test")
            .context("Failed to create temporary directory")?;
        Ok(Self { temp_dir })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `config` as TOML and return its path
    pub fn write_config(&self, name: &str, config: &Config) -> Result<PathBuf> {
        let path = self.root().join(name);
        save_config(&path, config).context("Failed to write test config")?;
        Ok(path)
    }

    /// Write raw text to a file in the environment
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
