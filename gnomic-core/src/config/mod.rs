//! Configuration types for Gnomic

use crate::types::{alias_table, FeatureType, Organism, OutputFormat};
use crate::GnomicError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub notation: NotationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lookup tables used when turning notation into features
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotationConfig {
    /// Type given to bare phenes (`pheneA+`) and to markers without an explicit type
    #[serde(default = "default_phene_type")]
    pub phene_type: String,
    #[serde(default = "default_organisms")]
    pub organisms: Vec<Organism>,
    #[serde(default = "default_types")]
    pub types: Vec<FeatureType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Keep fusions whole in flattened change views
    #[serde(default = "default_fusions")]
    pub fusions: bool,
}

// Default value functions
fn default_phene_type() -> String { FeatureType::PHENE.to_string() }
fn default_fusions() -> bool { true }

fn default_organisms() -> Vec<Organism> {
    vec![
        Organism::with_aliases("Escherichia coli", ["Ec", "E.coli"]),
        Organism::with_aliases("Saccharomyces cerevisiae", ["Sc", "S.cerevisiae"]),
    ]
}

fn default_types() -> Vec<FeatureType> {
    vec![
        FeatureType::new("gene"),
        FeatureType::with_aliases("promoter", ["P"]),
        FeatureType::with_aliases("terminator", ["T"]),
        FeatureType::new(FeatureType::PHENE),
        FeatureType::new("reaction"),
        FeatureType::new("site"),
    ]
}

impl Default for NotationConfig {
    fn default() -> Self {
        Self {
            phene_type: default_phene_type(),
            organisms: default_organisms(),
            types: default_types(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            fusions: default_fusions(),
        }
    }
}

impl NotationConfig {
    /// Notation without any known organisms or types; every identifier is taken literally.
    pub fn empty() -> Self {
        Self {
            phene_type: default_phene_type(),
            organisms: Vec::new(),
            types: Vec::new(),
        }
    }

    pub fn organism_table(&self) -> IndexMap<String, Organism> {
        alias_table(&self.organisms)
    }

    pub fn type_table(&self) -> IndexMap<String, FeatureType> {
        alias_table(&self.types)
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, GnomicError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| GnomicError::Configuration(format!("Failed to parse config: {}", e)))?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), GnomicError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| GnomicError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
