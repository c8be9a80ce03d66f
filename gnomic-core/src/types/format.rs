//! Output formats for rendering genotypes

use crate::error::GnomicError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for a reconciled genotype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Canonical, re-parseable gnomic notation
    #[default]
    Gnomic,
    /// Human-readable text with Δ and arrows
    Text,
    /// HTML markup
    Html,
    /// JSON rendering of the change list
    Json,
}

impl OutputFormat {
    /// Check if format is machine-readable
    pub fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Gnomic | Self::Json)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gnomic => "gnomic",
            Self::Text => "text",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = GnomicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gnomic" | "string" => Ok(Self::Gnomic),
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(GnomicError::Configuration(format!(
                "Unknown output format: {}",
                s
            ))),
        }
    }
}
