//! Organisms and feature types referenced from notation

use super::alias::Aliased;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An organism a feature originates from, e.g. `Ec/lacZ`.
///
/// Identity is the canonical name; aliases only affect lookup and output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organism {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// The type of a feature, e.g. `gene` in `gene.lacZ`.
///
/// Identity is the canonical name; aliases only affect lookup and output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureType {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Organism {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }
}

impl FeatureType {
    pub const PHENE: &'static str = "phene";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_phene(&self) -> bool {
        self.name == Self::PHENE
    }
}

impl Aliased for Organism {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

impl Aliased for FeatureType {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

impl PartialEq for Organism {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Organism {}

impl Hash for Organism {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialEq for FeatureType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FeatureType {}

impl Hash for FeatureType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl From<&str> for Organism {
    fn from(name: &str) -> Self {
        Organism::new(name)
    }
}

impl From<&str> for FeatureType {
    fn from(name: &str) -> Self {
        FeatureType::new(name)
    }
}

impl fmt::Display for Organism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default_alias())
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default_alias())
    }
}
