use gnomic_core::{Accession, FeatureType, Organism};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named or accessioned genetic element: a gene, promoter, phene, site ...
///
/// Two features with accessions are equal when the accessions are; otherwise
/// equality is structural over all fields. Use [`Feature::matches`] for the
/// looser comparison the reconciliation engine needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<FeatureType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accession: Option<Accession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organism: Option<Organism>,
    /// Variant descriptors in order; empty means no variant was given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant: Vec<String>,
}

impl Feature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn from_accession(accession: Accession) -> Self {
        Self {
            accession: Some(accession),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, feature_type: impl Into<FeatureType>) -> Self {
        self.feature_type = Some(feature_type.into());
        self
    }

    pub fn with_organism(mut self, organism: impl Into<Organism>) -> Self {
        self.organism = Some(organism.into());
        self
    }

    pub fn with_accession(mut self, accession: Accession) -> Self {
        self.accession = Some(accession);
        self
    }

    pub fn with_variant<I, S>(mut self, variant: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variant = variant.into_iter().map(Into::into).collect();
        self
    }

    /// A feature with neither name nor accession can be written but never matched.
    pub fn has_identity(&self) -> bool {
        self.name.is_some() || self.accession.is_some()
    }

    pub fn has_variant(&self) -> bool {
        !self.variant.is_empty()
    }

    pub fn is_phene(&self) -> bool {
        self.feature_type.as_ref().is_some_and(FeatureType::is_phene)
    }

    /// Whether `self`, used as a query, identifies `other`.
    ///
    /// Accessions decide when both sides have one. Otherwise names must agree,
    /// and an organism or variant on the query must agree too. Type is never
    /// compared. With `match_variants` off, variants are ignored entirely.
    pub fn matches(&self, other: &Feature, match_variants: bool) -> bool {
        if let (Some(accession), Some(other_accession)) = (&self.accession, &other.accession) {
            return accession == other_accession;
        }

        let Some(name) = &self.name else {
            return false;
        };
        if other.name.as_ref() != Some(name) {
            return false;
        }

        if let Some(organism) = &self.organism {
            if other.organism.as_ref() != Some(organism) {
                return false;
            }
        }

        !match_variants || self.variant.is_empty() || self.variant == other.variant
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        match (&self.accession, &other.accession) {
            (Some(accession), Some(other_accession)) => accession == other_accession,
            _ => {
                self.accession == other.accession
                    && self.name == other.name
                    && self.feature_type == other.feature_type
                    && self.organism == other.organism
                    && self.variant == other.variant
            }
        }
    }
}

impl Eq for Feature {}

impl Hash for Feature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.accession {
            Some(accession) => accession.hash(state),
            None => {
                self.name.hash(state);
                self.feature_type.hash(state);
                self.organism.hash(state);
                self.variant.hash(state);
            }
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(organism) = &self.organism {
            write!(f, "{}/", organism)?;
        }
        if let Some(feature_type) = &self.feature_type {
            write!(f, "{}.", feature_type)?;
        }
        if let Some(name) = &self.name {
            write!(f, "{}", name)?;
        }
        if let Some(accession) = &self.accession {
            write!(f, "#{}", accession)?;
        }
        if !self.variant.is_empty() {
            write!(f, "({})", self.variant.join("; "))?;
        }
        Ok(())
    }
}
