//! A single edit: insert, delete or replace an annotation.

use crate::annotation::{Annotation, AtLocus};
use gnomic_core::{GnomicError, GnomicResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Change {
    pub(crate) target: Option<Annotation>,
    pub(crate) replacement: Option<Annotation>,
    /// The site legitimately holds several occurrences; multi-matches are not ambiguous.
    #[serde(default)]
    pub(crate) multiple: bool,
}

impl Change {
    /// General constructor. Rejects empty changes and locus-qualified replacements.
    pub fn new(
        target: Option<Annotation>,
        replacement: Option<Annotation>,
        multiple: bool,
    ) -> GnomicResult<Self> {
        let change = Self {
            target,
            replacement,
            multiple,
        };
        change.validate()?;
        Ok(change)
    }

    pub fn insert(annotation: impl Into<Annotation>) -> Self {
        Self {
            target: None,
            replacement: Some(annotation.into()),
            multiple: false,
        }
    }

    pub fn delete(annotation: impl Into<Annotation>) -> Self {
        Self {
            target: Some(annotation.into()),
            replacement: None,
            multiple: false,
        }
    }

    pub fn replace(target: impl Into<Annotation>, replacement: impl Into<Annotation>) -> Self {
        Self {
            target: Some(target.into()),
            replacement: Some(replacement.into()),
            multiple: false,
        }
    }

    pub fn replace_multiple(
        target: impl Into<Annotation>,
        replacement: impl Into<Annotation>,
    ) -> Self {
        Self {
            multiple: true,
            ..Self::replace(target, replacement)
        }
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Qualify the target with `locus`. Fails without a target or when the
    /// target already has a locus.
    pub fn at_locus(self, locus: impl Into<Annotation>) -> GnomicResult<Self> {
        let Some(target) = self.target else {
            return Err(GnomicError::InvalidChange(
                "only a change with a target can be placed at a locus".to_string(),
            ));
        };
        if matches!(target, Annotation::AtLocus(_)) {
            return Err(GnomicError::InvalidChange(format!(
                "target {} is already qualified by a locus",
                target
            )));
        }
        Ok(Self {
            target: Some(AtLocus::new(target, locus.into())?.into()),
            ..self
        })
    }

    pub fn validate(&self) -> GnomicResult<()> {
        if self.target.is_none() && self.replacement.is_none() {
            return Err(GnomicError::InvalidChange(
                "a change needs a target or a replacement".to_string(),
            ));
        }
        if let Some(Annotation::AtLocus(at)) = &self.replacement {
            return Err(GnomicError::InvalidChange(format!(
                "replacement {} cannot be qualified by a locus",
                at
            )));
        }
        if let Some(Annotation::AtLocus(at)) = &self.target {
            if matches!(*at.annotation, Annotation::AtLocus(_)) {
                return Err(GnomicError::InvalidChange(format!(
                    "target {} is qualified by more than one locus",
                    at
                )));
            }
        }
        Ok(())
    }

    pub fn target(&self) -> Option<&Annotation> {
        self.target.as_ref()
    }

    pub fn replacement(&self) -> Option<&Annotation> {
        self.replacement.as_ref()
    }

    pub fn multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_insertion(&self) -> bool {
        self.target.is_none() && self.replacement.is_some()
    }

    pub fn is_deletion(&self) -> bool {
        self.target.is_some() && self.replacement.is_none()
    }

    pub fn is_replacement(&self) -> bool {
        self.target.is_some() && self.replacement.is_some()
    }

    /// Records presence rather than a modification: a plasmid being present,
    /// or a site replaced by something it matches.
    pub fn is_presence(&self) -> bool {
        match (&self.target, &self.replacement) {
            (None, Some(Annotation::Plasmid(_))) => true,
            (Some(target), Some(replacement)) => target.matches(replacement),
            _ => false,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.target, &self.replacement) {
            (None, Some(replacement)) => write!(f, "+{}", replacement),
            (Some(target), None) => write!(f, "-{}", target),
            (Some(target), Some(replacement)) => {
                let op = if self.multiple { ">>" } else { ">" };
                write!(f, "{}{}{}", target, op, replacement)
            }
            (None, None) => write!(f, "<empty>"),
        }
    }
}
