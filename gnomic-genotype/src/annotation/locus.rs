use super::Annotation;
use gnomic_core::{GnomicError, GnomicResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An annotation qualified by the locus it sits at, e.g. `geneA@siteX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtLocus {
    pub annotation: Box<Annotation>,
    pub locus: Box<Annotation>,
}

impl AtLocus {
    pub fn new(annotation: Annotation, locus: Annotation) -> GnomicResult<Self> {
        if let Annotation::AtLocus(inner) = &annotation {
            return Err(GnomicError::InvalidAnnotation(format!(
                "{} is already qualified by a locus",
                inner
            )));
        }
        Ok(Self {
            annotation: Box::new(annotation),
            locus: Box::new(locus),
        })
    }

    /// `X@X` says nothing more than `X`.
    pub fn is_self_locus(&self) -> bool {
        self.annotation == self.locus
    }

    /// Whether `other` anchors at the same locus: either another annotation at
    /// this locus, or the locus annotation itself.
    pub fn shares_locus(&self, other: &Annotation) -> bool {
        match other {
            Annotation::AtLocus(at) => at.locus == self.locus,
            other => *other == *self.locus,
        }
    }

    pub fn matches(&self, other: &AtLocus, match_variants: bool) -> bool {
        self.locus == other.locus && self.annotation.match_with(&other.annotation, match_variants)
    }
}

impl fmt::Display for AtLocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.annotation, self.locus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Feature;

    fn f(name: &str) -> Annotation {
        Feature::new(name).into()
    }

    #[test]
    fn test_double_locus_rejected() {
        let at = AtLocus::new(f("a"), f("l")).unwrap();
        assert!(matches!(
            AtLocus::new(at.into(), f("m")),
            Err(GnomicError::InvalidAnnotation(_))
        ));
    }

    #[test]
    fn test_shares_locus() {
        let at = AtLocus::new(f("a"), f("l")).unwrap();
        assert!(at.shares_locus(&f("l")));
        assert!(at.shares_locus(&AtLocus::new(f("b"), f("l")).unwrap().into()));
        assert!(!at.shares_locus(&AtLocus::new(f("a"), f("m")).unwrap().into()));
        assert!(!at.shares_locus(&f("a")));
    }

    #[test]
    fn test_matches_requires_equal_locus() {
        let query = AtLocus::new(f("a"), f("l")).unwrap();
        let mutant = AtLocus::new(Feature::new("a").with_variant(["x"]).into(), f("l")).unwrap();
        assert!(query.matches(&mutant, true));
        assert!(!query.matches(&AtLocus::new(f("a"), f("m")).unwrap(), true));
    }

    #[test]
    fn test_self_locus_and_display() {
        assert!(AtLocus::new(f("a"), f("a")).unwrap().is_self_locus());
        assert_eq!(AtLocus::new(f("a"), f("l")).unwrap().to_string(), "a@l");
    }
}
