use super::Annotation;
use gnomic_core::{GnomicError, GnomicResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named extrachromosomal element carrying its own annotations, e.g. `(pA geneA)`.
///
/// Identity is the name alone: `(pA)` and `(pA geneA)` compare equal. Use
/// [`Plasmid::eq_with_contents`] when the payload matters too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plasmid {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    annotations: Vec<Annotation>,
}

impl Plasmid {
    pub fn new(name: impl Into<String>, annotations: Vec<Annotation>) -> GnomicResult<Self> {
        let name = name.into();
        if let Some(nested) = annotations.iter().find_map(|a| match a {
            Annotation::Plasmid(p) => Some(p),
            _ => None,
        }) {
            return Err(GnomicError::InvalidAnnotation(format!(
                "plasmid {} cannot carry plasmid {}",
                name, nested.name
            )));
        }
        Ok(Self { name, annotations })
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    pub fn members(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn contains(&self, other: &Annotation) -> bool {
        self.annotations.contains(other)
    }

    pub fn matches(&self, other: &Plasmid) -> bool {
        self.name == other.name
    }

    pub fn eq_with_contents(&self, other: &Plasmid) -> bool {
        self.name == other.name && self.annotations == other.annotations
    }
}

impl PartialEq for Plasmid {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Plasmid {}

impl Hash for Plasmid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Plasmid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.name)?;
        for annotation in &self.annotations {
            write!(f, " {}", annotation)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Feature;

    #[test]
    fn test_identity_is_name() {
        let bare = Plasmid::empty("pA");
        let loaded = Plasmid::new("pA", vec![Feature::new("geneA").into()]).unwrap();

        assert_eq!(bare, loaded);
        assert!(!bare.eq_with_contents(&loaded));
        assert!(loaded.eq_with_contents(&loaded.clone()));
        assert_ne!(bare, Plasmid::empty("pB"));
    }

    #[test]
    fn test_plasmid_inside_plasmid_rejected() {
        let inner = Plasmid::empty("pB");
        let result = Plasmid::new("pA", vec![inner.into()]);
        assert!(matches!(result, Err(GnomicError::InvalidAnnotation(_))));
    }

    #[test]
    fn test_display() {
        let plasmid = Plasmid::new(
            "pA",
            vec![Feature::new("geneA").into(), Feature::new("geneB").into()],
        )
        .unwrap();
        assert_eq!(plasmid.to_string(), "(pA geneA geneB)");
        assert_eq!(Plasmid::empty("pB").to_string(), "(pB)");
    }
}
