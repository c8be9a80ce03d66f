use super::Annotation;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An unordered group of annotations acting together, e.g. `{geneA, geneB}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompositeAnnotation {
    annotations: Vec<Annotation>,
}

impl CompositeAnnotation {
    /// Nested composites are merged into this one.
    pub fn new(annotations: Vec<Annotation>) -> Self {
        let annotations = annotations
            .into_iter()
            .flat_map(|annotation| match annotation {
                Annotation::Composite(inner) => inner.annotations,
                other => vec![other],
            })
            .collect();
        Self { annotations }
    }

    pub fn members(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn contains(&self, other: &Annotation) -> bool {
        self.annotations.contains(other)
    }

    /// Same size, and every query member matches a distinct candidate member.
    pub fn matches(&self, other: &CompositeAnnotation, match_variants: bool) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut taken = vec![false; other.len()];
        self.annotations.iter().all(|query| {
            let found = other
                .annotations
                .iter()
                .enumerate()
                .find(|(i, candidate)| !taken[*i] && query.match_with(candidate, match_variants))
                .map(|(i, _)| i);
            match found {
                Some(i) => {
                    taken[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl fmt::Display for CompositeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.annotations.iter().join(", "))
    }
}
