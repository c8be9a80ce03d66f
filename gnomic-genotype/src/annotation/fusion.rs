use super::Annotation;
use gnomic_core::{GnomicError, GnomicResult};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered chain of two or more annotations, e.g. `geneA:geneB`.
///
/// Nested fusions are spliced into the outer one on construction, so a
/// fusion never directly contains another fusion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fusion {
    annotations: Vec<Annotation>,
}

impl Fusion {
    pub fn new(annotations: Vec<Annotation>) -> GnomicResult<Self> {
        let annotations = flatten(annotations);
        if annotations.len() < 2 {
            return Err(GnomicError::InvalidAnnotation(format!(
                "a fusion needs at least two members, got {}",
                annotations.len()
            )));
        }
        Ok(Self { annotations })
    }

    /// Build the smallest annotation for a run of members: nothing, the lone
    /// member, or a fusion.
    pub fn fuse(annotations: Vec<Annotation>) -> Option<Annotation> {
        let mut annotations = flatten(annotations);
        match annotations.len() {
            0 => None,
            1 => annotations.pop(),
            _ => Some(Annotation::Fusion(Self { annotations })),
        }
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

    /// Position of `other` in this fusion. A fusion argument is located as a
    /// contiguous run and the index of its first member is returned.
    pub fn index_of(&self, other: &Annotation) -> Option<usize> {
        match other {
            Annotation::Fusion(run) => self
                .annotations
                .windows(run.len())
                .position(|window| window == run.members()),
            _ => self.annotations.iter().position(|member| member == other),
        }
    }

    pub fn contains(&self, other: &Annotation) -> bool {
        self.index_of(other).is_some()
    }

    /// Same length, and each query member matches the member at the same position.
    pub fn matches(&self, other: &Fusion, match_variants: bool) -> bool {
        self.len() == other.len()
            && self
                .annotations
                .iter()
                .zip(&other.annotations)
                .all(|(query, candidate)| query.match_with(candidate, match_variants))
    }
}

/// First position at or after `from` where every element of `pattern` matches
/// the member at the same offset.
pub(crate) fn find_matching_run(
    members: &[Annotation],
    pattern: &[Annotation],
    from: usize,
) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > members.len() {
        return None;
    }
    members
        .windows(pattern.len())
        .enumerate()
        .skip(from)
        .find(|(_, window)| pattern.iter().zip(window.iter()).all(|(p, m)| p.matches(m)))
        .map(|(i, _)| i)
}

fn flatten(annotations: Vec<Annotation>) -> Vec<Annotation> {
    annotations
        .into_iter()
        .flat_map(|annotation| match annotation {
            Annotation::Fusion(inner) => inner.annotations,
            other => vec![other],
        })
        .collect()
}

impl fmt::Display for Fusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.annotations.iter().join(":"))
    }
}
