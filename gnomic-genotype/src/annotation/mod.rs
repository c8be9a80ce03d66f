//! The annotation model: everything that can be inserted, deleted or targeted
//! by a change.
//!
//! Matching is directional. `query.matches(candidate)` treats unset fields of
//! the query as wildcards and enforces the ones it has. Fusions must match
//! over their full length; [`Annotation::contains`] and
//! [`Annotation::occurs`] are the partial lookups used by substitution and
//! locus disambiguation.

mod composite;
mod feature;
mod fusion;
mod locus;
mod plasmid;

pub use composite::CompositeAnnotation;
pub use feature::Feature;
pub use fusion::Fusion;
pub use locus::AtLocus;
pub use plasmid::Plasmid;

pub(crate) use fusion::find_matching_run;

use crate::change::Change;
use gnomic_core::GnomicResult;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Annotation {
    Feature(Feature),
    Fusion(Fusion),
    Composite(CompositeAnnotation),
    Plasmid(Plasmid),
    AtLocus(AtLocus),
}

impl Annotation {
    pub fn matches(&self, other: &Annotation) -> bool {
        self.match_with(other, true)
    }

    pub fn matches_ignoring_variant(&self, other: &Annotation) -> bool {
        self.match_with(other, false)
    }

    /// Annotations of different kinds never match.
    pub fn match_with(&self, other: &Annotation, match_variants: bool) -> bool {
        match (self, other) {
            (Annotation::Feature(a), Annotation::Feature(b)) => a.matches(b, match_variants),
            (Annotation::Fusion(a), Annotation::Fusion(b)) => a.matches(b, match_variants),
            (Annotation::Composite(a), Annotation::Composite(b)) => a.matches(b, match_variants),
            (Annotation::Plasmid(a), Annotation::Plasmid(b)) => a.matches(b),
            (Annotation::AtLocus(a), Annotation::AtLocus(b)) => a.matches(b, match_variants),
            _ => false,
        }
    }

    /// Shallow containment: a contiguous run or member of a fusion, or a direct
    /// member of a composite or plasmid. Features contain nothing.
    pub fn contains(&self, other: &Annotation) -> bool {
        match self {
            Annotation::Fusion(fusion) => fusion.contains(other),
            Annotation::Composite(composite) => composite.contains(other),
            Annotation::Plasmid(plasmid) => plasmid.contains(other),
            Annotation::Feature(_) | Annotation::AtLocus(_) => false,
        }
    }

    /// Deep search for `target` anywhere in this tree, by matching or containment.
    pub fn occurs(&self, target: &Annotation) -> bool {
        if target.matches(self) || self.contains(target) {
            return true;
        }
        match self {
            Annotation::Feature(_) => false,
            Annotation::Fusion(fusion) => {
                let pattern = match target {
                    Annotation::Fusion(run) => run.members(),
                    other => std::slice::from_ref(other),
                };
                find_matching_run(fusion.members(), pattern, 0).is_some()
                    || fusion.members().iter().any(|m| m.occurs(target))
            }
            Annotation::Composite(composite) => composite.members().iter().any(|m| m.occurs(target)),
            Annotation::Plasmid(plasmid) => plasmid.members().iter().any(|m| m.occurs(target)),
            Annotation::AtLocus(at) => at.annotation.occurs(target),
        }
    }

    /// Fusions, composites and plasmids group other annotations.
    pub fn is_group(&self) -> bool {
        matches!(
            self,
            Annotation::Fusion(_) | Annotation::Composite(_) | Annotation::Plasmid(_)
        )
    }

    /// All features at the leaves of this tree, in order of appearance.
    pub fn features(&self) -> Vec<&Feature> {
        let mut out = Vec::new();
        self.collect_features(&mut out);
        out
    }

    fn collect_features<'a>(&'a self, out: &mut Vec<&'a Feature>) {
        match self {
            Annotation::Feature(feature) => out.push(feature),
            Annotation::Fusion(fusion) => fusion.members().iter().for_each(|m| m.collect_features(out)),
            Annotation::Composite(c) => c.members().iter().for_each(|m| m.collect_features(out)),
            Annotation::Plasmid(p) => p.members().iter().for_each(|m| m.collect_features(out)),
            Annotation::AtLocus(at) => at.annotation.collect_features(out),
        }
    }

    /// Leaf annotations for flattened views. With `keep_fusions` a fusion is a
    /// leaf in its own right.
    pub fn leaves(&self, keep_fusions: bool) -> Vec<&Annotation> {
        let mut out = Vec::new();
        self.collect_leaves(keep_fusions, &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, keep_fusions: bool, out: &mut Vec<&'a Annotation>) {
        match self {
            Annotation::Feature(_) => out.push(self),
            Annotation::Fusion(_) if keep_fusions => out.push(self),
            Annotation::Fusion(fusion) => fusion
                .members()
                .iter()
                .for_each(|m| m.collect_leaves(keep_fusions, out)),
            Annotation::Composite(c) => c
                .members()
                .iter()
                .for_each(|m| m.collect_leaves(keep_fusions, out)),
            Annotation::Plasmid(p) => p
                .members()
                .iter()
                .for_each(|m| m.collect_leaves(keep_fusions, out)),
            Annotation::AtLocus(at) => at.annotation.collect_leaves(keep_fusions, out),
        }
    }

    pub fn as_feature(&self) -> Option<&Feature> {
        match self {
            Annotation::Feature(feature) => Some(feature),
            _ => None,
        }
    }

    pub fn as_plasmid(&self) -> Option<&Plasmid> {
        match self {
            Annotation::Plasmid(plasmid) => Some(plasmid),
            _ => None,
        }
    }

    pub fn as_fusion(&self) -> Option<&Fusion> {
        match self {
            Annotation::Fusion(fusion) => Some(fusion),
            _ => None,
        }
    }

    // Notation sugar

    /// `+X`
    pub fn insert(self) -> Change {
        Change::insert(self)
    }

    /// `-X`
    pub fn delete(self) -> Change {
        Change::delete(self)
    }

    /// `X>Y`
    pub fn replace_with(self, replacement: impl Into<Annotation>) -> Change {
        Change::replace(self, replacement)
    }

    /// `X>>Y`
    pub fn replace_multiple(self, replacement: impl Into<Annotation>) -> Change {
        Change::replace_multiple(self, replacement)
    }

    /// `X@L`
    pub fn at_locus(self, locus: impl Into<Annotation>) -> GnomicResult<Annotation> {
        AtLocus::new(self, locus.into()).map(Annotation::AtLocus)
    }

    /// `X:Y`
    pub fn fuse(self, other: impl Into<Annotation>) -> GnomicResult<Annotation> {
        Fusion::new(vec![self, other.into()]).map(Annotation::Fusion)
    }
}

impl From<Feature> for Annotation {
    fn from(feature: Feature) -> Self {
        Annotation::Feature(feature)
    }
}

impl From<Fusion> for Annotation {
    fn from(fusion: Fusion) -> Self {
        Annotation::Fusion(fusion)
    }
}

impl From<CompositeAnnotation> for Annotation {
    fn from(composite: CompositeAnnotation) -> Self {
        Annotation::Composite(composite)
    }
}

impl From<Plasmid> for Annotation {
    fn from(plasmid: Plasmid) -> Self {
        Annotation::Plasmid(plasmid)
    }
}

impl From<AtLocus> for Annotation {
    fn from(at: AtLocus) -> Self {
        Annotation::AtLocus(at)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Feature(feature) => feature.fmt(f),
            Annotation::Fusion(fusion) => fusion.fmt(f),
            Annotation::Composite(composite) => composite.fmt(f),
            Annotation::Plasmid(plasmid) => plasmid.fmt(f),
            Annotation::AtLocus(at) => at.fmt(f),
        }
    }
}
