//! Genotype model and reconciliation
//!
//! This crate holds the annotation model (features, fusions, composite
//! groups, plasmids and locus-qualified annotations), the [`Change`] edit
//! type, recursive substitution inside annotation trees, and the
//! [`Worklist`] that folds a stream of changes into the smallest set of
//! edits with the same net effect. [`Genotype`] chains worklists so a
//! strain can be described relative to its parent.

pub mod annotation;
pub mod change;
pub mod genotype;
pub mod substitution;
pub mod worklist;

pub use annotation::{Annotation, AtLocus, CompositeAnnotation, Feature, Fusion, Plasmid};
pub use change::Change;
pub use genotype::Genotype;
pub use substitution::substitute;
pub use worklist::Worklist;
