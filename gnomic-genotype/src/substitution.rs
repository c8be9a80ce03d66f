//! Local edits inside nested annotation trees.

use crate::annotation::{find_matching_run, Annotation, CompositeAnnotation, Fusion};
use tracing::trace;

/// Replace (or remove, when `replacement` is `None`) every part of `tree`
/// that `target` matches. Returns `None` when nothing of the tree is left.
///
/// Groups collapse as members disappear: a fusion reduced to one member
/// becomes that member, and a plasmid integrates into a plain composite.
/// Locus-qualified trees are returned unchanged.
pub fn substitute(
    tree: &Annotation,
    target: &Annotation,
    replacement: Option<&Annotation>,
) -> Option<Annotation> {
    trace!(tree = %tree, target = %target, "substituting");
    match tree {
        Annotation::Feature(_) => {
            if target.matches(tree) {
                replacement.cloned()
            } else {
                Some(tree.clone())
            }
        }
        Annotation::Composite(composite) => {
            if target.matches(tree) {
                return replacement.cloned();
            }
            substitute_members(composite.members(), target, replacement)
        }
        Annotation::Plasmid(plasmid) => {
            if target.matches(tree) {
                return replacement.cloned();
            }
            substitute_members(plasmid.members(), target, replacement)
        }
        Annotation::Fusion(fusion) => substitute_in_fusion(fusion, target, replacement),
        Annotation::AtLocus(_) => Some(tree.clone()),
    }
}

fn substitute_members(
    members: &[Annotation],
    target: &Annotation,
    replacement: Option<&Annotation>,
) -> Option<Annotation> {
    let mut survivors: Vec<Annotation> = Vec::with_capacity(members.len());
    for member in members {
        if let Some(updated) = substitute(member, target, replacement) {
            if !survivors.contains(&updated) {
                survivors.push(updated);
            }
        }
    }
    if survivors.is_empty() {
        None
    } else {
        Some(CompositeAnnotation::new(survivors).into())
    }
}

fn substitute_in_fusion(
    fusion: &Fusion,
    target: &Annotation,
    replacement: Option<&Annotation>,
) -> Option<Annotation> {
    // Only grouped members are edited in place; plain members are handled by
    // the run search below so a replacement never leaks into the wrong segment.
    let mut members: Vec<Annotation> = fusion
        .members()
        .iter()
        .filter_map(|member| match member {
            Annotation::Composite(_) => substitute(member, target, replacement),
            other => Some(other.clone()),
        })
        .collect();

    let pattern = match target {
        Annotation::Fusion(run) => run.members(),
        other => std::slice::from_ref(other),
    };
    let insertion: Vec<Annotation> = match replacement {
        Some(Annotation::Fusion(run)) => run.members().to_vec(),
        Some(other) => vec![other.clone()],
        None => Vec::new(),
    };

    let mut from = 0;
    while let Some(start) = find_matching_run(&members, pattern, from) {
        members.splice(start..start + pattern.len(), insertion.iter().cloned());
        from = start + insertion.len();
    }

    Fusion::fuse(members)
}
