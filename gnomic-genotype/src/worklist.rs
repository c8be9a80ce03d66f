//! Reconciliation of a stream of changes into a minimal set of pending edits.
//!
//! Each change is folded into the worklist in order. Repeats are dropped,
//! inverse edits cancel, newer variants supersede older ones, and edits that
//! land inside an earlier insertion are spliced into it instead of being
//! recorded separately. An edit that could land in more than one place is an
//! error unless the change is marked `multiple`.

use crate::annotation::{Annotation, AtLocus, CompositeAnnotation};
use crate::change::Change;
use crate::substitution::substitute;
use gnomic_core::{GnomicError, GnomicResult};
use itertools::Itertools;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worklist {
    pending: Vec<Change>,
}

impl Worklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already reconciled list, e.g. a parent genotype's changes.
    pub fn from_reconciled(changes: impl IntoIterator<Item = Change>) -> Self {
        Self {
            pending: changes.into_iter().map(|c| c.with_multiple(false)).collect(),
        }
    }

    pub fn changes(&self) -> &[Change] {
        &self.pending
    }

    pub fn into_changes(self) -> Vec<Change> {
        self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn apply_all<'a>(&mut self, changes: impl IntoIterator<Item = &'a Change>) -> GnomicResult<()> {
        for change in changes {
            self.apply(change)?;
        }
        Ok(())
    }

    /// Fold one change into the worklist.
    ///
    /// On error the worklist is left as it was before the call.
    pub fn apply(&mut self, change: &Change) -> GnomicResult<()> {
        change.validate()?;
        let (target, replacement) = simplify(change);
        let multiple = change.multiple;
        debug!(change = %change, pending = self.pending.len(), "applying change");

        match (target, replacement) {
            (None, Some(annotation)) => self.insert(annotation, multiple),
            (Some(site), None) => self.remove(site, multiple),
            (Some(site), Some(replacement)) => self.replace(site, replacement, multiple),
            (None, None) => Err(GnomicError::InvalidChange(format!("{} is empty", change))),
        }
    }

    fn insert(&mut self, annotation: Annotation, multiple: bool) -> GnomicResult<()> {
        if self.any(|p| p.target.is_none() && p.replacement.as_ref() == Some(&annotation)) {
            debug!(annotation = %annotation, "insertion already pending");
            return Ok(());
        }

        let cancelled = self.positions(|p| {
            p.replacement.is_none() && p.target.as_ref().is_some_and(|t| annotation.matches(t))
        });
        if !cancelled.is_empty() {
            self.ensure_unique(&cancelled, multiple, &annotation, "pending deletions")?;
            debug!(annotation = %annotation, count = cancelled.len(), "insertion cancels deletion");
            self.take(&cancelled);
            return Ok(());
        }

        let stale = self.positions(|p| {
            p.target.is_none()
                && p.replacement
                    .as_ref()
                    .is_some_and(|r| annotation.matches_ignoring_variant(r))
        });
        if stale.len() == 1 || (multiple && !stale.is_empty()) {
            debug!(annotation = %annotation, "insertion supersedes earlier variant");
            self.take(&stale);
        }

        self.push(None, Some(annotation));
        Ok(())
    }

    fn remove(&mut self, site: Annotation, multiple: bool) -> GnomicResult<()> {
        if self.any(|p| p.replacement.is_none() && p.target.as_ref() == Some(&site)) {
            debug!(site = %site, "deletion already pending");
            return Ok(());
        }

        if let Annotation::AtLocus(at) = &site {
            let anchors = self.locus_anchors(at);
            if !anchors.is_empty() {
                self.ensure_unique(&anchors, multiple, &site, "changes at this locus")?;
                debug!(site = %site, "deleting inside change at locus");
                self.splice(&anchors, &at.annotation, None);
                return Ok(());
            }
        }

        let produced = self.positions(|p| p.replacement.as_ref() == Some(&site));
        if !produced.is_empty() {
            self.ensure_unique(&produced, multiple, &site, "changes producing it")?;
            debug!(site = %site, "deletion reverts earlier change");
            for previous in self.take(&produced) {
                if let Some(target) = previous.target {
                    self.push(Some(target), None);
                }
            }
            return Ok(());
        }

        let inserted = self.positions(|p| {
            p.target.is_none() && p.replacement.as_ref().is_some_and(|r| site.matches(r))
        });
        if !inserted.is_empty() {
            self.ensure_unique(&inserted, multiple, &site, "pending insertions")?;
            debug!(site = %site, "deletion cancels insertion");
            self.take(&inserted);
            return Ok(());
        }

        let stale = self.positions(|p| {
            p.replacement.is_none()
                && p.target.as_ref().is_some_and(|t| site.matches_ignoring_variant(t))
        });
        if stale.len() == 1 || (multiple && !stale.is_empty()) {
            debug!(site = %site, "deletion supersedes earlier variant");
            self.take(&stale);
        }

        self.push(Some(site), None);
        Ok(())
    }

    fn replace(&mut self, site: Annotation, replacement: Annotation, multiple: bool) -> GnomicResult<()> {
        if self.any(|p| p.target.as_ref() == Some(&site) && p.replacement.as_ref() == Some(&replacement)) {
            debug!(site = %site, "replacement already pending");
            return Ok(());
        }
        let unqualified = match &site {
            Annotation::AtLocus(at) => &*at.annotation,
            other => other,
        };
        if *unqualified == replacement {
            debug!(site = %site, "replacement changes nothing");
            return Ok(());
        }

        let same_site = self.positions(|p| p.target.as_ref() == Some(&site));
        if !same_site.is_empty() {
            self.ensure_unique(&same_site, multiple, &site, "changes at the same site")?;
            debug!(site = %site, "replacement supersedes change at the same site");
            self.take(&same_site);
            self.push(Some(site), Some(replacement));
            return Ok(());
        }

        let anchors = match &site {
            Annotation::AtLocus(at) => self.locus_anchors(at),
            _ => self.positions(|p| {
                p.replacement
                    .as_ref()
                    .is_some_and(|r| (r.is_group() && r.contains(&site)) || site.matches(r))
            }),
        };
        if anchors.is_empty() {
            self.push(Some(site), Some(replacement));
            return Ok(());
        }

        self.ensure_unique(&anchors, multiple, &site, "pending changes containing it")?;
        debug!(site = %site, replacement = %replacement, count = anchors.len(), "replacing inside pending change");
        self.splice(&anchors, unqualified, Some(&replacement));
        Ok(())
    }

    /// Pending edits at the same locus whose outcome holds `at.annotation`.
    fn locus_anchors(&self, at: &AtLocus) -> Vec<usize> {
        self.positions(|p| {
            p.target.as_ref().is_some_and(|t| at.shares_locus(t))
                && p.replacement.as_ref().is_some_and(|r| r.occurs(&at.annotation))
        })
    }

    /// Substitute inside the replacement side of each anchor and re-emit it.
    fn splice(&mut self, anchors: &[usize], target: &Annotation, replacement: Option<&Annotation>) {
        for anchor in self.take(anchors) {
            let updated = anchor
                .replacement
                .as_ref()
                .and_then(|r| substitute(r, target, replacement));
            self.push(anchor.target, updated);
        }
    }

    /// Append a pair unless it no longer changes anything.
    fn push(&mut self, target: Option<Annotation>, replacement: Option<Annotation>) {
        let redundant = match (&target, &replacement) {
            (None, None) => true,
            (Some(Annotation::AtLocus(at)), Some(r)) => *at.annotation == *r,
            (Some(t), Some(r)) => t == r,
            _ => false,
        };
        if redundant {
            debug!("change cancelled out");
            return;
        }
        self.pending.push(Change {
            target,
            replacement,
            multiple: false,
        });
    }

    fn ensure_unique(
        &self,
        candidates: &[usize],
        multiple: bool,
        site: &Annotation,
        what: &str,
    ) -> GnomicResult<()> {
        if candidates.len() <= 1 || multiple {
            return Ok(());
        }
        let listed = candidates.iter().map(|&i| &self.pending[i]).join(", ");
        warn!(site = %site, candidates = %listed, "ambiguous edit");
        Err(GnomicError::AmbiguousEdit(format!(
            "{} matches {} {}: {}",
            site,
            candidates.len(),
            what,
            listed
        )))
    }

    fn any(&self, predicate: impl Fn(&Change) -> bool) -> bool {
        self.pending.iter().any(predicate)
    }

    fn positions(&self, predicate: impl Fn(&Change) -> bool) -> Vec<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, change)| predicate(change))
            .map(|(i, _)| i)
            .collect()
    }

    /// Remove the entries at `positions` (ascending) and return them in order.
    fn take(&mut self, positions: &[usize]) -> Vec<Change> {
        let mut taken: Vec<Change> = positions.iter().rev().map(|&i| self.pending.remove(i)).collect();
        taken.reverse();
        taken
    }
}

/// Normalize a change before dispatch: `X@X` becomes `X`, and a plasmid used
/// as a replacement integrates its contents (or nothing, for an empty one).
fn simplify(change: &Change) -> (Option<Annotation>, Option<Annotation>) {
    let target = change.target.as_ref().map(|target| match target {
        Annotation::AtLocus(at) if at.is_self_locus() => (*at.annotation).clone(),
        other => other.clone(),
    });
    let replacement = match (&target, &change.replacement) {
        (Some(_), Some(Annotation::Plasmid(plasmid))) if plasmid.is_empty() => None,
        (Some(_), Some(Annotation::Plasmid(plasmid))) => {
            Some(CompositeAnnotation::new(plasmid.members().to_vec()).into())
        }
        (_, replacement) => replacement.clone(),
    };
    (target, replacement)
}
