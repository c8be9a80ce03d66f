//! Genotypes: a reconciled worklist layered on an optional parent.

use crate::annotation::{Annotation, Feature, Fusion, Plasmid};
use crate::change::Change;
use crate::worklist::Worklist;
use gnomic_core::GnomicResult;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// The net effect of a list of changes applied on top of a parent genotype.
///
/// Construction either applies every change or fails as a whole; the parent
/// is never modified. All views are computed from the final worklist.
#[derive(Debug, Clone)]
pub struct Genotype {
    parent: Option<Arc<Genotype>>,
    worklist: Worklist,
}

impl Genotype {
    pub fn new<'a>(
        changes: impl IntoIterator<Item = &'a Change>,
        parent: Option<Arc<Genotype>>,
    ) -> GnomicResult<Self> {
        let mut worklist = match &parent {
            Some(parent) => parent.worklist.clone(),
            None => Worklist::new(),
        };
        worklist.apply_all(changes)?;
        debug!(pending = worklist.len(), chained = parent.is_some(), "built genotype");
        Ok(Self { parent, worklist })
    }

    pub fn root<'a>(changes: impl IntoIterator<Item = &'a Change>) -> GnomicResult<Self> {
        Self::new(changes, None)
    }

    pub fn empty() -> Self {
        Self {
            parent: None,
            worklist: Worklist::new(),
        }
    }

    /// Apply `changes` with this genotype as the parent.
    pub fn child<'a>(
        self: &Arc<Self>,
        changes: impl IntoIterator<Item = &'a Change>,
    ) -> GnomicResult<Genotype> {
        Genotype::new(changes, Some(Arc::clone(self)))
    }

    pub fn parent(&self) -> Option<&Genotype> {
        self.parent.as_deref()
    }

    /// Number of ancestors above this genotype.
    pub fn depth(&self) -> usize {
        std::iter::successors(self.parent(), |g| g.parent()).count()
    }

    /// The reconciled changes, in the order they were last touched.
    pub fn changes(&self) -> &[Change] {
        self.worklist.changes()
    }

    pub fn is_empty(&self) -> bool {
        self.worklist.is_empty()
    }

    /// Every change split into single-leaf deletions and insertions.
    ///
    /// Stand-alone plasmid insertions and deletions are kept whole, and so are
    /// fusions when `fusions` is set.
    pub fn flattened_changes(&self, fusions: bool) -> HashSet<Change> {
        let mut flat = HashSet::new();
        for change in self.changes() {
            match (change.target(), change.replacement()) {
                (None, Some(Annotation::Plasmid(_))) | (Some(Annotation::Plasmid(_)), None) => {
                    flat.insert(change.clone());
                    continue;
                }
                _ => {}
            }
            if let Some(target) = change.target() {
                flat.extend(target.leaves(fusions).into_iter().cloned().map(Change::delete));
            }
            if let Some(replacement) = change.replacement() {
                flat.extend(replacement.leaves(fusions).into_iter().cloned().map(Change::insert));
            }
        }
        flat
    }

    pub fn added_features(&self) -> HashSet<Feature> {
        self.changes()
            .iter()
            .filter_map(Change::replacement)
            .flat_map(|a| a.features().into_iter().cloned())
            .collect()
    }

    pub fn removed_features(&self) -> HashSet<Feature> {
        self.changes()
            .iter()
            .filter_map(Change::target)
            .flat_map(|a| a.features().into_iter().cloned())
            .collect()
    }

    pub fn added_plasmids(&self) -> HashSet<Plasmid> {
        self.changes()
            .iter()
            .filter(|c| c.is_insertion())
            .filter_map(|c| c.replacement().and_then(Annotation::as_plasmid).cloned())
            .collect()
    }

    pub fn removed_plasmids(&self) -> HashSet<Plasmid> {
        self.changes()
            .iter()
            .filter(|c| c.is_deletion())
            .filter_map(|c| c.target().and_then(Annotation::as_plasmid).cloned())
            .collect()
    }

    /// Fusions inserted as a whole.
    pub fn added_fusions(&self) -> HashSet<Fusion> {
        self.insertions()
            .filter_map(|a| a.as_fusion().cloned())
            .collect()
    }

    /// Fusions deleted as a whole.
    pub fn removed_fusions(&self) -> HashSet<Fusion> {
        self.deletions()
            .filter_map(|a| a.as_fusion().cloned())
            .collect()
    }

    /// Inserted features, fusions and groups, left unflattened.
    pub fn added_fusion_features(&self) -> HashSet<Annotation> {
        self.insertions()
            .filter(|a| keeps_fusions(a))
            .cloned()
            .collect()
    }

    /// Deleted features, fusions and groups, left unflattened.
    pub fn removed_fusion_features(&self) -> HashSet<Annotation> {
        self.deletions()
            .filter(|a| keeps_fusions(a))
            .cloned()
            .collect()
    }

    fn insertions(&self) -> impl Iterator<Item = &Annotation> {
        self.changes()
            .iter()
            .filter(|c| c.is_insertion())
            .filter_map(Change::replacement)
    }

    fn deletions(&self) -> impl Iterator<Item = &Annotation> {
        self.changes()
            .iter()
            .filter(|c| c.is_deletion())
            .filter_map(Change::target)
    }
}

fn keeps_fusions(annotation: &Annotation) -> bool {
    matches!(
        annotation,
        Annotation::Feature(_) | Annotation::Fusion(_) | Annotation::Composite(_)
    )
}

impl Default for Genotype {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::CompositeAnnotation;
    use pretty_assertions::assert_eq;

    fn f(name: &str) -> Annotation {
        Feature::new(name).into()
    }

    fn features(names: &[&str]) -> HashSet<Feature> {
        names.iter().map(|n| Feature::new(*n)).collect()
    }

    #[test]
    fn test_chaining_does_not_touch_parent() {
        let parent = Arc::new(Genotype::root(&[Change::insert(f("a"))]).unwrap());
        let child = parent.child(&[Change::delete(f("a")), Change::insert(f("b"))]).unwrap();

        assert_eq!(parent.changes(), &[Change::insert(f("a"))]);
        assert_eq!(child.changes(), &[Change::insert(f("b"))]);
        assert_eq!(child.depth(), 1);
        assert_eq!(parent.depth(), 0);
    }

    #[test]
    fn test_failed_construction_is_atomic() {
        let parent = Arc::new(
            Genotype::root(&[
                Change::insert(f("a").fuse(f("x")).unwrap()),
                Change::insert(f("b").fuse(f("x")).unwrap()),
            ])
            .unwrap(),
        );
        let result = parent.child(&[Change::insert(f("c")), Change::replace(f("x"), f("y"))]);

        assert!(result.unwrap_err().is_ambiguous());
        assert_eq!(parent.changes().len(), 2);
    }

    #[test]
    fn test_feature_views() {
        let genotype = Genotype::root(&[
            Change::insert(f("a").fuse(f("b")).unwrap()),
            Change::delete(f("c")),
            Change::replace(f("d").at_locus(f("l")).unwrap(), f("e")),
        ])
        .unwrap();

        assert_eq!(genotype.added_features(), features(&["a", "b", "e"]));
        assert_eq!(genotype.removed_features(), features(&["c", "d"]));
        assert_eq!(
            genotype.added_fusions(),
            [Fusion::new(vec![f("a"), f("b")]).unwrap()].into_iter().collect()
        );
        assert!(genotype.removed_fusions().is_empty());
    }

    #[test]
    fn test_fusion_views_skip_replacements() {
        let bc = f("b").fuse(f("c")).unwrap();
        let genotype = Genotype::root(&[
            Change::replace(f("a"), bc.clone()),
            Change::delete(bc.clone().at_locus(f("l")).unwrap()),
        ])
        .unwrap();

        assert!(genotype.added_fusions().is_empty());
        assert!(genotype.removed_fusions().is_empty());
        assert!(genotype.added_fusion_features().is_empty());
        assert!(genotype.removed_fusion_features().is_empty());
        // The flat feature views still see both sides
        assert_eq!(genotype.added_features(), features(&["b", "c"]));
        assert_eq!(genotype.removed_features(), features(&["a", "b", "c"]));
    }

    #[test]
    fn test_fusion_feature_views_keep_groups_whole() {
        let xy: Annotation = CompositeAnnotation::new(vec![f("x"), f("y")]).into();
        let ab = f("a").fuse(f("b")).unwrap();
        let genotype = Genotype::root(&[
            Change::insert(xy.clone()),
            Change::delete(ab.clone()),
            Change::insert(f("z")),
            Change::insert(Plasmid::empty("p")),
        ])
        .unwrap();

        assert_eq!(
            genotype.added_fusion_features(),
            [xy, f("z")].into_iter().collect()
        );
        assert!(!genotype.added_fusion_features().contains(&f("x")));
        assert_eq!(genotype.removed_fusion_features(), [ab.clone()].into_iter().collect());
        assert_eq!(
            genotype.removed_fusions(),
            [Fusion::new(vec![f("a"), f("b")]).unwrap()].into_iter().collect()
        );
    }

    #[test]
    fn test_plasmid_views() {
        let genotype = Genotype::root(&[
            Change::insert(Plasmid::new("pA", vec![f("a")]).unwrap()),
            Change::delete(Plasmid::empty("pB")),
        ])
        .unwrap();

        assert_eq!(genotype.added_plasmids().len(), 1);
        assert!(genotype.added_plasmids().contains(&Plasmid::empty("pA")));
        assert!(genotype.removed_plasmids().contains(&Plasmid::empty("pB")));
        // Plasmid contents still count as added features
        assert_eq!(genotype.added_features(), features(&["a"]));
    }

    #[test]
    fn test_flattened_changes() {
        let ab = f("a").fuse(f("b")).unwrap();
        let genotype = Genotype::root(&[
            Change::insert(ab.clone()),
            Change::replace(f("s"), CompositeAnnotation::new(vec![f("x"), f("y")])),
            Change::insert(Plasmid::new("p", vec![f("z")]).unwrap()),
        ])
        .unwrap();

        let flat = genotype.flattened_changes(false);
        let expected: HashSet<Change> = [
            Change::insert(f("a")),
            Change::insert(f("b")),
            Change::delete(f("s")),
            Change::insert(f("x")),
            Change::insert(f("y")),
            Change::insert(Plasmid::new("p", vec![f("z")]).unwrap()),
        ]
        .into_iter()
        .collect();
        assert_eq!(flat, expected);

        let with_fusions = genotype.flattened_changes(true);
        assert!(with_fusions.contains(&Change::insert(ab.clone())));
        assert!(!with_fusions.contains(&Change::insert(f("a"))));
        assert!(genotype.added_fusion_features().contains(&ab));
    }
}
