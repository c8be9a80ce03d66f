use super::{suffix_variant, Formatter};
use crate::{MUTANT, WILD_TYPE};
use gnomic_genotype::{Annotation, Change, Feature};

/// Canonical notation that parses back to the same changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct GnomicFormatter;

impl GnomicFormatter {
    /// `pheneA+` rather than `+phene.pheneA+`
    fn bare_phene<'a>(&self, change: &'a Change) -> Option<&'a Feature> {
        if !change.is_insertion() {
            return None;
        }
        change
            .replacement()
            .and_then(Annotation::as_feature)
            .filter(|feature| feature.is_phene() && feature.has_variant())
    }
}

impl Formatter for GnomicFormatter {
    fn format_change(&self, change: &Change) -> String {
        if let Some(phene) = self.bare_phene(change) {
            return self.format_feature(&Feature {
                feature_type: None,
                ..phene.clone()
            });
        }

        let target = change.target().map(|a| self.format_annotation(a));
        let replacement = change.replacement().map(|a| self.format_annotation(a));
        match (target, replacement) {
            (_, Some(replacement)) if change.is_presence() => replacement,
            (None, Some(replacement)) => format!("+{}", replacement),
            (Some(target), None) => format!("-{}", target),
            (Some(target), Some(replacement)) if change.multiple() => {
                format!("{}>>{}", target, replacement)
            }
            (Some(target), Some(replacement)) => format!("{}>{}", target, replacement),
            (None, None) => String::new(),
        }
    }

    fn format_variant(&self, variant: &[String]) -> String {
        match suffix_variant(variant) {
            Some(WILD_TYPE) => "+".to_string(),
            Some(MUTANT) => "-".to_string(),
            _ => format!("({})", variant.join("; ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnomic_core::{Accession, FeatureType};
    use gnomic_genotype::{AtLocus, Fusion, Plasmid};
    use pretty_assertions::assert_eq;

    fn f(name: &str) -> Annotation {
        Feature::new(name).into()
    }

    fn fv(name: &str, variant: &[&str]) -> Annotation {
        Feature::new(name).with_variant(variant.iter().copied()).into()
    }

    #[test]
    fn test_feature() {
        let formatter = GnomicFormatter;
        let full = Feature::new("gene")
            .with_organism("organism")
            .with_type("type")
            .with_accession(Accession::with_database("123", "db"))
            .with_variant(["f", "g"]);

        assert_eq!(formatter.format_feature(&Feature::new("foo")), "foo");
        assert_eq!(formatter.format_feature(&full), "organism/type.gene#db:123(f; g)");
        assert_eq!(
            formatter.format_feature(&Feature::from_accession(Accession::new("123"))),
            "#123"
        );
        assert_eq!(
            formatter.format_feature(&Feature::new("foo").with_variant(["mutant", "variant"])),
            "foo(mutant; variant)"
        );
        assert_eq!(
            formatter.format_feature(&Feature::new("foo").with_variant(["wild-type"])),
            "foo+"
        );
    }

    #[test]
    fn test_change() {
        let formatter = GnomicFormatter;

        assert_eq!(formatter.format_change(&Change::delete(f("foo"))), "-foo");
        assert_eq!(formatter.format_change(&Change::insert(f("foo"))), "+foo");
        assert_eq!(formatter.format_change(&Change::replace(f("foo"), f("bar"))), "foo>bar");
        assert_eq!(
            formatter.format_change(&Change::replace_multiple(f("foo"), f("bar"))),
            "foo>>bar"
        );
        assert_eq!(formatter.format_change(&Change::insert(Plasmid::empty("foo"))), "(foo)");
        assert_eq!(
            formatter.format_change(&Change::replace(f("foo"), fv("foo", &["x"]))),
            "foo(x)"
        );
        assert_eq!(
            formatter.format_change(&Change::replace(fv("foo", &["x"]), fv("foo", &["y"]))),
            "foo(x)>foo(y)"
        );

        let at: Annotation = AtLocus::new(fv("foo", &["x"]), f("f")).unwrap().into();
        assert_eq!(
            formatter.format_change(&Change::replace(at, fv("foo", &["y"]))),
            "foo(x)@f>foo(y)"
        );
    }

    #[test]
    fn test_bare_phene() {
        let formatter = GnomicFormatter;
        let phene = Feature::new("pheneA")
            .with_type(FeatureType::PHENE)
            .with_variant(["wild-type"]);
        assert_eq!(formatter.format_change(&Change::insert(phene)), "pheneA+");

        let no_variant = Feature::new("pheneA").with_type(FeatureType::PHENE);
        assert_eq!(formatter.format_change(&Change::insert(no_variant)), "+phene.pheneA");
    }

    #[test]
    fn test_groups() {
        let formatter = GnomicFormatter;
        let fusion = Fusion::new(vec![f("foo"), f("bar"), Plasmid::empty("p").into()]).unwrap();
        assert_eq!(formatter.format_fusion(&fusion), "foo:bar:(p)");

        let plasmid = Plasmid::new("foo", vec![f("bar")]).unwrap();
        assert_eq!(formatter.format_plasmid(&plasmid), "(foo bar)");

        let at = AtLocus::new(f("foo"), f("bar")).unwrap();
        assert_eq!(formatter.format_at_locus(&at), "foo@bar");
    }
}
