//! Annotation builders
//!
//! Short constructors so scenario tests read close to the notation they model.
//! They panic on invalid input, which is what a test wants.

use gnomic_genotype::{Annotation, CompositeAnnotation, Feature, Fusion, Plasmid};

/// A bare feature: `name`
pub fn f(name: &str) -> Annotation {
    Feature::new(name).into()
}

/// A typed feature: `type.name`
pub fn typed(feature_type: &str, name: &str) -> Annotation {
    Feature::new(name).with_type(feature_type).into()
}

/// A feature with a variant: `name(a; b)`
pub fn variant(name: &str, variant: &[&str]) -> Annotation {
    Feature::new(name).with_variant(variant.iter().copied()).into()
}

/// `a:b:...`
pub fn fusion(members: &[Annotation]) -> Annotation {
    Fusion::new(members.to_vec())
        .expect("fixture fusion needs two or more members")
        .into()
}

/// `{a, b, ...}`
pub fn composite(members: &[Annotation]) -> Annotation {
    CompositeAnnotation::new(members.to_vec()).into()
}

/// `(name a b ...)`
pub fn plasmid(name: &str, members: &[Annotation]) -> Annotation {
    Plasmid::new(name, members.to_vec())
        .expect("fixture plasmid cannot nest plasmids")
        .into()
}

/// `annotation@locus`
pub fn at(annotation: Annotation, locus: Annotation) -> Annotation {
    annotation
        .at_locus(locus)
        .expect("fixture annotation is already at a locus")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_display_as_notation() {
        assert_eq!(typed("gene", "lacZ").to_string(), "gene.lacZ");
        assert_eq!(variant("a", &["x", "y"]).to_string(), "a(x; y)");
        assert_eq!(fusion(&[f("a"), f("b")]).to_string(), "a:b");
        assert_eq!(composite(&[f("a"), f("b")]).to_string(), "{a, b}");
        assert_eq!(plasmid("p", &[f("a")]).to_string(), "(p a)");
        assert_eq!(at(f("a"), f("l")).to_string(), "a@l");
    }
}
