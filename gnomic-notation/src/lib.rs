//! Gnomic genotype notation
//!
//! Parses definitions such as `+geneA -geneB siteC>{geneD, geneE} (pA)` into
//! [`Change`]s and [`Genotype`]s, and renders them back through the
//! [`Formatter`] implementations.

pub mod formatters;
pub mod grammar;
pub mod semantics;

pub use formatters::{
    format_genotype, format_genotype_named, formatter_for, Formatter, GnomicFormatter,
    HtmlFormatter, JsonFormatter, TextFormatter,
};
pub use grammar::{MUTANT, WILD_TYPE};
pub use semantics::Semantics;

use gnomic_core::{GnomicError, GnomicResult, NotationConfig};
use gnomic_genotype::{Change, Feature, Genotype};
use std::sync::Arc;
use tracing::debug;

/// Parse a genotype definition into the changes it lists, in order.
pub fn parse_changes(text: &str, config: &NotationConfig) -> GnomicResult<Vec<Change>> {
    let semantics = Semantics::new(config);
    let mut changes = Vec::new();
    for statement in grammar::parse_statements(text)? {
        changes.extend(semantics.changes(&statement)?);
    }
    debug!(count = changes.len(), "parsed changes");
    Ok(changes)
}

/// Parse a definition and reconcile it on top of `parent`.
pub fn parse_genotype(
    text: &str,
    parent: Option<Arc<Genotype>>,
    config: &NotationConfig,
) -> GnomicResult<Genotype> {
    let changes = parse_changes(text, config)?;
    Genotype::new(&changes, parent)
}

/// Parse with the default configuration.
pub fn parse(text: &str) -> GnomicResult<Genotype> {
    parse_genotype(text, None, &NotationConfig::default())
}

/// Parse each definition as a child of the previous one and return the last.
pub fn chain_parse<S: AsRef<str>>(texts: &[S], config: &NotationConfig) -> GnomicResult<Genotype> {
    let mut current: Option<Arc<Genotype>> = None;
    for text in texts {
        let genotype = parse_genotype(text.as_ref(), current.take(), config)?;
        current = Some(Arc::new(genotype));
    }
    Ok(match current {
        Some(genotype) => Arc::try_unwrap(genotype).unwrap_or_else(|shared| (*shared).clone()),
        None => Genotype::empty(),
    })
}

/// Whether `text` is a syntactically valid definition.
pub fn is_valid(text: &str) -> bool {
    grammar::is_valid(text)
}

/// Parse a single feature such as `Ec/gene.lacZ#UniProt:P00722(x)`.
pub fn parse_feature(text: &str) -> GnomicResult<Feature> {
    let node = grammar::parse_feature_node(text)?;
    Ok(Semantics::default().feature(&node, None))
}

/// Parse a single change. Markers are not allowed here since they would
/// stand for more than one change.
pub fn parse_change(text: &str) -> GnomicResult<Change> {
    let statement = grammar::parse_statement(text)?;
    if !statement.markers.is_empty() {
        return Err(GnomicError::InvalidChange(format!(
            "{} describes more than one change",
            text.trim()
        )));
    }
    let mut changes = Semantics::default().changes(&statement)?;
    changes
        .pop()
        .ok_or_else(|| GnomicError::InvalidChange(format!("{} describes no change", text.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnomic_core::FeatureType;
    use gnomic_genotype::Annotation;
    use pretty_assertions::assert_eq;

    fn f(name: &str) -> Annotation {
        Feature::new(name).into()
    }

    #[test]
    fn test_parse_changes_in_order() {
        let changes = parse_changes("+geneA -geneB siteC>geneD", &NotationConfig::default()).unwrap();
        assert_eq!(
            changes,
            vec![
                Change::insert(f("geneA")),
                Change::delete(f("geneB")),
                Change::replace(f("siteC"), f("geneD")),
            ]
        );
    }

    #[test]
    fn test_parse_feature() {
        let feature = parse_feature("Ec/gene.lacZ#123").unwrap();
        assert_eq!(feature.name.as_deref(), Some("lacZ"));
        assert_eq!(feature.feature_type, Some(FeatureType::new("gene")));
        assert!(parse_feature("+lacZ").is_err());
    }

    #[test]
    fn test_parse_change() {
        assert_eq!(parse_change(" -geneA ").unwrap(), Change::delete(f("geneA")));
        assert!(parse_change("+geneA +geneB").unwrap_err().is_syntax());
        assert!(matches!(
            parse_change("+geneA::markerM"),
            Err(GnomicError::InvalidChange(_))
        ));
    }

    #[test]
    fn test_chain_parse_empty() {
        let genotype = chain_parse::<&str>(&[], &NotationConfig::default()).unwrap();
        assert!(genotype.is_empty());
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("+geneA"));
        assert!(is_valid(""));
        assert!(!is_valid("+geneA >"));
    }
}
