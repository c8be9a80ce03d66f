//! Custom assertions for genotypes
//!
//! Worklists are compared as multisets: reconciliation keeps its own order,
//! which tests should not depend on.

use gnomic_genotype::{Change, Feature, Genotype};
use gnomic_notation::{Formatter, GnomicFormatter};
use pretty_assertions::assert_eq;

fn sorted<T: std::fmt::Debug>(items: impl IntoIterator<Item = T>) -> Vec<String> {
    let mut out: Vec<String> = items.into_iter().map(|i| format!("{:?}", i)).collect();
    out.sort();
    out
}

/// Assert that two change lists hold the same changes, in any order
pub fn assert_changes(actual: &[Change], expected: &[Change]) {
    assert_eq!(sorted(actual), sorted(expected));
}

/// Assert the genotype's changes, written in canonical notation
pub fn assert_notation(genotype: &Genotype, expected: &[&str]) {
    let formatter = GnomicFormatter::default();
    let mut actual: Vec<String> = genotype
        .changes()
        .iter()
        .map(|c| formatter.format_change(c))
        .collect();
    actual.sort();

    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();

    assert_eq!(actual, expected);
}

/// Assert a feature set by feature names
pub fn assert_feature_names<'a>(features: impl IntoIterator<Item = &'a Feature>, expected: &[&str]) {
    let mut names: Vec<String> = features
        .into_iter()
        .map(|f| f.name.clone().unwrap_or_default())
        .collect();
    names.sort();

    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();

    assert_eq!(names, expected, "Feature names differ");
}
