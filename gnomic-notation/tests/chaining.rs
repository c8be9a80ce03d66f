//! Genotypes parsed as chains of definitions
use gnomic_core::NotationConfig;
use gnomic_genotype::{Change, Genotype};
use gnomic_notation::{chain_parse, parse, parse_genotype};
use gnomic_test::{assert_changes, assert_feature_names, assert_notation, f, fusion, init_test_logging};
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::sync::Arc;

fn chain(texts: &[&str]) -> Genotype {
    chain_parse(texts, &NotationConfig::default()).unwrap()
}

#[test]
fn test_chain_propagates_added_features() {
    let genotype = chain(&["+geneA", "+geneB"]);
    assert_notation(&genotype, &["+geneA", "+geneB"]);
    assert_feature_names(&genotype.added_features(), &["geneA", "geneB"]);
}

#[test]
fn test_chain_propagates_removed_features() {
    assert_notation(&chain(&["-geneA", "-geneB"]), &["-geneA", "-geneB"]);
    assert_notation(&chain(&["-geneA -geneB", "+geneB", "+geneC"]), &["-geneA", "+geneC"]);
}

#[test]
fn test_chaining_matches_single_definition() {
    let chained = chain(&["+geneA -geneB", "siteC>geneD", "-geneA"]);
    let single = parse("+geneA -geneB siteC>geneD -geneA").unwrap();
    assert_changes(chained.changes(), single.changes());
}

#[test]
fn test_parent_is_shared_not_copied() {
    let config = NotationConfig::default();
    let parent = Arc::new(parse_genotype("+geneA", None, &config).unwrap());
    let child = parse_genotype("-geneA +geneB", Some(Arc::clone(&parent)), &config).unwrap();

    assert_notation(&parent, &["+geneA"]);
    assert_notation(&child, &["+geneB"]);
    assert_eq!(child.depth(), 1);
}

#[test]
fn test_integrated_plasmid() {
    assert_notation(&chain(&["siteA>pA{}"]), &["-siteA"]);

    let genotype = chain(&["siteA>pA{geneA geneB}"]);
    assert_notation(&genotype, &["siteA>{geneA, geneB}"]);
    assert_eq!(
        genotype.flattened_changes(false),
        HashSet::from([
            Change::delete(f("siteA")),
            Change::insert(f("geneA")),
            Change::insert(f("geneB")),
        ])
    );
}

#[test]
fn test_integrated_plasmid_fusion() {
    let genotype = chain(&["siteA>pA{geneA:geneB}"]);
    assert_eq!(
        genotype.flattened_changes(false),
        HashSet::from([
            Change::delete(f("siteA")),
            Change::insert(f("geneA")),
            Change::insert(f("geneB")),
        ])
    );
    assert_eq!(
        genotype.flattened_changes(true),
        HashSet::from([
            Change::delete(f("siteA")),
            Change::insert(fusion(&[f("geneA"), f("geneB")])),
        ])
    );
}

#[test]
fn test_plasmid_presence_and_removal() {
    assert_notation(&chain(&["pA{}"]), &["(pA)"]);
    assert_notation(&chain(&["-pA{}"]), &["-(pA)"]);
    assert!(chain(&["pA{}", "-pA{}"]).is_empty());
    assert!(chain(&["pA{foo}", "-pA{}"]).is_empty());
}

#[test]
fn test_variants() {
    assert_notation(&chain(&["+geneA", "-geneA(x)"]), &["+geneA", "-geneA(x)"]);
    assert_notation(&chain(&["-geneA(x)", "+geneA(y)"]), &["-geneA(x)", "+geneA(y)"]);
    assert_notation(&chain(&["+geneA(x) +geneA(y)", "+geneA(z)"]), &["+geneA(z)"]);
}

#[test]
fn test_no_delete_if_present() {
    assert_notation(&chain(&["+geneA(x) +geneB", "-geneA(x)"]), &["+geneB"]);
    assert_notation(&chain(&["+geneB", "-geneA(x)"]), &["+geneB", "-geneA(x)"]);
}

#[test]
fn test_insertion_and_deletion_cancel_across_chain() {
    assert_notation(&chain(&["+geneX +geneA", "-geneA"]), &["+geneX"]);
    assert_notation(&chain(&["+geneX +geneA", "+geneY", "-geneA"]), &["+geneX", "+geneY"]);
    assert_notation(&chain(&["+geneX -geneA", "+geneA"]), &["+geneX"]);
    assert_notation(&chain(&["+geneX -geneA", "+geneY", "+geneA"]), &["+geneX", "+geneY"]);
}

#[test]
fn test_phenes_replace_variants() {
    assert_notation(&chain(&["pheneA+", "pheneA-"]), &["pheneA-"]);
}

#[test]
fn test_markers_as_phenes() {
    assert_notation(&chain(&["+geneA::pheneA+", "pheneA-"]), &["+geneA", "pheneA-"]);
    assert_notation(
        &chain(&["+geneA::pheneA+", "pheneA-", "-geneA::pheneA+"]),
        &["pheneA+"],
    );
    assert_notation(
        &chain(&["+geneA::{pheneA+ pheneB+}", "pheneA-", "-geneA::pheneB-"]),
        &["pheneA-", "pheneB-"],
    );
}

#[test]
fn test_multiple_flag_is_not_kept_once_reconciled() {
    assert_notation(&chain(&["siteA>>geneA"]), &["siteA>geneA"]);
}

#[test]
fn test_fusion_member_replaced_in_place() {
    assert_notation(&chain(&["+geneA:geneB", "geneB>geneC"]), &["+geneA:geneC"]);
    // Plain deletions leave fusions alone; a locus says where to edit
    assert_notation(
        &chain(&["+geneA:geneB:geneC", "-geneB"]),
        &["+geneA:geneB:geneC", "-geneB"],
    );
    assert_notation(&chain(&["geneA>geneB:geneC", "-geneB@geneA"]), &["geneA>geneC"]);
}

#[test]
fn test_ambiguous_edit_rejected() {
    init_test_logging();
    let config = NotationConfig::default();
    let parent = Arc::new(parse_genotype("+geneA:geneX +geneB:geneX", None, &config).unwrap());

    let err = parse_genotype("geneX>geneY", Some(Arc::clone(&parent)), &config).unwrap_err();
    assert!(err.is_ambiguous());

    let child = parse_genotype("geneX>>geneY", Some(parent), &config).unwrap();
    assert_notation(&child, &["+geneA:geneY", "+geneB:geneY"]);
}

#[test]
fn test_round_trip_through_canonical_notation() {
    let genotype = chain(&[
        "-e.coli/geneA",
        "+geneB(a)",
        "(vectorC geneC)",
        "-(vectorD)",
        "+geneE::markerF+",
        "+gene.G::{markerH+, markerI+}",
        "-Ecoli/reaction.PGK#bigg:PGK",
    ]);
    assert_notation(
        &genotype,
        &[
            "-e.coli/geneA",
            "+geneB(a)",
            "(vectorC geneC)",
            "-(vectorD)",
            "+geneE",
            "markerF+",
            "+gene.G",
            "markerH+",
            "markerI+",
            "-Ecoli/reaction.PGK#bigg:PGK",
        ],
    );

    let formatted = gnomic_notation::format_genotype(&genotype, Default::default());
    let reparsed = parse(&formatted).unwrap();
    assert_eq!(reparsed.changes(), genotype.changes());
}
