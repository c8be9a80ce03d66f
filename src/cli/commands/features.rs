use super::genotype_from;
use crate::cli::output::{empty, section_header, tree_section};
use clap::Args;
use gnomic_core::Config;
use gnomic_genotype::{Annotation, Genotype};
use gnomic_notation::{Formatter, GnomicFormatter};

#[derive(Args)]
pub struct FeaturesArgs {
    /// Genotype definitions; each one applies on top of the previous
    #[arg(required = true, allow_hyphen_values = true, value_name = "DEFINITION")]
    pub definitions: Vec<String>,
}

pub fn run(args: FeaturesArgs, config: &Config) -> anyhow::Result<()> {
    let genotype = genotype_from(&args.definitions, &config.notation)?;

    section_header("Genotype features");
    if genotype.is_empty() {
        empty("no changes");
        return Ok(());
    }

    let sections = projections(&genotype);
    for (i, (title, items)) in sections.iter().enumerate() {
        tree_section(title, items, i == sections.len() - 1);
    }
    Ok(())
}

/// The feature, plasmid and fusion views, each rendered and sorted.
pub fn projections(genotype: &Genotype) -> Vec<(&'static str, Vec<String>)> {
    let formatter = GnomicFormatter;
    let render = |annotations: Vec<Annotation>| {
        let mut items: Vec<String> = annotations
            .iter()
            .map(|a| formatter.format_annotation(a))
            .collect();
        items.sort();
        items
    };

    vec![
        (
            "Added features",
            render(genotype.added_features().into_iter().map(Annotation::from).collect()),
        ),
        (
            "Removed features",
            render(genotype.removed_features().into_iter().map(Annotation::from).collect()),
        ),
        (
            "Added plasmids",
            render(genotype.added_plasmids().into_iter().map(Annotation::from).collect()),
        ),
        (
            "Removed plasmids",
            render(genotype.removed_plasmids().into_iter().map(Annotation::from).collect()),
        ),
        (
            "Added fusions",
            render(genotype.added_fusions().into_iter().map(Annotation::from).collect()),
        ),
        (
            "Removed fusions",
            render(genotype.removed_fusions().into_iter().map(Annotation::from).collect()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnomic_notation::parse;

    #[test]
    fn test_projections() {
        let genotype = parse("+geneA:geneB -geneC (pA geneD)").unwrap();
        let sections = projections(&genotype);

        assert_eq!(sections[0], ("Added features", vec![
            "geneA".to_string(),
            "geneB".to_string(),
            "geneD".to_string(),
        ]));
        assert_eq!(sections[1], ("Removed features", vec!["geneC".to_string()]));
        assert_eq!(sections[2], ("Added plasmids", vec!["(pA geneD)".to_string()]));
        assert_eq!(sections[4], ("Added fusions", vec!["geneA:geneB".to_string()]));
        assert!(sections[5].1.is_empty());
    }
}
