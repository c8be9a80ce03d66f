pub mod features;
pub mod parse;
pub mod validate;

use gnomic_core::NotationConfig;
use gnomic_genotype::Genotype;
use gnomic_notation::chain_parse;
use tracing::info;

/// Chain-parse the definitions given on the command line.
pub(crate) fn genotype_from(definitions: &[String], config: &NotationConfig) -> anyhow::Result<Genotype> {
    let genotype = chain_parse(definitions, config)?;
    info!(
        definitions = definitions.len(),
        changes = genotype.changes().len(),
        "reconciled genotype"
    );
    Ok(genotype)
}
