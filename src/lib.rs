//! Gnomic: genotype notation and state reconciliation
//!
//! This crate ties the workspace together and hosts the `gnomic` command
//! line tool. The building blocks live in their own crates:
//!
//! - `gnomic-core`: errors, configuration and shared identifier types
//! - `gnomic-genotype`: annotations, changes, reconciliation and genotypes
//! - `gnomic-notation`: the notation grammar and output formatters

pub mod cli;

pub use gnomic_core::{
    Accession, Config, FeatureType, GnomicError, GnomicResult, NotationConfig, Organism,
    OutputFormat,
};
pub use gnomic_genotype::{
    Annotation, AtLocus, Change, CompositeAnnotation, Feature, Fusion, Genotype, Plasmid,
    Worklist,
};
pub use gnomic_notation::{
    chain_parse, format_genotype, is_valid, parse, parse_change, parse_changes, parse_feature,
    parse_genotype, Formatter, GnomicFormatter, HtmlFormatter, JsonFormatter, TextFormatter,
};

/// Process exit code for an error, by kind
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<GnomicError>() {
        Some(GnomicError::Configuration(_)) => 2,
        Some(GnomicError::Io(_)) => 3,
        Some(GnomicError::Syntax { .. }) => 4,
        Some(GnomicError::AmbiguousEdit(_)) => 5,
        _ => 1,
    }
}
