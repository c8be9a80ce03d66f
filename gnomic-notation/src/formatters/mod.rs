//! Rendering genotypes and changes back out
//!
//! [`Formatter`] carries default rendering for every annotation kind in
//! canonical notation; implementations override the pieces their output
//! format writes differently.

mod gnomic;
mod html;
mod json;
mod text;

pub use gnomic::GnomicFormatter;
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use gnomic_core::{Accession, GnomicResult, OutputFormat};
use gnomic_genotype::{Annotation, AtLocus, Change, CompositeAnnotation, Feature, Fusion, Genotype, Plasmid};
use itertools::Itertools;

pub const DELTA: char = '\u{0394}';
pub const RIGHTWARDS_ARROW: char = '\u{2192}';
pub const RIGHTWARDS_PAIRED_ARROW: char = '\u{21c9}';

pub trait Formatter {
    fn format_change(&self, change: &Change) -> String;

    fn format_genotype(&self, genotype: &Genotype) -> String {
        genotype
            .changes()
            .iter()
            .map(|change| self.format_change(change))
            .join(" ")
    }

    fn format_annotation(&self, annotation: &Annotation) -> String {
        match annotation {
            Annotation::Feature(feature) => self.format_feature(feature),
            Annotation::Fusion(fusion) => self.format_fusion(fusion),
            Annotation::Composite(composite) => self.format_composite(composite),
            Annotation::Plasmid(plasmid) => self.format_plasmid(plasmid),
            Annotation::AtLocus(at) => self.format_at_locus(at),
        }
    }

    fn format_feature(&self, feature: &Feature) -> String {
        let mut s = String::new();
        if let Some(organism) = &feature.organism {
            s.push_str(&format!("{}/", organism));
        }
        if let Some(feature_type) = &feature.feature_type {
            s.push_str(&format!("{}.", feature_type));
        }
        if let Some(name) = &feature.name {
            s.push_str(name);
        }
        if let Some(accession) = &feature.accession {
            s.push_str(&self.format_accession(accession));
        }
        if feature.has_variant() {
            s.push_str(&self.format_variant(&feature.variant));
        }
        s
    }

    fn format_fusion(&self, fusion: &Fusion) -> String {
        fusion
            .members()
            .iter()
            .map(|member| self.format_annotation(member))
            .join(":")
    }

    fn format_plasmid(&self, plasmid: &Plasmid) -> String {
        if plasmid.is_empty() {
            format!("({})", plasmid.name)
        } else {
            format!(
                "({} {})",
                plasmid.name,
                plasmid
                    .members()
                    .iter()
                    .map(|member| self.format_annotation(member))
                    .join(" ")
            )
        }
    }

    fn format_at_locus(&self, at: &AtLocus) -> String {
        format!(
            "{}@{}",
            self.format_annotation(&at.annotation),
            self.format_annotation(&at.locus)
        )
    }

    fn format_composite(&self, composite: &CompositeAnnotation) -> String {
        format!(
            "{{{}}}",
            composite
                .members()
                .iter()
                .map(|member| self.format_annotation(member))
                .join(", ")
        )
    }

    fn format_variant(&self, variant: &[String]) -> String {
        format!("({})", variant.join("; "))
    }

    fn format_accession(&self, accession: &Accession) -> String {
        match &accession.database {
            Some(database) => format!("#{}:{}", database, accession.identifier),
            None => format!("#{}", accession.identifier),
        }
    }
}

/// The formatter used for an output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Gnomic => Box::new(GnomicFormatter::default()),
        OutputFormat::Text => Box::new(TextFormatter::default()),
        OutputFormat::Html => Box::new(HtmlFormatter::default()),
        OutputFormat::Json => Box::new(JsonFormatter::default()),
    }
}

pub fn format_genotype(genotype: &Genotype, format: OutputFormat) -> String {
    formatter_for(format).format_genotype(genotype)
}

/// Like [`format_genotype`], with the format given by name.
pub fn format_genotype_named(genotype: &Genotype, name: &str) -> GnomicResult<String> {
    Ok(format_genotype(genotype, name.parse()?))
}

/// The single variant a `+`/`-` suffix stands for, if that is all there is.
pub(crate) fn suffix_variant(variant: &[String]) -> Option<&str> {
    match variant {
        [only] if only == crate::WILD_TYPE || only == crate::MUTANT => Some(only.as_str()),
        _ => None,
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
