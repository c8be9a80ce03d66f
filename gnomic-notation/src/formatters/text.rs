use super::{suffix_variant, Formatter, DELTA, RIGHTWARDS_ARROW, RIGHTWARDS_PAIRED_ARROW};
use crate::{MUTANT, WILD_TYPE};
use gnomic_genotype::{Change, Feature};

/// Human-readable notation: `ΔgeneA`, `ΔsiteA→geneB`, `pheneA⁺`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

/// Change rendering shared by the text and HTML formatters.
pub(crate) fn delta_notation<F: Formatter + ?Sized>(formatter: &F, change: &Change) -> String {
    let target = change.target().map(|a| formatter.format_annotation(a));
    let replacement = change.replacement().map(|a| formatter.format_annotation(a));
    match (target, replacement) {
        (None, Some(replacement)) => replacement,
        (Some(target), None) => format!("{}{}", DELTA, target),
        (Some(target), Some(replacement)) => {
            let arrow = if change.multiple() {
                RIGHTWARDS_PAIRED_ARROW
            } else {
                RIGHTWARDS_ARROW
            };
            format!("{}{}{}{}", DELTA, target, arrow, replacement)
        }
        (None, None) => String::new(),
    }
}

impl Formatter for TextFormatter {
    fn format_change(&self, change: &Change) -> String {
        delta_notation(self, change)
    }

    fn format_feature(&self, feature: &Feature) -> String {
        let mut s = String::new();
        if let Some(organism) = &feature.organism {
            s.push_str(&format!("{}/", organism));
        }
        if let Some(feature_type) = feature.feature_type.as_ref().filter(|t| !t.is_phene()) {
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

    fn format_variant(&self, variant: &[String]) -> String {
        match suffix_variant(variant) {
            Some(WILD_TYPE) => "\u{207a}".to_string(),
            Some(MUTANT) => "\u{207b}".to_string(),
            _ => format!("({})", variant.join("; ")),
        }
    }
}
