use super::text::delta_notation;
use super::{escape_html, suffix_variant, Formatter};
use crate::{MUTANT, WILD_TYPE};
use gnomic_core::Accession;
use gnomic_genotype::{Change, Feature, Fusion, Plasmid};
use itertools::Itertools;

/// Text notation marked up for display in a web page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn format_change(&self, change: &Change) -> String {
        delta_notation(self, change)
    }

    fn format_feature(&self, feature: &Feature) -> String {
        let mut s = String::new();
        if let Some(organism) = &feature.organism {
            s.push_str(&format!("{}/", escape_html(&organism.to_string())));
        }
        if let Some(feature_type) = feature.feature_type.as_ref().filter(|t| !t.is_phene()) {
            s.push_str(&format!("{}.", escape_html(&feature_type.to_string())));
        }
        if let Some(name) = &feature.name {
            s.push_str(&escape_html(name));
        }
        if let Some(accession) = &feature.accession {
            s.push_str(&self.format_accession(accession));
        }
        if feature.has_variant() {
            s.push_str(&self.format_variant(&feature.variant));
        }
        format!("<span class=\"gnomic-feature\">{}</span>", s)
    }

    fn format_fusion(&self, fusion: &Fusion) -> String {
        format!(
            "<span class=\"gnomic-fusion\">{}</span>",
            fusion
                .members()
                .iter()
                .map(|member| self.format_annotation(member))
                .join(":")
        )
    }

    fn format_plasmid(&self, plasmid: &Plasmid) -> String {
        let name = format!(
            "<span class=\"gnomic-plasmid-name\">{}</span>",
            escape_html(&plasmid.name)
        );
        let inner = if plasmid.is_empty() {
            format!("({})", name)
        } else {
            format!(
                "({} {})",
                name,
                plasmid
                    .members()
                    .iter()
                    .map(|member| self.format_annotation(member))
                    .join(" ")
            )
        };
        format!("<span class=\"gnomic-plasmid\">{}</span>", inner)
    }

    fn format_variant(&self, variant: &[String]) -> String {
        let inner = match suffix_variant(variant) {
            Some(WILD_TYPE) => "+".to_string(),
            Some(MUTANT) => "-".to_string(),
            _ => variant.iter().map(|v| escape_html(v)).join("; "),
        };
        format!("<sup>{}</sup>", inner)
    }

    fn format_accession(&self, accession: &Accession) -> String {
        let text = match &accession.database {
            Some(database) => format!("#{}:{}", database, accession.identifier),
            None => format!("#{}", accession.identifier),
        };
        escape_html(&text)
    }
}
