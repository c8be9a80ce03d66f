use super::Formatter;
use gnomic_genotype::{Change, Genotype};
use tracing::warn;

/// JSON rendering of the reconciled change list.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn render<T: serde::Serialize + ?Sized>(&self, value: &T) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|e| {
            warn!(error = %e, "failed to serialize to JSON");
            String::new()
        })
    }
}

impl Formatter for JsonFormatter {
    fn format_change(&self, change: &Change) -> String {
        self.render(change)
    }

    fn format_genotype(&self, genotype: &Genotype) -> String {
        self.render(genotype.changes())
    }
}
