/// Reference types shared across all Gnomic modules
pub mod accession;
pub mod alias;
pub mod format;
pub mod organism;

pub use accession::Accession;
pub use alias::{alias_table, Aliased};
pub use format::OutputFormat;
pub use organism::{FeatureType, Organism};
