//! Database accessions, e.g. `#UniProt:P12345`

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accession {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl Accession {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            database: None,
        }
    }

    pub fn with_database(identifier: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            database: Some(database.into()),
        }
    }
}

impl fmt::Display for Accession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.database {
            Some(db) => write!(f, "{}:{}", db, self.identifier),
            None => write!(f, "{}", self.identifier),
        }
    }
}
