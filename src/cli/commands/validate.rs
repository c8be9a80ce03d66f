use crate::cli::output::{error, success};
use clap::Args;
use gnomic_core::GnomicError;
use gnomic_notation::grammar::parse_statements;

#[derive(Args)]
pub struct ValidateArgs {
    /// Genotype definitions to check
    #[arg(required = true, allow_hyphen_values = true, value_name = "DEFINITION")]
    pub definitions: Vec<String>,
}

/// Report every definition; fails with the first syntax error found.
pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let mut first_error: Option<GnomicError> = None;

    for definition in &args.definitions {
        match parse_statements(definition) {
            Ok(statements) => success(&format!("{} ({} changes)", definition, statements.len())),
            Err(e) => {
                error(&format!("{}: {}", definition, e));
                if let GnomicError::Syntax { offset, .. } = &e {
                    eprintln!("  {}", definition);
                    let column = definition.get(..*offset).map_or(0, |s| s.chars().count());
                    eprintln!("  {}^", " ".repeat(column));
                }
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(definitions: &[&str]) -> ValidateArgs {
        ValidateArgs {
            definitions: definitions.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn test_valid_definitions() {
        assert!(run(args(&["+geneA -geneB", "siteC>(pD geneE)"])).is_ok());
    }

    #[test]
    fn test_first_error_reported() {
        let err = run(args(&["+geneA", "+geneB >", "geneC"])).unwrap_err();
        match err.downcast_ref::<GnomicError>() {
            Some(GnomicError::Syntax { offset, .. }) => assert_eq!(*offset, 7),
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }
}
