//! Integration tests for configuration loading and saving

use std::fs;
use gnomic_core::config::{default_config, load_config, save_config, Config};
use gnomic_core::{FeatureType, GnomicError, OutputFormat};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_config_loading_from_multiple_sources() {
    let dir = TempDir::new().unwrap();

    let home_config = dir.path().join("config.toml");
    let project_config = dir.path().join("project.toml");

    let home_content = r#"
[output]
format = "html"
"#;
    fs::write(&home_config, home_content).unwrap();

    let project_content = r#"
[notation]
types = [
    { name = "gene" },
    { name = "promoter", aliases = ["P", "prom"] },
]

[output]
fusions = false
"#;
    fs::write(&project_config, project_content).unwrap();

    let config1 = load_config(&home_config).unwrap();
    assert_eq!(config1.output.format, OutputFormat::Html);
    assert!(config1.output.fusions); // Default
    assert_eq!(config1.notation.types.len(), default_config().notation.types.len());

    let config2 = load_config(&project_config).unwrap();
    assert_eq!(config2.output.format, OutputFormat::Gnomic);
    assert!(!config2.output.fusions);
    assert_eq!(config2.notation.types.len(), 2);
    assert_eq!(config2.notation.type_table()["prom"], FeatureType::new("promoter"));
}

#[test]
fn test_config_save_creates_readable_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gnomic.toml");

    save_config(&path, &Config::default()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[notation]"));
    assert!(contents.contains("phene_type = \"phene\""));
    assert!(contents.contains("Escherichia coli"));

    let reloaded = load_config(&path).unwrap();
    assert_eq!(reloaded.notation.organisms, Config::default().notation.organisms);
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let result = load_config(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(GnomicError::Io(_))));
}

#[test]
fn test_empty_config_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.notation.phene_type, "phene");
    assert_eq!(config.output.format, OutputFormat::Gnomic);
}
