//! Loading extraction options from TOML files.

use std::io::Write;

use ecore_graph::extract::{
    AttributeCollision, ExtractOptions, Extractor, OptionsError, TypeErrorPolicy,
};
use ecore_graph::graph::SequentialEdgeIds;
use tempfile::NamedTempFile;

use crate::helpers::graph_assertions::assert_attributes;
use crate::helpers::model_builders::ModelBuilder;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
type-errors = "lenient"
attribute-collision = "last-wins"
parallel = true
"#,
    );
    let options = ExtractOptions::load(file.path()).unwrap();

    assert_eq!(options.type_errors, TypeErrorPolicy::Lenient);
    assert_eq!(options.attribute_collision, AttributeCollision::LastWins);
    assert!(options.parallel);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let file = write_config("attribute-collision = \"error\"\n");
    let options = ExtractOptions::load(file.path()).unwrap();

    assert_eq!(options.type_errors, TypeErrorPolicy::Strict);
    assert_eq!(options.attribute_collision, AttributeCollision::Error);
    assert!(!options.parallel);
}

#[test]
fn test_unknown_key_is_rejected() {
    let file = write_config("paralel = true\n");
    let err = ExtractOptions::load(file.path()).unwrap_err();
    assert!(matches!(err, OptionsError::Toml(_)));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = ExtractOptions::load(&path).unwrap_err();

    assert!(matches!(err, OptionsError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_loaded_options_drive_extraction() {
    let file = write_config("type-errors = \"lenient\"\n");
    let options = ExtractOptions::load(file.path()).unwrap();

    let mut b = ModelBuilder::package("p");
    let int = b.data_type("EInt");
    let thing = b.class("Thing");
    b.untyped_attribute(thing, "mystery");
    b.attribute(thing, "count", int);

    let ids = SequentialEdgeIds::new();
    let extraction = Extractor::new(&ids)
        .with_options(options)
        .extract(b.model())
        .unwrap();
    assert_attributes(&extraction.graph, "Thing", &[("count", "EInt")]);
    assert_eq!(extraction.skipped.len(), 1);
}
