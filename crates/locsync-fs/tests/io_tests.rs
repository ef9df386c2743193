use assert_fs::prelude::*;
use locsync_fs::{DocumentStore, Error, Format, NormalizedPath, io};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("fr.lproj/Main.strings"));

    io::write_atomic(&path, b"\"a\" = \"b\";\n").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "\"a\" = \"b\";\n");
}

#[test]
fn test_write_atomic_overwrites_and_leaves_no_temp_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("Main.strings");
    file.write_str("original").unwrap();

    io::write_atomic(&NormalizedPath::new(file.path()), b"updated").unwrap();

    file.assert("updated");
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {:?}", leftovers);
}

#[test]
fn test_read_optional_missing_file_is_none() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.strings"));
    assert!(io::read_optional(&path).unwrap().is_none());
}

#[test]
fn test_read_text_nonexistent_file_is_io_error() {
    let path = NormalizedPath::new("/nonexistent/file.strings");
    assert!(matches!(io::read_text(&path), Err(Error::Io { .. })));
}

#[test]
fn test_remove_file_reports_existence() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("en.lproj/Empty.strings");
    file.write_str("").unwrap();
    let path = NormalizedPath::new(file.path());

    assert!(io::remove_file(&path).unwrap());
    assert!(!io::remove_file(&path).unwrap());
    file.assert(predicates::path::missing());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Doc {
    name: String,
    languages: Vec<String>,
}

#[test]
fn test_document_store_json_and_toml() {
    let temp = TempDir::new().unwrap();
    let store = DocumentStore::new();
    let doc = Doc {
        name: "Login".into(),
        languages: vec!["en".into(), "fr".into()],
    };

    for file in ["doc.json", "doc.toml", "DOC.JSON"] {
        let path = NormalizedPath::new(temp.path().join(file));
        store.save(&path, &doc).unwrap();
        let loaded: Doc = store.load(&path).unwrap();
        assert_eq!(loaded, doc);
    }
}

#[test]
fn test_document_store_rejects_unknown_extension() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("doc.yaml"));
    let result = DocumentStore::new().save(&path, &Doc {
        name: "x".into(),
        languages: vec![],
    });
    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_document_store_parse_error_names_format() {
    let path = NormalizedPath::new("config.toml");
    let result: Result<Doc, _> = DocumentStore::new().parse(&path, "name = ");
    match result {
        Err(Error::DocumentParse { format, .. }) => assert_eq!(format, Format::Toml),
        other => panic!("expected DocumentParse, got {:?}", other),
    }
}
