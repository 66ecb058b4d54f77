use super::{extract_sections, load_appendix, read_appendix, read_source, write_appendix, Load};
use crate::formats::latin::LatinAppendix;
use crate::parser::parse_document;
use crate::Error;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const SOURCE: &str = "Title page\n\
                      1. Agreement of Verb\n\
                      The verb agrees with its subject.\n\
                      Ablative Case\n\
                      14. Means\n  gladio pugnat\n";

#[test]
fn test_artifact_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("grammar_appendix.json");
    let sections = parse_document(SOURCE, &LatinAppendix);

    write_appendix(&sections, &path).unwrap();

    assert_eq!(read_appendix(&path).unwrap(), sections);
}

#[test]
fn test_artifact_is_indented_json_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");

    write_appendix(&parse_document(SOURCE, &LatinAppendix), &path).unwrap();

    let json = fs::read_to_string(&path).unwrap();
    assert!(json.starts_with("[\n  {\n    \"title\": \"Agreement and Basic Constructions\""));
    assert!(json.contains("\"examples\": [\n"));
}

#[test]
fn test_extract_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{SOURCE}").unwrap();

    let outcome = extract_sections(file.path(), &LatinAppendix).unwrap();

    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.sections.len(), 2);
    assert_eq!(outcome.sections[1].points[0].examples, ["gladio pugnat"]);
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Voice\n40. Passive \xff form\n").unwrap();

    let outcome = extract_sections(file.path(), &LatinAppendix).unwrap();

    assert_eq!(outcome.sections[0].points[0].title, "Passive \u{fffd} form");
}

#[test]
fn test_byte_order_mark_is_stripped() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\xef\xbb\xbf1. Agreement of Verb\nThe verb agrees.\nVoice\n40. Passive\n")
        .unwrap();

    assert!(read_source(file.path()).unwrap().starts_with("1. Agreement"));

    let outcome = extract_sections(file.path(), &LatinAppendix).unwrap();
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.sections.len(), 2);
    assert_eq!(outcome.sections[0].points[0].title, "Agreement of Verb");
}

#[test]
fn test_missing_source_is_io_error() {
    let dir = TempDir::new().unwrap();

    let err = extract_sections(&dir.path().join("absent.txt"), &LatinAppendix).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_load_distinguishes_failure_from_empty() {
    let dir = TempDir::new().unwrap();

    assert!(matches!(
        load_appendix(&dir.path().join("missing.json")),
        Load::Failed(_)
    ));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "{ not json").unwrap();
    assert!(matches!(load_appendix(&garbage), Load::Failed(_)));

    let empty = dir.path().join("empty.json");
    fs::write(&empty, "[]").unwrap();
    assert!(matches!(load_appendix(&empty), Load::Empty));

    let full = dir.path().join("full.json");
    write_appendix(&parse_document(SOURCE, &LatinAppendix), &full).unwrap();
    match load_appendix(&full) {
        Load::Ready(sections) => assert_eq!(sections.len(), 2),
        other => panic!("expected sections, got {other:?}"),
    }
}

#[test]
fn test_missing_optional_fields_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sparse.json");
    fs::write(&path, r#"[{"title":"Voice","points":[{"number":"40","title":"Passive"}]}]"#).unwrap();

    let sections = read_appendix(&path).unwrap();

    assert_eq!(sections[0].points[0].description, "");
    assert!(sections[0].points[0].tags.is_empty());
}
