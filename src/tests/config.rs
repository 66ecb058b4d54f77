use super::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_without_file() {
    let dir = TempDir::new().unwrap();

    let cfg = Config::load_from(&dir.path().join("appendix.toml"));

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.output, "grammar_appendix.json");
    assert_eq!(cfg.wrap_width, 100);
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appendix.toml");
    fs::write(&path, "output = \"public/appendix.json\"\nwrap_width = 72\n").unwrap();

    let cfg = Config::load_from(&path);

    assert_eq!(cfg.output, "public/appendix.json");
    assert_eq!(cfg.wrap_width, 72);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appendix.toml");
    fs::write(&path, "wrap_width = 80\n").unwrap();

    let cfg = Config::load_from(&path);

    assert_eq!(cfg.output, "grammar_appendix.json");
    assert_eq!(cfg.wrap_width, 80);
}
