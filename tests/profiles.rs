//! Integration tests for TOML normalizer profiles.

use std::path::Path;

use levitate_strings::{ConfigError, Normalized, ProfileSet, SeparatorSpaceFlags};
use tempfile::TempDir;

fn write_config(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_merges_in_order() {
    let dir = TempDir::new().unwrap();
    let system = write_config(
        dir.path(),
        "system.toml",
        r#"
default_profile = "deps"

[profiles.deps]
separator = ","
space = "none"

[profiles.attributes]
suffix = "Attribute"
"#,
    );
    let user = write_config(
        dir.path(),
        "user.toml",
        r#"
[profiles.deps]
space = "after|before"
"#,
    );

    let set = ProfileSet::load_from(&[system, user]).unwrap();
    let deps = set.get("deps").unwrap();
    assert_eq!(deps.separator, ",");
    assert_eq!(
        deps.space,
        SeparatorSpaceFlags::ADD_SPACE_AFTER | SeparatorSpaceFlags::ADD_SPACE_BEFORE
    );

    let out = set.default_profile().apply("zlib,openssl").unwrap();
    assert_eq!(out.value(), "zlib , openssl");

    match set.get("attributes").unwrap().apply("Obsolete").unwrap() {
        Normalized::Suffixed(values) => {
            assert_eq!(values.compare_items(), ["ObsoleteAttribute", "Obsolete"]);
        }
        Normalized::Plain(_) => panic!("expected suffixed values"),
    }
}

#[test]
fn test_missing_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    let set = ProfileSet::load_from(&[dir.path().join("absent.toml")]).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.default_profile().apply("a,b").unwrap().value(), "a, b");
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let bad = write_config(dir.path(), "bad.toml", "[profiles.x\nseparator = ");

    let err = ProfileSet::load_from(&[bad]).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_unreadable_path_is_read_error() {
    let dir = TempDir::new().unwrap();
    // A directory exists but cannot be read as a file.
    let err = ProfileSet::load_from(&[dir.path().to_path_buf()]).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
