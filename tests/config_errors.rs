use std::io::Write;

use tempfile::NamedTempFile;
use watchr::config::load_and_validate;
use watchr::errors::WatchrError;

fn config_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn quiet_with_verbose_returns_config_error() {
    let file = config_file(
        ".toml",
        r#"
quiet = true
verbose = true

[[files]]
path = "f.txt"
"#,
    );

    match load_and_validate(file.path()) {
        Err(WatchrError::Config(msg)) => assert!(msg.contains("mutually exclusive")),
        Err(e) => panic!("Expected Config error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn no_files_returns_config_error() {
    let file = config_file(".json", r#"{"verbose": true, "files": []}"#);

    match load_and_validate(file.path()) {
        Err(WatchrError::Config(msg)) => assert!(msg.contains("at least one")),
        Err(e) => panic!("Expected Config error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn missing_path_field_is_a_parse_error() {
    let file = config_file(".yaml", "files:\n  - cmd: make\n");

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, WatchrError::Yaml(_)));
    assert!(err.is_config());
}

#[test]
fn unknown_failure_policy_is_a_parse_error() {
    let file = config_file(
        ".toml",
        r#"
on_failure = "restart"

[[files]]
path = "f.txt"
"#,
    );

    let err = load_and_validate(file.path()).unwrap_err();
    assert!(matches!(err, WatchrError::Toml(_)));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_and_validate(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, WatchrError::Io(_)));
}
