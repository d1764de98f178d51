//! Tests for parameter validation and parameter-file loading

use filestate_core::{Error, FailureKind, ModuleParams, Outcome, ParamsLoader, run};
use filestate_test_utils::TestDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[rstest]
#[case::no_path(ModuleParams { path: None, content: Some("x".into()), check_mode: false }, "path")]
#[case::empty_path(ModuleParams { path: Some(String::new()), content: Some("x".into()), check_mode: false }, "path")]
#[case::no_content(ModuleParams { path: Some("/tmp/a".into()), content: None, check_mode: false }, "content")]
#[case::nothing(ModuleParams::default(), "path")]
fn test_missing_fields(#[case] params: ModuleParams, #[case] field: &str) {
    let err = params.validate().unwrap_err();
    assert_eq!(err.kind(), FailureKind::Validation);
    match err {
        Error::MissingField { field: f } => assert_eq!(f, field),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn test_validation_failure_touches_nothing() {
    let dir = TestDir::new();
    let outcome = run(ModuleParams {
        path: Some(dir.path_str("never.txt")),
        content: None,
        check_mode: false,
    });

    assert_eq!(
        outcome,
        Outcome::ValidationFailure("missing required argument: content".into())
    );
    dir.assert_not_exists("never.txt");
}

#[rstest]
#[case("params.json", r#"{"path": "/tmp/test.txt", "content": "Hello World!", "check_mode": true}"#)]
#[case("params.yaml", "path: /tmp/test.txt\ncontent: Hello World!\ncheck_mode: true\n")]
#[case("params.yml", "path: /tmp/test.txt\ncontent: Hello World!\ncheck_mode: true\n")]
#[case("params.toml", "path = \"/tmp/test.txt\"\ncontent = \"Hello World!\"\ncheck_mode = true\n")]
fn test_load_formats(#[case] name: &str, #[case] text: &str) {
    let dir = TestDir::new();
    let file = dir.write(name, text);

    let params = ParamsLoader::new().load(&file).unwrap();

    assert_eq!(
        params,
        ModuleParams::new("/tmp/test.txt", "Hello World!").with_check_mode(true)
    );
}

#[test]
fn test_load_defaults_check_mode_to_false() {
    let dir = TestDir::new();
    let file = dir.write("params.json", r#"{"path": "a.txt", "content": ""}"#);

    let request = ParamsLoader::new().load(&file).unwrap().validate().unwrap();

    assert!(!request.dry_run());
    assert_eq!(request.path(), Path::new("a.txt"));
    assert_eq!(request.content(), "");
}

#[test]
fn test_load_yaml_block_content() {
    let dir = TestDir::new();
    let file = dir.write(
        "params.yaml",
        "path: /etc/myapp/config.conf\ncontent: |\n  setting1=value1\n  setting2=value2\n",
    );

    let params = ParamsLoader::new().load(&file).unwrap();

    assert_eq!(
        params.content.as_deref(),
        Some("setting1=value1\nsetting2=value2\n")
    );
}

#[test]
fn test_load_rejects_unknown_keys() {
    let dir = TestDir::new();
    let file = dir.write(
        "params.json",
        r#"{"path": "a.txt", "content": "x", "mode": "0644"}"#,
    );

    let err = ParamsLoader::new().load(&file).unwrap_err();

    assert!(matches!(err, Error::ParamsParse { ref format, .. } if format == "JSON"));
    assert_eq!(err.kind(), FailureKind::Validation);
}

#[test]
fn test_load_malformed_file() {
    let dir = TestDir::new();
    let file = dir.write("params.toml", "path = ");

    let err = ParamsLoader::new().load(&file).unwrap_err();

    assert!(matches!(err, Error::ParamsParse { ref format, .. } if format == "TOML"));
}

#[test]
fn test_load_missing_file_is_io_failure() {
    let dir = TestDir::new();

    let err = ParamsLoader::new()
        .load(&dir.path("absent.json"))
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Io);
}
