//! Unit tests for error construction and classification.

use std::error::Error as _;

use rstest::rstest;

use super::{ConfigError, ErrorKind};

#[rstest]
#[case::unsupported(ConfigError::unsupported_format("a.none"), ErrorKind::UnsupportedFormat)]
#[case::not_found(ConfigError::file_not_found("a.ini"), ErrorKind::FileNotFound)]
#[case::content(ConfigError::invalid_content("a.json", "boom"), ErrorKind::InvalidContent)]
#[case::file(
    ConfigError::file("a.toml", std::io::Error::other("denied")),
    ErrorKind::File
)]
#[case::record(ConfigError::invalid_record("not a map"), ErrorKind::InvalidRecord)]
fn constructors_report_their_kind(#[case] err: ConfigError, #[case] expected: ErrorKind) {
    assert_eq!(err.kind(), expected);
}

#[test]
fn messages_name_the_path() {
    let missing = ConfigError::file_not_found("conf/app.ini");
    assert_eq!(missing.to_string(), "File 'conf/app.ini' not exists");

    let unsupported = ConfigError::unsupported_format("conf/app.none");
    assert_eq!(
        unsupported.to_string(),
        "File 'conf/app.none' type not supported"
    );
}

#[test]
fn invalid_content_keeps_parser_message_as_source() {
    let err = ConfigError::invalid_content("a.ini", "line 3: expected '='");
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("line 3: expected '='"));
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn serde_errors_convert_to_extract() {
    let Err(source) = serde_json::from_str::<u8>("\"x\"") else {
        panic!("expected a deserialisation failure");
    };
    let err = ConfigError::from(source);
    assert_eq!(err.kind(), ErrorKind::Extract);
}
