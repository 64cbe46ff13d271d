//! Tests for input loading

use std::io::Write;
use std::path::Path;

use super::*;

#[test]
fn test_load_file_returns_raw_bytes() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"a,b\r\n\"c\"\n").unwrap();

    let bytes = load_file(file.path()).unwrap();
    assert_eq!(bytes, b"a,b\r\n\"c\"\n");
}

#[test]
fn test_load_file_does_not_normalize_line_endings() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"x\r\ny\n").unwrap();

    let bytes = load_file(file.path()).unwrap();
    assert_eq!(bytes.iter().filter(|&&b| b == b'\r').count(), 1);
}

#[test]
fn test_load_missing_file_is_an_io_error() {
    let err = load_file(Path::new("definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, CsvInfoError::Io(_)));
}

#[test]
fn test_load_empty_file_yields_no_bytes() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let bytes = load_file(file.path()).unwrap();
    assert!(bytes.is_empty());
}
