use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = FlowDirError::Config("tube 12 is out of range".to_string());
    assert_eq!(err.to_string(), "Configuration error: tube 12 is out of range");
}

#[test]
fn error_display_file_access() {
    let err = FlowDirError::FileAccess {
        path: PathBuf::from(".flowdir.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains(".flowdir.toml"));
}

#[test]
fn error_display_root_not_found() {
    let err = FlowDirError::RootNotFound(PathBuf::from("/data/missing"));
    assert_eq!(err.to_string(), "Root directory not found: /data/missing");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(FlowDirError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        FlowDirError::RootNotFound(PathBuf::from("x")).error_type(),
        "RootNotFound"
    );
    assert_eq!(
        FlowDirError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
    let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
    assert_eq!(FlowDirError::TomlParse(toml_err).error_type(), "Config");
}

#[test]
fn suggestion_config_error() {
    let err = FlowDirError::Config("bad".to_string());
    assert!(err.suggestion().unwrap().contains("config file format"));
}

#[test]
fn suggestion_root_not_found() {
    let err = FlowDirError::RootNotFound(PathBuf::from("/nowhere"));
    assert!(err.suggestion().unwrap().contains("--require-root"));
}

#[test]
fn suggestion_file_access_not_found() {
    let err = FlowDirError::FileAccess {
        path: PathBuf::from("missing.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert!(err.suggestion().unwrap().contains("file path exists"));
}

#[test]
fn suggestion_io_error_permission_denied() {
    let err = FlowDirError::Io(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "denied",
    ));
    assert!(err.suggestion().unwrap().contains("permissions"));
}

#[test]
fn suggestion_io_error_other_has_none() {
    let err = FlowDirError::Io(std::io::Error::other("custom error"));
    assert!(err.suggestion().is_none());
}
