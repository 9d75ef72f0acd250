//! Tests for the session error type.

use crate::error::Error;

#[test]
fn test_error_display() {
    let err = Error::NodeExists("A".to_string());
    assert_eq!(err.to_string(), "Node 'A' already exists");

    let err = Error::NodeNotFound("ghost".to_string());
    assert_eq!(err.to_string(), "Node 'ghost' does not exist");

    let err = Error::EdgeExists("A".to_string(), "B".to_string());
    assert_eq!(err.to_string(), "Edge A → B already exists");

    assert_eq!(Error::EmptyNodeName.to_string(), "Node name cannot be empty");
}

#[test]
fn test_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("JSON error:"));
}
