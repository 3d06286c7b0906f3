//! Tests for error classification and display.

use super::*;

#[test]
fn config_errors_are_classified_as_config() {
    assert!(LangStatsError::Config("bad".to_string()).is_config());
    assert!(LangStatsError::MissingEnv("GITHUB_TOKEN").is_config());
}

#[test]
fn runtime_errors_are_not_config() {
    assert!(!LangStatsError::Http("timeout".to_string()).is_config());
    assert!(!LangStatsError::Api("bad query".to_string()).is_config());
    assert!(!LangStatsError::Io(std::io::Error::other("disk")).is_config());
}

#[test]
fn missing_env_names_the_variable() {
    let err = LangStatsError::MissingEnv("GITHUB_TOKEN");
    assert_eq!(
        err.to_string(),
        "Missing required environment variable: GITHUB_TOKEN"
    );
}

#[test]
fn api_error_surfaces_payload_message() {
    let err = LangStatsError::Api("Could not resolve to a User".to_string());
    assert!(err.to_string().contains("Could not resolve to a User"));
}
