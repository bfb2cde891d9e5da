//! Error types for typesmith
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for typesmith
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Validation Errors
    // ============================================================================
    #[error("JSON did not decode to an object or an array of objects: {snippet}")]
    BadJsonDecode { snippet: String },

    #[error("Invalid character(s) found in class name \"{name}\"")]
    InvalidClassName { name: String },

    #[error("Invalid character(s) found in namespace \"{namespace}\"")]
    InvalidNamespace { namespace: String },

    #[error("Access level \"{level}\" is not allowed. Only: {allowed}")]
    InvalidAccessLevel { level: String, allowed: String },

    // ============================================================================
    // Parse Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Template Errors
    // ============================================================================
    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Template registration failed: {0}")]
    TemplateRegister(#[from] handlebars::TemplateError),

    #[error("Template render failed: {0}")]
    TemplateRender(#[from] handlebars::RenderError),

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Directory is not writable: \"{path}\"")]
    NotWritable { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a bad-decode error, keeping a short snippet of the offending input
    pub fn bad_json(input: &str) -> Self {
        let snippet: String = input.chars().take(80).collect();
        Self::BadJsonDecode { snippet }
    }

    /// Create an invalid class name error
    pub fn invalid_class_name(name: impl Into<String>) -> Self {
        Self::InvalidClassName { name: name.into() }
    }

    /// Create an invalid namespace error
    pub fn invalid_namespace(namespace: impl Into<String>) -> Self {
        Self::InvalidNamespace {
            namespace: namespace.into(),
        }
    }

    /// Create an invalid access level error
    pub fn invalid_access_level(level: impl Into<String>, allowed: &[&str]) -> Self {
        Self::InvalidAccessLevel {
            level: level.into(),
            allowed: allowed.join(", "),
        }
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Create a not-writable error
    pub fn not_writable(path: impl Into<String>) -> Self {
        Self::NotWritable { path: path.into() }
    }
}

/// Result type alias for typesmith
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_class_name("9Lives");
        assert_eq!(
            err.to_string(),
            "Invalid character(s) found in class name \"9Lives\""
        );

        let err = Error::invalid_access_level("root", &["private", "protected", "public"]);
        assert_eq!(
            err.to_string(),
            "Access level \"root\" is not allowed. Only: private, protected, public"
        );

        let err = Error::not_writable("/no/such/dir");
        assert_eq!(
            err.to_string(),
            "Directory is not writable: \"/no/such/dir\""
        );
    }

    #[test]
    fn test_bad_json_snippet_is_truncated() {
        let input = "x".repeat(500);
        let err = Error::bad_json(&input);
        match err {
            Error::BadJsonDecode { snippet } => assert_eq!(snippet.len(), 80),
            other => panic!("unexpected error: {other}"),
        }
    }
}
