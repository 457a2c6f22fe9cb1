//! Error handling module for the guardrails wizard
//!
//! The wizard and browser are total functions and never fail. These errors
//! cover the fallible edges: catalog loading and validation, id lookups from
//! user input, and terminal setup.

use thiserror::Error;

/// Main error type for the guardrails wizard
#[derive(Error, Debug)]
pub enum GuardrailError {
    /// IO errors (catalog files, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog integrity errors (dangling or duplicate ids)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A project type id that is not in the catalog
    #[error("Unknown project type: {0}")]
    UnknownProjectType(String),

    /// A technology id that is not in the catalog
    #[error("Unknown technology: {0}")]
    UnknownTechnology(String),

    /// A data category id that is not in the catalog
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for guardrail operations
pub type Result<T> = std::result::Result<T, GuardrailError>;

impl GuardrailError {
    /// Create a catalog integrity error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GuardrailError::catalog("guardrail 'x' references unknown project type 'y'");
        assert_eq!(
            err.to_string(),
            "Catalog error: guardrail 'x' references unknown project type 'y'"
        );

        let err = GuardrailError::UnknownTechnology("cobol".to_string());
        assert_eq!(err.to_string(), "Unknown technology: cobol");
    }

    #[test]
    fn test_every_variant_has_a_prefix() {
        let errors = [
            GuardrailError::catalog("duplicate id 'react'"),
            GuardrailError::UnknownProjectType("desktop".to_string()),
            GuardrailError::UnknownDataType("biometrics".to_string()),
            GuardrailError::terminal("not a tty"),
        ];
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "Catalog error: duplicate id 'react'",
                "Unknown project type: desktop",
                "Unknown data type: biometrics",
                "Terminal error: not a tty",
            ]
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GuardrailError = io_err.into();
        assert!(matches!(err, GuardrailError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: GuardrailError = json_err.into();
        assert!(matches!(err, GuardrailError::Json(_)));
    }
}
