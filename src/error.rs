//! Error types for settings structure assembly and parsing.

use thiserror::Error;

/// Errors produced while assembling or parsing settings structures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// A value did not match the type or domain an attribute requires.
    #[error("type mismatch at `{path}`: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Dot-joined path to the offending attribute.
        path: String,
        /// Description of the accepted type or domain.
        expected: String,
        /// Display form of the rejected value.
        actual: String,
    },
}

impl SettingsError {
    /// Path to the attribute that caused the error.
    pub fn path(&self) -> &str {
        match self {
            SettingsError::TypeMismatch { path, .. } => path,
        }
    }
}
