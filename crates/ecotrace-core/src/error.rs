//! Core error types for ecotrace-core.
//!
//! Each concern gets its own thiserror enum; [`CoreError`] wraps them so
//! callers that do not care about the source can use a single type.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::QuestionId;

/// Core error type for ecotrace-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog lookups and answer validation
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Wizard state machine misuse
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed `question=value` answer text
    #[error("Invalid answer '{0}': expected <question>=<integer>")]
    InvalidAnswer(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the question catalog.
///
/// These indicate a caller bug or malformed input, never a user-facing
/// validation state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Step index outside `[0, len)`
    #[error("Step {step} out of range (catalog has {len} steps)")]
    StepOutOfRange { step: i64, len: usize },

    /// Question id not present in the catalog
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    /// Value is not one of the options of a choice question
    #[error("Invalid choice {value} for question {question}")]
    InvalidChoice { question: QuestionId, value: i64 },

    /// Value outside the bounds of a range question
    #[error("Value {value} for question {question} outside [{min}, {max}]")]
    ValueOutOfRange {
        question: QuestionId,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A range-only accessor was used on a choice question
    #[error("Question {0} is not a range question")]
    NotARangeQuestion(QuestionId),
}

/// Errors raised by the wizard controller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    /// Operation not allowed from the current step
    #[error("Cannot {operation} from step {step}")]
    InvalidTransition { operation: &'static str, step: i64 },

    /// Answer rejected by the catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config directory could not be determined or created
    #[error("Cannot prepare config directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
