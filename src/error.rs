//! Error types for ttsolve

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// ttsolve errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported variable count: {got} (expected {min} to {max})")]
    UnsupportedVariableCount { got: usize, min: usize, max: usize },

    #[error("Output vector has {got} entries, expected {expected}")]
    OutputLength { expected: usize, got: usize },

    #[error("Output {index} is {value}, expected 0 or 1")]
    OutputValue { index: usize, value: u8 },

    #[error("Parse error: {0}")]
    Parse(String),

    /// The cover selector ran out of implicants before every required
    /// minterm was covered. This is an internal invariant violation.
    #[error("Internal error: no prime implicant covers minterms {minterms:?}")]
    UncoveredMinterms { minterms: Vec<usize> },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
