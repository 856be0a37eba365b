//! Library error type
//!
//! Hard errors are reserved for construction-time contract violations:
//! malformed pattern tables, duplicate herbs in a taxonomy table, and
//! interactions naming substances that were never registered.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApothecaryError {
    #[error("invalid pattern for rule '{rule}': {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("duplicate herb '{name}' in {table} table")]
    DuplicateHerb { name: String, table: &'static str },

    #[error("interaction references unknown substance '{0}'")]
    UnknownSubstance(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ApothecaryError>;
