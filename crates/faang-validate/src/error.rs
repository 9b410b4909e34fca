//! Error types for the checks engine.
//!
//! Only infrastructure failures are errors here. Content findings (missing
//! recommended fields, label mismatches, sentinels, breed mismatches) are
//! data in the issue tree, never `Err`.

use std::path::PathBuf;

use faang_model::ModelError;
use faang_rules::RulesError;
use thiserror::Error;

/// Failure that aborts the pass of one record type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Rule schema could not be fetched or is malformed.
    #[error("rule schema failure: {0}")]
    Schema(#[from] RulesError),

    /// Submitted records could not be shaped.
    #[error("malformed records: {0}")]
    Records(#[from] ModelError),
}

impl ValidationError {
    /// True when the failure comes from the rule schemas rather than the data.
    pub fn is_schema_failure(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// A user-facing hint for fixing this failure.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Schema(_) => "Check that the rule schemas for this record type are available.",
            Self::Records(_) => "Check that every field holds a value-unit object or a list of them.",
        }
    }
}

/// Failure of an ontology collaborator. The engine degrades on these:
/// unresolved terms are reported as missing labels.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OntologyError {
    #[error("failed to read ontology data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ontology data {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("ontology service unavailable: {message}")]
    Unavailable { message: String },
}

/// Result type alias for check runs.
pub type Result<T> = std::result::Result<T, ValidationError>;
