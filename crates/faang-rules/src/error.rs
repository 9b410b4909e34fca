//! Error types for rule schema loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the catalog, the check configuration or a
/// rule schema. Any of these aborts the pass of the record type concerned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RulesError {
    /// Schema file could not be read.
    #[error("failed to read rule schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema document is not valid JSON.
    #[error("rule schema {url} is not valid JSON: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// No schema is known for a URL.
    #[error("no rule schema available for {url}")]
    SchemaNotFound { url: String },

    /// Schema is JSON but not shaped like a rule schema.
    #[error("malformed rule schema: {message}")]
    MalformedSchema { message: String },

    /// Field obligation tag is missing or unknown.
    #[error("field '{field}' has an invalid obligation tag: {message}")]
    InvalidObligation { field: String, message: String },

    /// Record type layout needs a core schema the domain does not declare.
    #[error("record type '{record_type}' needs a core schema but none is configured")]
    MissingCoreUrl { record_type: String },

    /// Record type layout needs a module schema that is not configured.
    #[error("record type '{record_type}' needs a module schema but none is configured")]
    MissingModuleUrl { record_type: String },

    /// Unknown rules domain name.
    #[error("unknown rules type '{name}' (expected samples, experiments or analyses)")]
    UnknownRulesType { name: String },

    /// Catalog or check configuration TOML could not be parsed.
    #[error("invalid {what} configuration: {source}")]
    Config {
        what: &'static str,
        #[source]
        source: toml::de::Error,
    },
}

impl RulesError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSchema {
            message: message.into(),
        }
    }
}

/// Result type for rule schema operations.
pub type Result<T> = std::result::Result<T, RulesError>;
