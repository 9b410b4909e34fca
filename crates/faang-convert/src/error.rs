//! Error types for BioSamples conversion.

use std::path::PathBuf;

use faang_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConversionError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("record '{record}' has neither an organism nor a derived_from link")]
    MissingOrganism { record: String },

    #[error("record '{record}' has organism term '{term}' without a numeric taxon id")]
    MalformedTerm { record: String, term: String },

    /// A `derived_from` chain that loops or ends at an unknown record.
    #[error("cannot resolve the organism of '{record}' through {}", chain.join(" -> "))]
    UnresolvableReferenceChain { record: String, chain: Vec<String> },

    /// Two samples resolve to the same alias, so `derived_from` links to it
    /// are ambiguous.
    #[error("alias '{alias}' is used by both {first} and {second} records")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("BioSamples accession '{accession}' could not be resolved")]
    UnknownAccession { accession: String },

    #[error("failed to read BioSamples data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("BioSamples data {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConversionError {
    /// A user-facing hint for fixing this failure.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MissingOrganism { .. } | Self::UnresolvableReferenceChain { .. } => {
                Some("Link every sample to an organism record through derived_from.")
            }
            Self::DuplicateAlias { .. } => {
                Some("Give every sample a unique sample_name.")
            }
            Self::UnknownAccession { .. } => {
                Some("Check the accession, or pass a BioSamples taxon file.")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
