//! Validation issue types.
//!
//! Each variant carries only the data its message needs. The walker renders
//! issues to strings when filing them into the issue tree.

use faang_model::Severity;
use serde::{Deserialize, Serialize};

/// A finding of one of the per-field checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    // Presence checks
    /// Per-field note for a recommended field left out
    RecommendedNotProvided { field: String },
    /// Section-level summary of every recommended field left out
    RecommendedMissing { fields: Vec<String> },

    // Terminology checks
    /// No label known for the term within the accepted sources
    OntologyLabelNotFound {
        field: String,
        term: String,
        sources: Vec<String>,
    },
    /// Free text does not match the term's label
    OntologyLabelMismatch {
        field: String,
        provided: String,
        expected: String,
        term: String,
    },

    // Format checks
    /// Date value does not parse with its declared units
    DateUnitsMismatch {
        field: String,
        units: String,
        value: String,
    },

    // Missing-value checks
    /// A sentinel such as "not collected" in a field whose tier disallows it
    MissingValue {
        field: String,
        key: String,
        severity: Severity,
    },

    // Consistency checks
    /// Breed term outside the breed branch of the organism's species
    BreedMismatch { breed: String, species: String },
}

impl Issue {
    /// Field the issue is attached to, when there is exactly one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Issue::RecommendedNotProvided { field }
            | Issue::OntologyLabelNotFound { field, .. }
            | Issue::OntologyLabelMismatch { field, .. }
            | Issue::DateUnitsMismatch { field, .. }
            | Issue::MissingValue { field, .. } => Some(field),
            Issue::BreedMismatch { .. } => Some("organism"),
            Issue::RecommendedMissing { .. } => None,
        }
    }

    /// Severity for this issue type.
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingValue { severity, .. } => *severity,
            Issue::BreedMismatch { .. } => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::RecommendedNotProvided { .. } => {
                "This item is recommended but was not provided".to_string()
            }

            Issue::RecommendedMissing { fields } => {
                format!("Couldn't find these recommended fields: {}", fields.join(", "))
            }

            Issue::OntologyLabelNotFound { term, sources, .. } => {
                if sources.is_empty() {
                    format!("Couldn't find label in OLS for term '{term}'")
                } else {
                    format!(
                        "Couldn't find label in OLS with these ontology names: {}",
                        sources.join(", ")
                    )
                }
            }

            Issue::OntologyLabelMismatch {
                provided,
                expected,
                term,
                ..
            } => {
                format!(
                    "Provided value '{provided}' doesn't precisely match '{expected}' for term '{term}'"
                )
            }

            Issue::DateUnitsMismatch { units, value, .. } => {
                format!("Date units: {units} should be consistent with date value: {value}")
            }

            Issue::MissingValue { field, key, .. } => {
                format!(
                    "Field '{key}' of '{field}' contains missing value that is not appropriate for this field"
                )
            }

            Issue::BreedMismatch { breed, species } => {
                format!("Breed '{breed}' doesn't match the animal specie: '{species}'")
            }
        }
    }
}
