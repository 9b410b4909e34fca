//! Small closed vocabularies shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requirement level a schema declares for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Obligation {
    /// Must be provided; missing-value sentinels are errors.
    Mandatory,
    /// Should be provided; absence is a warning.
    Recommended,
    /// May be provided.
    Optional,
}

impl Obligation {
    pub const ALL: [Obligation; 3] = [
        Obligation::Mandatory,
        Obligation::Recommended,
        Obligation::Optional,
    ];

    /// Returns the tag as written in the rule schemas.
    pub fn as_str(&self) -> &'static str {
        match self {
            Obligation::Mandatory => "mandatory",
            Obligation::Recommended => "recommended",
            Obligation::Optional => "optional",
        }
    }
}

impl fmt::Display for Obligation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Obligation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mandatory" => Ok(Obligation::Mandatory),
            "recommended" => Ok(Obligation::Recommended),
            "optional" => Ok(Obligation::Optional),
            _ => Err(format!("Unknown obligation tier: {s}")),
        }
    }
}

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Structurally wrong data or a hard constraint violation
    Error,
    /// Soft quality issue the submitter should review
    Warning,
}

/// Part of a record an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// The shared core sub-record (`samples_core`, `experiments_core`).
    Core,
    /// Fields declared by the record type schema.
    Type,
    /// Submitter-defined fields under `custom`.
    Custom,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Core => "core",
            Section::Type => "type",
            Section::Custom => "custom",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
