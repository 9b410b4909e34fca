//! Check configuration: skip-list, missing-value sentinels and the
//! species to breed-branch table.
//!
//! Loaded once per process and passed to the checkers by reference.

use std::collections::{BTreeMap, BTreeSet};

use faang_model::{Obligation, Severity};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// Default check configuration.
pub const DEFAULT_CHECKS: &str = include_str!("../data/checks.toml");

/// Sentinels reported as errors and as warnings for one obligation tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentinelList {
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl SentinelList {
    /// Severity a value earns under this tier, if it is a sentinel.
    pub fn classify(&self, value: &str) -> Option<Severity> {
        let normalized = value.trim().to_lowercase();
        if self.errors.iter().any(|sentinel| sentinel == &normalized) {
            Some(Severity::Error)
        } else if self.warnings.iter().any(|sentinel| sentinel == &normalized) {
            Some(Severity::Warning)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingValues {
    pub mandatory: SentinelList,
    pub recommended: SentinelList,
    pub optional: SentinelList,
}

impl MissingValues {
    pub fn for_tier(&self, tier: Obligation) -> &SentinelList {
        match tier {
            Obligation::Mandatory => &self.mandatory,
            Obligation::Recommended => &self.recommended,
            Obligation::Optional => &self.optional,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Schema properties that are structure, not data.
    pub skip_properties: BTreeSet<String>,
    pub missing_values: MissingValues,
    /// Species ontology term to the breed-ontology superclass of its breeds.
    #[serde(default)]
    pub species_breeds: BTreeMap<String, String>,
}

impl CheckConfig {
    /// Configuration embedded in the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(DEFAULT_CHECKS)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: CheckConfig = toml::from_str(text).map_err(|source| RulesError::Config {
            what: "check",
            source,
        })?;
        config.normalize();
        Ok(config)
    }

    pub fn is_skipped(&self, property: &str) -> bool {
        self.skip_properties.contains(property)
    }

    pub fn breed_branch(&self, species_term: &str) -> Option<&str> {
        self.species_breeds.get(species_term).map(String::as_str)
    }

    fn normalize(&mut self) {
        for list in [
            &mut self.missing_values.mandatory,
            &mut self.missing_values.recommended,
            &mut self.missing_values.optional,
        ] {
            for sentinel in list.errors.iter_mut().chain(list.warnings.iter_mut()) {
                *sentinel = sentinel.trim().to_lowercase();
            }
        }
    }
}
