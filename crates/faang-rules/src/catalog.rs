//! Record-type catalog.
//!
//! Which record types each rules domain accepts, and the URLs of the rule
//! schemas describing them. The default catalog is embedded at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// Default catalog.
pub const DEFAULT_RECORD_TYPES: &str = include_str!("../data/record_types.toml");

/// Rules domain of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesType {
    Samples,
    Experiments,
    Analyses,
}

impl RulesType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RulesType::Samples => "samples",
            RulesType::Experiments => "experiments",
            RulesType::Analyses => "analyses",
        }
    }
}

impl fmt::Display for RulesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RulesType {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "samples" => Ok(RulesType::Samples),
            "experiments" => Ok(RulesType::Experiments),
            "analyses" => Ok(RulesType::Analyses),
            _ => Err(RulesError::UnknownRulesType {
                name: s.to_string(),
            }),
        }
    }
}

/// Which schema fragments a record type is described by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaLayout {
    TypeOnly,
    TypeCore,
    TypeCoreModule,
}

impl SchemaLayout {
    pub fn has_core(&self) -> bool {
        matches!(self, SchemaLayout::TypeCore | SchemaLayout::TypeCoreModule)
    }

    pub fn has_module(&self) -> bool {
        matches!(self, SchemaLayout::TypeCoreModule)
    }
}

/// One accepted record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTypeSpec {
    pub name: String,
    pub url: String,
    pub layout: SchemaLayout,
    #[serde(default)]
    pub module_url: Option<String>,
}

/// Settings shared by every record type of a rules domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesDomain {
    /// Key of the core sub-record in submitted records.
    #[serde(default)]
    pub core_key: Option<String>,
    #[serde(default)]
    pub core_url: Option<String>,
    /// Field holding a record's display name.
    pub name_field: String,
    #[serde(default)]
    pub record_types: Vec<RecordTypeSpec>,
}

impl RulesDomain {
    pub fn record_type(&self, name: &str) -> Option<&RecordTypeSpec> {
        self.record_types.iter().find(|spec| spec.name == name)
    }
}

/// Record types per rules domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTypeCatalog {
    pub samples: RulesDomain,
    pub experiments: RulesDomain,
    pub analyses: RulesDomain,
}

impl RecordTypeCatalog {
    /// Catalog embedded in the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(DEFAULT_RECORD_TYPES)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| RulesError::Config {
            what: "record type catalog",
            source,
        })
    }

    pub fn domain(&self, rules_type: RulesType) -> &RulesDomain {
        match rules_type {
            RulesType::Samples => &self.samples,
            RulesType::Experiments => &self.experiments,
            RulesType::Analyses => &self.analyses,
        }
    }
}
