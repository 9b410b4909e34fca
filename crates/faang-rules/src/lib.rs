//! FAANG rule schemas.
//!
//! - **Catalog** (`catalog`): record types accepted per rules domain and their schema URLs
//! - **Check configuration** (`config`): skip-list, missing-value sentinels, species/breed table
//! - **Schema fragments** (`schema`): typed view of a rule schema document
//! - **Field classification** (`classify`): obligation tiers and ontology restrictions
//! - **RuleSet accessor** (`ruleset`): URL to document sources and fragment loading

#![deny(unsafe_code)]

pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod ruleset;
pub mod schema;

pub use catalog::{RecordTypeCatalog, RecordTypeSpec, RulesDomain, RulesType, SchemaLayout};
pub use classify::{FieldClassification, classify};
pub use config::{CheckConfig, MissingValues, SentinelList};
pub use error::{Result, RulesError};
pub use ruleset::{
    DirectoryRuleSet, InMemoryRuleSet, RuleSchemas, RuleSetSource, fetch_rule_schemas,
};
pub use schema::{FieldSchema, FieldShape, SchemaFragment};
