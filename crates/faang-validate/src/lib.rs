//! Warnings and additional checks for FAANG metadata.
//!
//! Runs after schema validation and reports soft-quality issues and a few
//! hard constraints the schemas cannot express:
//!
//! - **Recommended fields**: warns about recommended fields left out
//! - **Ontology labels**: compares free text with the label of its term
//! - **Dates**: checks date values against their declared units
//! - **Missing values**: flags sentinels the field's obligation tier disallows
//! - **Breeds**: checks an organism's breed belongs to its species
//!
//! # Example
//!
//! ```ignore
//! use faang_validate::ChecksRunner;
//!
//! let runner = ChecksRunner::new(&catalog, &config, &rule_set).with_ontology(&labels);
//! let outcome = runner.run(&submission, RulesType::Samples);
//! for (record_type, report) in &outcome.reports {
//!     println!("{record_type}: {} warnings", report.warning_count());
//! }
//! ```

#![deny(unsafe_code)]

pub mod checks;
pub mod error;
pub mod issue;
pub mod ontology;
pub mod orchestrator;
pub mod report;
pub mod walker;

pub use error::{OntologyError, Result, ValidationError};
pub use issue::Issue;
pub use ontology::{
    OntologyHierarchy, OntologyLookup, StaticOntologyIndex, SubclassValidator, collect_term_ids,
};
pub use orchestrator::ChecksRunner;
pub use report::{ChecksOutcome, RecordTypeReport};
pub use walker::{RecordTypeRules, WalkContext, walk, walk_record};
