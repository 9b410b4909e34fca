//! Data model for FAANG metadata submissions.
//!
//! Records arrive as schema-described JSON. This crate gives them a typed
//! shape ([`Record`], [`FieldSet`], [`FieldValue`], [`ValueUnit`]) and defines
//! the outputs produced by the validation engine: the per-record
//! [`IssueTree`] and the positionally annotated [`AnnotatedRecord`].

pub mod annotated;
pub mod enums;
pub mod error;
pub mod issues;
pub mod ontology;
pub mod record;
pub mod value;

pub use annotated::{AnnotatedField, AnnotatedRecord, AnnotatedSection, AnnotatedValue, FieldAddress};
pub use enums::{Obligation, Section, Severity};
pub use error::{ModelError, Result};
pub use issues::{IssueBucket, IssueTree};
pub use ontology::{OntologyIndex, OntologyLabel};
pub use record::{FieldSet, Record, Submission};
pub use value::{FieldValue, ValueUnit};
