//! Per-record-type results.

use std::collections::BTreeMap;

use faang_model::{AnnotatedRecord, IssueTree};
use faang_rules::SchemaFragment;
use serde::Serialize;

use crate::error::ValidationError;

/// Issue trees and annotated records of one record type, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordTypeReport {
    pub issues: Vec<IssueTree>,
    pub annotated: Vec<AnnotatedRecord>,
    /// Module fragment of record types that have one. No check reads it.
    #[serde(skip)]
    pub module: Option<SchemaFragment>,
}

impl RecordTypeReport {
    pub fn record_count(&self) -> usize {
        self.issues.len()
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().map(IssueTree::error_count).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.iter().map(IssueTree::warning_count).sum()
    }

    /// Records with at least one error.
    pub fn failing_records(&self) -> usize {
        self.issues.iter().filter(|tree| tree.has_errors()).count()
    }
}

/// Result of a whole checks run.
///
/// A record type appears in at most one of the two maps. Types absent from
/// the submission appear in neither.
#[derive(Debug, Default)]
pub struct ChecksOutcome {
    pub reports: BTreeMap<String, RecordTypeReport>,
    pub failures: BTreeMap<String, ValidationError>,
}

impl ChecksOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.reports.values().all(|report| report.error_count() == 0)
    }

    pub fn error_count(&self) -> usize {
        self.reports.values().map(RecordTypeReport::error_count).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.reports.values().map(RecordTypeReport::warning_count).sum()
    }
}
