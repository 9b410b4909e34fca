//! Per-record issue tree.

use serde::{Deserialize, Serialize};

use crate::enums::{Section, Severity};

/// Errors and warnings of one section, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueBucket {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl IssueBucket {
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        match severity {
            Severity::Error => self.errors.push(message.into()),
            Severity::Warning => self.warnings.push(message.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Issues found for one record, grouped by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTree {
    /// Resolved display name of the record.
    pub name: String,
    pub core: IssueBucket,
    #[serde(rename = "type")]
    pub type_fields: IssueBucket,
    pub custom: IssueBucket,
}

impl IssueTree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn bucket(&self, section: Section) -> &IssueBucket {
        match section {
            Section::Core => &self.core,
            Section::Type => &self.type_fields,
            Section::Custom => &self.custom,
        }
    }

    pub fn bucket_mut(&mut self, section: Section) -> &mut IssueBucket {
        match section {
            Section::Core => &mut self.core,
            Section::Type => &mut self.type_fields,
            Section::Custom => &mut self.custom,
        }
    }

    pub fn error_count(&self) -> usize {
        self.core.errors.len() + self.type_fields.errors.len() + self.custom.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.core.warnings.len() + self.type_fields.warnings.len() + self.custom.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
