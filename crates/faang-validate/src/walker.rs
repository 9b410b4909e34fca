//! Record walker.
//!
//! Runs the section checkers over every record of one record type and
//! builds the issue tree and annotated copy of each record side by side.

use faang_model::{AnnotatedRecord, FieldSet, IssueTree, OntologyIndex, Record, Section};
use faang_rules::{CheckConfig, FieldClassification};
use tracing::trace;

use crate::checks;
use crate::checks::breeds::ORGANISM_RECORD_TYPE;
use crate::issue::Issue;
use crate::ontology::SubclassValidator;
use crate::report::RecordTypeReport;

/// Classified rules of one record type.
#[derive(Debug, Clone, Copy)]
pub struct RecordTypeRules<'a> {
    pub record_type: &'a str,
    /// Field holding the record's display name.
    pub name_field: &'a str,
    /// Key the core section is stored under, when the domain has one.
    pub core_key: Option<&'a str>,
    pub type_fields: &'a FieldClassification,
    /// `None` when the record type has no core schema; core checks are
    /// skipped then.
    pub core_fields: Option<&'a FieldClassification>,
}

/// Read-only inputs shared by every record of a run.
#[derive(Clone, Copy)]
pub struct WalkContext<'a> {
    pub index: &'a OntologyIndex,
    pub config: &'a CheckConfig,
    /// Breed checks are skipped without one.
    pub subclass: Option<&'a dyn SubclassValidator>,
}

/// Check every record, in input order.
pub fn walk(records: &[Record], rules: &RecordTypeRules<'_>, ctx: &WalkContext<'_>) -> RecordTypeReport {
    let mut report = RecordTypeReport::default();
    for (index, record) in records.iter().enumerate() {
        let (issues, annotated) = walk_record(index, record, rules, ctx);
        report.issues.push(issues);
        report.annotated.push(annotated);
    }
    report
}

/// Check one record. `index` is its zero-based position.
pub fn walk_record(
    index: usize,
    record: &Record,
    rules: &RecordTypeRules<'_>,
    ctx: &WalkContext<'_>,
) -> (IssueTree, AnnotatedRecord) {
    let name = record.display_name(rules.name_field, index);
    trace!(record = %name, "checking record");

    let mut tree = IssueTree::new(name);
    let mut annotated = AnnotatedRecord::from_record(record, rules.core_key);
    let missing_values = &ctx.config.missing_values;

    // Core section
    if let Some(core_fields) = rules.core_fields {
        let empty = FieldSet::new();
        let fields = record.core.as_ref().unwrap_or(&empty);
        let issues = checks::run_all(
            fields,
            core_fields,
            ctx.index,
            missing_values,
            annotated.section_mut(Section::Core),
        );
        file_issues(&mut tree, Section::Core, &issues);
    }

    // Type section
    let mut issues = checks::run_all(
        &record.fields,
        rules.type_fields,
        ctx.index,
        missing_values,
        annotated.section_mut(Section::Type),
    );
    if rules.record_type == ORGANISM_RECORD_TYPE
        && let Some(subclass) = ctx.subclass
    {
        issues.extend(checks::breeds::check(
            &record.fields,
            ctx.config,
            subclass,
            annotated.section_mut(Section::Type),
        ));
    }
    file_issues(&mut tree, Section::Type, &issues);

    // Custom section
    let issues = checks::run_custom(
        &record.custom,
        ctx.index,
        annotated.section_mut(Section::Custom),
    );
    file_issues(&mut tree, Section::Custom, &issues);

    (tree, annotated)
}

fn file_issues(tree: &mut IssueTree, section: Section, issues: &[Issue]) {
    let bucket = tree.bucket_mut(section);
    for issue in issues {
        bucket.push(issue.severity(), issue.message());
    }
}
