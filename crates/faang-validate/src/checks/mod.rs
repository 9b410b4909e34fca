//! Per-field checkers.
//!
//! Each checker reads one section of a record, files annotations into the
//! section's annotated copy and returns the issues for the section bucket.

pub mod breeds;
pub mod dates;
pub mod missing_values;
pub mod ontology_text;
pub mod recommended;

use faang_model::{AnnotatedSection, FieldSet, OntologyIndex};
use faang_rules::{FieldClassification, MissingValues};

use crate::issue::Issue;

/// Run the section checkers in their fixed order.
pub fn run_all(
    fields: &FieldSet,
    classification: &FieldClassification,
    index: &OntologyIndex,
    missing_values: &MissingValues,
    annotations: &mut AnnotatedSection,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    // 1. Recommended fields left out
    issues.extend(recommended::check(fields, classification, annotations));

    // 2. Free text against ontology labels
    issues.extend(ontology_text::check(
        fields,
        classification,
        index,
        annotations,
    ));

    // 3. Date values against their units
    issues.extend(dates::check(fields, annotations));

    // 4. Missing-value sentinels per obligation tier
    issues.extend(missing_values::check(
        fields,
        classification,
        missing_values,
        annotations,
    ));

    issues
}

/// Checks that apply to the custom section.
///
/// Custom fields are submitter-defined and have no schema, so there are no
/// obligation tiers to check against. Only labels are compared, against any
/// ontology source.
pub fn run_custom(
    fields: &FieldSet,
    index: &OntologyIndex,
    annotations: &mut AnnotatedSection,
) -> Vec<Issue> {
    ontology_text::check(fields, &FieldClassification::default(), index, annotations)
}
