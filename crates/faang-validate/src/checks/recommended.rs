//! Recommended field presence.

use faang_model::{AnnotatedSection, FieldAddress, FieldSet, Severity};
use faang_rules::FieldClassification;

use crate::issue::Issue;

/// Warn about recommended fields absent from the section.
///
/// Each absent field gets a note on its own node; the section bucket gets
/// one combined warning naming them all.
pub fn check(
    fields: &FieldSet,
    classification: &FieldClassification,
    annotations: &mut AnnotatedSection,
) -> Vec<Issue> {
    let missing: Vec<String> = classification
        .recommended
        .iter()
        .filter(|name| !fields.contains(name))
        .cloned()
        .collect();

    if missing.is_empty() {
        return Vec::new();
    }

    for field in &missing {
        let note = Issue::RecommendedNotProvided {
            field: field.clone(),
        };
        annotations.annotate(&FieldAddress::field(field), Severity::Warning, note.message());
    }

    vec![Issue::RecommendedMissing { fields: missing }]
}
