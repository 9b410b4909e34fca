//! Missing-value sentinels.

use faang_model::{AnnotatedSection, FieldAddress, FieldSet};
use faang_rules::{FieldClassification, MissingValues};

use crate::issue::Issue;

/// Flag sentinel strings that the field's obligation tier does not allow.
///
/// Every string sub-key of every reading is compared. Mandatory-tier hits
/// are errors, the other tiers give warnings. Fields outside the
/// classification are not checked. List readings are addressed by field
/// name and element index.
pub fn check(
    fields: &FieldSet,
    classification: &FieldClassification,
    missing_values: &MissingValues,
    annotations: &mut AnnotatedSection,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (name, value) in fields.iter() {
        let Some(tier) = classification.tier_of(name) else {
            continue;
        };
        let sentinels = missing_values.for_tier(tier);

        for (position, unit) in value.units() {
            for (key, entry) in unit.entries() {
                let Some(severity) = sentinels.classify(entry) else {
                    continue;
                };
                let issue = Issue::MissingValue {
                    field: name.to_string(),
                    key: key.to_string(),
                    severity,
                };
                annotations.annotate(
                    &FieldAddress::element(name, position),
                    severity,
                    issue.message(),
                );
                issues.push(issue);
            }
        }
    }

    issues
}
