//! Free text against ontology labels.

use faang_model::{AnnotatedSection, FieldAddress, FieldSet, OntologyIndex, OntologyLabel};
use faang_rules::FieldClassification;

use crate::issue::Issue;

/// Compare the text of every text+term reading with the term's label.
///
/// Labels are narrowed to the field's accepted ontology sources when it has
/// any. With no label left the reading gets a not-found warning; otherwise
/// its text must match the first remaining label, ignoring case.
pub fn check(
    fields: &FieldSet,
    classification: &FieldClassification,
    index: &OntologyIndex,
    annotations: &mut AnnotatedSection,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (name, value) in fields.iter() {
        let sources = classification.ontology_sources(name);

        for (position, unit) in value.units() {
            let Some((text, term)) = unit.ontology_pair() else {
                continue;
            };

            let candidate = index.labels(term).iter().find(|label| {
                sources.is_none_or(|sources| sources.contains(&label.ontology_name.to_lowercase()))
            });

            let issue = match candidate {
                None => Issue::OntologyLabelNotFound {
                    field: name.to_string(),
                    term: term.to_string(),
                    sources: sources
                        .map(|sources| sources.iter().cloned().collect())
                        .unwrap_or_default(),
                },
                Some(OntologyLabel { label, .. }) if !labels_match(text, label) => {
                    Issue::OntologyLabelMismatch {
                        field: name.to_string(),
                        provided: text.to_string(),
                        expected: label.clone(),
                        term: term.to_string(),
                    }
                }
                Some(_) => continue,
            };

            annotations.annotate(
                &FieldAddress::element(name, position),
                issue.severity(),
                issue.message(),
            );
            issues.push(issue);
        }
    }

    issues
}

fn labels_match(text: &str, label: &str) -> bool {
    text.trim().to_lowercase() == label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use faang_model::{FieldValue, ValueUnit};

    fn blood_index() -> OntologyIndex {
        let mut index = OntologyIndex::new();
        index.insert(
            "UBERON:0000178",
            vec![OntologyLabel::new("uberon", "blood")],
        );
        index
    }

    fn single(field: &str, text: &str, term: &str) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.insert(field, FieldValue::Scalar(ValueUnit::ontology(text, term)));
        fields
    }

    #[test]
    fn test_match_ignores_case() {
        let fields = single("organism_part", "Blood", "UBERON:0000178");
        let mut annotations = AnnotatedSection::from_fields(&fields);

        let issues = check(
            &fields,
            &FieldClassification::default(),
            &blood_index(),
            &mut annotations,
        );

        assert!(issues.is_empty());
        assert_eq!(annotations.annotation_count(), 0);
    }

    #[test]
    fn test_mismatch_quotes_text_label_and_term() {
        let fields = single("organism_part", "plasma", "UBERON:0000178");
        let mut annotations = AnnotatedSection::from_fields(&fields);

        let issues = check(
            &fields,
            &FieldClassification::default(),
            &blood_index(),
            &mut annotations,
        );

        assert_eq!(issues.len(), 1);
        let message = issues[0].message();
        assert_eq!(
            message,
            "Provided value 'plasma' doesn't precisely match 'blood' for term 'UBERON:0000178'"
        );
        let node = annotations
            .node(&FieldAddress::field("organism_part"))
            .unwrap();
        assert_eq!(node.warnings, vec![message]);
    }

    #[test]
    fn test_restricted_sources_filter_labels() {
        let fields = single("organism_part", "blood", "UBERON:0000178");
        let mut classification = FieldClassification::default();
        classification.ontology_sources.insert(
            "organism_part".to_string(),
            BTreeSet::from(["bto".to_string()]),
        );
        let mut annotations = AnnotatedSection::from_fields(&fields);

        let issues = check(&fields, &classification, &blood_index(), &mut annotations);

        assert_eq!(
            issues,
            vec![Issue::OntologyLabelNotFound {
                field: "organism_part".to_string(),
                term: "UBERON:0000178".to_string(),
                sources: vec!["bto".to_string()],
            }]
        );
        assert_eq!(
            issues[0].message(),
            "Couldn't find label in OLS with these ontology names: bto"
        );
    }

    #[test]
    fn test_list_elements_are_annotated_by_index() {
        let mut fields = FieldSet::new();
        fields.insert(
            "organism_part",
            FieldValue::List(vec![
                ValueUnit::ontology("blood", "UBERON:0000178"),
                ValueUnit::ontology("liver", "UBERON:0002107"),
            ]),
        );
        let mut annotations = AnnotatedSection::from_fields(&fields);

        let issues = check(
            &fields,
            &FieldClassification::default(),
            &blood_index(),
            &mut annotations,
        );

        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message(),
            "Couldn't find label in OLS for term 'UBERON:0002107'"
        );
        let first = annotations
            .node(&FieldAddress::element("organism_part", Some(0)))
            .unwrap();
        let second = annotations
            .node(&FieldAddress::element("organism_part", Some(1)))
            .unwrap();
        assert!(first.warnings.is_empty());
        assert_eq!(second.warnings.len(), 1);
    }

    #[test]
    fn test_readings_without_term_are_ignored() {
        let mut fields = FieldSet::new();
        fields.insert("description", FieldValue::Scalar(ValueUnit::value("free text")));
        let mut annotations = AnnotatedSection::from_fields(&fields);

        let issues = check(
            &fields,
            &FieldClassification::default(),
            &OntologyIndex::new(),
            &mut annotations,
        );
        assert!(issues.is_empty());
    }
}
