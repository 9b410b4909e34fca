//! Organism species against breed.

use faang_model::{AnnotatedSection, FieldAddress, FieldSet, FieldValue, ValueUnit};
use faang_rules::CheckConfig;
use tracing::debug;

use crate::issue::Issue;
use crate::ontology::SubclassValidator;

pub const ORGANISM_RECORD_TYPE: &str = "organism";

/// Check that the breed term lies in the breed branch of the species.
///
/// Quietly passes when either field is missing a term or the species has
/// no branch in the table. A violation is filed on the organism field.
pub fn check(
    fields: &FieldSet,
    config: &CheckConfig,
    validator: &dyn SubclassValidator,
    annotations: &mut AnnotatedSection,
) -> Vec<Issue> {
    let Some(organism) = first_unit(fields, "organism") else {
        return Vec::new();
    };
    let Some(breed) = first_unit(fields, "breed") else {
        return Vec::new();
    };
    let (Some(species_term), Some(breed_term)) = (organism.term.as_deref(), breed.term.as_deref())
    else {
        return Vec::new();
    };
    let Some(branch) = config.breed_branch(species_term) else {
        debug!(species = species_term, "no breed branch for species");
        return Vec::new();
    };

    let violations = validator.validate_subclass(breed_term, branch);
    if violations.is_empty() {
        return Vec::new();
    }
    debug!(breed = breed_term, branch = branch, ?violations, "breed outside species branch");

    let issue = Issue::BreedMismatch {
        breed: breed.display_value().unwrap_or(breed_term).to_string(),
        species: organism.display_value().unwrap_or(species_term).to_string(),
    };
    annotations.annotate(
        &FieldAddress::field("organism"),
        issue.severity(),
        issue.message(),
    );
    vec![issue]
}

fn first_unit<'a>(fields: &'a FieldSet, name: &str) -> Option<&'a ValueUnit> {
    fields.get(name).and_then(FieldValue::first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::OntologyHierarchy;
    use faang_model::Severity;

    fn organism(species: (&str, &str), breed: (&str, &str)) -> FieldSet {
        let mut fields = FieldSet::new();
        fields.insert(
            "organism",
            FieldValue::Scalar(ValueUnit::ontology(species.0, species.1)),
        );
        fields.insert("breed", FieldValue::Scalar(ValueUnit::ontology(breed.0, breed.1)));
        fields
    }

    fn hierarchy() -> OntologyHierarchy {
        OntologyHierarchy::new()
            .with_parent("LBO:0000017", "LBO:0000001")
            .with_parent("LBO:0000358", "LBO:0000003")
    }

    #[test]
    fn test_breed_of_species_passes() {
        let config = CheckConfig::embedded().unwrap();
        let fields = organism(("Bos taurus", "NCBITaxon:9913"), ("Holstein", "LBO:0000017"));
        let mut annotations = AnnotatedSection::from_fields(&fields);

        assert!(check(&fields, &config, &hierarchy(), &mut annotations).is_empty());
        assert_eq!(annotations.annotation_count(), 0);
    }

    #[test]
    fn test_breed_of_other_species_is_error_on_organism() {
        let config = CheckConfig::embedded().unwrap();
        let fields = organism(("Bos taurus", "NCBITaxon:9913"), ("Large White", "LBO:0000358"));
        let mut annotations = AnnotatedSection::from_fields(&fields);

        let issues = check(&fields, &config, &hierarchy(), &mut annotations);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity(), Severity::Error);
        assert_eq!(
            issues[0].message(),
            "Breed 'Large White' doesn't match the animal specie: 'Bos taurus'"
        );
        let node = annotations.node(&FieldAddress::field("organism")).unwrap();
        assert_eq!(node.errors, vec![issues[0].message()]);
    }

    #[test]
    fn test_unknown_species_or_missing_breed_is_skipped() {
        let config = CheckConfig::embedded().unwrap();
        let fields = organism(("Homo sapiens", "NCBITaxon:9606"), ("x", "LBO:0000358"));
        let mut annotations = AnnotatedSection::from_fields(&fields);
        assert!(check(&fields, &config, &hierarchy(), &mut annotations).is_empty());

        let mut fields = FieldSet::new();
        fields.insert(
            "organism",
            FieldValue::Scalar(ValueUnit::ontology("Bos taurus", "NCBITaxon:9913")),
        );
        assert!(check(&fields, &config, &hierarchy(), &mut annotations).is_empty());
    }
}
