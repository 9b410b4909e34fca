//! Field classification.
//!
//! Splits the fields of a schema fragment into obligation tiers and records
//! the accepted ontology sources of ontology-checked fields.

use std::collections::{BTreeMap, BTreeSet};

use faang_model::Obligation;

use crate::schema::SchemaFragment;

/// Obligation tiers and ontology restrictions derived from one fragment.
///
/// Every classified field is in exactly one tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldClassification {
    pub mandatory: BTreeSet<String>,
    pub recommended: BTreeSet<String>,
    pub optional: BTreeSet<String>,
    /// Field name to accepted ontology sources (lower-cased). Only fields
    /// with a declared `ontology_name` restriction appear here.
    pub ontology_sources: BTreeMap<String, BTreeSet<String>>,
}

impl FieldClassification {
    pub fn fields(&self, tier: Obligation) -> &BTreeSet<String> {
        match tier {
            Obligation::Mandatory => &self.mandatory,
            Obligation::Recommended => &self.recommended,
            Obligation::Optional => &self.optional,
        }
    }

    pub fn tier_of(&self, field: &str) -> Option<Obligation> {
        Obligation::ALL
            .into_iter()
            .find(|tier| self.fields(*tier).contains(field))
    }

    /// Accepted sources for a field; `None` means any source is accepted.
    pub fn ontology_sources(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.ontology_sources.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.mandatory.is_empty() && self.recommended.is_empty() && self.optional.is_empty()
    }
}

/// Classify the fields of a fragment.
///
/// An absent fragment (record type without a core schema) classifies to
/// empty sets.
pub fn classify(fragment: Option<&SchemaFragment>) -> FieldClassification {
    let mut classification = FieldClassification::default();
    let Some(fragment) = fragment else {
        return classification;
    };

    for (name, field) in &fragment.fields {
        let tier = match field.obligation {
            Obligation::Mandatory => &mut classification.mandatory,
            Obligation::Recommended => &mut classification.recommended,
            Obligation::Optional => &mut classification.optional,
        };
        tier.insert(name.clone());

        if let Some(sources) = &field.ontology_sources
            && !sources.is_empty()
        {
            classification
                .ontology_sources
                .insert(name.clone(), sources.clone());
        }
    }
    classification
}
