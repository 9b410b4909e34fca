//! Ontology label index.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One label an ontology service reports for a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyLabel {
    /// Source vocabulary (e.g. `uberon`).
    #[serde(alias = "ontologySource", alias = "ontology_source")]
    pub ontology_name: String,
    pub label: String,
}

impl OntologyLabel {
    pub fn new(ontology_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            ontology_name: ontology_name.into(),
            label: label.into(),
        }
    }
}

/// Term identifier to the labels known for it.
///
/// Built once per run from every term referenced by the submission and
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OntologyIndex {
    terms: BTreeMap<String, Vec<OntologyLabel>>,
}

impl OntologyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, term: impl Into<String>, labels: Vec<OntologyLabel>) {
        self.terms.insert(term.into(), labels);
    }

    /// Labels for a term; empty when the term was never resolved.
    pub fn labels(&self, term: &str) -> &[OntologyLabel] {
        self.terms.get(term).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Keep only the requested terms.
    #[must_use]
    pub fn restricted_to(&self, terms: &BTreeSet<String>) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .filter(|(term, _)| terms.contains(*term))
                .map(|(term, labels)| (term.clone(), labels.clone()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
