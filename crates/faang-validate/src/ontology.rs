//! Ontology collaborators.
//!
//! The engine needs two things from an ontology service: labels for the
//! term ids used in a submission, and a subclass test for breed terms.
//! Both are traits so a live service, a prefetched file or a test double
//! can stand behind them.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use faang_model::{OntologyIndex, Record};
use crate::error::OntologyError;

/// Label lookup for a batch of term ids.
pub trait OntologyLookup: Send + Sync {
    /// Labels for `terms`. Terms the source does not know are left out.
    fn fetch_labels(&self, terms: &BTreeSet<String>) -> Result<OntologyIndex, OntologyError>;
}

/// Subclass test used by the breed check.
pub trait SubclassValidator: Send + Sync {
    /// Violations of "`term` lies in the branch rooted at `branch`".
    /// Empty means the term is in the branch.
    fn validate_subclass(&self, term: &str, branch: &str) -> Vec<String>;
}

/// Lookup answered from an index loaded up front.
#[derive(Debug, Clone, Default)]
pub struct StaticOntologyIndex {
    index: OntologyIndex,
}

impl StaticOntologyIndex {
    pub fn new(index: OntologyIndex) -> Self {
        Self { index }
    }

    /// Load a `{ term: [{ontology_name, label}] }` JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, OntologyError> {
        let index = read_json(path)?;
        Ok(Self { index })
    }

    pub fn index(&self) -> &OntologyIndex {
        &self.index
    }
}

impl OntologyLookup for StaticOntologyIndex {
    fn fetch_labels(&self, terms: &BTreeSet<String>) -> Result<OntologyIndex, OntologyError> {
        Ok(self.index.restricted_to(terms))
    }
}

/// Parent relation of an ontology, as a term to direct parents map.
///
/// Term ids are compared with `:` and `_` treated alike, so `LBO:0000001`
/// and `LBO_0000001` name the same term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyHierarchy {
    parents: BTreeMap<String, Vec<String>>,
}

impl OntologyHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `{ term: [parent, ...] }` JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, OntologyError> {
        let raw: BTreeMap<String, Vec<String>> = read_json(path)?;
        let mut hierarchy = Self::new();
        for (term, parents) in raw {
            for parent in parents {
                hierarchy = hierarchy.with_parent(&term, &parent);
            }
        }
        Ok(hierarchy)
    }

    pub fn with_parent(mut self, term: &str, parent: &str) -> Self {
        self.parents
            .entry(normalize_term(term))
            .or_default()
            .push(normalize_term(parent));
        self
    }

    /// Reflexive, transitive subclass test.
    pub fn is_subclass_of(&self, term: &str, ancestor: &str) -> bool {
        let target = normalize_term(ancestor);
        let mut visited = BTreeSet::new();
        let mut pending = vec![normalize_term(term)];

        while let Some(current) = pending.pop() {
            if current == target {
                return true;
            }
            if !visited.insert(current.clone()) {
                continue;
            }
            if let Some(parents) = self.parents.get(&current) {
                pending.extend(parents.iter().cloned());
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl SubclassValidator for OntologyHierarchy {
    fn validate_subclass(&self, term: &str, branch: &str) -> Vec<String> {
        if self.is_subclass_of(term, branch) {
            Vec::new()
        } else {
            vec![format!("term '{term}' is not a subclass of '{branch}'")]
        }
    }
}

/// Every ontology term id used anywhere in `records`, in any section.
pub fn collect_term_ids<'a>(records: impl IntoIterator<Item = &'a Record>) -> BTreeSet<String> {
    let mut terms = BTreeSet::new();
    for record in records {
        for (_, value) in record.all_fields() {
            for (_, unit) in value.units() {
                if let Some((_, term)) = unit.ontology_pair() {
                    terms.insert(term.to_string());
                }
            }
        }
    }
    terms
}

fn normalize_term(term: &str) -> String {
    term.trim().replace(':', "_")
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, OntologyError> {
    let text = std::fs::read_to_string(path).map_err(|source| OntologyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| OntologyError::Json {
        path: path.to_path_buf(),
        source,
    })
}
