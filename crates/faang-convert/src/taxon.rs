//! Taxon resolution.
//!
//! Records with an `organism` carry their taxon. Every other record
//! inherits it along its first `derived_from` link, which may point at
//! another record of the submission or at a BioSamples accession.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConversionError, Result};

const ACCESSION_PREFIX: &str = "SAM";

/// NCBI taxon of a sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxon {
    pub id: u64,
    pub name: String,
}

impl Taxon {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Taxon from an organism reading; `term` looks like `NCBITaxon:9913`.
    pub fn from_organism(record: &str, term: &str, name: &str) -> Result<Self> {
        term.split_once(':')
            .and_then(|(_, id)| id.trim().parse().ok())
            .map(|id| Self::new(id, name))
            .ok_or_else(|| ConversionError::MalformedTerm {
                record: record.to_string(),
                term: term.to_string(),
            })
    }
}

/// Taxon of samples already registered with BioSamples.
pub trait BioSampleLookup: Send + Sync {
    /// `Ok(None)` when the accession is unknown.
    fn taxon(&self, accession: &str) -> Result<Option<Taxon>>;
}

/// Lookup answered from a prefetched `{ accession: {id, name} }` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StaticBioSampleLookup {
    taxa: BTreeMap<String, Taxon>,
}

impl StaticBioSampleLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConversionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConversionError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn with_taxon(mut self, accession: impl Into<String>, taxon: Taxon) -> Self {
        self.taxa.insert(accession.into(), taxon);
        self
    }
}

impl BioSampleLookup for StaticBioSampleLookup {
    fn taxon(&self, accession: &str) -> Result<Option<Taxon>> {
        Ok(self.taxa.get(accession).cloned())
    }
}

/// Known taxa and `derived_from` links of one submission.
#[derive(Default)]
pub struct TaxonResolver<'a> {
    known: BTreeMap<String, Taxon>,
    links: BTreeMap<String, String>,
    lookup: Option<&'a dyn BioSampleLookup>,
}

impl<'a> TaxonResolver<'a> {
    pub fn new(lookup: Option<&'a dyn BioSampleLookup>) -> Self {
        Self {
            known: BTreeMap::new(),
            links: BTreeMap::new(),
            lookup,
        }
    }

    pub fn add_taxon(&mut self, record: impl Into<String>, taxon: Taxon) {
        self.known.insert(record.into(), taxon);
    }

    pub fn add_link(&mut self, record: impl Into<String>, derived_from: impl Into<String>) {
        self.links.insert(record.into(), derived_from.into());
    }

    /// Follow links from `record` until a taxon is found.
    ///
    /// A link that loops back or leads nowhere is an
    /// `UnresolvableReferenceChain`.
    pub fn resolve(&self, record: &str) -> Result<Taxon> {
        let mut visited = BTreeSet::new();
        let mut chain = Vec::new();
        let mut current = record;

        loop {
            if let Some(taxon) = self.known.get(current) {
                return Ok(taxon.clone());
            }
            if !visited.insert(current) {
                chain.push(current.to_string());
                return Err(unresolvable(record, chain));
            }
            chain.push(current.to_string());

            if current.starts_with(ACCESSION_PREFIX) && !self.links.contains_key(current) {
                return self.from_biosamples(current);
            }
            match self.links.get(current) {
                Some(next) => {
                    debug!(record = current, derived_from = %next, "following derived_from");
                    current = next;
                }
                None if current == record => {
                    return Err(ConversionError::MissingOrganism {
                        record: record.to_string(),
                    });
                }
                None => return Err(unresolvable(record, chain)),
            }
        }
    }

    fn from_biosamples(&self, accession: &str) -> Result<Taxon> {
        let unknown = || ConversionError::UnknownAccession {
            accession: accession.to_string(),
        };
        let lookup = self.lookup.ok_or_else(unknown)?;
        lookup.taxon(accession)?.ok_or_else(unknown)
    }
}

fn unresolvable(record: &str, chain: Vec<String>) -> ConversionError {
    ConversionError::UnresolvableReferenceChain {
        record: record.to_string(),
        chain,
    }
}
