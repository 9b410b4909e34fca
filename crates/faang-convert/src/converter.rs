//! Samples submission to BioSamples records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use faang_model::{FieldValue, Record, Submission, ValueUnit};
use faang_rules::RulesDomain;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::biosample::{Attribute, BioSample, Relationship, RelationshipNature, attribute_name};
use crate::error::{ConversionError, Result};
use crate::taxon::{BioSampleLookup, Taxon, TaxonResolver};

/// Sheets describing the submission as a whole. Their rows become extra
/// attributes of every sample.
pub const SPECIAL_SHEETS: [&str; 3] = ["submission", "person", "organization"];

/// Converts the samples domain of a submission.
pub struct BioSampleConverter<'a> {
    domain: &'a RulesDomain,
    lookup: Option<&'a dyn BioSampleLookup>,
}

impl<'a> BioSampleConverter<'a> {
    pub fn new(domain: &'a RulesDomain) -> Self {
        Self {
            domain,
            lookup: None,
        }
    }

    /// Resolve `derived_from` links to BioSamples accessions through `lookup`.
    pub fn with_lookup(mut self, lookup: &'a dyn BioSampleLookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// One BioSamples record per sample, in catalog order of record types.
    pub fn convert(&self, submission: &Submission, release_date: NaiveDate) -> Result<Vec<BioSample>> {
        let core_key = self.domain.core_key.as_deref();
        let release_date = release_date.format("%Y-%m-%d").to_string();

        for record_type in submission.record_types() {
            if self.domain.record_type(record_type).is_none()
                && !SPECIAL_SHEETS.contains(&record_type)
            {
                warn!(record_type = record_type, "not a sample record type, left out");
            }
        }

        let mut named: Vec<(String, Record)> = Vec::new();
        let mut owners: BTreeMap<String, &str> = BTreeMap::new();
        for spec in &self.domain.record_types {
            if !submission.contains(&spec.name) {
                continue;
            }
            for (index, record) in submission
                .parse_records(&spec.name, core_key)?
                .into_iter()
                .enumerate()
            {
                let name = record.display_name(&self.domain.name_field, index);
                if let Some(first) = owners.insert(name.clone(), &spec.name) {
                    return Err(ConversionError::DuplicateAlias {
                        alias: name,
                        first: first.to_string(),
                        second: spec.name.clone(),
                    });
                }
                named.push((name, record));
            }
        }

        let resolver = self.taxon_resolver(&named)?;
        let shared = shared_attributes(submission);

        let mut samples = Vec::with_capacity(named.len());
        for (name, record) in &named {
            let taxon = resolver.resolve(name)?;
            samples.push(BioSample {
                alias: name.clone(),
                title: name.clone(),
                release_date: release_date.clone(),
                taxon_id: taxon.id,
                taxon: taxon.name,
                attributes: attributes(record, &shared),
                sample_relationships: relationships(record),
            });
        }

        info!(samples = samples.len(), "converted to BioSamples records");
        Ok(samples)
    }

    fn taxon_resolver(&self, named: &[(String, Record)]) -> Result<TaxonResolver<'a>> {
        let mut resolver = TaxonResolver::new(self.lookup);
        for (name, record) in named {
            if let Some(organism) = record.fields.get("organism").and_then(FieldValue::first) {
                let term = organism.term.as_deref().unwrap_or_default();
                let species = organism.display_value().unwrap_or_default();
                resolver.add_taxon(name.clone(), Taxon::from_organism(name, term, species)?);
            } else if let Some(link) = record
                .fields
                .get("derived_from")
                .and_then(FieldValue::first)
                .and_then(|unit| unit.value.as_deref())
            {
                debug!(record = %name, derived_from = link, "taxon inherited");
                resolver.add_link(name.clone(), link);
            }
        }
        Ok(resolver)
    }
}

/// Rows of the special sheets, merged into one attribute map.
fn shared_attributes(submission: &Submission) -> BTreeMap<String, Vec<Attribute>> {
    let mut shared: BTreeMap<String, Vec<Attribute>> = BTreeMap::new();
    for sheet in SPECIAL_SHEETS {
        for row in submission.records(sheet).unwrap_or_default() {
            let Value::Object(cells) = row else {
                continue;
            };
            for (field, cell) in cells {
                shared
                    .entry(attribute_name(field))
                    .or_default()
                    .push(Attribute::from_cell(cell));
            }
        }
    }
    shared
}

/// Fields of every section; later sections and the shared rows win on
/// name clashes.
fn attributes(
    record: &Record,
    shared: &BTreeMap<String, Vec<Attribute>>,
) -> BTreeMap<String, Vec<Attribute>> {
    let mut attributes: BTreeMap<String, Vec<Attribute>> = record
        .all_fields()
        .map(|(field, value)| (attribute_name(field), Attribute::list(value)))
        .collect();
    attributes.extend(shared.iter().map(|(name, values)| (name.clone(), values.clone())));
    attributes
}

fn relationships(record: &Record) -> Vec<Relationship> {
    let mut relationships = Vec::new();
    for nature in [
        RelationshipNature::SameAs,
        RelationshipNature::ChildOf,
        RelationshipNature::DerivedFrom,
    ] {
        let Some(value) = record.fields.get(nature.field()) else {
            continue;
        };
        let mut units: Vec<&ValueUnit> = value.units().into_iter().map(|(_, unit)| unit).collect();
        // same_as links a single sample
        if nature == RelationshipNature::SameAs {
            units.truncate(1);
        }
        relationships.extend(units.into_iter().filter_map(|unit| {
            unit.value.as_ref().map(|alias| Relationship {
                alias: alias.clone(),
                relationship_nature: nature,
            })
        }));
    }
    relationships
}
