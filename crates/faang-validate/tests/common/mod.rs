//! Shared fixtures: a two-type samples catalog, its rule schemas and a
//! matching ontology.

#![allow(dead_code)]

use std::sync::Mutex;

use faang_model::{OntologyIndex, OntologyLabel, Submission};
use faang_rules::{InMemoryRuleSet, RecordTypeCatalog, RuleSetSource};
use faang_validate::OntologyHierarchy;
use serde_json::{Value, json};

pub const ORGANISM_URL: &str = "https://example.org/type/organism.json";
pub const SPECIMEN_URL: &str = "https://example.org/type/specimen.json";
pub const CORE_URL: &str = "https://example.org/core/samples_core.json";
pub const ANALYSIS_URL: &str = "https://example.org/type/faang_analysis.json";
pub const INPUT_DNA_URL: &str = "https://example.org/type/input_dna.json";
pub const EXPERIMENTS_CORE_URL: &str = "https://example.org/core/experiments_core.json";
pub const CHIP_MODULE_URL: &str = "https://example.org/module/chip-seq.json";

pub const CATALOG: &str = r#"
[samples]
core_key = "samples_core"
core_url = "https://example.org/core/samples_core.json"
name_field = "sample_name"

[[samples.record_types]]
name = "organism"
url = "https://example.org/type/organism.json"
layout = "type_core"

[[samples.record_types]]
name = "specimen_from_organism"
url = "https://example.org/type/specimen.json"
layout = "type_core"

[experiments]
core_key = "experiments_core"
core_url = "https://example.org/core/experiments_core.json"
name_field = "sample_descriptor"

[[experiments.record_types]]
name = "input_dna"
url = "https://example.org/type/input_dna.json"
layout = "type_core_module"
module_url = "https://example.org/module/chip-seq.json"

[analyses]
name_field = "alias"

[[analyses.record_types]]
name = "faang"
url = "https://example.org/type/faang_analysis.json"
layout = "type_only"
"#;

pub fn catalog() -> RecordTypeCatalog {
    RecordTypeCatalog::from_toml(CATALOG).unwrap()
}

fn ontology_field(obligation: &str, source: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": {"type": "string"},
            "term": {"type": "string"},
            "mandatory": {"const": obligation},
            "ontology_name": {"const": source}
        }
    })
}

fn value_field(obligation: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "value": {"type": "string"},
            "mandatory": {"const": obligation}
        }
    })
}

pub fn organism_schema() -> Value {
    json!({
        "properties": {
            "describedBy": {"type": "string"},
            "samples_core": {"type": "object"},
            "custom": {"type": "object"},
            "sample_name": value_field("mandatory"),
            "organism": ontology_field("mandatory", "NCBITaxon"),
            "sex": ontology_field("mandatory", "PATO"),
            "breed": ontology_field("recommended", "LBO"),
            "birth_date": {
                "type": "object",
                "properties": {
                    "value": {"type": "string"},
                    "units": {"enum": ["YYYY-MM-DD", "YYYY-MM", "YYYY"]},
                    "mandatory": {"const": "recommended"}
                }
            },
            "health_status": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "text": {"type": "string"},
                        "term": {"type": "string"},
                        "mandatory": {"const": "optional"},
                        "ontology_name": {"enum": ["PATO", "EFO"]}
                    }
                }
            }
        }
    })
}

pub fn specimen_schema() -> Value {
    json!({
        "properties": {
            "sample_name": value_field("mandatory"),
            "organism_part": ontology_field("mandatory", "UBERON"),
            "specimen_collection_date": value_field("mandatory")
        }
    })
}

pub fn core_schema() -> Value {
    json!({
        "properties": {
            "material": ontology_field("mandatory", "OBI"),
            "project": value_field("mandatory"),
            "availability": value_field("recommended")
        }
    })
}

pub fn analysis_schema() -> Value {
    json!({
        "properties": {
            "alias": value_field("mandatory"),
            "description": value_field("recommended")
        }
    })
}

pub fn input_dna_schema() -> Value {
    json!({
        "properties": {
            "describedBy": {"type": "string"},
            "experiments_core": {"type": "object"},
            "sample_descriptor": value_field("mandatory"),
            "experiment_target": ontology_field("mandatory", "OBI")
        }
    })
}

pub fn experiments_core_schema() -> Value {
    json!({
        "properties": {
            "assay_type": value_field("mandatory"),
            "sampling_to_preparation_interval": value_field("recommended")
        }
    })
}

pub fn chip_module_schema() -> Value {
    json!({
        "properties": {
            "chip_antibody_provider": value_field("mandatory"),
            "chip_antibody_lot": value_field("recommended")
        }
    })
}

pub fn input_dna() -> Value {
    json!({
        "sample_descriptor": {"value": "input_dna_1"},
        "experiment_target": {"text": "input DNA", "term": "EFO:0005031"},
        "experiments_core": {
            "assay_type": {"value": "ChIP-seq"},
            "sampling_to_preparation_interval": {"value": "2", "units": "days"}
        }
    })
}

/// Rule set without the specimen schema.
pub fn rule_set() -> InMemoryRuleSet {
    InMemoryRuleSet::new()
        .with_document(ORGANISM_URL, organism_schema())
        .with_document(CORE_URL, core_schema())
        .with_document(ANALYSIS_URL, analysis_schema())
        .with_document(INPUT_DNA_URL, input_dna_schema())
        .with_document(EXPERIMENTS_CORE_URL, experiments_core_schema())
        .with_document(CHIP_MODULE_URL, chip_module_schema())
}

pub fn full_rule_set() -> InMemoryRuleSet {
    rule_set().with_document(SPECIMEN_URL, specimen_schema())
}

pub fn cow() -> Value {
    json!({
        "sample_name": {"value": "cow_1"},
        "organism": {"text": "Bos taurus", "term": "NCBITaxon:9913"},
        "sex": {"text": "male", "term": "PATO:0000384"},
        "breed": {"text": "Large White", "term": "LBO:0000358"},
        "birth_date": {"value": "2020-13-01", "units": "YYYY-MM-DD"},
        "samples_core": {
            "material": {"text": "organism", "term": "OBI:0100026"},
            "project": {"value": "not provided"}
        },
        "custom": {
            "tissue": {"text": "blod", "term": "UBERON:0000178"}
        }
    })
}

pub fn specimen() -> Value {
    json!({
        "sample_name": {"value": "liver_1"},
        "organism_part": {"text": "liver", "term": "UBERON:0002107"},
        "specimen_collection_date": {"value": "2021-04", "units": "YYYY-MM"},
        "samples_core": {
            "material": {"text": "specimen from organism", "term": "OBI:0001479"},
            "project": {"value": "FAANG"},
            "availability": {"value": "mailto:dcc@example.org"}
        }
    })
}

pub fn submission(sections: &[(&str, Vec<Value>)]) -> Submission {
    let mut submission = Submission::default();
    for (record_type, records) in sections {
        submission.insert(*record_type, records.clone());
    }
    submission
}

pub fn ontology_index() -> OntologyIndex {
    let mut index = OntologyIndex::new();
    for (term, source, label) in [
        ("NCBITaxon:9913", "NCBITaxon", "Bos taurus"),
        ("PATO:0000384", "PATO", "male"),
        ("LBO:0000358", "LBO", "Large White"),
        ("LBO:0000017", "LBO", "Holstein"),
        ("OBI:0100026", "OBI", "organism"),
        ("OBI:0001479", "OBI", "specimen from organism"),
        ("UBERON:0000178", "UBERON", "blood"),
        ("UBERON:0002107", "UBERON", "liver"),
    ] {
        index.insert(term, vec![OntologyLabel::new(source, label)]);
    }
    index
}

pub fn hierarchy() -> OntologyHierarchy {
    OntologyHierarchy::new()
        .with_parent("LBO:0000017", "LBO:0000001")
        .with_parent("LBO:0000358", "LBO:0000003")
}

/// Rule set that records every URL asked for.
pub struct CountingRuleSet<S> {
    inner: S,
    fetched: Mutex<Vec<String>>,
}

impl<S: RuleSetSource> CountingRuleSet<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl<S: RuleSetSource> RuleSetSource for CountingRuleSet<S> {
    fn fetch(&self, url: &str) -> faang_rules::Result<Value> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.inner.fetch(url)
    }
}
