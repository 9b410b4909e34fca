//! Integration tests for loading rule schemas from a directory.

use std::fs;

use faang_model::Obligation;
use faang_rules::{
    CheckConfig, DirectoryRuleSet, RecordTypeSpec, RuleSetSource, RulesDomain, RulesError,
    SchemaLayout, classify, fetch_rule_schemas,
};
use serde_json::json;
use tempfile::TempDir;

fn write_schema(dir: &TempDir, name: &str, document: &serde_json::Value) {
    fs::write(dir.path().join(name), serde_json::to_string(document).unwrap()).unwrap();
}

fn domain() -> RulesDomain {
    RulesDomain {
        core_key: Some("samples_core".to_string()),
        core_url: Some("https://example.org/core/samples_core.json".to_string()),
        name_field: "sample_name".to_string(),
        record_types: Vec::new(),
    }
}

fn organism_spec(layout: SchemaLayout) -> RecordTypeSpec {
    RecordTypeSpec {
        name: "organism".to_string(),
        url: "https://example.org/type/organism.json".to_string(),
        layout,
        module_url: None,
    }
}

fn type_schema() -> serde_json::Value {
    json!({
        "properties": {
            "describedBy": {"type": "string"},
            "samples_core": {"$ref": "samples_core.json"},
            "organism": {
                "type": "object",
                "properties": {
                    "text": {}, "term": {},
                    "mandatory": {"const": "mandatory"},
                    "ontology_name": {"const": "NCBITaxon"}
                }
            },
            "birth_date": {
                "type": "object",
                "properties": {"value": {}, "units": {}, "mandatory": {"const": "recommended"}}
            }
        }
    })
}

fn core_schema() -> serde_json::Value {
    json!({
        "properties": {
            "project": {
                "type": "object",
                "properties": {"value": {}, "mandatory": {"const": "mandatory"}}
            }
        }
    })
}

#[test]
fn test_fetch_type_and_core_fragments() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir, "organism.json", &type_schema());
    write_schema(&dir, "samples_core.json", &core_schema());

    let rules = DirectoryRuleSet::new(dir.path());
    let config = CheckConfig::embedded().unwrap();
    let schemas =
        fetch_rule_schemas(&rules, &organism_spec(SchemaLayout::TypeCore), &domain(), &config)
            .unwrap();

    let type_classification = classify(Some(&schemas.type_fragment));
    assert_eq!(
        type_classification.tier_of("birth_date"),
        Some(Obligation::Recommended)
    );
    let core_classification = classify(schemas.core.as_ref());
    assert_eq!(
        core_classification.tier_of("project"),
        Some(Obligation::Mandatory)
    );
    assert!(schemas.module.is_none());
}

#[test]
fn test_type_only_layout_skips_core() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir, "organism.json", &type_schema());

    let rules = DirectoryRuleSet::new(dir.path());
    let config = CheckConfig::embedded().unwrap();
    let schemas =
        fetch_rule_schemas(&rules, &organism_spec(SchemaLayout::TypeOnly), &domain(), &config)
            .unwrap();
    assert!(schemas.core.is_none());
}

#[test]
fn test_missing_schema_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let rules = DirectoryRuleSet::new(dir.path());
    let config = CheckConfig::embedded().unwrap();
    let error =
        fetch_rule_schemas(&rules, &organism_spec(SchemaLayout::TypeCore), &domain(), &config)
            .unwrap_err();
    assert!(matches!(error, RulesError::SchemaNotFound { url } if url.ends_with("organism.json")));
}

#[test]
fn test_module_layout_requires_module_url() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir, "organism.json", &type_schema());
    write_schema(&dir, "samples_core.json", &core_schema());

    let rules = DirectoryRuleSet::new(dir.path());
    let config = CheckConfig::embedded().unwrap();
    let error = fetch_rule_schemas(
        &rules,
        &organism_spec(SchemaLayout::TypeCoreModule),
        &domain(),
        &config,
    )
    .unwrap_err();
    assert!(matches!(error, RulesError::MissingModuleUrl { .. }));
}

#[test]
fn test_module_layout_loads_module_fragment() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir, "organism.json", &type_schema());
    write_schema(&dir, "samples_core.json", &core_schema());
    write_schema(
        &dir,
        "chip-seq.json",
        &json!({
            "properties": {
                "chip_antibody_provider": {
                    "type": "object",
                    "properties": {"value": {}, "mandatory": {"const": "mandatory"}}
                }
            }
        }),
    );

    let rules = DirectoryRuleSet::new(dir.path());
    let config = CheckConfig::embedded().unwrap();
    let spec = RecordTypeSpec {
        module_url: Some("https://example.org/module/chip-seq.json".to_string()),
        ..organism_spec(SchemaLayout::TypeCoreModule)
    };
    let schemas = fetch_rule_schemas(&rules, &spec, &domain(), &config).unwrap();

    assert!(schemas.core.is_some());
    let module = schemas.module.unwrap();
    assert_eq!(
        module.get("chip_antibody_provider").map(|field| field.obligation),
        Some(Obligation::Mandatory)
    );
}

#[test]
fn test_invalid_json_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("organism.json"), "{not json").unwrap();
    let rules = DirectoryRuleSet::new(dir.path());
    let error = rules.fetch("https://example.org/type/organism.json").unwrap_err();
    assert!(matches!(error, RulesError::Json { .. }));
}

#[test]
fn test_documents_are_cached() {
    let dir = TempDir::new().unwrap();
    write_schema(&dir, "organism.json", &type_schema());
    let rules = DirectoryRuleSet::new(dir.path());
    let url = "https://example.org/type/organism.json";
    let first = rules.fetch(url).unwrap();

    fs::remove_file(dir.path().join("organism.json")).unwrap();
    let second = rules.fetch(url).unwrap();
    assert_eq!(first, second);
}
