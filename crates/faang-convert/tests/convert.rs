//! BioSamples conversion of whole samples submissions.

use chrono::NaiveDate;
use faang_convert::{BioSampleConverter, ConversionError, StaticBioSampleLookup, Taxon};
use faang_model::Submission;
use faang_rules::{RecordTypeCatalog, RulesType};
use insta::assert_snapshot;
use serde_json::{Value, json};

fn release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn submission(sections: Vec<(&str, Vec<Value>)>) -> Submission {
    let mut submission = Submission::default();
    for (record_type, records) in sections {
        submission.insert(record_type, records);
    }
    submission
}

fn cow() -> Value {
    json!({
        "sample_name": {"value": "cow_1"},
        "organism": {"text": "Bos taurus", "term": "NCBITaxon:9913"},
        "sex": {"text": "male", "term": "PATO:0000384"},
        "child_of": [{"value": "bull_1"}, {"value": "dam_1"}],
        "samples_core": {"material": {"text": "organism", "term": "OBI:0100026"}}
    })
}

fn liver(derived_from: &str) -> Value {
    json!({
        "sample_name": {"value": "liver_1"},
        "derived_from": {"value": derived_from},
        "organism_part": {"text": "liver", "term": "UBERON:0002107"}
    })
}

#[test]
fn specimen_inherits_taxon_from_organism() {
    let catalog = RecordTypeCatalog::embedded().unwrap();
    let converter = BioSampleConverter::new(catalog.domain(RulesType::Samples));
    let submission = submission(vec![
        ("organism", vec![cow()]),
        ("specimen_from_organism", vec![liver("cow_1")]),
        ("person", vec![json!({"person_last_name": "Doe"})]),
    ]);

    let samples = converter.convert(&submission, release_date()).unwrap();

    assert_eq!(samples.len(), 2);
    let cow = &samples[0];
    assert_eq!(cow.alias, "cow_1");
    assert_eq!(cow.taxon_id, 9913);
    assert_eq!(
        cow.attributes.keys().collect::<Vec<_>>(),
        vec!["child of", "material", "organism", "person last name", "sample name", "sex"]
    );
    assert_eq!(cow.sample_relationships.len(), 2);

    assert_snapshot!(serde_json::to_string_pretty(&samples[1]).unwrap(), @r#"
    {
      "alias": "liver_1",
      "title": "liver_1",
      "releaseDate": "2024-05-01",
      "taxonId": 9913,
      "taxon": "Bos taurus",
      "attributes": {
        "derived from": [
          {
            "value": "cow_1"
          }
        ],
        "organism part": [
          {
            "value": "liver",
            "terms": [
              {
                "url": "http://purl.obolibrary.org/obo/UBERON_0002107"
              }
            ]
          }
        ],
        "person last name": [
          {
            "value": "Doe"
          }
        ],
        "sample name": [
          {
            "value": "liver_1"
          }
        ]
      },
      "sampleRelationships": [
        {
          "alias": "cow_1",
          "relationshipNature": "derived from"
        }
      ]
    }
    "#);
}

#[test]
fn derived_from_cycle_is_unresolvable() {
    let catalog = RecordTypeCatalog::embedded().unwrap();
    let converter = BioSampleConverter::new(catalog.domain(RulesType::Samples));
    let mut kidney = liver("liver_1");
    kidney["sample_name"] = json!({"value": "kidney_1"});
    let submission = submission(vec![(
        "specimen_from_organism",
        vec![liver("kidney_1"), kidney],
    )]);

    let error = converter.convert(&submission, release_date()).unwrap_err();

    assert!(matches!(
        error,
        ConversionError::UnresolvableReferenceChain { ref chain, .. } if chain.len() == 3
    ));
}

#[test]
fn accession_links_use_the_biosamples_lookup() {
    let catalog = RecordTypeCatalog::embedded().unwrap();
    let lookup = StaticBioSampleLookup::new().with_taxon("SAMEA104728877", Taxon::new(9823, "Sus scrofa"));
    let converter = BioSampleConverter::new(catalog.domain(RulesType::Samples)).with_lookup(&lookup);
    let submission = submission(vec![(
        "specimen_from_organism",
        vec![liver("SAMEA104728877")],
    )]);

    let samples = converter.convert(&submission, release_date()).unwrap();

    assert_eq!(samples[0].taxon_id, 9823);
    assert_eq!(samples[0].taxon, "Sus scrofa");
}

#[test]
fn accession_without_lookup_is_an_error() {
    let catalog = RecordTypeCatalog::embedded().unwrap();
    let converter = BioSampleConverter::new(catalog.domain(RulesType::Samples));
    let submission = submission(vec![(
        "specimen_from_organism",
        vec![liver("SAMEA104728877")],
    )]);

    let error = converter.convert(&submission, release_date()).unwrap_err();
    assert!(matches!(error, ConversionError::UnknownAccession { .. }));
}

#[test]
fn unnamed_records_of_two_types_collide() {
    let catalog = RecordTypeCatalog::embedded().unwrap();
    let converter = BioSampleConverter::new(catalog.domain(RulesType::Samples));
    let submission = submission(vec![
        (
            "organism",
            vec![json!({"organism": {"text": "Bos taurus", "term": "NCBITaxon:9913"}})],
        ),
        (
            "specimen_from_organism",
            vec![json!({"derived_from": {"value": "cow_1"}})],
        ),
    ]);

    let error = converter.convert(&submission, release_date()).unwrap_err();

    match error {
        ConversionError::DuplicateAlias {
            alias,
            first,
            second,
        } => {
            assert_eq!(alias, "record_1");
            assert_eq!(first, "organism");
            assert_eq!(second, "specimen_from_organism");
        }
        other => panic!("unexpected error: {other}"),
    }
}
