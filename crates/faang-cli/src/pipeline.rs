//! Loading inputs, running the checks and conversion, writing results.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use faang_convert::{BioSample, BioSampleConverter, StaticBioSampleLookup};
use faang_model::Submission;
use faang_rules::{CheckConfig, DirectoryRuleSet, RecordTypeCatalog, RulesType};
use faang_validate::{
    ChecksOutcome, ChecksRunner, OntologyHierarchy, RecordTypeReport, StaticOntologyIndex,
};
use serde::Serialize;
use tracing::{info, info_span};

/// Everything a checks run reads from disk.
#[derive(Debug, Clone)]
pub struct ChecksInput {
    pub submission: PathBuf,
    pub rules_type: RulesType,
    /// Directory holding the rule schema documents.
    pub schemas: PathBuf,
    pub ontology: Option<PathBuf>,
    pub hierarchy: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub checks: Option<PathBuf>,
}

/// Result payload of a checks run.
#[derive(Debug, Serialize)]
pub struct ChecksPayload<'a> {
    pub rules_type: &'a str,
    pub reports: &'a BTreeMap<String, RecordTypeReport>,
    pub failures: BTreeMap<&'a str, String>,
}

impl<'a> ChecksPayload<'a> {
    pub fn new(rules_type: RulesType, outcome: &'a ChecksOutcome) -> Self {
        Self {
            rules_type: rules_type.as_str(),
            reports: &outcome.reports,
            failures: outcome
                .failures
                .iter()
                .map(|(record_type, error)| (record_type.as_str(), error.to_string()))
                .collect(),
        }
    }
}

pub fn load_submission(path: &Path) -> Result<Submission> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    Submission::from_json(&value).with_context(|| format!("shape {}", path.display()))
}

pub fn load_catalog(path: Option<&Path>) -> Result<RecordTypeCatalog> {
    match path {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            RecordTypeCatalog::from_toml(&text).with_context(|| format!("load {}", path.display()))
        }
        None => RecordTypeCatalog::embedded().context("load embedded record type catalog"),
    }
}

pub fn load_check_config(path: Option<&Path>) -> Result<CheckConfig> {
    match path {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            CheckConfig::from_toml(&text).with_context(|| format!("load {}", path.display()))
        }
        None => CheckConfig::embedded().context("load embedded check configuration"),
    }
}

/// Run the checks of `input.rules_type` over the submission file.
pub fn run_checks(input: &ChecksInput) -> Result<ChecksOutcome> {
    let span = info_span!(
        "checks",
        rules_type = %input.rules_type,
        submission = %input.submission.display()
    );
    let _guard = span.enter();

    let submission = load_submission(&input.submission)?;
    let catalog = load_catalog(input.catalog.as_deref())?;
    let config = load_check_config(input.checks.as_deref())?;
    let rule_set = DirectoryRuleSet::new(&input.schemas);

    let labels = input
        .ontology
        .as_deref()
        .map(StaticOntologyIndex::from_json_file)
        .transpose()
        .context("load ontology labels")?;
    let hierarchy = input
        .hierarchy
        .as_deref()
        .map(OntologyHierarchy::from_json_file)
        .transpose()
        .context("load ontology hierarchy")?;

    let mut runner = ChecksRunner::new(&catalog, &config, &rule_set);
    if let Some(labels) = &labels {
        runner = runner.with_ontology(labels);
    }
    if let Some(hierarchy) = &hierarchy {
        runner = runner.with_subclass_validator(hierarchy);
    }

    let outcome = runner.run(&submission, input.rules_type);
    info!(
        record_types = outcome.reports.len(),
        failures = outcome.failures.len(),
        errors = outcome.error_count(),
        warnings = outcome.warning_count(),
        "checks complete"
    );
    Ok(outcome)
}

/// Convert the samples of a submission file to BioSamples records.
pub fn run_conversion(
    submission: &Path,
    catalog: Option<&Path>,
    biosamples: Option<&Path>,
    release_date: NaiveDate,
) -> Result<Vec<BioSample>> {
    let span = info_span!("convert", submission = %submission.display());
    let _guard = span.enter();

    let parsed = load_submission(submission)?;
    let catalog = load_catalog(catalog)?;
    let lookup = biosamples
        .map(StaticBioSampleLookup::from_json_file)
        .transpose()
        .context("load BioSamples taxa")?;

    let mut converter = BioSampleConverter::new(catalog.domain(RulesType::Samples));
    if let Some(lookup) = &lookup {
        converter = converter.with_lookup(lookup);
    }
    converter
        .convert(&parsed, release_date)
        .context("convert samples")
}

/// Pretty JSON to `output`, or stdout when `None`.
pub fn write_json<T: Serialize + ?Sized>(value: &T, output: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => println!("{text}"),
    }
    Ok(())
}
