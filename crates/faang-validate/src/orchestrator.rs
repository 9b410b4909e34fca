//! Checks orchestrator.
//!
//! Drives a whole submission: picks the record types of the rules domain
//! that the submission contains, loads their rule schemas, builds the
//! ontology index once and walks each record type.

use std::collections::BTreeSet;

use faang_model::{OntologyIndex, Record, Submission};
use faang_rules::{
    CheckConfig, RecordTypeCatalog, RecordTypeSpec, RuleSetSource, RulesDomain, RulesType,
    classify, fetch_rule_schemas,
};
use tracing::{debug, info, info_span, warn};

use crate::error::Result;
use crate::ontology::{OntologyLookup, SubclassValidator, collect_term_ids};
use crate::report::{ChecksOutcome, RecordTypeReport};
use crate::walker::{RecordTypeRules, WalkContext, walk};

/// Runs the checks of one rules domain over submissions.
pub struct ChecksRunner<'a> {
    catalog: &'a RecordTypeCatalog,
    config: &'a CheckConfig,
    rules: &'a dyn RuleSetSource,
    ontology: Option<&'a dyn OntologyLookup>,
    subclass: Option<&'a dyn SubclassValidator>,
}

impl<'a> ChecksRunner<'a> {
    pub fn new(
        catalog: &'a RecordTypeCatalog,
        config: &'a CheckConfig,
        rules: &'a dyn RuleSetSource,
    ) -> Self {
        Self {
            catalog,
            config,
            rules,
            ontology: None,
            subclass: None,
        }
    }

    /// Label source for the ontology checks. Without one every term is
    /// reported as having no label.
    pub fn with_ontology(mut self, ontology: &'a dyn OntologyLookup) -> Self {
        self.ontology = Some(ontology);
        self
    }

    /// Subclass test for the breed check. Without one the check is skipped.
    pub fn with_subclass_validator(mut self, subclass: &'a dyn SubclassValidator) -> Self {
        self.subclass = Some(subclass);
        self
    }

    /// Check every record type of `rules_type` present in `submission`.
    ///
    /// A schema failure or malformed records abort only their own record
    /// type, which then lands in `failures` instead of `reports`.
    pub fn run(&self, submission: &Submission, rules_type: RulesType) -> ChecksOutcome {
        let domain = self.catalog.domain(rules_type);
        let core_key = domain.core_key.as_deref();
        let mut outcome = ChecksOutcome::default();

        let mut parsed: Vec<(&RecordTypeSpec, Vec<Record>)> = Vec::new();
        for spec in &domain.record_types {
            if !submission.contains(&spec.name) {
                debug!(record_type = %spec.name, "record type not in submission");
                continue;
            }
            match submission.parse_records(&spec.name, core_key) {
                Ok(records) => parsed.push((spec, records)),
                Err(error) => {
                    warn!(record_type = %spec.name, %error, "malformed records");
                    outcome.failures.insert(spec.name.clone(), error.into());
                }
            }
        }

        for record_type in submission.record_types() {
            if domain.record_type(record_type).is_none() {
                debug!(record_type = record_type, rules_type = %rules_type, "not a record type of this domain");
            }
        }

        let index = self.build_index(parsed.iter().flat_map(|(_, records)| records.iter()));

        for (spec, records) in &parsed {
            let span = info_span!("record_type", record_type = %spec.name, rules_type = %rules_type);
            let _guard = span.enter();

            match self.check_record_type(spec, domain, records, &index) {
                Ok(report) => {
                    info!(
                        records = report.record_count(),
                        errors = report.error_count(),
                        warnings = report.warning_count(),
                        "record type checked"
                    );
                    outcome.reports.insert(spec.name.clone(), report);
                }
                Err(error) => {
                    warn!(%error, "record type check aborted");
                    outcome.failures.insert(spec.name.clone(), error);
                }
            }
        }

        outcome
    }

    fn check_record_type(
        &self,
        spec: &RecordTypeSpec,
        domain: &RulesDomain,
        records: &[Record],
        index: &OntologyIndex,
    ) -> Result<RecordTypeReport> {
        let schemas = fetch_rule_schemas(self.rules, spec, domain, self.config)?;
        let type_fields = classify(Some(&schemas.type_fragment));
        let core_fields = schemas.core.as_ref().map(|core| classify(Some(core)));

        let rules = RecordTypeRules {
            record_type: &spec.name,
            name_field: &domain.name_field,
            core_key: domain.core_key.as_deref(),
            type_fields: &type_fields,
            core_fields: core_fields.as_ref(),
        };
        let ctx = WalkContext {
            index,
            config: self.config,
            subclass: self.subclass,
        };

        let mut report = walk(records, &rules, &ctx);
        report.module = schemas.module;
        Ok(report)
    }

    /// One batched label lookup for every term id the records use.
    fn build_index<'r>(&self, records: impl IntoIterator<Item = &'r Record>) -> OntologyIndex {
        let terms: BTreeSet<String> = collect_term_ids(records);
        let Some(ontology) = self.ontology else {
            debug!(terms = terms.len(), "no ontology source configured");
            return OntologyIndex::new();
        };
        if terms.is_empty() {
            return OntologyIndex::new();
        }

        match ontology.fetch_labels(&terms) {
            Ok(index) => {
                info!(terms = terms.len(), resolved = index.len(), "ontology index built");
                index
            }
            Err(error) => {
                warn!(terms = terms.len(), %error, "ontology lookup failed, labels unavailable");
                OntologyIndex::new()
            }
        }
    }
}
