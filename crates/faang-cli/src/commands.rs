use anyhow::Result;
use chrono::Local;
use comfy_table::Table;
use faang_cli::pipeline::{ChecksInput, ChecksPayload, load_catalog, run_checks, run_conversion, write_json};
use faang_cli::summary::apply_table_style;
use faang_rules::RulesType;
use faang_validate::ChecksOutcome;

use crate::cli::{ConvertArgs, TypesArgs, ValidateArgs};

pub fn run_validate(args: &ValidateArgs) -> Result<ChecksOutcome> {
    let rules_type = RulesType::from(args.rules);
    let input = ChecksInput {
        submission: args.submission.clone(),
        rules_type,
        schemas: args.schemas.clone(),
        ontology: args.ontology.clone(),
        hierarchy: args.hierarchy.clone(),
        catalog: args.catalog.clone(),
        checks: args.checks.clone(),
    };
    let outcome = run_checks(&input)?;
    if let Some(path) = &args.output {
        write_json(&ChecksPayload::new(rules_type, &outcome), Some(path))?;
    }
    Ok(outcome)
}

pub fn run_convert(args: &ConvertArgs) -> Result<usize> {
    let release_date = args
        .release_date
        .unwrap_or_else(|| Local::now().date_naive());
    let samples = run_conversion(
        &args.submission,
        args.catalog.as_deref(),
        args.biosamples.as_deref(),
        release_date,
    )?;
    write_json(&samples, args.output.as_deref())?;
    Ok(samples.len())
}

pub fn run_types(args: &TypesArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let domain = catalog.domain(args.rules.into());
    let mut table = Table::new();
    table.set_header(vec!["Record type", "Layout", "Schema"]);
    apply_table_style(&mut table);
    for spec in &domain.record_types {
        let layout = match (spec.layout.has_core(), spec.layout.has_module()) {
            (true, true) => "type + core + module",
            (true, false) => "type + core",
            _ => "type",
        };
        table.add_row(vec![spec.name.as_str(), layout, spec.url.as_str()]);
    }
    println!("{table}");
    Ok(())
}
