//! CLI argument definitions for the FAANG checks tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use faang_rules::RulesType;

#[derive(Parser)]
#[command(
    name = "faang-checks",
    version,
    about = "FAANG metadata checks - warnings and additional checks for submissions",
    long_about = "Run the warnings and additional checks over a FAANG metadata submission.\n\n\
                  Reports missing recommended fields, ontology label mismatches, date/unit\n\
                  inconsistencies, missing-value sentinels and breed/species mismatches.\n\
                  Converts validated samples to BioSamples JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the checks over a submission.
    Validate(ValidateArgs),

    /// Convert a samples submission to BioSamples JSON.
    Convert(ConvertArgs),

    /// List the record types of a rules domain.
    Types(TypesArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Submission JSON: record type to its list of records.
    #[arg(value_name = "SUBMISSION")]
    pub submission: PathBuf,

    /// Rules domain the submission belongs to.
    #[arg(long = "rules", value_enum, default_value = "samples")]
    pub rules: RulesTypeArg,

    /// Directory holding the rule schema documents, named as the last
    /// segment of their URLs.
    #[arg(long = "schemas", value_name = "DIR")]
    pub schemas: PathBuf,

    /// Ontology labels, `{term: [{ontology_name, label}]}`.
    #[arg(long = "ontology", value_name = "PATH")]
    pub ontology: Option<PathBuf>,

    /// Ontology parent links, `{term: [parent]}`, for the breed check.
    #[arg(long = "hierarchy", value_name = "PATH")]
    pub hierarchy: Option<PathBuf>,

    /// Record type catalog replacing the built-in one.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Check configuration replacing the built-in one.
    #[arg(long = "checks", value_name = "PATH")]
    pub checks: Option<PathBuf>,

    /// Write issue trees and annotated records as JSON.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Samples submission JSON.
    #[arg(value_name = "SUBMISSION")]
    pub submission: PathBuf,

    /// Release date of the samples (default: today).
    #[arg(long = "release-date", value_name = "YYYY-MM-DD")]
    pub release_date: Option<NaiveDate>,

    /// Taxa of referenced BioSamples accessions, `{accession: {id, name}}`.
    #[arg(long = "biosamples", value_name = "PATH")]
    pub biosamples: Option<PathBuf>,

    /// Record type catalog replacing the built-in one.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Write the BioSamples records here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TypesArgs {
    /// Rules domain to list.
    #[arg(long = "rules", value_enum, default_value = "samples")]
    pub rules: RulesTypeArg,

    /// Record type catalog replacing the built-in one.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RulesTypeArg {
    Samples,
    Experiments,
    Analyses,
}

impl From<RulesTypeArg> for RulesType {
    fn from(arg: RulesTypeArg) -> Self {
        match arg {
            RulesTypeArg::Samples => RulesType::Samples,
            RulesTypeArg::Experiments => RulesType::Experiments,
            RulesTypeArg::Analyses => RulesType::Analyses,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
