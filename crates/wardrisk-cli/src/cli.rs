//! CLI argument definitions for wardrisk.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use wardrisk_cli::config::ScoreOverrides;
use wardrisk_cli::flags::parse_yes_flag;

#[derive(Parser)]
#[command(
    name = "wardrisk",
    version,
    about = "Composite malaria risk scores for ward covariate tables",
    long_about = "Normalize ward-level covariates to [0, 1] and compute one composite \
                  score per covariate subset.\n\n\
                  Every subset of two or more covariates becomes a model_<N> column; \
                  each covariate also gets a norm_<covariate> column."
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
    /// Score a ward table and write it with norm_* and model_* columns.
    Score(ScoreArgs),

    /// Show the model numbering for a covariate list.
    Models(ModelsArgs),

    /// List the data-source catalog.
    Sources(SourcesArgs),
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Ward table (CSV with header).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV (default: <INPUT stem>_scores.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML config file with sources and column settings.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Data-source id to include (repeatable or comma-separated).
    #[arg(long = "source", value_name = "ID", value_delimiter = ',')]
    pub sources: Vec<String>,

    /// Covariate column to include as-is (repeatable or comma-separated).
    #[arg(long = "covariate", value_name = "COLUMN", value_delimiter = ',')]
    pub covariates: Vec<String>,

    /// Append the settlement-type column ("yes" to enable).
    #[arg(long = "settlement", value_name = "YES|NO", value_parser = parse_yes_flag)]
    pub settlement: Option<bool>,

    /// Name of the settlement-type column.
    #[arg(long = "settlement-column", value_name = "NAME")]
    pub settlement_column: Option<String>,

    /// Append the prevalence column ("yes" to enable).
    #[arg(long = "prevalence", value_name = "YES|NO", value_parser = parse_yes_flag)]
    pub prevalence: Option<bool>,

    /// Name of the prevalence column.
    #[arg(long = "prevalence-column", value_name = "NAME")]
    pub prevalence_column: Option<String>,

    /// Fail on unknown data-source ids instead of skipping them.
    #[arg(long = "strict-sources")]
    pub strict_sources: bool,

    /// Score and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl ScoreArgs {
    pub fn overrides(&self) -> ScoreOverrides {
        ScoreOverrides {
            sources: self.sources.clone(),
            covariates: self.covariates.clone(),
            include_settlement: self.settlement,
            settlement_column: self.settlement_column.clone(),
            include_prevalence: self.prevalence,
            prevalence_column: self.prevalence_column.clone(),
            strict_sources: self.strict_sources,
        }
    }
}

#[derive(Parser)]
pub struct ModelsArgs {
    /// Covariate names, in order.
    #[arg(value_name = "COVARIATE", required = true, num_args = 1..)]
    pub covariates: Vec<String>,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SourcesArgs {
    /// TOML config file whose [source_columns] overrides apply.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
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
