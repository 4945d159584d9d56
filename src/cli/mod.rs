//! Command-line parsing for the green architecture scorecard.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the scoring code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{Dimension, NormalizationKind, PriorityWeights};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "garch",
    version,
    about = "Green architecture scorecard: rank AWS data stores by cost, carbon and security"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score and rank the architectures, print the full report, and optionally plot/export.
    Score(ScoreArgs),
    /// Print the ranking table only (useful for scripting).
    Rank(ScoreArgs),
    /// Sweep the weight space and report how often each architecture wins.
    Sweep(SweepArgs),
    /// Re-render a previously exported scorecard JSON.
    Show(ShowArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying scoring pipeline as `garch score`, but
    /// renders results in a terminal UI using Ratatui.
    Tui(ScoreArgs),
}

/// Workload inputs shared by every scoring command.
#[derive(Debug, Args, Clone)]
pub struct WorkloadArgs {
    /// Stored data in GB.
    #[arg(long, env = "GARCH_STORAGE_GB", default_value_t = 1000.0)]
    pub storage_gb: f64,

    /// Monthly requests in millions.
    #[arg(long, env = "GARCH_REQUESTS_MILLIONS", default_value_t = 100.0)]
    pub requests_millions: f64,
}

/// Priority weights shared by every scoring command.
#[derive(Debug, Args, Clone)]
pub struct WeightArgs {
    /// Cost priority (any non-negative number; 0-10 is conventional).
    #[arg(long, default_value_t = 5.0, value_parser = parse_cost)]
    pub cost: f64,

    /// Carbon priority.
    #[arg(long, default_value_t = 5.0, value_parser = parse_carbon)]
    pub carbon: f64,

    /// Security priority.
    #[arg(long, default_value_t = 5.0, value_parser = parse_security)]
    pub security: f64,

    /// Shorthand for all three priorities: `cost,carbon,security`.
    #[arg(
        long,
        value_name = "C,C,S",
        value_parser = parse_weights,
        conflicts_with_all = ["cost", "carbon", "security"]
    )]
    pub weights: Option<PriorityWeights>,

    /// How raw metrics are normalized before weighting.
    #[arg(long, value_enum, default_value_t = NormalizationKind::MinMax)]
    pub normalization: NormalizationKind,
}

impl WeightArgs {
    pub fn priority_weights(&self) -> PriorityWeights {
        self.weights.unwrap_or(PriorityWeights {
            cost: self.cost,
            carbon: self.carbon,
            security: self.security,
        })
    }
}

/// Options for scoring, ranking, and the TUI.
#[derive(Debug, Parser, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub workload: WorkloadArgs,

    #[command(flatten)]
    pub priorities: WeightArgs,

    /// Render ASCII charts in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal charts.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 14)]
    pub height: usize,

    /// Export per-architecture results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full scorecard (workload, weights, options, ranking) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Options for the weight-space sweep.
#[derive(Debug, Parser, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub workload: WorkloadArgs,

    /// Grid resolution in percentage points (must divide 100).
    #[arg(long, default_value_t = 10)]
    pub step: u32,

    /// How raw metrics are normalized before weighting.
    #[arg(long, value_enum, default_value_t = NormalizationKind::MinMax)]
    pub normalization: NormalizationKind,

    /// Print the summary as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Options for re-rendering a saved scorecard.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Scorecard JSON file produced by `garch score --export-json`.
    #[arg(long, value_name = "JSON")]
    pub scorecard: PathBuf,

    /// Render ASCII charts.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 14)]
    pub height: usize,
}

fn parse_cost(raw: &str) -> Result<f64, String> {
    PriorityWeights::parse_field(Dimension::Cost, raw).map_err(|e| e.to_string())
}

fn parse_carbon(raw: &str) -> Result<f64, String> {
    PriorityWeights::parse_field(Dimension::Carbon, raw).map_err(|e| e.to_string())
}

fn parse_security(raw: &str) -> Result<f64, String> {
    PriorityWeights::parse_field(Dimension::Security, raw).map_err(|e| e.to_string())
}

fn parse_weights(raw: &str) -> Result<PriorityWeights, String> {
    PriorityWeights::parse_triplet(raw).map_err(|e| e.to_string())
}
