//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during scoring
//! - exported to JSON/CSV
//! - reloaded later for re-rendering (`garch show`)

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// One of the three fixed candidate architectures.
///
/// Declaration order is the tie-break precedence: when two options score the
/// same, the one declared first ranks higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchitectureId {
    RdsMultiAz,
    #[serde(rename = "dynamodb")]
    DynamoDb,
    AuroraServerless,
}

impl ArchitectureId {
    pub const ALL: [ArchitectureId; 3] = [
        ArchitectureId::RdsMultiAz,
        ArchitectureId::DynamoDb,
        ArchitectureId::AuroraServerless,
    ];

    /// Stable machine identifier (matches the serde representation).
    pub fn as_str(self) -> &'static str {
        match self {
            ArchitectureId::RdsMultiAz => "rds-multi-az",
            ArchitectureId::DynamoDb => "dynamodb",
            ArchitectureId::AuroraServerless => "aurora-serverless",
        }
    }

    /// Tie-break rank (lower wins).
    pub fn precedence(self) -> usize {
        match self {
            ArchitectureId::RdsMultiAz => 0,
            ArchitectureId::DynamoDb => 1,
            ArchitectureId::AuroraServerless => 2,
        }
    }
}

impl std::fmt::Display for ArchitectureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scoring dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Cost,
    Carbon,
    Security,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Cost, Dimension::Carbon, Dimension::Security];

    /// Cost and carbon are "lower is better" and get inverted during normalization.
    pub fn higher_is_better(self) -> bool {
        matches!(self, Dimension::Security)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Dimension::Cost => "Cost",
            Dimension::Carbon => "Carbon",
            Dimension::Security => "Security",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Dimension::Cost => "cost",
            Dimension::Carbon => "carbon",
            Dimension::Security => "security",
        };
        f.write_str(s)
    }
}

/// Workload inputs that can be rejected during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadField {
    StorageGb,
    RequestsMillions,
}

impl std::fmt::Display for WorkloadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkloadField::StorageGb => f.write_str("storage_gb"),
            WorkloadField::RequestsMillions => f.write_str("requests_millions"),
        }
    }
}

/// How raw metrics are mapped onto the common `[0, 1]` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizationKind {
    /// Min-max across the candidate set; a degenerate dimension maps to 0.5.
    MinMax,
    /// Fixed reference ceilings ($1000/month cost, 100 kg/month carbon, 100 security).
    Reference,
}

impl NormalizationKind {
    pub fn display_name(self) -> &'static str {
        match self {
            NormalizationKind::MinMax => "min-max",
            NormalizationKind::Reference => "reference",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            NormalizationKind::MinMax => NormalizationKind::Reference,
            NormalizationKind::Reference => NormalizationKind::MinMax,
        }
    }
}

/// User priority weights. Any non-negative scale is accepted; the engine
/// normalizes by the sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    pub cost: f64,
    pub carbon: f64,
    pub security: f64,
}

/// Workload size the catalog is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    /// Stored data (GB).
    pub storage_gb: f64,
    /// Monthly request volume (millions).
    pub requests_millions: f64,
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            storage_gb: 1000.0,
            requests_millions: 100.0,
        }
    }
}

impl Workload {
    pub fn validate(&self) -> Result<(), ScoreError> {
        for (field, value) in [
            (WorkloadField::StorageGb, self.storage_gb),
            (WorkloadField::RequestsMillions, self.requests_millions),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ScoreError::InvalidWorkload { field, value });
            }
        }
        Ok(())
    }
}

/// One candidate architecture evaluated for a workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureOption {
    pub id: ArchitectureId,
    pub name: String,
    pub description: String,
    /// USD per month.
    pub monthly_cost: f64,
    /// USD per year.
    pub annual_cost: f64,
    /// USD over five years (annual × 5).
    pub five_year_cost: f64,
    /// kg CO2e per month.
    pub monthly_carbon: f64,
    /// kg CO2e per year.
    pub annual_carbon: f64,
    /// Checklist coverage, 0–100.
    pub security_score: f64,
    /// Availability SLA (%).
    pub availability: f64,
}

impl ArchitectureOption {
    /// Raw metric for a dimension (monthly figures for cost and carbon).
    pub fn raw(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Cost => self.monthly_cost,
            Dimension::Carbon => self.monthly_carbon,
            Dimension::Security => self.security_score,
        }
    }
}

/// Normalized per-dimension sub-scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Breakdown {
    pub cost: f64,
    pub carbon: f64,
    pub security: f64,
}

impl Breakdown {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Cost => self.cost,
            Dimension::Carbon => self.carbon,
            Dimension::Security => self.security,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        match dimension {
            Dimension::Cost => self.cost = value,
            Dimension::Carbon => self.carbon = value,
            Dimension::Security => self.security = value,
        }
    }
}

/// Score for one architecture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub architecture_id: ArchitectureId,
    /// Weighted composite in `[0, 1]`.
    pub composite_score: f64,
    pub breakdown: Breakdown,
}

/// Whether the user's weights were used as-is or replaced by the equal-weight fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightingMode {
    Weighted,
    /// All weights were zero; every dimension counted 1/3.
    EqualFallback,
}

/// Scoring output: results sorted descending by composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub results: Vec<ScoredResult>,
    /// Effective weights actually applied (sum to 1).
    pub weights: PriorityWeights,
    pub mode: WeightingMode,
    pub normalization: NormalizationKind,
}

impl Ranking {
    pub fn winner(&self) -> Option<&ScoredResult> {
        self.results.first()
    }

    pub fn order(&self) -> Vec<ArchitectureId> {
        self.results.iter().map(|r| r.architecture_id).collect()
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus environment and defaults).
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub workload: Workload,
    pub weights: PriorityWeights,
    pub normalization: NormalizationKind,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub export_scorecard: Option<PathBuf>,
}

/// A saved scorecard file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scorecard {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub workload: Workload,
    /// Weights as entered by the user (before normalization).
    pub weights: PriorityWeights,
    pub normalization: NormalizationKind,
    pub options: Vec<ArchitectureOption>,
    pub ranking: Ranking,
}
