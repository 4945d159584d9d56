//! Composite scoring and ranking.
//!
//! Pipeline for a single call:
//!
//! 1. validate + normalize the weights (all-zero => equal weights)
//! 2. rescale each dimension onto `[0, 1]` (cost/carbon inverted)
//! 3. composite = decision matrix × weights
//! 4. sort descending; ties resolved by `ArchitectureId` precedence
//!
//! The function is pure: the same options and weights always give the same
//! ranking, regardless of input order.

use std::cmp::Ordering;

use crate::domain::{
    ArchitectureOption, Breakdown, Dimension, NormalizationKind, PriorityWeights, Ranking, ScoredResult,
};
use crate::error::ScoreError;
use crate::math::{against_ceiling, clamp_unit, min_max, weighted_rows};

/// Monthly cost at which the reference cost score reaches zero (USD).
pub const COST_CEILING_USD: f64 = 1000.0;
/// Monthly carbon at which the reference carbon score reaches zero (kg CO2e).
pub const CARBON_CEILING_KG: f64 = 100.0;
/// Security scores are already on a 0–100 scale.
pub const SECURITY_CEILING: f64 = 100.0;

/// Normalized sub-scores for every option (same order as `options`).
pub fn normalize_options(options: &[ArchitectureOption], kind: NormalizationKind) -> Vec<Breakdown> {
    let mut out = vec![Breakdown::default(); options.len()];

    for dimension in Dimension::ALL {
        let raw: Vec<f64> = options.iter().map(|o| o.raw(dimension)).collect();
        let scaled = match kind {
            NormalizationKind::MinMax => min_max(&raw, dimension.higher_is_better()),
            NormalizationKind::Reference => raw
                .iter()
                .map(|&v| against_ceiling(v, reference_ceiling(dimension), dimension.higher_is_better()))
                .collect(),
        };
        for (b, v) in out.iter_mut().zip(scaled) {
            b.set(dimension, v);
        }
    }

    out
}

fn reference_ceiling(dimension: Dimension) -> f64 {
    match dimension {
        Dimension::Cost => COST_CEILING_USD,
        Dimension::Carbon => CARBON_CEILING_KG,
        Dimension::Security => SECURITY_CEILING,
    }
}

/// Score and rank `options` under `weights`.
pub fn score_options(
    options: &[ArchitectureOption],
    weights: &PriorityWeights,
    normalization: NormalizationKind,
) -> Result<Ranking, ScoreError> {
    if options.is_empty() {
        return Err(ScoreError::EmptyCatalog);
    }

    let (effective, mode) = weights.normalized()?;
    let breakdowns = normalize_options(options, normalization);

    let rows: Vec<[f64; 3]> = breakdowns
        .iter()
        .map(|b| Dimension::ALL.map(|d| b.get(d)))
        .collect();
    let composite = weighted_rows(&rows, &effective.as_array());

    let mut results: Vec<ScoredResult> = options
        .iter()
        .zip(breakdowns)
        .zip(composite.iter())
        .map(|((o, breakdown), &score)| ScoredResult {
            architecture_id: o.id,
            composite_score: clamp_unit(score),
            breakdown,
        })
        .collect();

    results.sort_by(compare_results);

    tracing::debug!(
        normalization = normalization.display_name(),
        ?mode,
        order = ?results.iter().map(|r| r.architecture_id.as_str()).collect::<Vec<_>>(),
        "scored architecture options"
    );

    Ok(Ranking {
        results,
        weights: effective,
        mode,
        normalization,
    })
}

/// Descending composite score, then fixed identifier precedence.
fn compare_results(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.composite_score
        .total_cmp(&a.composite_score)
        .then_with(|| a.architecture_id.precedence().cmp(&b.architecture_id.precedence()))
}
