//! Weight-space sweep.
//!
//! Every weight triple on a regular simplex grid (percentages in multiples of
//! `step` summing to 100) is scored independently, in parallel. The summary
//! reports, per architecture, the share of grid points where it ranks first.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{ArchitectureId, ArchitectureOption, NormalizationKind, PriorityWeights};
use crate::error::ScoreError;
use crate::score::score_options;

/// Win count for one architecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinShare {
    pub architecture_id: ArchitectureId,
    pub wins: usize,
    /// `wins / points`.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    pub step: u32,
    pub points: usize,
    /// One entry per architecture, in precedence order.
    pub shares: Vec<WinShare>,
}

/// All percentage triples `(cost, carbon, security)` in multiples of `step` summing to 100.
pub fn simplex_grid(step: u32) -> Result<Vec<PriorityWeights>, ScoreError> {
    if step == 0 || step > 100 || 100 % step != 0 {
        return Err(ScoreError::InvalidStep { step });
    }

    let n = 100 / step;
    let mut out = Vec::with_capacity(((n + 1) * (n + 2) / 2) as usize);
    for i in 0..=n {
        for j in 0..=(n - i) {
            let k = n - i - j;
            out.push(PriorityWeights {
                cost: f64::from(i * step),
                carbon: f64::from(j * step),
                security: f64::from(k * step),
            });
        }
    }
    Ok(out)
}

/// Run the sweep over `options`.
pub fn sweep(
    options: &[ArchitectureOption],
    step: u32,
    normalization: NormalizationKind,
) -> Result<SweepSummary, ScoreError> {
    let grid = simplex_grid(step)?;

    let winners: Vec<ArchitectureId> = grid
        .par_iter()
        .map(|w| {
            let ranking = score_options(options, w, normalization)?;
            ranking
                .winner()
                .map(|r| r.architecture_id)
                .ok_or(ScoreError::EmptyCatalog)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let points = winners.len();
    let shares = ArchitectureId::ALL
        .iter()
        .filter(|id| options.iter().any(|o| o.id == **id))
        .map(|&id| {
            let wins = winners.iter().filter(|w| **w == id).count();
            WinShare {
                architecture_id: id,
                wins,
                share: wins as f64 / points as f64,
            }
        })
        .collect();

    tracing::debug!(step, points, "weight-space sweep complete");

    Ok(SweepSummary { step, points, shares })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::evaluate_all;
    use crate::domain::Workload;

    #[test]
    fn grid_size_is_triangular() {
        assert_eq!(simplex_grid(100).unwrap().len(), 3);
        assert_eq!(simplex_grid(50).unwrap().len(), 6);
        assert_eq!(simplex_grid(10).unwrap().len(), 66);
        for w in simplex_grid(25).unwrap() {
            assert_eq!(w.cost + w.carbon + w.security, 100.0);
        }
    }

    #[test]
    fn invalid_steps_are_rejected() {
        for step in [0, 30, 101] {
            assert_eq!(simplex_grid(step).unwrap_err(), ScoreError::InvalidStep { step });
        }
    }

    #[test]
    fn shares_sum_to_one() {
        let options = evaluate_all(&Workload::default()).unwrap();
        let summary = sweep(&options, 10, NormalizationKind::MinMax).unwrap();
        assert_eq!(summary.points, 66);
        let total: usize = summary.shares.iter().map(|s| s.wins).sum();
        assert_eq!(total, summary.points);
        let share: f64 = summary.shares.iter().map(|s| s.share).sum();
        assert!((share - 1.0).abs() < 1e-12);
    }

    #[test]
    fn corners_are_won_by_single_dimension_leaders() {
        let options = evaluate_all(&Workload::default()).unwrap();
        let summary = sweep(&options, 100, NormalizationKind::MinMax).unwrap();
        // Corners: all-security (RDS), all-carbon (DynamoDB), all-cost (Aurora).
        for s in &summary.shares {
            assert_eq!(s.wins, 1, "{:?}", s.architecture_id);
        }
    }
}
