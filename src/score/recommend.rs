//! Turn a ranking into a user-facing recommendation.

use serde::{Deserialize, Serialize};

use crate::domain::{ArchitectureId, ArchitectureOption, PriorityWeights, Ranking, WeightingMode};

/// Top-ranked option plus a short explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub architecture_id: ArchitectureId,
    pub name: String,
    /// Composite score in `[0, 1]`.
    pub score: f64,
    pub reason: String,
}

/// Build a recommendation from the ranking winner.
pub fn recommend(ranking: &Ranking, options: &[ArchitectureOption]) -> Option<Recommendation> {
    let winner = ranking.winner()?;
    let name = options
        .iter()
        .find(|o| o.id == winner.architecture_id)
        .map(|o| o.name.clone())
        .unwrap_or_else(|| winner.architecture_id.to_string());

    let reason = match ranking.mode {
        WeightingMode::EqualFallback => {
            "No priorities set; all dimensions were weighted equally.".to_string()
        }
        WeightingMode::Weighted => recommendation_reason(&ranking.weights).to_string(),
    };

    Some(Recommendation {
        architecture_id: winner.architecture_id,
        name,
        score: winner.composite_score,
        reason,
    })
}

/// Reason text keyed on the dominant effective weight (> 50%).
///
/// Security is checked first, then carbon, then cost.
pub fn recommendation_reason(effective: &PriorityWeights) -> &'static str {
    if effective.security > 0.5 {
        "Based on your high security priority, this option provides the best protection while managing costs."
    } else if effective.carbon > 0.5 {
        "This option minimizes environmental impact while maintaining security standards."
    } else if effective.cost > 0.5 {
        "This option provides the best value for money with acceptable security and sustainability."
    } else {
        "This option provides the best balanced solution across all your priorities."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::evaluate_all;
    use crate::domain::{NormalizationKind, Workload};
    use crate::score::score_options;

    #[test]
    fn reason_follows_dominant_weight() {
        let w = PriorityWeights {
            cost: 0.2,
            carbon: 0.2,
            security: 0.6,
        };
        assert!(recommendation_reason(&w).contains("security"));

        let w = PriorityWeights {
            cost: 0.6,
            carbon: 0.2,
            security: 0.2,
        };
        assert!(recommendation_reason(&w).contains("value for money"));

        assert!(recommendation_reason(&PriorityWeights::equal()).contains("balanced"));
    }

    #[test]
    fn recommend_picks_winner_name() {
        let options = evaluate_all(&Workload::default()).unwrap();
        let ranking = score_options(
            &options,
            &PriorityWeights::new(1.0, 1.0, 8.0).unwrap(),
            NormalizationKind::MinMax,
        )
        .unwrap();
        let rec = recommend(&ranking, &options).unwrap();
        assert_eq!(rec.architecture_id, ranking.results[0].architecture_id);
        assert!(rec.reason.contains("security"));
        assert!(!rec.name.is_empty());
    }

    #[test]
    fn zero_weights_explain_fallback() {
        let options = evaluate_all(&Workload::default()).unwrap();
        let ranking = score_options(
            &options,
            &PriorityWeights::new(0.0, 0.0, 0.0).unwrap(),
            NormalizationKind::MinMax,
        )
        .unwrap();
        let rec = recommend(&ranking, &options).unwrap();
        assert!(rec.reason.contains("equally"));
    }
}
