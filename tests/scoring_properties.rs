use green_arch::data::evaluate_all;
use green_arch::domain::{ArchitectureOption, NormalizationKind, PriorityWeights, WeightingMode, Workload};
use green_arch::score::score_options;
use proptest::prelude::*;

fn default_options() -> Vec<ArchitectureOption> {
    evaluate_all(&Workload::default()).unwrap()
}

fn weight() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0..10.0f64, 0.0..1e6f64]
}

fn normalization() -> impl Strategy<Value = NormalizationKind> {
    prop_oneof![Just(NormalizationKind::MinMax), Just(NormalizationKind::Reference)]
}

proptest! {
    #[test]
    fn composite_scores_stay_in_unit_interval(
        cost in weight(),
        carbon in weight(),
        security in weight(),
        storage in 0.0..20_000.0f64,
        requests in 0.0..5_000.0f64,
        kind in normalization(),
    ) {
        let options = evaluate_all(&Workload { storage_gb: storage, requests_millions: requests }).unwrap();
        let ranking = score_options(&options, &PriorityWeights { cost, carbon, security }, kind).unwrap();
        for r in &ranking.results {
            prop_assert!((0.0..=1.0).contains(&r.composite_score), "score {}", r.composite_score);
            prop_assert!((0.0..=1.0).contains(&r.breakdown.cost));
            prop_assert!((0.0..=1.0).contains(&r.breakdown.carbon));
            prop_assert!((0.0..=1.0).contains(&r.breakdown.security));
        }
    }

    #[test]
    fn scoring_is_deterministic(cost in weight(), carbon in weight(), security in weight(), kind in normalization()) {
        let options = default_options();
        let w = PriorityWeights { cost, carbon, security };
        let a = score_options(&options, &w, kind).unwrap();
        let b = score_options(&options, &w, kind).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn results_are_sorted_descending(cost in weight(), carbon in weight(), security in weight()) {
        let ranking = score_options(&default_options(), &PriorityWeights { cost, carbon, security }, NormalizationKind::MinMax).unwrap();
        for pair in ranking.results.windows(2) {
            prop_assert!(pair[0].composite_score >= pair[1].composite_score);
        }
    }

    #[test]
    fn scaling_weights_keeps_the_ranking(
        cost in 0.0..10.0f64,
        carbon in 0.0..10.0f64,
        security in 0.0..10.0f64,
        factor in 0.001..1000.0f64,
    ) {
        let options = default_options();
        let base = score_options(&options, &PriorityWeights { cost, carbon, security }, NormalizationKind::MinMax).unwrap();
        let scaled = score_options(
            &options,
            &PriorityWeights { cost: cost * factor, carbon: carbon * factor, security: security * factor },
            NormalizationKind::MinMax,
        )
        .unwrap();

        for (a, b) in base.results.iter().zip(&scaled.results) {
            prop_assert!((a.composite_score - b.composite_score).abs() < 1e-9);
            if a.architecture_id != b.architecture_id {
                // Only near-ties may swap under floating point rescaling.
                let other = base.results.iter().find(|r| r.architecture_id == b.architecture_id).unwrap();
                prop_assert!((a.composite_score - other.composite_score).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn effective_weights_sum_to_one(cost in weight(), carbon in weight(), security in weight()) {
        let ranking = score_options(&default_options(), &PriorityWeights { cost, carbon, security }, NormalizationKind::MinMax).unwrap();
        let w = ranking.weights;
        prop_assert!((w.cost + w.carbon + w.security - 1.0).abs() < 1e-12);
    }
}

#[test]
fn all_zero_weights_fall_back_to_equal_weighting() {
    let options = default_options();
    let zero = score_options(&options, &PriorityWeights::new(0.0, 0.0, 0.0).unwrap(), NormalizationKind::MinMax).unwrap();
    let equal = score_options(&options, &PriorityWeights::new(1.0, 1.0, 1.0).unwrap(), NormalizationKind::MinMax).unwrap();

    assert_eq!(zero.mode, WeightingMode::EqualFallback);
    assert_eq!(equal.mode, WeightingMode::Weighted);
    assert_eq!(zero.order(), equal.order());
    for (a, b) in zero.results.iter().zip(&equal.results) {
        assert!((a.composite_score - b.composite_score).abs() < 1e-12);
    }
}
