use green_arch::app::pipeline::{build_scorecard, run_score};
use green_arch::domain::{ArchitectureId, Dimension, NormalizationKind, PriorityWeights, ScoreConfig, Workload};
use green_arch::io::{RESULTS_CSV_HEADER, read_scorecard_json, write_results_csv, write_scorecard_json};
use green_arch::score::sweep;

fn config(weights: PriorityWeights) -> ScoreConfig {
    ScoreConfig {
        workload: Workload::default(),
        weights,
        normalization: NormalizationKind::MinMax,
        plot: false,
        plot_width: 60,
        plot_height: 14,
        export_results: None,
        export_scorecard: None,
    }
}

#[test]
fn equal_weights_rank_consistently_with_raw_values() {
    let run = run_score(&config(PriorityWeights::new(5.0, 5.0, 5.0).unwrap())).unwrap();

    let by_id = |id| run.option(id).unwrap();
    let rds = by_id(ArchitectureId::RdsMultiAz);
    let ddb = by_id(ArchitectureId::DynamoDb);
    let aurora = by_id(ArchitectureId::AuroraServerless);

    // Raw facts about the sample data.
    assert!(rds.security_score > aurora.security_score && aurora.security_score > ddb.security_score);
    assert!(ddb.monthly_carbon < aurora.monthly_carbon && aurora.monthly_carbon < rds.monthly_carbon);
    assert!(aurora.monthly_cost < ddb.monthly_cost && ddb.monthly_cost < rds.monthly_cost);

    // Sub-scores mirror those facts.
    let score = |id| *run.ranking.results.iter().find(|r| r.architecture_id == id).unwrap();
    assert_eq!(score(ArchitectureId::RdsMultiAz).breakdown.security, 1.0);
    assert_eq!(score(ArchitectureId::DynamoDb).breakdown.carbon, 1.0);
    assert_eq!(score(ArchitectureId::AuroraServerless).breakdown.cost, 1.0);

    // Aurora is balanced and comes out on top.
    assert_eq!(
        run.ranking.order(),
        vec![ArchitectureId::AuroraServerless, ArchitectureId::DynamoDb, ArchitectureId::RdsMultiAz]
    );
    assert!((score(ArchitectureId::AuroraServerless).composite_score - 0.8368).abs() < 1e-3);
}

#[test]
fn single_priority_presets_pick_the_expected_winner() {
    let winner = |d| {
        run_score(&config(PriorityWeights::only(d)))
            .unwrap()
            .recommendation
            .architecture_id
    };
    assert_eq!(winner(Dimension::Cost), ArchitectureId::AuroraServerless);
    assert_eq!(winner(Dimension::Carbon), ArchitectureId::DynamoDb);
    assert_eq!(winner(Dimension::Security), ArchitectureId::RdsMultiAz);
}

#[test]
fn results_csv_has_one_row_per_architecture_in_rank_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    let run = run_score(&config(PriorityWeights::equal())).unwrap();

    write_results_csv(&path, &run).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], RESULTS_CSV_HEADER);
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("1,aurora-serverless,Aurora Serverless v2,"));
    assert!(lines[3].starts_with("3,rds-multi-az,RDS Multi-AZ,"));
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), RESULTS_CSV_HEADER.split(',').count());
    }
}

#[test]
fn scorecard_json_reads_back_what_was_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scorecard.json");
    let cfg = config(PriorityWeights::new(2.0, 8.0, 1.0).unwrap());
    let run = run_score(&cfg).unwrap();
    let card = build_scorecard(&cfg, &run);

    write_scorecard_json(&path, &card).unwrap();
    let back = read_scorecard_json(&path).unwrap();

    assert_eq!(back.tool, "garch");
    assert_eq!(back.weights, cfg.weights);
    assert_eq!(back.normalization, NormalizationKind::MinMax);
    assert_eq!(back.options.len(), run.options.len());
    assert_eq!(back.ranking.order(), run.ranking.order());
    assert_eq!(back.ranking.mode, run.ranking.mode);
    for (a, b) in back.ranking.results.iter().zip(&run.ranking.results) {
        assert!((a.composite_score - b.composite_score).abs() < 1e-12);
    }
    for (a, b) in back.options.iter().zip(&run.options) {
        assert_eq!(a.id, b.id);
        assert!((a.monthly_cost - b.monthly_cost).abs() < 1e-9);
        assert!((a.monthly_carbon - b.monthly_carbon).abs() < 1e-9);
    }

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"dynamodb\""));
    assert!(raw.contains("\"min-max\""));
}

#[test]
fn sweep_covers_every_architecture() {
    let options = green_arch::data::evaluate_all(&Workload::default()).unwrap();
    let summary = sweep(&options, 10, NormalizationKind::MinMax).unwrap();
    assert_eq!(summary.points, 66);
    let total: f64 = summary.shares.iter().map(|s| s.share).sum();
    assert!((total - 1.0).abs() < 1e-12);
    assert!(summary.shares.iter().all(|s| s.wins > 0));
}

#[test]
fn invalid_workload_is_rejected() {
    let mut cfg = config(PriorityWeights::equal());
    cfg.workload.requests_millions = -1.0;
    let err = run_score(&cfg).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("requests_millions"));
}

#[test]
fn overflowing_workload_is_rejected_before_scoring() {
    let mut cfg = config(PriorityWeights::only(Dimension::Cost));
    cfg.workload.storage_gb = 1e307;
    cfg.workload.requests_millions = 0.0;
    let err = run_score(&cfg).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("not finite"));
}

#[test]
fn cost_only_ranking_follows_raw_cost_for_large_workloads() {
    let mut cfg = config(PriorityWeights::only(Dimension::Cost));
    cfg.workload.storage_gb = 1e9;
    let run = run_score(&cfg).unwrap();
    let costs: Vec<f64> = run
        .ranking
        .results
        .iter()
        .map(|r| run.option(r.architecture_id).unwrap().monthly_cost)
        .collect();
    assert!(costs.windows(2).all(|w| w[0] <= w[1]), "{costs:?}");
    assert_eq!(run.ranking.results[0].architecture_id, ArchitectureId::AuroraServerless);
}
