//! Formatted terminal output: summary, rankings, comparison and insight tables.
//!
//! We keep formatting code in one place so:
//! - the scoring code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::app::pipeline::RunOutput;
use crate::domain::{ArchitectureOption, Dimension, Ranking, ScoreConfig, Scorecard, WeightingMode, Workload};
use crate::report::{Insights, SCORE_BENCHMARK, SCORE_TARGET, ScoreBand, benchmark_delta, trees_to_offset};
use crate::score::{Recommendation, SweepSummary};

/// Format the run header: workload, weight distribution, recommendation.
pub fn format_run_summary(run: &RunOutput, config: &ScoreConfig) -> String {
    let mut out = String::new();

    out.push_str("=== garch - Green Tech Cloud Architecture Scorecard ===\n");
    out.push_str(&format_workload(&config.workload));
    out.push_str(&format_weights(&run.ranking, config));
    out.push('\n');
    out.push_str(&format_recommendation(&run.recommendation));
    out.push('\n');

    out
}

fn format_workload(workload: &Workload) -> String {
    format!(
        "Workload: storage={} GB | requests={}M/month\n",
        group_thousands(workload.storage_gb, 0),
        group_thousands(workload.requests_millions, 0),
    )
}

fn format_weights(ranking: &Ranking, config: &ScoreConfig) -> String {
    let pct = config.weights.percentages();
    let mut out = format!(
        "Weights: cost {:.0}% | carbon {:.0}% | security {:.0}% ({} normalization)\n",
        pct[0],
        pct[1],
        pct[2],
        ranking.normalization.display_name(),
    );
    if ranking.mode == WeightingMode::EqualFallback {
        out.push_str("Note: all weights are zero; using equal weighting.\n");
    }
    out
}

const GAUGE_WIDTH: usize = 30;

/// Format the recommendation box: winner, score gauge with band and benchmark
/// delta, then the reason.
pub fn format_recommendation(rec: &Recommendation) -> String {
    let score = rec.score * 100.0;
    format!(
        "Recommended: {} (overall score {:.1}/100)\n  [{}] {}, {:+.1} vs {:.0} (target {:.0})\n  {}\n",
        rec.name,
        score,
        score_gauge(score, GAUGE_WIDTH),
        ScoreBand::of(score).label(),
        benchmark_delta(score),
        SCORE_BENCHMARK,
        SCORE_TARGET,
        rec.reason
    )
}

/// `#` up to `score`, `-` after, `|` at the target.
fn score_gauge(score: f64, width: usize) -> String {
    let unit = |v: f64| ((v / 100.0).clamp(0.0, 1.0) * width as f64).round() as usize;
    let filled = unit(score);
    let target = unit(SCORE_TARGET).min(width.saturating_sub(1));
    (0..width)
        .map(|i| {
            if i == target {
                '|'
            } else if i < filled {
                '#'
            } else {
                '-'
            }
        })
        .collect()
}

/// Format the ranking table with per-dimension breakdown.
pub fn format_rankings(ranking: &Ranking, options: &[ArchitectureOption]) -> String {
    let mut out = String::new();
    out.push_str("Ranking (scores out of 100):\n");
    out.push_str(
        format!(
            "{:<4} {:<18} {:<22} {:>7} {:>7} {:>7} {:>8}\n",
            "rank", "id", "name", "score", "cost", "carbon", "security"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<4} {:-<18} {:-<22} {:-<7} {:-<7} {:-<7} {:-<8}\n",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for (i, r) in ranking.results.iter().enumerate() {
        let name = options
            .iter()
            .find(|o| o.id == r.architecture_id)
            .map(|o| o.name.as_str())
            .unwrap_or("");
        out.push_str(
            format!(
                "{:<4} {:<18} {:<22} {:>7.1} {:>7.1} {:>7.1} {:>8.1}\n",
                i + 1,
                r.architecture_id.as_str(),
                truncate(name, 22),
                r.composite_score * 100.0,
                r.breakdown.get(Dimension::Cost) * 100.0,
                r.breakdown.get(Dimension::Carbon) * 100.0,
                r.breakdown.get(Dimension::Security) * 100.0,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format the detailed comparison table (catalog order).
pub fn format_comparison_table(options: &[ArchitectureOption], ranking: &Ranking) -> String {
    let mut out = String::new();
    out.push_str("Detailed comparison:\n");
    out.push_str(
        format!(
            "{:<22} {:>12} {:>12} {:>12} {:>10} {:>9} {:>8} {:>8}\n",
            "architecture", "monthly", "annual", "5y_tco", "kg/month", "security", "sla", "overall"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<22} {:-<12} {:-<12} {:-<12} {:-<10} {:-<9} {:-<8} {:-<8}\n",
            "", "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for o in options {
        let overall = ranking
            .results
            .iter()
            .find(|r| r.architecture_id == o.id)
            .map(|r| format!("{:.1}", r.composite_score * 100.0))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(
            format!(
                "{:<22} {:>12} {:>12} {:>12} {:>10.1} {:>9} {:>8} {:>8}\n",
                truncate(&o.name, 22),
                fmt_usd(o.monthly_cost, 2),
                fmt_usd(o.annual_cost, 2),
                fmt_usd(o.five_year_cost, 0),
                o.monthly_carbon,
                format!("{:.0}/100", o.security_score),
                format!("{}%", o.availability),
                overall,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format cost and sustainability insights.
pub fn format_insights(options: &[ArchitectureOption]) -> String {
    let Some(i) = Insights::compute(options) else {
        return String::new();
    };

    let mut out = String::new();
    out.push_str("Cost insights:\n");
    out.push_str(&format!(
        "- Lowest monthly cost: {} ({})\n",
        i.cheapest.name,
        fmt_usd(i.cheapest.monthly_cost, 2)
    ));
    out.push_str(&format!(
        "- Highest monthly cost: {} ({})\n",
        i.priciest.name,
        fmt_usd(i.priciest.monthly_cost, 2)
    ));
    out.push_str(&format!(
        "- Potential annual savings by choosing the cheapest option: {}\n",
        fmt_usd(i.annual_savings(), 2)
    ));

    out.push_str("\nSustainability insights:\n");
    out.push_str(&format!("- Most eco-friendly: {}\n", i.greenest.name));
    out.push_str(&format!(
        "- Choosing the greenest option saves {:.0} kg CO2 per year (~{:.0} trees)\n",
        i.annual_carbon_saved(),
        trees_to_offset(i.annual_carbon_saved())
    ));
    for o in options {
        out.push_str(&format!(
            "  {:<22} {:>8.0} kg CO2/year  ~{:.0} trees to offset\n",
            truncate(&o.name, 22),
            o.annual_carbon,
            trees_to_offset(o.annual_carbon)
        ));
    }

    out
}

/// Format 12-month and 5-year projections.
pub fn format_projections(options: &[ArchitectureOption]) -> String {
    let mut out = String::new();
    out.push_str("12-month projections:\n");
    for o in options {
        out.push_str(&format!(
            "- {:<22} year 1 cost {:>12} | year 1 carbon {:>7.0} kg | 5-year TCO {:>12}\n",
            truncate(&o.name, 22),
            fmt_usd(o.annual_cost, 0),
            o.annual_carbon,
            fmt_usd(o.five_year_cost, 0),
        ));
    }
    out
}

/// Format a weight-space sweep summary.
pub fn format_sweep(summary: &SweepSummary, options: &[ArchitectureOption]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Weight-space sweep: step={}% | grid points={}\n",
        summary.step, summary.points
    ));
    out.push_str(format!("{:<22} {:>6} {:>7}\n", "architecture", "wins", "share").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<22} {:-<6} {:-<7}\n", "", "", "").trim_end());
    out.push('\n');
    for s in &summary.shares {
        let name = options
            .iter()
            .find(|o| o.id == s.architecture_id)
            .map(|o| o.name.as_str())
            .unwrap_or(s.architecture_id.as_str());
        out.push_str(&format!(
            "{:<22} {:>6} {:>6.1}%\n",
            truncate(name, 22),
            s.wins,
            s.share * 100.0
        ));
    }
    out
}

/// Format a saved scorecard header (used by `garch show`).
pub fn format_scorecard_header(card: &Scorecard) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== {} scorecard (generated {}) ===\n",
        card.tool,
        card.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format_workload(&card.workload));
    let pct = card.weights.percentages();
    out.push_str(&format!(
        "Weights: cost {:.0}% | carbon {:.0}% | security {:.0}% ({} normalization)\n",
        pct[0],
        pct[1],
        pct[2],
        card.normalization.display_name()
    ));
    out
}

/// `$1,234.56`-style currency.
pub fn fmt_usd(v: f64, decimals: usize) -> String {
    if v < 0.0 {
        format!("-${}", group_thousands(-v, decimals))
    } else {
        format!("${}", group_thousands(v, decimals))
    }
}

/// Insert `,` separators into the integer part.
pub fn group_thousands(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if v < 0.0 && s.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
