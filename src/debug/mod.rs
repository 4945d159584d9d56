//! Decision bundle writer: a markdown snapshot of the catalog, evaluated
//! options and rankings under the current weights and the single-priority presets.

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::data::{catalog, evaluate_all};
use crate::domain::{Dimension, PriorityWeights, ScoreConfig};
use crate::error::AppError;
use crate::score::score_options;

/// Write a bundle under `debug/` in the working directory.
pub fn write_decision_bundle(config: &ScoreConfig) -> Result<PathBuf, AppError> {
    write_decision_bundle_in(Path::new("debug"), config)
}

/// Write a bundle under `dir`.
pub fn write_decision_bundle_in(dir: &Path, config: &ScoreConfig) -> Result<PathBuf, AppError> {
    create_dir_all(dir).map_err(|e| AppError::new(4, format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!(
        "garch_decision_{}gb_{}m_{}.md",
        config.workload.storage_gb, config.workload.requests_millions, ts
    ));

    let mut file = File::create(&path)
        .map_err(|e| AppError::new(4, format!("Failed to create debug file: {e}")))?;

    write_header(&mut file, config)?;
    write_catalog(&mut file)?;

    let options = evaluate_all(&config.workload)?;

    line(&mut file, "\n## Evaluated options")?;
    line(
        &mut file,
        "| id | monthly_usd | annual_usd | five_year_usd | monthly_kg | annual_kg | security | availability |",
    )?;
    line(&mut file, "| - | - | - | - | - | - | - | - |")?;
    for o in &options {
        line(
            &mut file,
            &format!(
                "| {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.1} | {:.2} |",
                o.id,
                o.monthly_cost,
                o.annual_cost,
                o.five_year_cost,
                o.monthly_carbon,
                o.annual_carbon,
                o.security_score,
                o.availability
            ),
        )?;
    }

    let mut scenarios = vec![("current", config.weights)];
    scenarios.push(("cost only", PriorityWeights::only(Dimension::Cost)));
    scenarios.push(("carbon only", PriorityWeights::only(Dimension::Carbon)));
    scenarios.push(("security only", PriorityWeights::only(Dimension::Security)));
    scenarios.push(("equal", PriorityWeights::equal()));

    for (label, weights) in scenarios {
        let ranking = score_options(&options, &weights, config.normalization)?;
        line(&mut file, &format!("\n## Ranking: {label}"))?;
        line(
            &mut file,
            &format!(
                "Effective weights: cost={:.4}, carbon={:.4}, security={:.4} ({:?})",
                ranking.weights.cost, ranking.weights.carbon, ranking.weights.security, ranking.mode
            ),
        )?;
        line(&mut file, "| rank | id | score | cost | carbon | security |")?;
        line(&mut file, "| - | - | - | - | - | - |")?;
        for (i, r) in ranking.results.iter().enumerate() {
            line(
                &mut file,
                &format!(
                    "| {} | {} | {:.6} | {:.6} | {:.6} | {:.6} |",
                    i + 1,
                    r.architecture_id,
                    r.composite_score,
                    r.breakdown.cost,
                    r.breakdown.carbon,
                    r.breakdown.security
                ),
            )?;
        }
    }

    tracing::info!(path = %path.display(), "wrote decision bundle");
    Ok(path)
}

fn write_header(file: &mut File, config: &ScoreConfig) -> Result<(), AppError> {
    line(file, "# garch decision bundle")?;
    line(file, &format!("- generated: {}", Local::now().to_rfc3339()))?;
    line(
        file,
        &format!(
            "- workload: storage_gb={}, requests_millions={}",
            config.workload.storage_gb, config.workload.requests_millions
        ),
    )?;
    line(
        file,
        &format!(
            "- weights (as entered): cost={}, carbon={}, security={}",
            config.weights.cost, config.weights.carbon, config.weights.security
        ),
    )?;
    line(file, &format!("- normalization: {}", config.normalization.display_name()))
}

fn write_catalog(file: &mut File) -> Result<(), AppError> {
    line(file, "\n## Catalog")?;
    line(
        file,
        "| id | base_usd | usd_per_gb | usd_per_m_req | base_kg | kg_per_gb | kg_per_m_req | checklist | availability |",
    )?;
    line(file, "| - | - | - | - | - | - | - | - | - |")?;
    for p in catalog() {
        let checklist: Vec<String> = p
            .security
            .items()
            .iter()
            .map(|(name, v)| format!("{name}={v}"))
            .collect();
        line(
            file,
            &format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                p.id,
                p.base_cost,
                p.cost_per_gb,
                p.cost_per_million_requests,
                p.base_carbon,
                p.carbon_per_gb,
                p.carbon_per_million_requests,
                checklist.join(", "),
                p.availability
            ),
        )?;
    }
    Ok(())
}

fn line(file: &mut File, text: &str) -> Result<(), AppError> {
    writeln!(file, "{text}").map_err(|e| AppError::new(4, format!("Failed to write debug: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NormalizationKind, Workload};

    #[test]
    fn bundle_lists_every_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScoreConfig {
            workload: Workload::default(),
            weights: PriorityWeights::new(0.0, 0.0, 0.0).unwrap(),
            normalization: NormalizationKind::MinMax,
            plot: false,
            plot_width: 60,
            plot_height: 14,
            export_results: None,
            export_scorecard: None,
        };
        let path = write_decision_bundle_in(dir.path(), &config).unwrap();
        let text = std::fs::read_to_string(path).unwrap();

        assert!(text.starts_with("# garch decision bundle"));
        for heading in ["current", "cost only", "carbon only", "security only", "equal"] {
            assert!(text.contains(&format!("## Ranking: {heading}")), "missing {heading}");
        }
        assert!(text.contains("EqualFallback"));
        assert!(text.contains("Encryption=100"));
    }
}
