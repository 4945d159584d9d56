//! Shared "score pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! workload -> catalog evaluation -> scoring -> recommendation
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use chrono::Utc;

use crate::data::evaluate_all;
use crate::domain::{ArchitectureOption, Ranking, ScoreConfig, Scorecard};
use crate::error::AppError;
use crate::score::{Recommendation, recommend, score_options};

/// All computed outputs of a single `garch score` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub options: Vec<ArchitectureOption>,
    pub ranking: Ranking,
    pub recommendation: Recommendation,
}

impl RunOutput {
    pub fn option(&self, id: crate::domain::ArchitectureId) -> Option<&ArchitectureOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

/// Execute the full scoring pipeline and return the computed outputs.
pub fn run_score(config: &ScoreConfig) -> Result<RunOutput, AppError> {
    // 1) Evaluate the static catalog for the workload.
    let options = evaluate_all(&config.workload)?;

    // 2) Score and rank.
    let ranking = score_options(&options, &config.weights, config.normalization)?;

    // 3) Pick the winner and explain it.
    let recommendation = recommend(&ranking, &options)
        .ok_or_else(|| AppError::new(4, "Scoring produced an empty ranking."))?;

    tracing::info!(
        winner = recommendation.architecture_id.as_str(),
        score = recommendation.score,
        storage_gb = config.workload.storage_gb,
        requests_millions = config.workload.requests_millions,
        "scoring pipeline finished"
    );

    Ok(RunOutput {
        options,
        ranking,
        recommendation,
    })
}

/// Package a run as a portable scorecard.
pub fn build_scorecard(config: &ScoreConfig, run: &RunOutput) -> Scorecard {
    Scorecard {
        tool: "garch".to_string(),
        generated_at: Utc::now(),
        workload: config.workload,
        weights: config.weights,
        normalization: config.normalization,
        options: run.options.clone(),
        ranking: run.ranking.clone(),
    }
}
