//! Export per-architecture results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.
//! Rows follow ranking order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::error::AppError;

pub const RESULTS_CSV_HEADER: &str = "rank,architecture_id,name,composite_score,cost_score,carbon_score,security_score,monthly_cost_usd,annual_cost_usd,five_year_cost_usd,monthly_carbon_kg,annual_carbon_kg,security,availability";

/// Write ranked results to a CSV file.
pub fn write_results_csv(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "{RESULTS_CSV_HEADER}")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for (i, r) in run.ranking.results.iter().enumerate() {
        let Some(o) = run.option(r.architecture_id) else {
            continue;
        };
        writeln!(
            file,
            "{},{},{},{:.6},{:.6},{:.6},{:.6},{:.2},{:.2},{:.2},{:.2},{:.2},{:.1},{:.2}",
            i + 1,
            r.architecture_id,
            csv_field(&o.name),
            r.composite_score,
            r.breakdown.cost,
            r.breakdown.carbon,
            r.breakdown.security,
            o.monthly_cost,
            o.annual_cost,
            o.five_year_cost,
            o.monthly_carbon,
            o.annual_carbon,
            o.security_score,
            o.availability,
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Quote a field when it contains a delimiter or quote.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_field_quotes_only_when_needed() {
        assert_eq!(csv_field("Aurora Serverless v2"), "Aurora Serverless v2");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
