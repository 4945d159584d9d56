//! Read/write scorecard JSON files.
//!
//! A scorecard is the "portable" representation of a run:
//! - workload and the weights as entered
//! - evaluated options (cost, carbon, security, availability)
//! - the ranking with effective weights and per-dimension breakdown
//!
//! The schema is defined by `domain::Scorecard`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::Scorecard;
use crate::error::AppError;

/// Write a scorecard JSON file.
pub fn write_scorecard_json(path: &Path, card: &Scorecard) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create scorecard JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, card)
        .map_err(|e| AppError::new(2, format!("Failed to write scorecard JSON: {e}")))?;

    Ok(())
}

/// Read a scorecard JSON file.
pub fn read_scorecard_json(path: &Path) -> Result<Scorecard, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open scorecard JSON '{}': {e}", path.display())))?;
    let card: Scorecard = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid scorecard JSON: {e}")))?;
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_scorecard_json(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{\"tool\": \"garch\"}").unwrap();
        let err = read_scorecard_json(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid scorecard JSON"));
    }
}
