use crate::domain::{ArchitectureId, Dimension, WorkloadField};

/// Validation failures raised by the scoring core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("Invalid {field} weight: {value} (weights must be finite and >= 0).")]
    InvalidWeight { field: Dimension, value: f64 },

    #[error("Invalid {field} weight '{raw}': not a number.")]
    NotNumeric { field: Dimension, raw: String },

    #[error("Expected three comma-separated weights (cost,carbon,security), got '{raw}'.")]
    WeightArity { raw: String },

    #[error("Invalid workload {field}: {value} (must be finite and >= 0).")]
    InvalidWorkload { field: WorkloadField, value: f64 },

    #[error("Workload too large: {architecture} cost or carbon figures are not finite.")]
    WorkloadOverflow { architecture: ArchitectureId },

    #[error("No architecture options to score.")]
    EmptyCatalog,

    #[error("Invalid sweep step {step}: must be between 1 and 100 and divide 100 evenly.")]
    InvalidStep { step: u32 },
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<ScoreError> for AppError {
    fn from(err: ScoreError) -> Self {
        AppError::new(2, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_error_maps_to_usage_exit_code() {
        let err: AppError = ScoreError::InvalidWeight {
            field: Dimension::Carbon,
            value: -1.0,
        }
        .into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("carbon"));
    }
}
