//! Priority weight validation and normalization.

use crate::domain::{Dimension, PriorityWeights, WeightingMode};
use crate::error::ScoreError;

impl PriorityWeights {
    /// Build validated weights. Any non-negative finite scale is accepted.
    pub fn new(cost: f64, carbon: f64, security: f64) -> Result<Self, ScoreError> {
        let w = Self {
            cost,
            carbon,
            security,
        };
        w.validate()?;
        Ok(w)
    }

    pub fn equal() -> Self {
        let third = 1.0 / 3.0;
        Self {
            cost: third,
            carbon: third,
            security: third,
        }
    }

    /// Every weight on one dimension.
    pub fn only(dimension: Dimension) -> Self {
        let mut w = Self {
            cost: 0.0,
            carbon: 0.0,
            security: 0.0,
        };
        w.set(dimension, 1.0);
        w
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Cost => self.cost,
            Dimension::Carbon => self.carbon,
            Dimension::Security => self.security,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        match dimension {
            Dimension::Cost => self.cost = value,
            Dimension::Carbon => self.carbon = value,
            Dimension::Security => self.security = value,
        }
    }

    /// Weights in `Dimension::ALL` order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.cost, self.carbon, self.security]
    }

    /// Reject the first negative or non-finite weight, naming its field.
    pub fn validate(&self) -> Result<(), ScoreError> {
        for field in Dimension::ALL {
            let value = self.get(field);
            if !(value.is_finite() && value >= 0.0) {
                return Err(ScoreError::InvalidWeight { field, value });
            }
        }
        Ok(())
    }

    /// Parse a single weight given as text.
    pub fn parse_field(field: Dimension, raw: &str) -> Result<f64, ScoreError> {
        let trimmed = raw.trim();
        let value: f64 = trimmed.parse().map_err(|_| ScoreError::NotNumeric {
            field,
            raw: trimmed.to_string(),
        })?;
        if !(value.is_finite() && value >= 0.0) {
            return Err(ScoreError::InvalidWeight { field, value });
        }
        Ok(value)
    }

    /// Parse `"cost,carbon,security"` (e.g. `"5,3,8"` or `"0.5,0.2,0.3"`).
    pub fn parse_triplet(raw: &str) -> Result<Self, ScoreError> {
        let parts: Vec<&str> = raw.split(',').collect();
        let [cost, carbon, security] = parts.as_slice() else {
            return Err(ScoreError::WeightArity { raw: raw.to_string() });
        };
        Ok(Self {
            cost: Self::parse_field(Dimension::Cost, cost)?,
            carbon: Self::parse_field(Dimension::Carbon, carbon)?,
            security: Self::parse_field(Dimension::Security, security)?,
        })
    }

    /// Effective weights summing to 1.
    ///
    /// All-zero input falls back to equal weighting and is reported as
    /// `WeightingMode::EqualFallback`. Weights are first divided by their maximum
    /// so very large inputs cannot overflow the sum.
    pub fn normalized(&self) -> Result<(PriorityWeights, WeightingMode), ScoreError> {
        self.validate()?;

        let max = self.cost.max(self.carbon).max(self.security);
        if max <= 0.0 {
            return Ok((PriorityWeights::equal(), WeightingMode::EqualFallback));
        }

        let scaled = self.as_array().map(|v| v / max);
        let sum: f64 = scaled.iter().sum();
        Ok((
            PriorityWeights {
                cost: scaled[0] / sum,
                carbon: scaled[1] / sum,
                security: scaled[2] / sum,
            },
            WeightingMode::Weighted,
        ))
    }

    /// Share of each dimension as a percentage of the effective weights.
    ///
    /// Follows `normalized`, so all-zero input reads as equal shares. Invalid
    /// weights give zeros.
    pub fn percentages(&self) -> [f64; 3] {
        match self.normalized() {
            Ok((effective, _)) => effective.as_array().map(|v| v * 100.0),
            Err(_) => [0.0; 3],
        }
    }
}
