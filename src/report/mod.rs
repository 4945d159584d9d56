//! Reporting utilities: derived insights and formatted terminal output.

pub mod format;

pub use format::*;

use crate::data::KG_CO2_PER_TREE_YEAR;
use crate::domain::ArchitectureOption;

/// Cost and carbon extremes across the evaluated options.
#[derive(Debug, Clone, Copy)]
pub struct Insights<'a> {
    pub cheapest: &'a ArchitectureOption,
    pub priciest: &'a ArchitectureOption,
    pub greenest: &'a ArchitectureOption,
    pub dirtiest: &'a ArchitectureOption,
}

impl<'a> Insights<'a> {
    /// `None` when there are no options.
    pub fn compute(options: &'a [ArchitectureOption]) -> Option<Self> {
        let cheapest = options.iter().min_by(|a, b| a.monthly_cost.total_cmp(&b.monthly_cost))?;
        let priciest = options.iter().max_by(|a, b| a.monthly_cost.total_cmp(&b.monthly_cost))?;
        let greenest = options
            .iter()
            .min_by(|a, b| a.monthly_carbon.total_cmp(&b.monthly_carbon))?;
        let dirtiest = options
            .iter()
            .max_by(|a, b| a.monthly_carbon.total_cmp(&b.monthly_carbon))?;
        Some(Self {
            cheapest,
            priciest,
            greenest,
            dirtiest,
        })
    }

    /// USD per year saved by picking the cheapest option over the priciest.
    pub fn annual_savings(&self) -> f64 {
        self.priciest.annual_cost - self.cheapest.annual_cost
    }

    /// kg CO2e per year avoided by picking the greenest option over the dirtiest.
    pub fn annual_carbon_saved(&self) -> f64 {
        self.dirtiest.annual_carbon - self.greenest.annual_carbon
    }
}

/// Trees needed to absorb `annual_kg` of CO2 in a year.
pub fn trees_to_offset(annual_kg: f64) -> f64 {
    annual_kg / KG_CO2_PER_TREE_YEAR
}

/// Benchmark a winning score is compared against (0–100 scale).
pub const SCORE_BENCHMARK: f64 = 70.0;
/// Target marker drawn on the score gauge (0–100 scale).
pub const SCORE_TARGET: f64 = 90.0;

/// Colour band of a 0–100 score on the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// `>= 80`
    Strong,
    /// `>= 60`
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Strong
        } else if score >= 60.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Strong => "strong",
            ScoreBand::Fair => "fair",
            ScoreBand::Weak => "weak",
        }
    }

    /// Green, blue, red.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ScoreBand::Strong => (0x4E, 0xCD, 0xC4),
            ScoreBand::Fair => (0x45, 0xB7, 0xD1),
            ScoreBand::Weak => (0xFF, 0x6B, 0x6B),
        }
    }
}

/// Signed distance of a 0–100 score from `SCORE_BENCHMARK`.
pub fn benchmark_delta(score: f64) -> f64 {
    score - SCORE_BENCHMARK
}

/// Radar chart axes, clockwise from the top.
pub const RADAR_AXES: [&str; 4] = ["Cost efficiency", "Carbon efficiency", "Security", "Availability"];

/// Radar values on a 0–100 scale.
///
/// Cost efficiency loses one point per $10/month, carbon efficiency one point
/// per kg/month; both floor at 0.
pub fn radar_values(option: &ArchitectureOption) -> [f64; 4] {
    [
        (100.0 - option.monthly_cost / 10.0).max(0.0),
        (100.0 - option.monthly_carbon).max(0.0),
        option.security_score,
        option.availability,
    ]
}

/// `(month, cumulative cost)` for months `1..=months`.
pub fn cumulative_costs(option: &ArchitectureOption, months: u32) -> Vec<(f64, f64)> {
    (1..=months)
        .map(|m| (f64::from(m), option.monthly_cost * f64::from(m)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::evaluate_all;
    use crate::domain::{ArchitectureId, Workload};

    #[test]
    fn insights_on_default_workload() {
        let options = evaluate_all(&Workload::default()).unwrap();
        let i = Insights::compute(&options).unwrap();
        assert_eq!(i.cheapest.id, ArchitectureId::AuroraServerless);
        assert_eq!(i.priciest.id, ArchitectureId::RdsMultiAz);
        assert_eq!(i.greenest.id, ArchitectureId::DynamoDb);
        assert_eq!(i.dirtiest.id, ArchitectureId::RdsMultiAz);
        // (585 - 285) * 12
        assert!((i.annual_savings() - 3600.0).abs() < 1e-9);
        // (47.8 - 6.3) * 12
        assert!((i.annual_carbon_saved() - 498.0).abs() < 1e-6);
    }

    #[test]
    fn score_bands_switch_at_80_and_60() {
        assert_eq!(ScoreBand::of(100.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(80.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::of(79.99), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(60.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(59.99), ScoreBand::Weak);
        assert_eq!(ScoreBand::of(0.0), ScoreBand::Weak);
        assert_ne!(ScoreBand::Strong.rgb(), ScoreBand::Weak.rgb());
    }

    #[test]
    fn benchmark_delta_is_signed() {
        assert!((benchmark_delta(83.7) - 13.7).abs() < 1e-9);
        assert!((benchmark_delta(55.0) + 15.0).abs() < 1e-9);
        assert_eq!(benchmark_delta(SCORE_BENCHMARK), 0.0);
    }

    #[test]
    fn insights_empty() {
        assert!(Insights::compute(&[]).is_none());
    }

    #[test]
    fn radar_values_floor_at_zero() {
        let options = evaluate_all(&Workload::default()).unwrap();
        let rds = options.iter().find(|o| o.id == ArchitectureId::RdsMultiAz).unwrap();
        let v = radar_values(rds);
        assert!((v[0] - 41.5).abs() < 1e-9);
        assert!((v[1] - 52.2).abs() < 1e-9);
        assert_eq!(v[2], 96.0);
        assert_eq!(v[3], 99.95);

        let heavy = evaluate_all(&Workload {
            storage_gb: 10_000.0,
            requests_millions: 1000.0,
        })
        .unwrap();
        assert!(heavy.iter().all(|o| radar_values(o)[0] >= 0.0));
    }

    #[test]
    fn cumulative_costs_are_linear() {
        let options = evaluate_all(&Workload::default()).unwrap();
        let pts = cumulative_costs(&options[2], 12);
        assert_eq!(pts.len(), 12);
        assert_eq!(pts[0], (1.0, 285.0));
        assert_eq!(pts[11], (12.0, 3420.0));
    }

    #[test]
    fn trees_use_21kg_per_year() {
        assert!((trees_to_offset(210.0) - 10.0).abs() < 1e-12);
    }
}
