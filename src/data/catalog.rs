//! Static architecture catalog and workload evaluation.
//!
//! Rates are simplified us-east-1 list prices and carbon intensities. They are
//! fixed at compile time; the only runtime inputs are the workload size figures.

use crate::domain::{ArchitectureId, ArchitectureOption, Workload};
use crate::error::ScoreError;

/// Per-category security and compliance coverage (each 0–100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecurityChecklist {
    pub encryption: u8,
    pub backup: u8,
    pub access_control: u8,
    pub monitoring: u8,
    pub compliance: u8,
}

impl SecurityChecklist {
    pub fn items(&self) -> [(&'static str, u8); 5] {
        [
            ("Encryption", self.encryption),
            ("Backup", self.backup),
            ("Access Control", self.access_control),
            ("Monitoring", self.monitoring),
            ("Compliance", self.compliance),
        ]
    }

    /// Unweighted mean of the checklist categories.
    pub fn coverage(&self) -> f64 {
        let items = self.items();
        let total: f64 = items.iter().map(|(_, v)| f64::from(*v)).sum();
        total / items.len() as f64
    }
}

/// A static catalog row.
#[derive(Debug, Clone, Copy)]
pub struct ArchitectureProfile {
    pub id: ArchitectureId,
    pub name: &'static str,
    pub description: &'static str,

    /// USD per month regardless of usage.
    pub base_cost: f64,
    /// USD per GB-month stored.
    pub cost_per_gb: f64,
    /// USD per million requests.
    pub cost_per_million_requests: f64,

    /// kg CO2e per month for always-on capacity.
    pub base_carbon: f64,
    pub carbon_per_gb: f64,
    pub carbon_per_million_requests: f64,

    pub security: SecurityChecklist,
    /// Availability SLA (%).
    pub availability: f64,
    pub use_cases: &'static [&'static str],
}

pub const CATALOG: [ArchitectureProfile; 3] = [
    ArchitectureProfile {
        id: ArchitectureId::RdsMultiAz,
        name: "RDS Multi-AZ",
        description: "High availability database with automatic failover",
        base_cost: 450.0,
        cost_per_gb: 0.115,
        cost_per_million_requests: 0.20,
        base_carbon: 45.0,
        carbon_per_gb: 0.002,
        carbon_per_million_requests: 0.008,
        security: SecurityChecklist {
            encryption: 100,
            backup: 100,
            access_control: 95,
            monitoring: 90,
            compliance: 95,
        },
        availability: 99.95,
        use_cases: &[
            "Mission-critical applications",
            "Financial data processing",
            "Healthcare systems requiring HIPAA compliance",
        ],
    },
    ArchitectureProfile {
        id: ArchitectureId::DynamoDb,
        name: "DynamoDB On-Demand",
        description: "Serverless NoSQL database with automatic scaling",
        base_cost: 0.0,
        cost_per_gb: 0.25,
        cost_per_million_requests: 1.25,
        base_carbon: 5.0,
        carbon_per_gb: 0.001,
        carbon_per_million_requests: 0.003,
        security: SecurityChecklist {
            encryption: 95,
            backup: 85,
            access_control: 90,
            monitoring: 85,
            compliance: 80,
        },
        availability: 99.99,
        use_cases: &[
            "IoT data ingestion",
            "Real-time analytics",
            "Variable/unpredictable workloads",
        ],
    },
    ArchitectureProfile {
        id: ArchitectureId::AuroraServerless,
        name: "Aurora Serverless v2",
        description: "MySQL-compatible serverless database",
        base_cost: 150.0,
        cost_per_gb: 0.10,
        cost_per_million_requests: 0.35,
        base_carbon: 20.0,
        carbon_per_gb: 0.0015,
        carbon_per_million_requests: 0.005,
        security: SecurityChecklist {
            encryption: 100,
            backup: 95,
            access_control: 95,
            monitoring: 95,
            compliance: 90,
        },
        availability: 99.95,
        use_cases: &[
            "Web applications",
            "Development/testing environments",
            "Balanced production workloads",
        ],
    },
];

/// One tree absorbs roughly this many kg of CO2 per year.
pub const KG_CO2_PER_TREE_YEAR: f64 = 21.0;

pub fn catalog() -> &'static [ArchitectureProfile] {
    &CATALOG
}

/// Evaluate one profile for a workload. Money and mass are rounded to 2 decimals.
pub fn evaluate(profile: &ArchitectureProfile, workload: &Workload) -> ArchitectureOption {
    let monthly_cost = round2(
        profile.base_cost
            + profile.cost_per_gb * workload.storage_gb
            + profile.cost_per_million_requests * workload.requests_millions,
    );
    let monthly_carbon = round2(
        profile.base_carbon
            + profile.carbon_per_gb * workload.storage_gb
            + profile.carbon_per_million_requests * workload.requests_millions,
    );
    let annual_cost = round2(monthly_cost * 12.0);

    ArchitectureOption {
        id: profile.id,
        name: profile.name.to_string(),
        description: profile.description.to_string(),
        monthly_cost,
        annual_cost,
        five_year_cost: round2(annual_cost * 5.0),
        monthly_carbon,
        annual_carbon: round2(monthly_carbon * 12.0),
        security_score: profile.security.coverage(),
        availability: profile.availability,
    }
}

/// Evaluate the whole catalog (catalog order).
///
/// A workload that passes `validate` can still be large enough to overflow a
/// derived figure; that is rejected rather than scored.
pub fn evaluate_all(workload: &Workload) -> Result<Vec<ArchitectureOption>, ScoreError> {
    workload.validate()?;
    let options: Vec<ArchitectureOption> = CATALOG.iter().map(|p| evaluate(p, workload)).collect();
    if let Some(o) = options.iter().find(|o| !figures_are_finite(o)) {
        return Err(ScoreError::WorkloadOverflow { architecture: o.id });
    }
    Ok(options)
}

fn figures_are_finite(o: &ArchitectureOption) -> bool {
    [
        o.monthly_cost,
        o.annual_cost,
        o.five_year_cost,
        o.monthly_carbon,
        o.annual_carbon,
    ]
    .iter()
    .all(|v| v.is_finite())
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkloadField;

    fn profile(id: ArchitectureId) -> &'static ArchitectureProfile {
        &CATALOG[id.precedence()]
    }

    #[test]
    fn security_coverage_matches_published_totals() {
        assert!((profile(ArchitectureId::RdsMultiAz).security.coverage() - 96.0).abs() < 1e-9);
        assert!((profile(ArchitectureId::DynamoDb).security.coverage() - 87.0).abs() < 1e-9);
        assert!((profile(ArchitectureId::AuroraServerless).security.coverage() - 95.0).abs() < 1e-9);
    }

    #[test]
    fn catalog_order_matches_precedence() {
        for (i, p) in catalog().iter().enumerate() {
            assert_eq!(p.id.precedence(), i);
            assert_eq!(profile(p.id).id, p.id);
        }
    }

    #[test]
    fn evaluate_default_workload() {
        let options = evaluate_all(&Workload::default()).unwrap();
        let rds = &options[0];
        // 450 + 0.115 * 1000 + 0.20 * 100
        assert!((rds.monthly_cost - 585.0).abs() < 1e-9);
        assert!((rds.annual_cost - 7020.0).abs() < 1e-9);
        assert!((rds.five_year_cost - 35100.0).abs() < 1e-9);
        // 45 + 0.002 * 1000 + 0.008 * 100
        assert!((rds.monthly_carbon - 47.8).abs() < 1e-9);

        let dynamo = &options[1];
        assert!((dynamo.monthly_cost - 375.0).abs() < 1e-9);
        assert!((dynamo.monthly_carbon - 6.3).abs() < 1e-9);

        let aurora = &options[2];
        assert!((aurora.monthly_cost - 285.0).abs() < 1e-9);
        assert!((aurora.monthly_carbon - 22.0).abs() < 1e-9);
    }

    #[test]
    fn empty_workload_reduces_to_base_figures() {
        let w = Workload {
            storage_gb: 0.0,
            requests_millions: 0.0,
        };
        let dynamo = evaluate(profile(ArchitectureId::DynamoDb), &w);
        assert_eq!(dynamo.monthly_cost, 0.0);
        assert_eq!(dynamo.monthly_carbon, 5.0);
    }

    #[test]
    fn overflowing_workload_is_rejected() {
        let w = Workload {
            storage_gb: 1e307,
            requests_millions: 0.0,
        };
        assert!(matches!(
            evaluate_all(&w),
            Err(ScoreError::WorkloadOverflow { .. })
        ));
    }

    #[test]
    fn large_finite_workload_still_evaluates() {
        let w = Workload {
            storage_gb: 1e12,
            requests_millions: 1e9,
        };
        let options = evaluate_all(&w).unwrap();
        assert!(options.iter().all(figures_are_finite));
    }

    #[test]
    fn negative_workload_is_rejected() {
        let w = Workload {
            storage_gb: 10.0,
            requests_millions: -1.0,
        };
        let err = evaluate_all(&w).unwrap_err();
        assert_eq!(
            err,
            ScoreError::InvalidWorkload {
                field: WorkloadField::RequestsMillions,
                value: -1.0
            }
        );
    }
}
