//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - identifiers and enums (`ArchitectureId`, `Dimension`, `NormalizationKind`)
//! - scoring inputs (`PriorityWeights`, `Workload`, `ArchitectureOption`)
//! - scoring outputs (`ScoredResult`, `Ranking`, `Scorecard`)

pub mod types;

pub use types::*;
