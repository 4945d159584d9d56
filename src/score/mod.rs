//! Scoring orchestration.
//!
//! Responsibilities:
//!
//! - validate and normalize priority weights
//! - normalize raw metrics and compute composite scores
//! - rank, recommend, and sweep the weight space (parallel)

pub mod engine;
pub mod recommend;
pub mod sweep;
pub mod weights;

pub use engine::*;
pub use recommend::*;
pub use sweep::*;
