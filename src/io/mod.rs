//! Input/output helpers.
//!
//! - per-architecture results CSV (`export`)
//! - scorecard JSON read/write (`scorecard`)

pub mod export;
pub mod scorecard;

pub use export::*;
pub use scorecard::*;
