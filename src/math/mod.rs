//! Mathematical utilities: rescaling and the weighted decision matrix.

pub mod decision;
pub mod scale;

pub use decision::*;
pub use scale::*;
