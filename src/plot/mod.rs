//! Terminal plotting (ASCII).

pub mod ascii;

pub use ascii::*;
