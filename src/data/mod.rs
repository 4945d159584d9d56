//! Static architecture data.

pub mod catalog;

pub use catalog::{
    ArchitectureProfile, CATALOG, KG_CO2_PER_TREE_YEAR, SecurityChecklist, catalog, evaluate, evaluate_all,
};
