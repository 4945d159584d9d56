//! `green-arch` library crate.
//!
//! The binary (`garch`) is a thin wrapper around this library so that:
//!
//! - scoring logic is testable without spawning processes
//! - the CLI report and the TUI share one pipeline
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod debug;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod plot;
pub mod report;
pub mod score;
pub mod tui;
