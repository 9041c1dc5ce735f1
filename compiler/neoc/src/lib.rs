//! Neo front-end driver.
//!
//! Runs the phases in order (lex, parse, check) over one [`SourceUnit`] and
//! hands back everything they produced as a [`UnitOutcome`]. Independent
//! units can be compiled in parallel with [`compile_units`]; each one gets
//! its own arenas, universe, and diagnostic log.
//!
//! The `neo` binary is a thin argument parser over [`commands`].

pub mod commands;
mod config;
pub mod dump;
mod error;
mod pipeline;
pub mod tracing_setup;

pub use config::{parse_color_mode, DriverConfig, Phase};
pub use error::DriverError;
pub use pipeline::{compile, compile_units, render_diagnostics, SourceUnit, UnitOutcome};
