//! Command handlers for the `neo` CLI.
//!
//! Each submodule implements one command. Handlers print their results and
//! terminate the process with status 1 on failure, so `main` only has to
//! dispatch. Shared helpers live here in the module root.

mod check;
mod debug;
mod explain;
pub mod repl;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use repl::run_repl;

use crate::{render_diagnostics, DriverConfig, DriverError, SourceUnit, UnitOutcome};

/// Print a host error and exit with status 1.
fn fail(error: &DriverError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

/// Read `path`, exiting with a message when it cannot be read.
fn read_unit(path: &str) -> SourceUnit {
    SourceUnit::read(path).unwrap_or_else(|e| fail(&e))
}

/// Render diagnostics to stderr. Returns true when any of them is an error.
fn report(outcome: &UnitOutcome, config: &DriverConfig) -> bool {
    render_diagnostics(outcome, std::io::stderr(), config);
    outcome.has_errors()
}
