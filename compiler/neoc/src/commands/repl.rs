//! Line-oriented read-eval-print loop.
//!
//! Every input line is its own compilation unit named `<stdin>`. For each
//! one the loop prints the tokens, the AST, and the type, then a dashed
//! rule; diagnostics go to the error stream.

use std::io::{BufRead, Write};

use crate::dump::{dump_ast, dump_tokens};
use crate::{compile, render_diagnostics, DriverConfig, DriverError, SourceUnit, UnitOutcome};

use super::fail;

/// Separator printed after the banner and after every unit.
pub const RULE: &str = "-------------------------------------------------------------------";

const PATH: &str = "<stdin>";

fn write_outcome(out: &mut impl Write, outcome: &UnitOutcome) -> std::io::Result<()> {
    writeln!(out, "Tokens:")?;
    out.write_all(dump_tokens(&outcome.source, &outcome.tokens).as_bytes())?;
    writeln!(out, "AstId = {}", outcome.root.raw())?;
    writeln!(out, "AST Nodes:")?;
    out.write_all(dump_ast(&outcome.arena, outcome.source.content(), outcome.root).as_bytes())?;
    if let Some(name) = outcome.type_name() {
        writeln!(out, "Type: {name}")?;
    }
    Ok(())
}

/// Run the loop until `input` is exhausted. Blank lines are skipped.
///
/// Returns the number of units compiled.
pub fn run<R: BufRead, O: Write, E: Write>(
    input: R,
    out: &mut O,
    err: &mut E,
    config: &DriverConfig,
) -> Result<usize, DriverError> {
    writeln!(out, "Neo {}", env!("CARGO_PKG_VERSION")).map_err(DriverError::Output)?;
    writeln!(out, "{RULE}").map_err(DriverError::Output)?;

    let mut count = 0;
    for line in input.lines() {
        let line = line.map_err(DriverError::Input)?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = compile(&SourceUnit::new(PATH, line), config);
        write_outcome(out, &outcome)
            .and_then(|()| out.flush())
            .map_err(DriverError::Output)?;
        render_diagnostics(&outcome, &mut *err, config);
        writeln!(out, "{RULE}").map_err(DriverError::Output)?;
        count += 1;
    }
    out.flush().map_err(DriverError::Output)?;
    Ok(count)
}

/// Run the loop over the process's standard streams.
pub fn run_repl(config: &DriverConfig) {
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    if let Err(e) = run(stdin, &mut stdout, &mut stderr, config) {
        fail(&e);
    }
}
