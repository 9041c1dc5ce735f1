//! Debug commands: `lex` and `parse` for inspecting front-end output.

use std::io::Write;

use crate::dump::{dump_ast, dump_tokens};
use crate::{compile, DriverConfig, DriverError, Phase};

use super::{fail, read_unit, report};

fn print(text: &str) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        fail(&DriverError::Output(e));
    }
}

/// Lex a file and print one JSON line per token.
///
/// Invalid tokens are printed like any other; lexing never fails.
pub fn lex_file(path: &str, config: &DriverConfig) {
    let unit = read_unit(path);
    let outcome = compile(&unit, &config.stopping_after(Phase::Lex));
    print(&dump_tokens(&outcome.source, &outcome.tokens));
}

/// Parse a file and print one JSON line per AST node reachable from the
/// root. Parse errors go to stderr and exit with status 1.
pub fn parse_file(path: &str, config: &DriverConfig) {
    let unit = read_unit(path);
    let outcome = compile(&unit, &config.stopping_after(Phase::Parse));
    if report(&outcome, config) {
        std::process::exit(1);
    }
    print(&dump_ast(
        &outcome.arena,
        outcome.source.content(),
        outcome.root,
    ));
}
