//! The `check` command: type-check a Neo source file.

use crate::{compile, DriverConfig};

use super::{read_unit, report};

/// Type-check a file and print the type of its expression.
///
/// Every diagnostic from every phase is rendered before exiting, so one run
/// shows all the problems the front end found.
pub fn check_file(path: &str, config: &DriverConfig) {
    let unit = read_unit(path);
    let outcome = compile(&unit, config);
    if report(&outcome, config) {
        std::process::exit(1);
    }
    if let Some(name) = outcome.type_name() {
        println!("{name}");
    }
}
