//! The `explain` command: describe a diagnostic code.

use neo_diagnostic::ErrorCode;

/// One-paragraph description of `code`.
pub fn explanation(code: ErrorCode) -> String {
    format!(
        "{code} ({}): {}.\nDefault severity: {}.",
        code.name(),
        code.summary(),
        code.default_severity()
    )
}

/// Print the description of a code given as `E2002` or `VARIABLE_NOT_BOUND`.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1005, E2002");
        std::process::exit(1);
    };
    println!("{}", explanation(code));
}
