//! Error codes for all front-end diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names
//! the phase. The code also indexes a static table: a stable upper-case
//! name, the default severity, and a one-line summary.

use std::fmt;

use crate::Severity;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors (surfaced by the parser)
/// - E1xxx: Parser errors
/// - E2xxx: Type errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized run of characters
    E0001,

    // Parser Errors (E1xxx)
    /// Expected a specific token
    E1001,
    /// Expected a kind of node (e.g. an expression)
    E1002,
    /// Expected one of several tokens or nodes
    E1003,
    /// Token left over after a complete expression
    E1004,
    /// `(` with no matching `)`
    E1005,

    // Type Errors (E2xxx)
    /// Node kind the checker cannot type
    E2001,
    /// Unbound variable
    E2002,
    /// Unbound type name
    E2003,
    /// `if` condition is not a subtype of `Bool`
    E2004,
    /// `then` and `else` branch types differ
    E2005,
    /// Initializer does not match its annotation
    E2006,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces it).
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
        }
    }

    /// Stable diagnostic name.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "INVALID_TOKEN",
            ErrorCode::E1001 => "EXPECTED_TOKEN",
            ErrorCode::E1002 => "EXPECTED_NODE",
            ErrorCode::E1003 => "EXPECTED_TOKENS_OR_NODES",
            ErrorCode::E1004 => "UNEXPECTED_TOKEN",
            ErrorCode::E1005 => "UNCLOSED_DELIMITER",
            ErrorCode::E2001 => "INVALID_TYPE",
            ErrorCode::E2002 => "VARIABLE_NOT_BOUND",
            ErrorCode::E2003 => "TYPE_NOT_BOUND",
            ErrorCode::E2004 => "CONDITION_NOT_BOOL",
            ErrorCode::E2005 => "BRANCH_TYPES_NOT_EQUAL",
            ErrorCode::E2006 => "MISMATCHED_TYPES",
        }
    }

    /// One-line description, used by `neo explain`.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "the source contains characters that form no token",
            ErrorCode::E1001 => "a specific token was required here",
            ErrorCode::E1002 => "an expression, name, or type was required here",
            ErrorCode::E1003 => "one of several tokens or nodes was required here",
            ErrorCode::E1004 => "input continues after a complete expression",
            ErrorCode::E1005 => "an opening delimiter is never closed",
            ErrorCode::E2001 => "this kind of expression has no type",
            ErrorCode::E2002 => "a variable is used outside any binding of it",
            ErrorCode::E2003 => "a type annotation names an unknown type",
            ErrorCode::E2004 => "an `if` condition must be a subtype of Bool",
            ErrorCode::E2005 => "`then` and `else` produce incompatible types",
            ErrorCode::E2006 => "a binding's value does not fit its annotation",
        }
    }

    /// Severity a diagnostic with this code starts with.
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001)
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
        )
    }

    /// Check if this is a type error (E2xxx range).
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2001
                | ErrorCode::E2002
                | ErrorCode::E2003
                | ErrorCode::E2004
                | ErrorCode::E2005
                | ErrorCode::E2006
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`.
///
/// Case-insensitive. Also accepts the upper-case name (`"TYPE_NOT_BOUND"`).
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper || code.name() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
