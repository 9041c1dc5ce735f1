//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`], [`Label`], and [`Severity`], plus one constructor
//! per fault the front end can detect. Constructors take the offending
//! source text explicitly; diagnostics never hold a reference to the source.

use neo_ir::{Span, TokenKind};
use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// Handle to a diagnostic pushed into a [`DiagnosticEngine`](crate::DiagnosticEngine).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DiagnosticId(u32);

impl DiagnosticId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        DiagnosticId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A labeled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// The source location to highlight.
    pub span: Span,
    /// The label text explaining this location. May be empty.
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A structured diagnostic.
///
/// Built once with the `with_*` methods, then pushed into the engine's log.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Main error message.
    pub message: String,
    /// Labeled spans, rendered in order.
    pub labels: Vec<Label>,
    /// Related diagnostics rendered beneath this one.
    pub children: Vec<DiagnosticId>,
}

impl Diagnostic {
    /// Create a diagnostic at the code's default severity.
    #[cold]
    pub fn new(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: code.default_severity(),
            message: String::new(),
            labels: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new(code).with_severity(Severity::Error)
    }

    /// Create a new warning diagnostic.
    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new(code).with_severity(Severity::Warning)
    }

    /// Create a new note diagnostic.
    #[cold]
    pub fn note(code: ErrorCode) -> Self {
        Self::new(code).with_severity(Severity::Note)
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Attach an already-pushed diagnostic as a child.
    pub fn with_child(mut self, child: DiagnosticId) -> Self {
        self.children.push(child);
        self
    }

    /// Get the primary span (first primary label's span).
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }

    /// Check if this is an error (vs warning/note).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {} {:?}: {}", marker, label.span, label.message)?;
        }

        Ok(())
    }
}

/// What the parser wanted where it failed.
///
/// Tokens render as `` `then` ``, nodes as `<expression>`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expected {
    Token(TokenKind),
    /// Node class label, e.g. `"expression"`, `"name"`, `"type"`.
    Node(&'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => f.write_str(&kind.display_name()),
            Expected::Node(label) => write!(f, "<{label}>"),
        }
    }
}

/// Join candidates as `a`, `a or b`, or `a, b, or c`.
fn join_candidates(expected: &[Expected]) -> String {
    match expected {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => {
            let mut out = String::new();
            for candidate in init {
                out.push_str(&candidate.to_string());
                out.push_str(", ");
            }
            out.push_str("or ");
            out.push_str(&last.to_string());
            out
        }
    }
}

/// Create an "invalid token" diagnostic.
pub fn invalid_token(span: Span, text: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message(format!("invalid token: {text}"))
        .with_label(span, "not a valid token")
}

/// Create an "expected ..., found ..." diagnostic.
///
/// The code depends on the candidates: only tokens is `E1001`, only nodes
/// is `E1002`, a mix is `E1003`.
///
/// # Panics
/// Panics if `expected` is empty.
pub fn expected(span: Span, expected: &[Expected], found: &str) -> Diagnostic {
    assert!(!expected.is_empty(), "expected at least one candidate");
    let has_token = expected.iter().any(|e| matches!(e, Expected::Token(_)));
    let has_node = expected.iter().any(|e| matches!(e, Expected::Node(_)));
    let code = match (has_token, has_node) {
        (true, false) => ErrorCode::E1001,
        (false, true) => ErrorCode::E1002,
        _ => ErrorCode::E1003,
    };
    let candidates = join_candidates(expected);
    Diagnostic::error(code)
        .with_message(format!("expected {candidates}, found {found}"))
        .with_label(span, format!("expected {candidates}"))
}

/// Create an "unexpected token" diagnostic.
pub fn unexpected_token(span: Span, text: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1004)
        .with_message(format!("unexpected token: {text}"))
        .with_label(span, "unexpected token")
}

/// Create an "unclosed delimiter" diagnostic.
pub fn unclosed_delimiter(open_span: Span, delimiter: char) -> Diagnostic {
    let expected = match delimiter {
        '(' => ')',
        '{' => '}',
        _ => delimiter,
    };
    Diagnostic::error(ErrorCode::E1005)
        .with_message(format!("unclosed delimiter: `{delimiter}`"))
        .with_label(open_span, format!("this `{delimiter}` is never closed by `{expected}`"))
}

/// Create an "invalid type" diagnostic for a node the checker cannot type.
pub fn invalid_type(span: Span, text: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(format!("invalid type: {text}"))
        .with_label(span, "cannot be typed")
}

/// Create a "variable is not bound" diagnostic.
pub fn variable_not_bound(span: Span, text: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message(format!("the variable is not bound: {text}"))
        .with_label(span, "not bound")
}

/// Create a "type is not bound" diagnostic.
pub fn type_not_bound(span: Span, text: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2003)
        .with_message(format!("the type is not bound: {text}"))
        .with_label(span, "unknown type")
}

/// Create a "condition is not a subtype of Bool" diagnostic.
pub fn condition_not_bool(span: Span, text: &str, ty: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2004)
        .with_message(format!("condition is not a subtype of Bool: {text}"))
        .with_label(span, format!("is of type `{ty}`"))
}

/// Create a "types of then and else are not equal" diagnostic.
pub fn branch_types_not_equal(
    then_span: Span,
    then_ty: &str,
    else_span: Span,
    else_ty: &str,
) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2005)
        .with_message("types of then and else are not equal")
        .with_label(then_span, format!("is of type `{then_ty}`"))
        .with_secondary_label(else_span, format!("is of type `{else_ty}`"))
}

/// Create a "mismatched types" diagnostic.
pub fn mismatched_types(
    init_span: Span,
    expected: &str,
    found: &str,
    annotation_span: Span,
) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2006)
        .with_message(format!(
            "mismatched types: expected `{expected}`, found `{found}`"
        ))
        .with_label(init_span, format!("is of type `{found}`"))
        .with_secondary_label(annotation_span, "expected due to this annotation")
}
