//! Diagnostic system for the Neo front end.
//!
//! - [`ErrorCode`]: one stable code per detectable fault
//! - [`Diagnostic`]: message plus labeled spans, built with `with_*`
//! - [`DiagnosticEngine`]: the append-only log every phase pushes into
//! - [`SourceIndex`]: offset to line/column lookups for rendering
//! - [`emitter`]: output formats, currently the terminal renderer
//!
//! Diagnostics hold spans, never references into the source, so a log can
//! outlive the text it describes and be rendered later against a
//! [`SourceIndex`].

mod diagnostic;
pub mod emitter;
mod engine;
mod error_code;
mod source_index;

pub use diagnostic::{
    branch_types_not_equal, condition_not_bool, expected, invalid_token, invalid_type,
    mismatched_types, type_not_bound, unclosed_delimiter, unexpected_token, variable_not_bound,
    Diagnostic, DiagnosticId, Expected, Label, Severity,
};
pub use emitter::{escape_json, ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use engine::DiagnosticEngine;
pub use error_code::ErrorCode;
pub use source_index::{Position, SourceIndex};
