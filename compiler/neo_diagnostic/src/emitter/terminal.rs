//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! With a [`SourceIndex`] attached, every label is rendered as a source
//! excerpt with a caret underline:
//!
//! ```text
//! error: the variable is not bound: y
//!  --> test:1:23
//!   |
//! 1 | let x: Bool = true in y
//!   |                       ^ not bound
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Label, Severity, SourceIndex};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;33m"; // Bold yellow
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'a, W: Write> {
    writer: W,
    colors: bool,
    source: Option<&'a SourceIndex>,
}

impl<'a, W: Write> TerminalEmitter<'a, W> {
    /// Create a terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Render labels as excerpts of `source`.
    #[must_use]
    pub fn with_source(mut self, source: &'a SourceIndex) -> Self {
        self.source = Some(source);
        self
    }

    /// Give the writer back, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error | Severity::Warning => colors::ERROR,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_gutter(&mut self, text: &str) {
        self.write_colored(text, colors::GUTTER);
    }

    fn write_label(&mut self, label: &Label) {
        match self.source {
            Some(source) => self.write_excerpt(source, label),
            None => {
                let marker = if label.is_primary { "-->" } else { "   " };
                let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
                self.write_colored(&label.message, colors::ERROR);
                let _ = writeln!(self.writer);
            }
        }
    }

    fn write_excerpt(&mut self, source: &SourceIndex, label: &Label) {
        let pos = source.lookup_position(label.span.start);
        let line_text = source.line_text(pos.line).unwrap_or_default();
        let pad = " ".repeat(pos.line.to_string().len());

        // <pad>--> path:line:col
        let _ = write!(self.writer, "{pad}");
        self.write_gutter("-->");
        let _ = writeln!(self.writer, " {}:{pos}", source.path());

        // <pad> |
        self.write_gutter(&format!("{pad} |"));
        let _ = writeln!(self.writer);

        // N | text
        self.write_gutter(&format!("{} |", pos.line));
        let _ = writeln!(self.writer, " {line_text}");

        // <pad> |   ^^^ message
        self.write_gutter(&format!("{pad} |"));
        let indent = " ".repeat(pos.column as usize + 1);
        let carets = "^".repeat(caret_width(source, label, pos.line));
        let _ = write!(self.writer, "{indent}");
        if label.message.is_empty() {
            self.write_colored(&carets, colors::ERROR);
        } else {
            self.write_colored(&format!("{carets} {}", label.message), colors::ERROR);
        }
        let _ = writeln!(self.writer);
    }
}

impl<'a> TerminalEmitter<'a, io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

/// Number of carets under `label`: its length in characters, clipped to
/// the end of the line it starts on, and at least one.
fn caret_width(source: &SourceIndex, label: &Label, line: u32) -> usize {
    let line_end = source.line_span(line).map_or(label.span.end, |s| s.end);
    let end = label.span.end.min(line_end).max(label.span.start);
    let covered = neo_ir::Span::new(label.span.start, end);
    source.slice(covered).chars().count().max(1)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity: message
        self.write_severity(diagnostic.severity);
        let _ = write!(self.writer, ": ");
        self.write_colored(&diagnostic.message, colors::BOLD);
        let _ = writeln!(self.writer);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        if error_count > 0 {
            self.write_colored("error", colors::ERROR);

            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };

            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {} warning{} emitted",
                    warning_count,
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else {
            self.write_colored("warning", colors::ERROR);
            let _ = writeln!(
                self.writer,
                ": {} warning{} emitted",
                warning_count,
                plural_s(warning_count)
            );
        }
    }
}

#[cfg(test)]
mod tests;
