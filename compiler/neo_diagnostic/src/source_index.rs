//! Source text plus a line-start table for offset → position lookups.
//!
//! The table is built once by scanning for `\n`; every lookup after that is
//! a binary search, O(log L) in the number of lines.

use std::fmt;

use neo_ir::Span;

/// A location in source text.
///
/// `line` is 1-based; `column` is 0-based and counts characters, not bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}

/// Owns one unit's path and content, and answers position queries.
///
/// # Example
///
/// ```
/// use neo_diagnostic::SourceIndex;
///
/// let index = SourceIndex::new("demo", "let x\n= true");
/// let pos = index.lookup_position(8);
/// assert_eq!((pos.line, pos.column), (2, 2));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceIndex {
    path: String,
    content: String,
    /// Byte offset of each line start. `line_starts[0] == 0`.
    line_starts: Vec<u32>,
}

impl SourceIndex {
    /// Build the index.
    ///
    /// # Panics
    /// Panics if `content` is longer than `u32::MAX` bytes.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let mut line_starts = vec![0u32];
        for (i, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(to_offset(i + 1));
            }
        }
        SourceIndex {
            path: path.into(),
            content,
            line_starts,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length of the content in bytes.
    pub fn len(&self) -> u32 {
        to_offset(self.content.len())
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text covered by `span`, empty if the span is out of range.
    pub fn slice(&self, span: Span) -> &str {
        span.text(&self.content)
    }

    /// 1-based line containing `offset`.
    fn line_of(&self, offset: u32) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact + 1,
            Err(insert) => insert,
        }
    }

    /// Position of a byte offset.
    ///
    /// Total over `0..=len`: `len` maps just past the last character.
    /// Larger offsets are clamped to `len`.
    pub fn lookup_position(&self, offset: u32) -> Position {
        let offset = offset.min(self.len());
        let line = self.line_of(offset);
        let line_start = self.line_starts[line - 1] as usize;
        let prefix = self
            .content
            .get(line_start..offset as usize)
            .unwrap_or_default();
        Position {
            line: to_offset(line),
            column: u32::try_from(prefix.chars().count()).unwrap_or(u32::MAX),
        }
    }

    /// Span of 1-based line `line`, excluding its `\n`.
    ///
    /// Returns `None` for line 0 or lines past the end.
    pub fn line_span(&self, line: u32) -> Option<Span> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = match self.line_starts.get(idx + 1) {
            Some(next) => next - 1,
            None => self.len(),
        };
        Some(Span::new(start, end))
    }

    /// Text of 1-based line `line`, without its `\n` (or `\r\n`).
    pub fn line_text(&self, line: u32) -> Option<&str> {
        self.line_span(line)
            .map(|span| self.slice(span).trim_end_matches('\r'))
    }
}

fn to_offset(n: usize) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("source exceeds {} bytes", u32::MAX))
}

#[cfg(test)]
mod tests;
