//! Append-only diagnostic log for one compilation unit.

use crate::emitter::DiagnosticEmitter;
use crate::{Diagnostic, DiagnosticId, Severity};

/// Accumulates diagnostics in detection order.
///
/// Every phase pushes into the same engine; nothing is ever removed or
/// edited once pushed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticEngine {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic and return its id.
    pub fn push(&mut self, diagnostic: Diagnostic) -> DiagnosticId {
        let index = u32::try_from(self.diagnostics.len())
            .unwrap_or_else(|_| panic!("diagnostic log exceeded u32::MAX entries"));
        self.diagnostics.push(diagnostic);
        DiagnosticId::new(index)
    }

    /// # Panics
    /// Panics on an id this engine did not produce.
    pub fn get(&self, id: DiagnosticId) -> &Diagnostic {
        &self.diagnostics[id.index()]
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Diagnostics that are nobody's child, in push order.
    pub fn roots(&self) -> Vec<DiagnosticId> {
        let mut is_child = vec![false; self.diagnostics.len()];
        for diag in &self.diagnostics {
            for child in &diag.children {
                if let Some(slot) = is_child.get_mut(child.index()) {
                    *slot = true;
                }
            }
        }
        is_child
            .iter()
            .enumerate()
            .filter(|(_, child)| !**child)
            .filter_map(|(i, _)| u32::try_from(i).ok().map(DiagnosticId::new))
            .collect()
    }

    /// Emit every root diagnostic followed by its children, depth first.
    pub fn emit_to(&self, emitter: &mut dyn DiagnosticEmitter) {
        for root in self.roots() {
            self.emit_tree(root, emitter, 0);
        }
        emitter.flush();
    }

    fn emit_tree(&self, id: DiagnosticId, emitter: &mut dyn DiagnosticEmitter, depth: usize) {
        let diag = self.get(id);
        emitter.emit(diag);
        // A malformed log could link a diagnostic to an ancestor; cap the walk.
        if depth < self.diagnostics.len() {
            for &child in &diag.children {
                self.emit_tree(child, emitter, depth + 1);
            }
        }
    }
}

impl<'a> IntoIterator for &'a DiagnosticEngine {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{variable_not_bound, ErrorCode};
    use neo_ir::Span;

    /// Records the messages it was asked to emit.
    #[derive(Default)]
    struct Recorder {
        messages: Vec<String>,
        flushed: bool,
    }

    impl DiagnosticEmitter for Recorder {
        fn emit(&mut self, diagnostic: &Diagnostic) {
            self.messages.push(diagnostic.message.clone());
        }

        fn flush(&mut self) {
            self.flushed = true;
        }

        fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {}
    }

    #[test]
    fn test_push_returns_sequential_ids() {
        let mut engine = DiagnosticEngine::new();
        let a = engine.push(variable_not_bound(Span::new(0, 1), "a"));
        let b = engine.push(variable_not_bound(Span::new(2, 3), "b"));
        assert_eq!(a, DiagnosticId::new(0));
        assert_eq!(b, DiagnosticId::new(1));
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.error_count(), 2);
        assert!(engine.has_errors());
    }

    #[test]
    fn test_counts_by_severity() {
        let mut engine = DiagnosticEngine::new();
        engine.push(Diagnostic::warning(ErrorCode::E2001).with_message("w"));
        engine.push(Diagnostic::note(ErrorCode::E2001).with_message("n"));
        assert_eq!(engine.error_count(), 0);
        assert_eq!(engine.warning_count(), 1);
        assert!(!engine.has_errors());
    }

    #[test]
    fn test_children_emit_after_parent() {
        let mut engine = DiagnosticEngine::new();
        let child = engine.push(Diagnostic::note(ErrorCode::E2002).with_message("child"));
        engine.push(
            Diagnostic::error(ErrorCode::E2002)
                .with_message("parent")
                .with_child(child),
        );
        engine.push(Diagnostic::error(ErrorCode::E2001).with_message("sibling"));

        assert_eq!(engine.roots(), vec![DiagnosticId::new(1), DiagnosticId::new(2)]);

        let mut recorder = Recorder::default();
        engine.emit_to(&mut recorder);
        assert_eq!(recorder.messages, vec!["parent", "child", "sibling"]);
        assert!(recorder.flushed);
    }
}
