//! The lex, parse, check pipeline over one source unit.

use std::io::Write;

use neo_diagnostic::{DiagnosticEmitter, DiagnosticEngine, SourceIndex, TerminalEmitter};
use neo_ir::{AstArena, AstId, TokenList};
use neo_types::{TypeChecker, TypeId, TypeUniverse};
use rayon::prelude::*;
use tracing::debug;

use crate::{DriverConfig, DriverError, Phase};

/// One independent piece of source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceUnit {
    pub path: String,
    pub content: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        SourceUnit {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a unit from disk.
    pub fn read(path: &str) -> Result<Self, DriverError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DriverError::from_read(path, e))?;
        if u32::try_from(content.len()).is_err() {
            return Err(DriverError::TooLarge {
                path: path.to_string(),
            });
        }
        Ok(SourceUnit::new(path, content))
    }
}

/// Everything the phases produced for one unit.
///
/// Phases that did not run leave their fields at the empty default:
/// `root` stays [`AstId::NULL`] and `ty` stays `None`.
#[derive(Clone, Debug)]
pub struct UnitOutcome {
    pub source: SourceIndex,
    pub tokens: TokenList,
    pub arena: AstArena,
    pub root: AstId,
    pub universe: TypeUniverse,
    /// Types indexed by `AstId`; nodes the checker never reached are `UNKNOWN`.
    pub type_map: Vec<TypeId>,
    /// Type of `root`, when the checker ran.
    pub ty: Option<TypeId>,
    pub diagnostics: DiagnosticEngine,
}

impl UnitOutcome {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Display name of the root type, e.g. `Bool`.
    pub fn type_name(&self) -> Option<String> {
        self.ty.map(|ty| self.universe.display(ty))
    }
}

/// Compile one unit up to `config.stop_after`.
///
/// Type checking is skipped when parsing failed: the root is the error
/// sentinel and the parse diagnostic already explains why.
pub fn compile(unit: &SourceUnit, config: &DriverConfig) -> UnitOutcome {
    let source = SourceIndex::new(unit.path.as_str(), unit.content.as_str());
    let tokens = neo_lexer::lex(source.content());
    debug!(path = %unit.path, tokens = tokens.len(), "lexed");

    let mut outcome = UnitOutcome {
        source,
        tokens,
        arena: AstArena::new(),
        root: AstId::NULL,
        universe: TypeUniverse::new(),
        type_map: Vec::new(),
        ty: None,
        diagnostics: DiagnosticEngine::new(),
    };
    if config.stop_after == Phase::Lex {
        return outcome;
    }

    outcome.root = neo_parse::parse(
        outcome.source.content(),
        &outcome.tokens,
        &mut outcome.arena,
        &mut outcome.diagnostics,
    );
    debug!(
        path = %unit.path,
        nodes = outcome.arena.len(),
        root = %outcome.root,
        "parsed"
    );
    if config.stop_after == Phase::Parse || outcome.root.is_invalid() {
        return outcome;
    }

    let mut checker = TypeChecker::new(
        outcome.source.content(),
        &outcome.arena,
        &mut outcome.universe,
        &mut outcome.diagnostics,
    );
    let ty = checker.check(outcome.root);
    outcome.type_map = checker.into_type_map();
    outcome.ty = Some(ty);
    outcome
}

/// Compile independent units on the rayon pool. Results keep input order.
pub fn compile_units(units: &[SourceUnit], config: &DriverConfig) -> Vec<UnitOutcome> {
    debug!(units = units.len(), "compiling units in parallel");
    units.par_iter().map(|unit| compile(unit, config)).collect()
}

/// Render the outcome's diagnostics followed by the summary line into
/// `writer`, then give the writer back. Writes nothing when `quiet`.
pub fn render_diagnostics<W: Write>(
    outcome: &UnitOutcome,
    writer: W,
    config: &DriverConfig,
) -> W {
    if config.quiet || outcome.diagnostics.is_empty() {
        return writer;
    }
    let mut emitter = TerminalEmitter::with_color_mode(writer, config.color, config.stderr_tty)
        .with_source(&outcome.source);
    outcome.diagnostics.emit_to(&mut emitter);
    emitter.emit_summary(
        outcome.diagnostics.error_count(),
        outcome.diagnostics.warning_count(),
    );
    emitter.flush();
    emitter.into_inner()
}
