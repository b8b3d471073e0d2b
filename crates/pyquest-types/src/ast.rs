//! Statement-shape AST for the PyQuest editor language.
//!
//! The learner's program is a flat list of lines. Each line is recognized as
//! at most one statement shape; there is no nesting and no block structure.
//! Name resolution is deferred to evaluation, so operands keep their source
//! text next to any literal reading of it.

use crate::Failure;

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A parsed program: every source line, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub lines: Vec<Line>,
}

impl Program {
    /// Iterate over recognized statements with their line numbers.
    pub fn statements(&self) -> impl Iterator<Item = (u32, &Stmt)> {
        self.lines.iter().filter_map(|line| match &line.kind {
            LineKind::Stmt(stmt) => Some((line.number, stmt)),
            _ => None,
        })
    }
}

/// One source line and what it was recognized as.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// 1-based line number.
    pub number: u32,
    pub kind: LineKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Empty or whitespace-only.
    Blank,
    /// First non-whitespace character is `#`.
    Comment,
    Stmt(Stmt),
    /// The line has a recognized shape but is malformed; evaluation stops here.
    Malformed(Failure),
    /// No statement shape matched. Skipped silently.
    Unrecognized,
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `name = value`
    Assign(Assign),
    /// `print(arg)`
    Print(PrintArg),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub target: String,
    pub value: Rhs,
}

/// Right-hand side of an assignment, in precedence order.
#[derive(Debug, Clone, PartialEq)]
pub enum Rhs {
    /// Quoted literal, quotes removed.
    Str(String),
    /// Numeric literal.
    Number(f64),
    /// `a * b * ...`
    Product(Vec<Operand>),
    /// `a + b + ...`
    Sum(Vec<Operand>),
    /// Anything else: must name an existing variable. Holds the raw text.
    Name(String),
}

/// An arithmetic operand. Variables shadow literals, so both readings are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub text: String,
    pub literal: Option<f64>,
}

/// Argument of a `print(...)` call.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintArg {
    /// Quoted literal, outer characters removed.
    Str(String),
    /// A variable name, or a numeric literal printed verbatim when no
    /// variable by that name exists.
    Name { text: String, numeric: bool },
}
