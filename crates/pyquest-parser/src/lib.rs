//! PyQuest parser: recognizes statement shapes in the learner's source.
//!
//! Each line is matched independently against the known shapes, in order:
//! assignment, `print(...)` call, then the case-typo guard. The first shape
//! that matches wins; lines matching nothing are kept as
//! [`LineKind::Unrecognized`](pyquest_types::ast::LineKind) and skipped by the
//! evaluator.

mod cursor;
mod number;
mod parse_stmt;
mod parser;

pub use number::parse_number;
pub use parser::{parse, parse_line, Parser};
