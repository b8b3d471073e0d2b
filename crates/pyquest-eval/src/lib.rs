//! PyQuest line evaluator.
//!
//! Runs a parsed program line by line against a fresh symbol table and
//! returns either the printed output or the first failure. Also hosts the
//! caller-side pieces that react to an evaluation: the heuristic classifier
//! for unexpected failures, the quest runner and mascot feedback.

pub mod classify;
mod env;
mod error;
pub mod evaluator;
pub mod feedback;
pub mod quest;

pub use classify::classify_failure;
pub use env::SymbolTable;
pub use error::{ArithOp, EvalError, EvalResult};
pub use evaluator::{evaluate, Evaluator};
pub use feedback::{hint, hints, mood_for, MascotMood};
pub use quest::{check_output, judge, run_quest, QuestReport, Verdict};
