//! Shared types for the PyQuest engine.
//!
//! This crate defines the statement-shape AST, runtime values, learner-facing
//! failures and the evaluation result shared by the parser, the evaluator
//! and the browser binding.

pub mod ast;
mod failure;
pub mod messages;
mod source;
mod value;

pub use failure::{Evaluation, Failure, FailureKind, ParseFailureKindError, NO_OUTPUT};
pub use source::SourceFile;
pub use value::{format_number, Value};
