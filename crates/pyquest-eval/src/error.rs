//! Runtime error types for the PyQuest evaluator.

use pyquest_types::{messages, Failure};
use std::fmt;

/// Arithmetic operator supported on an assignment's right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Multiply,
    Add,
}

impl ArithOp {
    pub fn identity(self) -> f64 {
        match self {
            Self::Multiply => 1.0,
            Self::Add => 0.0,
        }
    }

    pub fn apply(self, acc: f64, operand: f64) -> f64 {
        match self {
            Self::Multiply => acc * operand,
            Self::Add => acc + operand,
        }
    }
}

/// Evaluation error raised while executing one statement.
///
/// Carries no line number; [`EvalError::at_line`] attaches it when the
/// evaluator turns the error into a learner-facing [`Failure`].
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Name not bound in the symbol table.
    UndefinedVariable(String),
    /// An arithmetic operand resolved to something other than a number.
    NonNumericOperand(ArithOp),
}

impl EvalError {
    pub fn at_line(self, line: u32) -> Failure {
        Failure::runtime(self.to_string(), line)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable(name) => f.write_str(&messages::not_defined(name)),
            Self::NonNumericOperand(ArithOp::Multiply) => f.write_str(messages::CANNOT_MULTIPLY),
            Self::NonNumericOperand(ArithOp::Add) => f.write_str(messages::CANNOT_ADD),
        }
    }
}

impl std::error::Error for EvalError {}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
