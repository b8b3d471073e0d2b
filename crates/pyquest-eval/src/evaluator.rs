//! Core statement evaluator.

use crate::env::SymbolTable;
use crate::error::{ArithOp, EvalError, EvalResult};
use pyquest_parser::parse;
use pyquest_types::ast::*;
use pyquest_types::{Evaluation, Value};

/// Parse and evaluate `source` in a fresh evaluator.
///
/// Pure with respect to its input: the same source always yields the same
/// [`Evaluation`].
pub fn evaluate(source: &str) -> Evaluation {
    Evaluator::new().run(&parse(source))
}

/// Walks a program's lines, executing statements against a symbol table.
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Bindings made so far in this run.
    pub symbols: SymbolTable,
    /// Printed lines, each terminated by `\n`.
    output: String,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute every line in order, stopping at the first failure.
    ///
    /// A failure discards the output printed so far.
    #[tracing::instrument(level = "debug", skip_all, fields(lines = program.lines.len()))]
    pub fn run(mut self, program: &Program) -> Evaluation {
        for line in &program.lines {
            let result = match &line.kind {
                LineKind::Stmt(stmt) => self
                    .exec_stmt(stmt)
                    .map_err(|err| err.at_line(line.number)),
                LineKind::Malformed(failure) => Err(failure.clone()),
                LineKind::Blank | LineKind::Comment | LineKind::Unrecognized => Ok(()),
            };
            if let Err(failure) = result {
                tracing::debug!(
                    line = line.number,
                    kind = %failure.kind,
                    message = %failure.message,
                    "evaluation stopped"
                );
                return Evaluation::Failure(failure);
            }
        }
        Evaluation::from_print_buffer(&self.output)
    }

    /// Execute a single statement.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Assign(assign) => {
                let value = self.eval_rhs(&assign.value)?;
                self.symbols.define(&assign.target, value);
                Ok(())
            }
            Stmt::Print(arg) => {
                let text = self.eval_print_arg(arg)?;
                self.output.push_str(&text);
                self.output.push('\n');
                Ok(())
            }
        }
    }

    /// Text printed so far, before trimming.
    pub fn output(&self) -> &str {
        &self.output
    }

    // ── Expressions ──────────────────────────────────────────────────────

    fn eval_rhs(&self, rhs: &Rhs) -> EvalResult<Value> {
        match rhs {
            Rhs::Str(s) => Ok(Value::String(s.clone())),
            Rhs::Number(n) => Ok(Value::Number(*n)),
            Rhs::Product(operands) => self.fold(ArithOp::Multiply, operands),
            Rhs::Sum(operands) => self.fold(ArithOp::Add, operands),
            Rhs::Name(name) => self
                .symbols
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
        }
    }

    /// Left fold over the operands starting from the operator's identity.
    fn fold(&self, op: ArithOp, operands: &[Operand]) -> EvalResult<Value> {
        operands
            .iter()
            .try_fold(op.identity(), |acc, operand| {
                self.resolve_operand(operand)
                    .map(|n| op.apply(acc, n))
                    .ok_or(EvalError::NonNumericOperand(op))
            })
            .map(Value::Number)
    }

    /// A bound variable shadows the literal reading of the same text.
    fn resolve_operand(&self, operand: &Operand) -> Option<f64> {
        match self.symbols.get(&operand.text) {
            Some(value) => value.as_number(),
            None => operand.literal,
        }
    }

    fn eval_print_arg(&self, arg: &PrintArg) -> EvalResult<String> {
        match arg {
            PrintArg::Str(s) => Ok(s.clone()),
            PrintArg::Name { text, numeric } => {
                if let Some(value) = self.symbols.get(text) {
                    Ok(value.to_string())
                } else if *numeric {
                    Ok(text.clone())
                } else {
                    Err(EvalError::UndefinedVariable(text.clone()))
                }
            }
        }
    }
}
