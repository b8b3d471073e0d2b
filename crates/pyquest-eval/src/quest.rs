//! Quest runner: evaluate learner code and judge it against an expectation.
//!
//! Success is decided here, outside the evaluator. When the expectation is
//! empty the run can only report that it finished cleanly ([`Verdict::Ran`]);
//! the lesson's explicit submit action then decides completion.

use crate::classify::classify_failure;
use crate::evaluator::evaluate;
use pyquest_types::{messages, Evaluation, Failure};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic;

/// `true` iff `expected` is non-empty after trimming and the trimmed output
/// contains it.
pub fn check_output(output: &str, expected: &str) -> bool {
    let expected = expected.trim();
    !expected.is_empty() && output.trim().contains(expected)
}

/// Caller-side outcome of a quest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    /// Output contains the expected text.
    Passed,
    /// Ran without failure; there was no expectation to check.
    Ran,
    /// Ran without failure but the output misses the expectation.
    Mismatch { failure: Failure },
    /// Evaluation failed.
    Failed { failure: Failure },
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Mismatch { failure } | Self::Failed { failure } => Some(failure),
            Self::Passed | Self::Ran => None,
        }
    }
}

/// Evaluation plus verdict, as shown in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestReport {
    pub evaluation: Evaluation,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Judge a finished evaluation against `expected`.
pub fn judge(evaluation: &Evaluation, expected: &str) -> Verdict {
    match evaluation {
        Evaluation::Failure(failure) => Verdict::Failed {
            failure: failure.clone(),
        },
        Evaluation::Output { .. } if expected.trim().is_empty() => Verdict::Ran,
        Evaluation::Output { text } if check_output(text, expected) => Verdict::Passed,
        Evaluation::Output { .. } => Verdict::Mismatch {
            failure: Failure::logic(messages::OUTPUT_MISMATCH),
        },
    }
}

/// Evaluate `source` and judge it against `expected`.
///
/// A panic during evaluation is caught and classified heuristically from the
/// source and the panic message. This only works where panics unwind: on
/// `wasm32-unknown-unknown` a panic aborts the module, so browser hosts
/// report their own exceptions through [`classify_failure`] instead.
pub fn run_quest(source: &str, expected: &str) -> QuestReport {
    run_guarded(source, expected, evaluate)
}

fn run_guarded<F>(source: &str, expected: &str, eval: F) -> QuestReport
where
    F: FnOnce(&str) -> Evaluation + panic::UnwindSafe,
{
    let evaluation = match panic::catch_unwind(|| eval(source)) {
        Ok(evaluation) => evaluation,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(%message, "evaluation panicked, classifying heuristically");
            Evaluation::Failure(classify_failure(source, &message))
        }
    };
    let verdict = judge(&evaluation, expected);
    QuestReport {
        evaluation,
        verdict,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::new()
    }
}
