use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output text reported when a run printed nothing.
pub const NO_OUTPUT: &str = "No output";

/// Failure taxonomy used to pick mascot feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Malformed statement shape.
    Syntax,
    /// Undefined name or non-numeric arithmetic operand.
    Runtime,
    /// Ran to completion but the output did not match the expectation.
    Logic,
    /// Fallback for anything unclassified.
    Unknown,
}

impl FailureKind {
    pub const ALL: [FailureKind; 4] = [Self::Syntax, Self::Runtime, Self::Logic, Self::Unknown];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Runtime => "runtime",
            Self::Logic => "logic",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a host passes a failure kind name we do not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown failure kind '{0}'")]
pub struct ParseFailureKindError(pub String);

impl FromStr for FailureKind {
    type Err = ParseFailureKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "syntax" => Ok(Self::Syntax),
            "runtime" => Ok(Self::Runtime),
            "logic" => Ok(Self::Logic),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseFailureKindError(s.to_string())),
        }
    }
}

/// A classified, learner-facing failure.
///
/// The editor renders the line number (when present) and the message in
/// place of program output; it never shows internal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
    /// 1-based source line, when the failure is tied to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
        }
    }

    pub fn syntax(message: impl Into<String>, line: u32) -> Self {
        Self::new(FailureKind::Syntax, message, Some(line))
    }

    pub fn runtime(message: impl Into<String>, line: u32) -> Self {
        Self::new(FailureKind::Runtime, message, Some(line))
    }

    /// Logic failures are decided by the caller and carry no line.
    pub fn logic(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Logic, message, None)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Unknown, message, None)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for Failure {}

/// Result of one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Evaluation {
    /// Printed lines, newline-joined and trimmed (or [`NO_OUTPUT`]).
    Output { text: String },
    /// The first failure encountered; no partial output accompanies it.
    Failure(Failure),
}

impl Evaluation {
    /// Build the `Output` variant from the raw print buffer.
    pub fn from_print_buffer(buffer: &str) -> Self {
        let text = buffer.trim();
        let text = if text.is_empty() { NO_OUTPUT } else { text };
        Self::Output {
            text: text.to_string(),
        }
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Output { text } => Some(text),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Output { .. } => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

impl From<Failure> for Evaluation {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}
