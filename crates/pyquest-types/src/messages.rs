//! Learner-facing failure messages.
//!
//! The lesson UI shows these verbatim, so they are part of the observable
//! behavior and must not drift.

// ── Statement failures ──
pub const NAME_STARTS_WITH_DIGIT: &str = "Variable names can't start with a number!";
pub const UNCLOSED_STRING_LITERAL: &str = "String not properly closed with matching quote";
pub const CANNOT_MULTIPLY: &str = "Can't multiply - one of the values isn't a number";
pub const CANNOT_ADD: &str = "Can't add - one of the values isn't a number";
pub const CASE_SENSITIVE_PRINT: &str =
    "Python is case-sensitive! Use 'print' with lowercase letters";

/// `Variable '<name>' is not defined`
pub fn not_defined(name: &str) -> String {
    format!("Variable '{name}' is not defined")
}

// ── Heuristic classifier ──
pub const MISSING_COLON: &str = "Missing colon (:) at the end of statement";
pub const UNCLOSED_QUOTES: &str = "Unclosed string - check your quotes!";
pub const MISMATCHED_PARENS: &str = "Mismatched parentheses - check your brackets!";
pub const USED_BEFORE_DEFINED: &str = "Variable used before it was defined";
pub const OUTPUT_MISMATCH: &str = "The output doesn't match what we expected";
pub const GENERIC_FALLBACK: &str = "Oops! Something went wrong. Try again!";
