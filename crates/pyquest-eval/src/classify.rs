//! Heuristic classifier for unexpected failures.
//!
//! The evaluator reports its own failures as structured values. When
//! something else goes wrong around it (a panic in host glue, a message from
//! the browser), this module re-scans the source for shape problems and
//! falls back to keyword matching on the message.
//!
//! Rules, in order:
//! 1. block keyword line without a trailing `:`
//! 2. odd number of `'` or `"` on a line
//! 3. unequal `(` and `)` on a line
//! 4. message mentions an undefined name
//! 5. message mentions expected output
//! 6. anything else
//!
//! Each source rule scans every line and stops at the first offending one.
//! Comment and blank lines are not scanned.

use pyquest_types::{messages, Failure, FailureKind, SourceFile};
use std::ops::ControlFlow;

/// Keywords that open a block and must end their line with `:`.
const BLOCK_KEYWORDS: [&str; 6] = ["if", "for", "while", "def", "elif", "else"];

/// Classify an unexpected failure of `source` described by `message`.
///
/// Unlike a plain scan of every line, `#` comment lines are skipped, so an
/// apostrophe or a stray `if` in a comment is never blamed.
pub fn classify_failure(source: &str, message: &str) -> Failure {
    let source_file = SourceFile::new(source);
    let lines: Vec<(u32, &str)> = source_file
        .lines()
        .map(|(n, text)| (n, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
        .collect();

    let source_rules: [(fn(&str) -> bool, &str); 3] = [
        (missing_colon, messages::MISSING_COLON),
        (unbalanced_quotes, messages::UNCLOSED_QUOTES),
        (unbalanced_parens, messages::MISMATCHED_PARENS),
    ];
    let found = source_rules.iter().try_for_each(|(offends, message)| {
        match lines.iter().find(|(_, text)| offends(text)) {
            Some(&(line, _)) => ControlFlow::Break(Failure::syntax(*message, line)),
            None => ControlFlow::Continue(()),
        }
    });
    if let ControlFlow::Break(failure) = found {
        tracing::debug!(rule = %failure.message, line = ?failure.line, "classified from source");
        return failure;
    }

    classify_message(message)
}

/// Message-only rules, used once the source looks well formed.
fn classify_message(message: &str) -> Failure {
    let lowered = message.to_lowercase();
    if lowered.contains("undefined") || lowered.contains("not defined") {
        return Failure::new(FailureKind::Runtime, messages::USED_BEFORE_DEFINED, None);
    }
    if lowered.contains("expected") || lowered.contains("output") {
        return Failure::logic(messages::OUTPUT_MISMATCH);
    }
    let message = message.trim();
    if message.is_empty() {
        Failure::unknown(messages::GENERIC_FALLBACK)
    } else {
        Failure::unknown(message)
    }
}

fn missing_colon(line: &str) -> bool {
    starts_block(line) && !line.ends_with(':')
}

/// `if x`, `else:`, `elif(...)`, but not `iffy = 1`.
fn starts_block(line: &str) -> bool {
    BLOCK_KEYWORDS.iter().any(|kw| {
        line.strip_prefix(kw).is_some_and(|rest| {
            !rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
        })
    })
}

fn unbalanced_quotes(line: &str) -> bool {
    let count = |quote: char| line.chars().filter(|&c| c == quote).count();
    count('\'') % 2 == 1 || count('"') % 2 == 1
}

fn unbalanced_parens(line: &str) -> bool {
    let opens = line.chars().filter(|&c| c == '(').count();
    let closes = line.chars().filter(|&c| c == ')').count();
    opens != closes
}
