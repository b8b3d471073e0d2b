//! Statement-shape recognition for a single trimmed line.

use crate::cursor::Cursor;
use crate::number::parse_number;
use pyquest_types::ast::*;
use pyquest_types::{messages, Failure};

/// Spellings of `print(` caught by the case-typo guard.
const MISCASED_PRINT: [&str; 2] = ["Print(", "PRINT("];

/// Try the assignment shape: `word \s* = \s* rest`.
///
/// Returns `None` when the line is not an assignment at all.
pub(crate) fn parse_assignment(text: &str, line: u32) -> Option<LineKind> {
    let mut cursor = Cursor::new(text);
    let target = cursor.word();
    if target.is_empty() {
        return None;
    }
    cursor.skip_whitespace();
    if !cursor.eat(b'=') {
        return None;
    }
    cursor.skip_whitespace();
    let rhs = cursor.rest();
    if rhs.is_empty() {
        return None;
    }

    if target.starts_with(|c: char| c.is_ascii_digit()) {
        return Some(LineKind::Malformed(Failure::syntax(
            messages::NAME_STARTS_WITH_DIGIT,
            line,
        )));
    }

    let value = match parse_rhs(rhs) {
        Ok(value) => value,
        Err(message) => return Some(LineKind::Malformed(Failure::syntax(message, line))),
    };
    Some(LineKind::Stmt(Stmt::Assign(Assign {
        target: target.to_string(),
        value,
    })))
}

/// Classify an assignment's right-hand side, first match wins.
fn parse_rhs(rhs: &str) -> Result<Rhs, &'static str> {
    if let Some(quote) = opening_quote(rhs) {
        return unquote_closed(rhs, quote)
            .map(|inner| Rhs::Str(inner.to_string()))
            .ok_or(messages::UNCLOSED_STRING_LITERAL);
    }
    if let Some(n) = parse_number(rhs) {
        return Ok(Rhs::Number(n));
    }
    if rhs.contains('*') {
        return Ok(Rhs::Product(operands(rhs, '*')));
    }
    if rhs.contains('+') {
        return Ok(Rhs::Sum(operands(rhs, '+')));
    }
    Ok(Rhs::Name(rhs.to_string()))
}

fn operands(rhs: &str, op: char) -> Vec<Operand> {
    rhs.split(op)
        .map(|piece| {
            let text = piece.trim();
            Operand {
                text: text.to_string(),
                literal: parse_number(text),
            }
        })
        .collect()
}

/// Try the `print(arg)` shape. The argument must be non-empty.
pub(crate) fn parse_print(text: &str) -> Option<LineKind> {
    let inner = text.strip_prefix("print(")?.strip_suffix(')')?;
    if inner.is_empty() {
        return None;
    }
    let arg = inner.trim();
    let arg = if opening_quote(arg).is_some() {
        PrintArg::Str(strip_outer(arg).to_string())
    } else {
        PrintArg::Name {
            text: arg.to_string(),
            // A blank argument prints an empty line.
            numeric: arg.is_empty() || parse_number(arg).is_some(),
        }
    };
    Some(LineKind::Stmt(Stmt::Print(arg)))
}

/// `Print(` / `PRINT(` at the start of the line.
pub(crate) fn check_miscased_print(text: &str, line: u32) -> Option<LineKind> {
    MISCASED_PRINT
        .iter()
        .any(|prefix| text.starts_with(prefix))
        .then(|| LineKind::Malformed(Failure::syntax(messages::CASE_SENSITIVE_PRINT, line)))
}

// ── Quote helpers ────────────────────────────────────────────────────────────

fn opening_quote(text: &str) -> Option<u8> {
    match text.as_bytes().first() {
        Some(&q @ (b'"' | b'\'')) => Some(q),
        _ => None,
    }
}

/// Text between matching quotes, or `None` if the closing quote is missing
/// or is a different quote character.
fn unquote_closed(text: &str, quote: u8) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 1] == quote {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

/// Drop the first and last characters, whatever they are.
fn strip_outer(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
