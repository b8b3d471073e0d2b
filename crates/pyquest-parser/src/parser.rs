//! Line-by-line driver: source file to [`Program`].

use crate::parse_stmt::{check_miscased_print, parse_assignment, parse_print};
use pyquest_types::ast::{Line, LineKind, Program};
use pyquest_types::SourceFile;

/// The PyQuest parser.
///
/// Unlike a block parser there is no recovery to do: every line is
/// recognized on its own, and a malformed line is recorded in place so the
/// evaluator can report it in source order alongside runtime failures.
pub struct Parser<'src> {
    source_file: &'src SourceFile,
}

impl<'src> Parser<'src> {
    pub fn new(source_file: &'src SourceFile) -> Self {
        Self { source_file }
    }

    /// Parse every line of the source file.
    pub fn parse(self) -> Program {
        let lines = self
            .source_file
            .lines()
            .map(|(number, text)| parse_line(number, text))
            .collect();
        Program { lines }
    }
}

/// Parse source text into a [`Program`].
pub fn parse(source: &str) -> Program {
    let source_file = SourceFile::new(source);
    Parser::new(&source_file).parse()
}

/// Recognize a single line. Shapes are tried in order; first match wins.
pub fn parse_line(number: u32, text: &str) -> Line {
    let trimmed = text.trim();
    let kind = if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with('#') {
        LineKind::Comment
    } else {
        parse_assignment(trimmed, number)
            .or_else(|| parse_print(trimmed))
            .or_else(|| check_miscased_print(trimmed, number))
            .unwrap_or(LineKind::Unrecognized)
    };
    Line { number, kind }
}
