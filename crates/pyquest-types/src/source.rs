use std::ops::Range;

/// The learner's program split into lines.
///
/// Line numbers are 1-based. A trailing `\r` is not part of a line, so CRLF
/// input reads the same as LF input.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub source: String,
    /// Byte range of each line's text within `source`.
    spans: Vec<Range<usize>>,
}

impl SourceFile {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut spans = Vec::new();
        let mut start = 0;
        for piece in source.split('\n') {
            let end = start + piece.len();
            let text_end = if piece.ends_with('\r') { end - 1 } else { end };
            spans.push(start..text_end);
            start = end + 1;
        }
        Self { source, spans }
    }

    /// Text of line `line_number`, or `None` past either end.
    pub fn line(&self, line_number: u32) -> Option<&str> {
        let idx = line_number.checked_sub(1)? as usize;
        self.spans.get(idx).map(|span| &self.source[span.clone()])
    }

    /// `(line_number, text)` for every line.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        (1..).zip(&self.spans).map(|(n, span)| (n, &self.source[span.clone()]))
    }

    pub fn line_count(&self) -> usize {
        self.spans.len()
    }
}
