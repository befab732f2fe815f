//! Byte offset to line/column translation for a single source file.

use serde::Serialize;

/// 1-based line and byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for LineCol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMap {
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(idx, _)| idx + 1),
        );
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Zero-based index of the line containing `offset`.
    fn line_index(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    pub fn position(&self, offset: usize) -> LineCol {
        let line = self.line_index(offset);
        LineCol {
            line: line + 1,
            column: offset - self.line_starts[line] + 1,
        }
    }

    /// Leading whitespace of the line that contains `offset`.
    pub fn line_indent<'s>(&self, source: &'s str, offset: usize) -> &'s str {
        let start = self.line_starts[self.line_index(offset)];
        let rest = &source[start..];
        let width = rest
            .find(|ch: char| ch != ' ' && ch != '\t')
            .unwrap_or(rest.len());
        &rest[..width]
    }
}
