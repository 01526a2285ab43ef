//! Line/column conversion for byte-offset positions

pub use text_size::{TextRange, TextSize};

/// A zero-indexed line and column position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets to line/column positions and back.
///
/// Built once per document text; lookups are binary searches over the
/// newline table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(i as u32 + 1));
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = u32::from(offset) - u32::from(self.line_starts[line]);
        LineCol {
            line: line as u32,
            col,
        }
    }

    /// Convert a line/column position to a byte offset.
    ///
    /// Returns `None` if the line is out of range. Columns are not range
    /// checked against line length; callers clamp against document length.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let start = self.line_starts.get(line_col.line as usize)?;
        Some(*start + TextSize::new(line_col.col))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
