//! Delimiter-bounded block location

/// A line marks a block boundary when its trimmed content equals this.
pub const DELIMITER: &str = "---";

/// Zero-based line indices of the delimiter pair bounding a block.
///
/// `start` is the opening delimiter line, `end` the closing one;
/// `start < end` always holds for a located span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    /// Number of lines strictly between the delimiters.
    pub fn inner_len(&self) -> usize {
        self.end - self.start - 1
    }
}

/// Find the first delimiter-bounded block in `source`.
///
/// Scans top-down for the first line that trims to `---`, then from the
/// following line for the next such line. Returns `None` when no opening
/// delimiter exists or the block is unterminated; distinguishing those two
/// is the parse layer's job, not the locator's.
pub fn locate(source: &str) -> Option<LineSpan> {
    let mut lines = source.lines().enumerate();
    let start = lines.find(|(_, line)| line.trim() == DELIMITER)?.0;
    let end = lines.find(|(_, line)| line.trim() == DELIMITER)?.0;
    Some(LineSpan { start, end })
}
