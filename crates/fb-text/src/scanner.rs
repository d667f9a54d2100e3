//! Delimiter scanning: split a character sequence into runs.

use std::fmt;

/// A half-open character interval `[start, end)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharRange {
    pub start: usize,
    pub end: usize,
}

impl CharRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Restrict the range to a sequence of length `len`. Returns `None` when
    /// nothing of the range remains.
    pub fn clamp(&self, len: usize) -> Option<CharRange> {
        let clamped = CharRange::new(self.start, self.end.min(len));
        (!clamped.is_empty()).then_some(clamped)
    }
}

impl fmt::Debug for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Partition `text[start..end]` into maximal runs separated by `delimiter`.
///
/// Delimiters are not part of any run, and empty runs (consecutive
/// delimiters, or a delimiter at either edge) are dropped.
///
/// # Panics
///
/// Panics if `start > end` or `end > text.len()`.
pub fn delimiter_ranges(text: &[char], delimiter: char, start: usize, end: usize) -> Vec<CharRange> {
    assert!(
        start <= end && end <= text.len(),
        "malformed scan range {start}..{end} over {} characters",
        text.len()
    );

    let mut ranges = Vec::new();
    let mut run_start = start;
    for (i, &c) in text.iter().enumerate().take(end).skip(start) {
        if c == delimiter {
            if run_start < i {
                ranges.push(CharRange::new(run_start, i));
            }
            run_start = i + 1;
        }
    }
    if run_start < end {
        ranges.push(CharRange::new(run_start, end));
    }
    ranges
}

/// Scan the whole of `text`.
pub fn scan(text: &[char], delimiter: char) -> Vec<CharRange> {
    delimiter_ranges(text, delimiter, 0, text.len())
}
