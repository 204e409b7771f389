use serde::{Deserialize, Serialize};

/// A half-open offset range in a text.
///
/// Whether the offsets count UTF-16 code units or UTF-8 bytes depends on where the span comes
/// from. [`crate::Match::span`] is always in UTF-16 code units, [`crate::Match::byte_span`] is
/// always in bytes.
#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// The start offset of the span, inclusive.
    pub start: usize,
    /// The end offset of the span, exclusive.
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a new span from a start offset and a length, the way text systems usually describe
    /// ranges.
    #[inline]
    pub fn with_len(start: usize, len: usize) -> Self {
        Span {
            start,
            end: start + len,
        }
    }

    /// Check if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Get the length of the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Get the span as range.
    #[inline]
    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Check if the offset lies within the span, counting the end offset as inside.
    ///
    /// This is the containment test used for hit-testing: two adjacent spans both contain their
    /// shared boundary offset.
    #[inline]
    pub fn contains_inclusive(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }

    /// Check if two spans share at least one offset.
    #[inline]
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl<T> From<std::ops::Range<T>> for Span
where
    T: Into<usize>,
{
    fn from(range: std::ops::Range<T>) -> Self {
        Span {
            start: range.start.into(),
            end: range.end.into(),
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
