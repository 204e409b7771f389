//! Module with conversions between the offset systems of a text.
//!
//! Rust strings are indexed by UTF-8 byte, regular expressions report byte offsets, but text
//! rendering systems commonly address text by UTF-16 code unit. Spans handed out by this crate
//! are therefore expressed in UTF-16 code units, and this module provides the mapping between
//! bytes, UTF-16 code units and code points (chars).
//!
//! All conversions return `None` if an offset is out of range or does not fall on a char
//! boundary, e.g. if a UTF-16 offset points between the two halves of a surrogate pair.

use crate::Span;

/// A lookup table for the char boundaries of one text.
///
/// Building the table is linear in the length of the text; each conversion afterwards is a
/// binary search.
#[derive(Debug, Clone)]
pub struct OffsetMap<'h> {
    text: &'h str,
    // The byte offset and the UTF-16 offset of every char start, followed by the end of the text.
    // Both components are strictly increasing.
    boundaries: Vec<(usize, usize)>,
}

impl<'h> OffsetMap<'h> {
    /// Creates the offset map for the given text.
    pub fn new(text: &'h str) -> Self {
        let mut boundaries = Vec::with_capacity(text.len() + 1);
        let mut utf16 = 0;
        for (i, c) in text.char_indices() {
            boundaries.push((i, utf16));
            utf16 += c.len_utf16();
        }
        boundaries.push((text.len(), utf16));
        Self { text, boundaries }
    }

    /// Returns the text the map was built for.
    #[inline]
    pub fn text(&self) -> &'h str {
        self.text
    }

    /// Returns the length of the text in UTF-16 code units.
    #[inline]
    pub fn utf16_len(&self) -> usize {
        self.boundaries[self.boundaries.len() - 1].1
    }

    /// Returns the number of chars in the text.
    #[inline]
    pub fn char_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Converts a byte offset into a UTF-16 offset.
    pub fn to_utf16(&self, byte: usize) -> Option<usize> {
        self.boundaries
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.boundaries[i].1)
    }

    /// Converts a UTF-16 offset into a byte offset.
    pub fn to_byte(&self, utf16: usize) -> Option<usize> {
        self.char_index(utf16).map(|i| self.boundaries[i].0)
    }

    /// Converts a byte span into a UTF-16 span.
    pub fn utf16_span(&self, byte_span: Span) -> Option<Span> {
        if byte_span.start > byte_span.end {
            return None;
        }
        Some(Span::new(
            self.to_utf16(byte_span.start)?,
            self.to_utf16(byte_span.end)?,
        ))
    }

    /// Converts a UTF-16 span into a byte span.
    pub fn byte_span(&self, utf16_span: Span) -> Option<Span> {
        if utf16_span.start > utf16_span.end {
            return None;
        }
        Some(Span::new(
            self.to_byte(utf16_span.start)?,
            self.to_byte(utf16_span.end)?,
        ))
    }

    /// Converts a span of char positions into a UTF-16 span.
    pub fn utf16_span_from_chars(&self, char_span: Span) -> Option<Span> {
        if char_span.start > char_span.end {
            return None;
        }
        Some(Span::new(
            self.boundaries.get(char_span.start)?.1,
            self.boundaries.get(char_span.end)?.1,
        ))
    }

    /// Converts a UTF-16 span into a span of char positions.
    pub fn char_span_from_utf16(&self, utf16_span: Span) -> Option<Span> {
        if utf16_span.start > utf16_span.end {
            return None;
        }
        Some(Span::new(
            self.char_index(utf16_span.start)?,
            self.char_index(utf16_span.end)?,
        ))
    }

    /// Returns the part of the text addressed by the given UTF-16 span.
    pub fn substring(&self, utf16_span: Span) -> Option<&'h str> {
        let byte_span = self.byte_span(utf16_span)?;
        self.text.get(byte_span.range())
    }

    // The index of the boundary with the given UTF-16 offset, which equals the char position.
    #[inline]
    fn char_index(&self, utf16: usize) -> Option<usize> {
        self.boundaries
            .binary_search_by_key(&utf16, |&(_, u)| u)
            .ok()
    }
}

/// Returns the part of `text` addressed by the given UTF-16 span.
///
/// Use an [`OffsetMap`] instead if you need to resolve more than one span of the same text.
pub fn substring(text: &str, utf16_span: Span) -> Option<&str> {
    OffsetMap::new(text).substring(utf16_span)
}
