//! The two ways to compute the gaps between matches.

use log::debug;

use crate::{offsets::OffsetMap, Match, MatchSet, Span};

/// Computes the gaps by subtracting the matched byte ranges from the whole text.
///
/// Overlapping and unordered matches are fine. Matches whose byte span does not fit the text are
/// ignored.
pub(crate) fn interval_gaps(matches: &[Match], offsets: &OffsetMap) -> MatchSet {
    let text = offsets.text();
    let mut covered: Vec<Span> = matches
        .iter()
        .map(Match::byte_span)
        .filter(|span| !span.is_empty())
        .filter(|&span| {
            let fits = offsets.utf16_span(span).is_some();
            if !fits {
                debug!("Ignoring span {} that does not fit the text", span);
            }
            fits
        })
        .collect();
    covered.sort_by_key(|span| span.start);

    let mut gaps = Vec::new();
    let mut cursor = 0;
    let mut previous: Option<Span> = None;
    for span in covered {
        if let Some(previous) = previous.filter(|previous| previous.overlaps(&span)) {
            debug!("Matches at {} and {} overlap", previous, span);
        }
        if span.start > cursor {
            gaps.extend(gap(offsets, Span::new(cursor, span.start)));
        }
        cursor = cursor.max(span.end);
        previous = Some(span);
    }
    if cursor < text.len() {
        gaps.extend(gap(offsets, Span::new(cursor, text.len())));
    }
    gaps
}

/// Computes the gaps by textual replacement.
///
/// The first remaining occurrence of each match's text is replaced by the placeholder, the result
/// is split at the placeholders and every fragment is located by its first occurrence in the
/// original text.
///
/// The result is wrong if the text contains the placeholder itself, or if a fragment also occurs
/// before its actual position.
pub(crate) fn textual_gaps(matches: &[Match], offsets: &OffsetMap, placeholder: char) -> MatchSet {
    let original = offsets.text();
    let mut buffer = [0u8; 4];
    let replacement: &str = placeholder.encode_utf8(&mut buffer);

    let mut working = original.to_string();
    for ma in matches.iter().filter(|ma| !ma.text().is_empty()) {
        working = working.replacen(ma.text(), replacement, 1);
    }

    working
        .split(placeholder)
        .filter(|fragment| !fragment.is_empty())
        .filter_map(|fragment| {
            let Some(start) = original.find(fragment) else {
                debug!("Gap '{}' not found in the text", fragment.escape_default());
                return None;
            };
            gap(offsets, Span::with_len(start, fragment.len()))
        })
        .collect()
}

fn gap(offsets: &OffsetMap, byte_span: Span) -> Option<Match> {
    let span = offsets.utf16_span(byte_span)?;
    let text = offsets.text().get(byte_span.range())?;
    Some(Match::gap(text, span, byte_span))
}
