//! Module with the functions a presentation layer uses to consume a match sequence.
//!
//! Rendering itself is left to the caller: it walks the [`StyledRun`]s in order and appends each
//! run's text with the run's style.

use crate::{Match, Style};

/// A piece of text together with the style it is rendered with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledRun<'a> {
    /// The text of the run.
    pub text: &'a str,
    /// The style of the run.
    pub style: &'a Style,
    /// The match the run was created from.
    pub source: &'a Match,
}

/// Maps each match to its text and style.
///
/// Matches use their rule's style, gaps use `unmatched`. The runs keep the order of `matches`.
pub fn styled_runs<'a>(matches: &'a [Match], unmatched: &'a Style) -> Vec<StyledRun<'a>> {
    matches
        .iter()
        .map(|ma| StyledRun {
            text: ma.text(),
            style: ma.style().unwrap_or(unmatched),
            source: ma,
        })
        .collect()
}

/// Returns the first match that contains the given UTF-16 offset.
///
/// The end offset counts as inside a match, so at the boundary of two adjacent matches the
/// earlier one in `matches` wins. This keeps the tap target of a match one code unit larger than
/// the match itself.
pub fn hit_test(matches: &[Match], offset: usize) -> Option<&Match> {
    matches
        .iter()
        .find(|ma| ma.span().contains_inclusive(offset))
}
