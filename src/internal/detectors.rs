//! The built-in detectors for links and phone numbers.
//!
//! They stand in for the detectors a platform usually provides. Both are regular expressions
//! compiled once per process; they are not part of the pattern cache.

use std::sync::LazyLock;

use regex::Regex;

use crate::{DetectorKind, Span};

// Links with scheme or starting with "www.". The link must not continue an ASCII word, but may
// directly follow CJK text. It ends before whitespace, delimiters, Han characters and CJK or
// fullwidth punctuation.
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?:^|[^a-z0-9_])",
        r#"(?P<span>(?:https?://|www\.)[^\s<>\[\]{}|\\^`"\x00-\x1f\x7f\p{Han}\x{3000}-\x{303f}\x{ff00}-\x{ffef}]+)"#,
    ))
    .expect("LINK regex is invalid")
});

// Mobile numbers with 11 digits, NANP numbers with optional country code and separators, and
// international numbers starting with '+'. A number must neither continue nor be continued by a
// digit or an ASCII word character.
static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:^|[^+\dA-Za-z_])(?P<span>",
        r"1[3-9]\d{9}",
        r"|(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
        r"|\+\d{1,3}[-.\s]?\d{1,4}[-.\s]?\d{1,4}[-.\s]?\d{1,9}",
        r")(?-u:\b)",
    ))
    .expect("PHONE_NUMBER regex is invalid")
});

/// Returns the expression of the detector.
pub(crate) fn regex(kind: DetectorKind) -> &'static Regex {
    match kind {
        DetectorKind::Link => &LINK,
        DetectorKind::PhoneNumber => &PHONE_NUMBER,
    }
}

/// Adjusts a raw byte span found by the detector's expression.
pub(crate) fn refine(kind: DetectorKind, text: &str, span: Span) -> Span {
    match kind {
        DetectorKind::Link => {
            let Some(link) = text.get(span.range()) else {
                return span;
            };
            Span::with_len(span.start, trim_link(link).len())
        }
        DetectorKind::PhoneNumber => span,
    }
}

// Sentence punctuation and closing parentheses without an opening one directly after a link are
// not part of it.
fn trim_link(mut link: &str) -> &str {
    loop {
        link = link.trim_end_matches(['.', ',', ';', ':', '!', '?']);
        match link.strip_suffix(')') {
            Some(rest) if link.matches('(').count() < link.matches(')').count() => link = rest,
            _ => return link,
        }
    }
}
