use std::sync::Arc;

use log::trace;
use regex::Regex;

use crate::{
    internal::detectors, DetectorKind, PatternCache, PatternRule, ResolvedPattern, Result, Span,
    SPAN_GROUP,
};

/// A compiled, runnable form of a [`PatternRule`].
///
/// Regular expressions are taken from a [`PatternCache`], built-in detectors are selected by kind
/// and never cached.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// A compiled regular expression.
    Regex(Arc<Regex>),
    /// A built-in detector.
    Detector(DetectorKind),
}

impl Matcher {
    /// Compiles the rule.
    ///
    /// Fails if the rule's pattern text is not a valid regular expression.
    pub fn compile(rule: &PatternRule, cache: &PatternCache) -> Result<Self> {
        match rule.pattern() {
            ResolvedPattern::Regex(pattern) => Ok(Matcher::Regex(cache.get(&pattern)?)),
            ResolvedPattern::Detector(kind) => Ok(Matcher::Detector(kind)),
        }
    }

    /// Returns an iterator over all non-overlapping, non-empty hits in ascending start order.
    pub fn find_iter<'m, 'h>(&'m self, text: &'h str) -> FindHits<'m, 'h> {
        let regex = self.regex();
        let span_group = regex
            .capture_names()
            .position(|name| name == Some(SPAN_GROUP));
        let detector = match self {
            Matcher::Regex(_) => None,
            Matcher::Detector(kind) => Some(*kind),
        };
        FindHits {
            captures: regex.captures_iter(text),
            span_group,
            detector,
            text,
        }
    }

    fn regex(&self) -> &Regex {
        match self {
            Matcher::Regex(regex) => regex.as_ref(),
            Matcher::Detector(kind) => detectors::regex(*kind),
        }
    }
}

/// A hit of a [`Matcher`] in a text. All offsets are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHit {
    span: Span,
    groups: Vec<Option<Span>>,
}

impl RawHit {
    /// Get the reported span of the hit.
    ///
    /// This is the capture group named `span` if the expression has one that participated in the
    /// match, else the whole match.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the spans of all capture groups. Index 0 is the whole match.
    #[inline]
    pub fn groups(&self) -> &[Option<Span>] {
        &self.groups
    }
}

/// An iterator over the hits of a [`Matcher`].
///
/// * `'m` represents the lifetime of the matcher.
/// * `'h` represents the lifetime of the haystack being searched.
///
/// This iterator can be created with the [`Matcher::find_iter`] method.
#[derive(Debug)]
pub struct FindHits<'m, 'h> {
    captures: regex::CaptureMatches<'m, 'h>,
    span_group: Option<usize>,
    detector: Option<DetectorKind>,
    text: &'h str,
}

impl Iterator for FindHits<'_, '_> {
    type Item = RawHit;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let captures = self.captures.next()?;
            let groups: Vec<Option<Span>> = captures
                .iter()
                .map(|group| group.map(|m| Span::from(m.range())))
                .collect();
            let Some(whole) = groups.first().copied().flatten() else {
                continue;
            };
            let mut span = self
                .span_group
                .and_then(|index| groups.get(index).copied().flatten())
                .unwrap_or(whole);
            if let Some(kind) = self.detector {
                span = detectors::refine(kind, self.text, span);
            }
            // An empty hit can be neither rendered nor tapped.
            if span.is_empty() {
                trace!("Skipping empty hit at {}", span.start);
                continue;
            }
            return Some(RawHit { span, groups });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternSource;

    fn hits(rule: &PatternRule, text: &str) -> Vec<(usize, usize)> {
        let cache = PatternCache::new();
        Matcher::compile(rule, &cache)
            .unwrap()
            .find_iter(text)
            .map(|hit| (hit.span().start, hit.span().end))
            .collect()
    }

    #[test]
    fn test_topic_boundary_is_not_reported() {
        let rule = PatternRule::topic(PatternSource::System);
        assert_eq!(hits(&rule, "call #hello# at 1"), vec![(5, 12)]);
        assert_eq!(hits(&rule, "#hello#"), vec![(0, 7)]);
        // The topic must be preceded by whitespace or the start of the text.
        assert!(hits(&rule, "no#hello#").is_empty());
    }

    #[test]
    fn test_topic_keeps_whole_hit_in_groups() {
        let cache = PatternCache::new();
        let matcher = Matcher::compile(&PatternRule::topic(PatternSource::System), &cache).unwrap();
        let hit = matcher.find_iter("a #b#").next().unwrap();
        assert_eq!(hit.span(), Span::new(2, 5));
        assert_eq!(hit.groups()[0], Some(Span::new(1, 5)));
    }

    #[test]
    fn test_mention() {
        let rule = PatternRule::mention(PatternSource::System);
        assert_eq!(hits(&rule, "@a and @b.@c"), vec![(0, 2), (7, 9), (10, 12)]);
        assert!(hits(&rule, "mail@example").is_empty());
    }

    #[test]
    fn test_custom_without_span_group() {
        let rule = PatternRule::custom("(a)(b)?");
        assert_eq!(hits(&rule, "ab a"), vec![(0, 2), (3, 4)]);
    }

    #[test]
    fn test_empty_hits_are_skipped() {
        let rule = PatternRule::custom("x*");
        assert_eq!(hits(&rule, "axxb x"), vec![(1, 3), (5, 6)]);
    }

    #[test]
    fn test_detector() {
        let cache = PatternCache::new();
        let matcher = Matcher::compile(&PatternRule::url(PatternSource::System), &cache).unwrap();
        assert!(matches!(matcher, Matcher::Detector(DetectorKind::Link)));
        let hits: Vec<Span> = matcher
            .find_iter("go to https://example.com.")
            .map(|hit| hit.span())
            .collect();
        assert_eq!(hits, vec![Span::new(6, 25)]);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let cache = PatternCache::new();
        assert!(Matcher::compile(&PatternRule::custom("[a-"), &cache).is_err());
    }
}
