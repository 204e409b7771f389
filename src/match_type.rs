use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{PatternRule, RuleKind, Span, Style};

/// A sequence of matches.
///
/// Depending on where it comes from it holds the matches of one rule, the matches of all rules in
/// rule order, the gaps between matches, or the final sequence ordered by start offset.
pub type MatchSet = Vec<Match>;

/// The details of the raw hit a match was built from.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    /// The UTF-16 spans of all capture groups. Index 0 is the whole raw hit, groups that did not
    /// participate are `None`.
    groups: Vec<Option<Span>>,
}

impl MatchDetails {
    /// Create new match details.
    pub(crate) fn new(groups: Vec<Option<Span>>) -> Self {
        Self { groups }
    }

    /// Get the UTF-16 spans of all capture groups.
    #[inline]
    pub fn groups(&self) -> &[Option<Span>] {
        &self.groups
    }

    /// Get the UTF-16 span of the capture group with the given index.
    #[inline]
    pub fn group(&self, index: usize) -> Option<Span> {
        self.groups.get(index).copied().flatten()
    }

    /// Get the UTF-16 span of the whole raw hit.
    ///
    /// It can be larger than [`Match::span`] if the expression consumed a leading boundary that
    /// is not reported.
    #[inline]
    pub fn whole(&self) -> Option<Span> {
        self.group(0)
    }
}

/// A labeled part of the input text.
///
/// A match either belongs to a rule or, if it has no rule, is a gap between the matched parts.
/// All offsets refer to the original input text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The matched text.
    text: String,
    /// The span in UTF-16 code units.
    span: Span,
    /// The span in bytes.
    byte_span: Span,
    /// The rule that produced the match, `None` for gaps.
    rule: Option<Arc<PatternRule>>,
    /// The details of the raw hit, `None` for gaps.
    details: Option<MatchDetails>,
}

impl Match {
    /// Create a new match for a rule.
    pub(crate) fn matched(
        rule: Arc<PatternRule>,
        text: &str,
        span: Span,
        byte_span: Span,
        details: MatchDetails,
    ) -> Self {
        Self {
            text: text.to_string(),
            span,
            byte_span,
            rule: Some(rule),
            details: Some(details),
        }
    }

    /// Create a new gap.
    pub(crate) fn gap(text: &str, span: Span, byte_span: Span) -> Self {
        Self {
            text: text.to_string(),
            span,
            byte_span,
            rule: None,
            details: None,
        }
    }

    /// Get the text of the match.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the span of the match in UTF-16 code units.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the span of the match in bytes.
    #[inline]
    pub fn byte_span(&self) -> Span {
        self.byte_span
    }

    /// Get the start of the match in UTF-16 code units.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the match in UTF-16 code units.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the length of the match in UTF-16 code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the match is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Get the span as range of UTF-16 code units.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Get the rule that produced the match.
    #[inline]
    pub fn rule(&self) -> Option<&PatternRule> {
        self.rule.as_deref()
    }

    /// Get the kind of the rule that produced the match.
    #[inline]
    pub fn kind(&self) -> Option<RuleKind> {
        self.rule.as_ref().map(|rule| rule.kind())
    }

    /// Get the style of the rule that produced the match.
    #[inline]
    pub fn style(&self) -> Option<&Style> {
        self.rule.as_ref().map(|rule| rule.style())
    }

    /// Get the details of the raw hit.
    #[inline]
    pub fn details(&self) -> Option<&MatchDetails> {
        self.details.as_ref()
    }

    /// Check if the match is a gap, i.e. it was not produced by any rule.
    #[inline]
    pub fn is_gap(&self) -> bool {
        self.rule.is_none()
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.rule {
            Some(rule) => write!(f, "{} {}", rule.kind(), self.span)?,
            None => write!(f, "gap {}", self.span)?,
        }
        write!(f, " '{}'", self.text.escape_default())
    }
}
