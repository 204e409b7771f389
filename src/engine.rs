use std::{convert::Infallible, fmt, sync::Arc};

use log::{debug, trace, warn};
use rustc_hash::FxHashSet;

use crate::{
    internal::gaps, offsets::OffsetMap, pattern_cache::PATTERN_CACHE, placeholder_character,
    Match, MatchDetails, MatchEngineBuilder, MatchSet, Matcher, PatternCache, PatternRule, Result,
};

/// The way [`MatchEngine::complement`] computes the gaps between matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GapStrategy {
    /// Subtract the matched offset ranges from the text.
    /// Exact for repeated substrings and for any input character.
    #[default]
    Interval,
    /// Replace the matched texts by the placeholder character and locate the remaining fragments
    /// by text search.
    ///
    /// A fragment is located at its first occurrence in the text, which is wrong if the same text
    /// also occurs before its actual position. Input containing the placeholder character is split
    /// at that character.
    Textual,
}

/// Excludes hits from the result of a matching operation.
///
/// A hit is excluded if its text is in the filter list or if the predicate returns `Ok(true)` for
/// it. An `Err` of the predicate aborts the matching operation and is returned unchanged.
///
/// * `'f` represents the lifetime of the predicate.
/// * `E` is the error type of the predicate.
pub struct MatchFilter<'f, E = Infallible> {
    list: FxHashSet<String>,
    #[allow(clippy::type_complexity)]
    predicate: Option<Box<dyn Fn(&str) -> std::result::Result<bool, E> + 'f>>,
}

impl MatchFilter<'static, Infallible> {
    /// Creates a filter that excludes nothing.
    pub fn new() -> Self {
        Self {
            list: FxHashSet::default(),
            predicate: None,
        }
    }
}

impl Default for MatchFilter<'static, Infallible> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'f, E> MatchFilter<'f, E> {
    /// Returns the filter with the given texts added to the filter list.
    pub fn with_list<I, S>(mut self, list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list.extend(list.into_iter().map(Into::into));
        self
    }

    /// Returns the filter with the given predicate, replacing a previous one.
    pub fn with_predicate<'g, F, E2>(self, predicate: F) -> MatchFilter<'g, E2>
    where
        F: Fn(&str) -> std::result::Result<bool, E2> + 'g,
    {
        MatchFilter {
            list: self.list,
            predicate: Some(Box::new(predicate)),
        }
    }

    /// Checks if a hit with the given text is excluded.
    pub fn excludes(&self, text: &str) -> std::result::Result<bool, E> {
        if let Some(predicate) = &self.predicate {
            if predicate(text)? {
                return Ok(true);
            }
        }
        Ok(self.list.contains(text))
    }
}

impl<E> fmt::Debug for MatchFilter<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchFilter")
            .field("list", &self.list)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

/// The matching engine.
///
/// It runs pattern rules over a text, computes the gaps between the matches and merges both into
/// one sequence ordered by start offset.
///
/// [`MatchEngine::new`] creates an engine that uses the process-wide pattern cache and
/// placeholder. Use the [`MatchEngineBuilder`] to give an engine its own cache or placeholder.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    pub(crate) cache: Arc<PatternCache>,
    pub(crate) gap_strategy: GapStrategy,
    // `None` means the process-wide placeholder is read whenever it is needed.
    pub(crate) placeholder: Option<char>,
}

impl MatchEngine {
    /// Creates an engine with the process-wide pattern cache and placeholder and the
    /// [`GapStrategy::Interval`] strategy.
    pub fn new() -> Self {
        Self {
            cache: Arc::clone(&PATTERN_CACHE),
            gap_strategy: GapStrategy::default(),
            placeholder: None,
        }
    }

    /// Creates a builder for an engine.
    pub fn builder() -> MatchEngineBuilder {
        MatchEngineBuilder::new()
    }

    /// Get the pattern cache of the engine.
    #[inline]
    pub fn pattern_cache(&self) -> &Arc<PatternCache> {
        &self.cache
    }

    /// Get the gap strategy of the engine.
    #[inline]
    pub fn gap_strategy(&self) -> GapStrategy {
        self.gap_strategy
    }

    /// Get the placeholder the engine currently uses for [`GapStrategy::Textual`].
    pub fn placeholder(&self) -> char {
        self.placeholder.unwrap_or_else(placeholder_character)
    }

    /// Compiles the rule with the engine's pattern cache.
    pub fn compile(&self, rule: &PatternRule) -> Result<Matcher> {
        Matcher::compile(rule, &self.cache)
    }

    /// Returns the matches of one rule in ascending start order.
    ///
    /// A rule whose pattern does not compile matches nothing.
    pub fn match_rule<E>(
        &self,
        rule: &PatternRule,
        text: &str,
        filter: &MatchFilter<'_, E>,
    ) -> std::result::Result<MatchSet, E> {
        let rule = Arc::new(rule.clone());
        self.match_shared_rule(&rule, &OffsetMap::new(text), filter)
    }

    /// Returns the matches of all rules.
    ///
    /// The matches are grouped by rule in the given rule order and are not sorted across rules.
    pub fn match_all<E>(
        &self,
        rules: &[PatternRule],
        text: &str,
        filter: &MatchFilter<'_, E>,
    ) -> std::result::Result<MatchSet, E> {
        let offsets = OffsetMap::new(text);
        let mut matches = Vec::new();
        for rule in rules {
            let rule = Arc::new(rule.clone());
            matches.extend(self.match_shared_rule(&rule, &offsets, filter)?);
        }
        Ok(matches)
    }

    /// Returns the parts of the text that are not covered by any of the matches.
    ///
    /// The gaps are computed with the engine's [`GapStrategy`].
    pub fn complement(&self, matches: &[Match], text: &str) -> MatchSet {
        if text.is_empty() {
            return Vec::new();
        }
        let offsets = OffsetMap::new(text);
        match self.gap_strategy {
            GapStrategy::Interval => gaps::interval_gaps(matches, &offsets),
            GapStrategy::Textual => gaps::textual_gaps(matches, &offsets, self.placeholder()),
        }
    }

    /// Runs all rules without filter and returns the gaps between their matches.
    pub fn gaps_for_rules(&self, rules: &[PatternRule], text: &str) -> MatchSet {
        let matches = match self.match_all(rules, text, &MatchFilter::new()) {
            Ok(matches) => matches,
            Err(never) => match never {},
        };
        self.complement(&matches, text)
    }

    /// Splits the text into matches and gaps, ordered by start offset.
    pub fn widgets<E>(
        &self,
        rules: &[PatternRule],
        text: &str,
        filter: &MatchFilter<'_, E>,
    ) -> std::result::Result<MatchSet, E> {
        let matches = self.match_all(rules, text, filter)?;
        let gaps = self.complement(&matches, text);
        Ok(reconcile(matches, gaps))
    }

    fn match_shared_rule<E>(
        &self,
        rule: &Arc<PatternRule>,
        offsets: &OffsetMap,
        filter: &MatchFilter<'_, E>,
    ) -> std::result::Result<MatchSet, E> {
        let text = offsets.text();
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let matcher = match self.compile(rule) {
            Ok(matcher) => matcher,
            Err(e) => {
                warn!("Rule {} matches nothing: {}", rule, e);
                return Ok(Vec::new());
            }
        };

        let mut matches = Vec::new();
        for hit in matcher.find_iter(text) {
            let byte_span = hit.span();
            let (Some(matched), Some(span)) =
                (text.get(byte_span.range()), offsets.utf16_span(byte_span))
            else {
                debug!("Skipping hit {} that does not fit the text", byte_span);
                continue;
            };
            if filter.excludes(matched)? {
                trace!("Filtered {} '{}'", rule.kind(), matched.escape_default());
                continue;
            }
            let groups = hit
                .groups()
                .iter()
                .map(|&group| group.and_then(|group| offsets.utf16_span(group)))
                .collect();
            trace!("{} at {}: '{}'", rule.kind(), span, matched.escape_default());
            matches.push(Match::matched(
                Arc::clone(rule),
                matched,
                span,
                byte_span,
                MatchDetails::new(groups),
            ));
        }
        // Most matchers scan left to right, but the merge steps must not depend on it.
        matches.sort_by_key(Match::start);
        Ok(matches)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Merges matches and gaps into one sequence ordered by start offset.
///
/// The sort is stable, so entries with equal start keep their relative order, matches before
/// gaps.
pub fn reconcile(matches: MatchSet, gaps: MatchSet) -> MatchSet {
    let mut widgets = matches;
    widgets.extend(gaps);
    widgets.sort_by_key(Match::start);
    widgets
}

/// Returns the matches of all rules, grouped by rule in the given rule order.
///
/// Uses the process-wide pattern cache. See [`MatchEngine::match_all`].
pub fn match_all<E>(
    rules: &[PatternRule],
    text: &str,
    filter: &MatchFilter<'_, E>,
) -> std::result::Result<MatchSet, E> {
    MatchEngine::new().match_all(rules, text, filter)
}

/// Returns the parts of the text that are not covered by any of the matches.
///
/// See [`MatchEngine::complement`].
pub fn complement(matches: &[Match], text: &str) -> MatchSet {
    MatchEngine::new().complement(matches, text)
}

/// Splits the text into matches and gaps, ordered by start offset.
///
/// Uses the process-wide pattern cache. See [`MatchEngine::widgets`].
pub fn widgets<E>(
    rules: &[PatternRule],
    text: &str,
    filter: &MatchFilter<'_, E>,
) -> std::result::Result<MatchSet, E> {
    MatchEngine::new().widgets(rules, text, filter)
}
