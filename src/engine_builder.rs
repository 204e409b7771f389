use std::sync::Arc;

use crate::{
    pattern_cache::PATTERN_CACHE, placeholder::validate_placeholder, GapStrategy, MatchEngine,
    PatternCache, Result,
};

/// A builder for creating a match engine.
#[derive(Debug, Clone, Default)]
pub struct MatchEngineBuilder {
    cache: Option<Arc<PatternCache>>,
    gap_strategy: GapStrategy,
    placeholder: Option<char>,
}

impl MatchEngineBuilder {
    /// Creates a new match engine builder.
    pub fn new() -> Self {
        Self {
            cache: None,
            gap_strategy: GapStrategy::default(),
            placeholder: None,
        }
    }

    /// Lets the engine use the given pattern cache instead of the process-wide one.
    /// Engines that share a cache share their compiled expressions.
    pub fn pattern_cache(mut self, cache: Arc<PatternCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Lets the engine use a new pattern cache of its own.
    pub fn private_cache(self) -> Self {
        self.pattern_cache(Arc::new(PatternCache::new()))
    }

    /// Sets the strategy used to compute the gaps between matches.
    pub fn gap_strategy(mut self, gap_strategy: GapStrategy) -> Self {
        self.gap_strategy = gap_strategy;
        self
    }

    /// Sets the placeholder used by [`GapStrategy::Textual`].
    /// Without it the engine uses the process-wide placeholder.
    pub fn placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Builds the match engine from the builder.
    ///
    /// Fails if the placeholder is whitespace or ASCII alphanumeric.
    pub fn build(self) -> Result<MatchEngine> {
        let placeholder = self.placeholder.map(validate_placeholder).transpose()?;
        Ok(MatchEngine {
            cache: self
                .cache
                .unwrap_or_else(|| Arc::clone(&PATTERN_CACHE)),
            gap_strategy: self.gap_strategy,
            placeholder,
        })
    }
}
