//! Module with the pattern cache.
//!
//! The pattern cache stores compiled regular expressions keyed by their exact pattern text. Rules
//! with identical pattern text share one compiled expression.
//!
//! # Implementation
//! The cache is a `Mutex<FxHashMap>`. Compilation happens outside of the lock and only completely
//! built expressions are inserted. Two threads that miss the same pattern at the same time both
//! compile it; the first insert wins and the other result is dropped.
//!
//! There is a process-wide instance used by [`crate::MatchEngine::new`] and the free functions of
//! the crate. Engines can be given their own instance with
//! [`crate::MatchEngineBuilder::pattern_cache`].

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use log::debug;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::{Result, TapspanError};

/// A cache of compiled regular expressions.
///
/// The cache has no eviction policy. Call [`PatternCache::clear`] between unrelated workloads to
/// bound its memory use.
#[derive(Debug, Default)]
pub struct PatternCache {
    cache: Mutex<FxHashMap<String, Arc<Regex>>>,
}

impl PatternCache {
    /// Creates a new, empty pattern cache.
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// Returns the compiled expression for the pattern, compiling and caching it if it is not in
    /// the cache yet.
    pub fn get(&self, pattern: &str) -> Result<Arc<Regex>> {
        if let Some(regex) = self.lock().get(pattern) {
            debug!("Pattern cache hit for '{}'", pattern.escape_default());
            return Ok(Arc::clone(regex));
        }
        debug!("Pattern cache miss for '{}'", pattern.escape_default());
        let regex = Regex::new(pattern).map_err(|e| TapspanError::from((e, pattern)))?;
        let mut cache = self.lock();
        let regex = cache
            .entry(pattern.to_string())
            .or_insert_with(|| Arc::new(regex));
        Ok(Arc::clone(regex))
    }

    /// Removes all compiled expressions from the cache.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns the number of cached expressions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Check if the pattern is cached.
    pub fn contains(&self, pattern: &str) -> bool {
        self.lock().contains_key(pattern)
    }

    // A panic while holding the lock can't leave the map half-updated, so a poisoned lock is
    // still usable.
    fn lock(&self) -> MutexGuard<'_, FxHashMap<String, Arc<Regex>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The process-wide pattern cache.
pub(crate) static PATTERN_CACHE: LazyLock<Arc<PatternCache>> =
    LazyLock::new(|| Arc::new(PatternCache::new()));

/// Removes all compiled expressions from the process-wide pattern cache.
pub fn clear_pattern_cache() {
    PATTERN_CACHE.clear();
}
