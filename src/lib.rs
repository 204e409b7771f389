#![forbid(missing_docs)]
//! # `tapspan`
//! The `tapspan` crate finds semantically meaningful parts of a text, like topics, mentions, links,
//! phone numbers or parts matched by custom regular expressions, and splits the text into a
//! sequence of labeled spans that covers the whole input.
//! Each span is either a match of one of the given rules or a gap between matches. The sequence is
//! ordered by start offset and is meant to be rendered as styled, tappable text by a presentation
//! layer.
//!
//! All offsets handed out by the crate are UTF-16 code units into the original text, because that
//! is how text rendering systems commonly address text. Each span additionally carries its byte
//! range for slicing the original `&str`.
//!
//! # Example
//! ```rust
//! use tapspan::{widgets, MatchFilter, PatternRule, PatternSource};
//!
//! const INPUT: &str = "call #hello# at 13345678910";
//!
//! fn main() {
//!     let rules = [
//!         PatternRule::topic(PatternSource::System),
//!         PatternRule::phone_number(PatternSource::Pattern(r"\d{11}".to_string())),
//!     ];
//!     let spans = widgets(&rules, INPUT, &MatchFilter::new()).unwrap();
//!     for span in &spans {
//!         println!("{}", span);
//!     }
//!     assert_eq!(spans.iter().map(|s| s.text()).collect::<String>(), INPUT);
//! }
//! ```
//! The output of the example is:
//! ```text
//! gap 0..5 'call '
//! topic 5..12 '#hello#'
//! gap 12..16 ' at '
//! phone number 16..27 '13345678910'
//! ```
//!
//! # Gaps
//! The gaps are computed by subtracting the matched ranges from the text. The
//! [`GapStrategy::Textual`] strategy instead replaces matched text by a placeholder character and
//! searches the remaining fragments in the text. It is kept for compatibility and has known
//! weaknesses with repeated substrings, see [`GapStrategy`].
//!
//! # Pattern cache
//! Compiled regular expressions are cached by their pattern text in a process-wide cache that can
//! be cleared with [`clear_pattern_cache`]. Use a [`MatchEngineBuilder`] to create engines with
//! their own cache.

/// The module with the matching engine and the free functions operating on the process-wide
/// state.
mod engine;
pub use engine::{complement, match_all, reconcile, widgets, GapStrategy, MatchEngine, MatchFilter};

/// The module with the match engine builder.
mod engine_builder;
pub use engine_builder::MatchEngineBuilder;

/// Module with error definitions
mod errors;
pub use errors::{Result, TapspanError, TapspanErrorKind};

/// The module with internal implementation details.
mod internal;

/// Module that provides a Match type
mod match_type;
pub use match_type::{Match, MatchDetails, MatchSet};

/// Module that provides the Matcher type and the iterator over its hits
mod matcher;
pub use matcher::{FindHits, Matcher, RawHit};

/// Module with offset conversions
mod offsets;
pub use offsets::{substring, OffsetMap};

/// Module with the pattern cache
mod pattern_cache;
pub use pattern_cache::{clear_pattern_cache, PatternCache};

/// Module that provides the pattern rule types
mod pattern_rule;
pub use pattern_rule::{
    DetectorKind, PatternRule, PatternSource, ResolvedPattern, RuleKind, Style, MENTION_PATTERN,
    SPAN_GROUP, TOPIC_PATTERN,
};

/// Module with the process-wide placeholder character
mod placeholder;
pub use placeholder::{
    configure_placeholder_character, placeholder_character, reset_placeholder_character,
    DEFAULT_PLACEHOLDER,
};

/// Module with the functions used by a presentation layer
mod presentation;
pub use presentation::{hit_test, styled_runs, StyledRun};

/// Module that provides a Span type
mod span;
pub use span::Span;
