//! Module with the pattern rule types and their methods.
use std::{borrow::Cow, collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// The default expression for topics, e.g. `#topic#`.
///
/// The topic must be preceded by the start of the text or by whitespace. The boundary is consumed
/// by the expression but is not part of the reported match, see [`SPAN_GROUP`].
pub const TOPIC_PATTERN: &str = r"(?:^|\s|$)(?P<span>#.*#[\p{L}0-9_]*)";

/// The default expression for mentions, e.g. `@someone`.
///
/// The mention must be preceded by the start of the text, by whitespace or by a dot.
pub const MENTION_PATTERN: &str = r"(?:^|\s|$|[.])(?P<span>@[\p{L}0-9_]*)";

/// The name of the capture group that, if present in an expression, determines the reported
/// span of a match. Without this group the whole match is reported.
pub const SPAN_GROUP: &str = "span";

/// The kind of a [`PatternRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// A topic or hashtag.
    Topic,
    /// A mention of a user.
    Mention,
    /// A web link.
    Url,
    /// A phone number.
    PhoneNumber,
    /// A user defined expression.
    Custom,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            RuleKind::Topic => "topic",
            RuleKind::Mention => "mention",
            RuleKind::Url => "url",
            RuleKind::PhoneNumber => "phone number",
            RuleKind::Custom => "custom",
        };
        write!(f, "{}", description)
    }
}

/// Where the expression of a rule comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternSource {
    /// An explicit regular expression.
    Pattern(String),
    /// The built-in default for the rule kind.
    /// Topics and mentions use [`TOPIC_PATTERN`] and [`MENTION_PATTERN`], urls and phone
    /// numbers use the built-in detectors.
    System,
}

/// The built-in detectors that can be selected instead of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectorKind {
    /// Detects web links.
    Link,
    /// Detects phone numbers.
    PhoneNumber,
}

/// The outcome of resolving a rule to something that can be compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPattern<'a> {
    /// The text of a regular expression.
    Regex(Cow<'a, str>),
    /// A built-in detector.
    Detector(DetectorKind),
}

/// Opaque style attributes attached to the matches of a rule.
///
/// The crate never interprets the attributes. They are handed through to the presentation layer
/// that renders the matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, serde_json::Value>);

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the style with the given attribute added.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Get the value of an attribute.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Check if the style has no attributes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.iter()
    }
}

/// A rule that describes which parts of a text are matched and how they are styled.
///
/// Rules of kind [`RuleKind::Custom`] always carry an explicit expression; the constructors make
/// it impossible to create one with [`PatternSource::System`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRule {
    kind: RuleKind,
    source: PatternSource,
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    style: Style,
}

impl PatternRule {
    /// Create a topic rule.
    pub fn topic(source: PatternSource) -> Self {
        Self::with_source(RuleKind::Topic, source)
    }

    /// Create a mention rule.
    pub fn mention(source: PatternSource) -> Self {
        Self::with_source(RuleKind::Mention, source)
    }

    /// Create a url rule.
    pub fn url(source: PatternSource) -> Self {
        Self::with_source(RuleKind::Url, source)
    }

    /// Create a phone number rule.
    pub fn phone_number(source: PatternSource) -> Self {
        Self::with_source(RuleKind::PhoneNumber, source)
    }

    /// Create a custom rule from a regular expression.
    pub fn custom(pattern: impl Into<String>) -> Self {
        Self::with_source(RuleKind::Custom, PatternSource::Pattern(pattern.into()))
    }

    fn with_source(kind: RuleKind, source: PatternSource) -> Self {
        Self {
            kind,
            source,
            style: Style::default(),
        }
    }

    /// Returns the rule with the given style.
    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    /// Get the kind of the rule.
    #[inline]
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Get the source of the rule's expression.
    #[inline]
    pub fn source(&self) -> &PatternSource {
        &self.source
    }

    /// Get the style attributes of the rule.
    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Resolves the rule to the expression text or the detector that implements it.
    pub fn pattern(&self) -> ResolvedPattern<'_> {
        match (&self.source, self.kind) {
            (PatternSource::Pattern(pattern), _) => {
                ResolvedPattern::Regex(Cow::Borrowed(pattern.as_str()))
            }
            (PatternSource::System, RuleKind::Topic) => {
                ResolvedPattern::Regex(Cow::Borrowed(TOPIC_PATTERN))
            }
            (PatternSource::System, RuleKind::Mention) => {
                ResolvedPattern::Regex(Cow::Borrowed(MENTION_PATTERN))
            }
            (PatternSource::System, RuleKind::Url) => ResolvedPattern::Detector(DetectorKind::Link),
            (PatternSource::System, RuleKind::PhoneNumber) => {
                ResolvedPattern::Detector(DetectorKind::PhoneNumber)
            }
            // Only reachable through deserialized data. The empty expression only produces empty hits,
            // which the engine discards.
            (PatternSource::System, RuleKind::Custom) => ResolvedPattern::Regex(Cow::Borrowed("")),
        }
    }
}

impl fmt::Display for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            PatternSource::Pattern(pattern) => {
                write!(f, "{}({})", self.kind, pattern.escape_default())
            }
            PatternSource::System => write!(f, "{}(system)", self.kind),
        }
    }
}
