use thiserror::Error;

/// The result type for the `tapspan` crate.
pub type Result<T> = std::result::Result<T, TapspanError>;

/// The error type for the `tapspan` crate.
#[derive(Error, Debug)]
pub struct TapspanError {
    /// The source of the error.
    pub source: Box<TapspanErrorKind>,
}

impl TapspanError {
    /// Create a new `TapspanError`.
    pub fn new(kind: TapspanErrorKind) -> Self {
        TapspanError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    pub fn kind(&self) -> &TapspanErrorKind {
        &self.source
    }
}

impl std::fmt::Display for TapspanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum TapspanErrorKind {
    /// The pattern text of a rule could not be compiled into a regular expression.
    /// The second member is the offending pattern text.
    #[error("'{1}' {0}")]
    RegexError(regex::Error, String),

    /// The character can't be used as gap placeholder because it is likely to occur in ordinary
    /// input.
    #[error("Invalid placeholder character: {0:?}")]
    InvalidPlaceholder(char),
}

impl From<(regex::Error, &str)> for TapspanError {
    fn from((error, pattern): (regex::Error, &str)) -> Self {
        TapspanError::new(TapspanErrorKind::RegexError(error, pattern.to_string()))
    }
}
