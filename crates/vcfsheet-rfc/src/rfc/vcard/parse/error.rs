//! vCard parse error types.

use std::fmt;

use serde::Serialize;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing one line or one block.
///
/// These are recoverable: the offending unit is skipped and the error is kept
/// as a diagnostic on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Logical line number within the vCard block (1-based, 0 for block-level errors).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates a missing separator error for a line with no `:`.
    #[must_use]
    pub fn missing_separator(line: usize, content: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingSeparator,
            line,
            format!("missing colon separator in {content:?}"),
        )
    }

    /// Creates an invalid property name error.
    #[must_use]
    pub fn invalid_property_name(line: usize, name: &str) -> Self {
        Self::new(
            ParseErrorKind::InvalidPropertyName,
            line,
            format!("invalid property name: {name:?}"),
        )
    }

    /// Creates an error for a block that yielded no fields.
    #[must_use]
    pub fn empty_card(lines: usize) -> Self {
        Self::new(
            ParseErrorKind::EmptyCard,
            0,
            format!("no usable properties in {lines} line(s)"),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// Content line has no `:` between name and value.
    MissingSeparator,
    /// Property name is empty.
    InvalidPropertyName,
    /// A vCard block produced no fields at all.
    EmptyCard,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "missing separator"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
            Self::EmptyCard => write!(f, "empty card"),
        }
    }
}
