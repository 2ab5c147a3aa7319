//! vCard lexer for line-ending normalization, unfolding and content line parsing.
//!
//! Folding follows RFC 2425 §5.8.1: a physical line that starts with a single
//! space or tab continues the previous logical line.

use super::error::{ParseError, ParseResult};

/// Normalizes CRLF and bare CR line endings to LF.
#[must_use]
pub fn normalize_line_endings(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            result.push('\n');
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits input into logical lines, merging folded continuations.
///
/// A continuation line loses exactly one leading space or tab and is appended
/// to the previous logical line with no separator. A continuation with no
/// previous line starts a new logical line as-is.
#[must_use]
pub fn unfold(input: &str) -> Vec<String> {
    let normalized = normalize_line_endings(input);
    let mut lines: Vec<String> = Vec::new();

    for line in normalized.lines() {
        match (line.strip_prefix([' ', '\t']), lines.last_mut()) {
            (Some(continuation), Some(prev)) => prev.push_str(continuation),
            _ => lines.push(line.to_string()),
        }
    }

    lines
}

/// A parsed content line before field mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (uppercase).
    pub name: String,
    /// Bare parameter tokens (uppercase), in order of appearance.
    ///
    /// `TYPE=CELL` is kept verbatim as one token; only bare tokens such as
    /// `CELL` take part in type detection.
    pub params: Vec<String>,
    /// Trimmed raw value string.
    pub value: String,
}

impl ContentLine {
    /// Returns whether the given bare token appears among the parameters.
    #[must_use]
    pub fn has_param(&self, token: &str) -> bool {
        self.params.iter().any(|p| p == token)
    }
}

/// Parses a single content line into its components.
///
/// Format: `name[;param]*:value`. The value is everything after the first
/// colon, trimmed. Returns `Ok(None)` for lines whose value is empty.
///
/// ## Errors
/// Returns an error if the line has no colon separator or an empty property name.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<Option<ContentLine>> {
    let (property_part, value) = line
        .split_once(':')
        .ok_or_else(|| ParseError::missing_separator(line_num, line))?;

    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let mut segments = property_part.split(';');
    let name = segments.next().unwrap_or_default().to_uppercase();

    if name.is_empty() {
        return Err(ParseError::invalid_property_name(line_num, &name));
    }

    let params = segments.map(str::to_uppercase).collect();

    Ok(Some(ContentLine {
        name,
        params,
        value: value.to_string(),
    }))
}

/// Returns whether a trimmed logical line is a `BEGIN:VCARD` / `END:VCARD` delimiter.
#[must_use]
pub fn is_delimiter(line: &str) -> bool {
    line.eq_ignore_ascii_case("BEGIN:VCARD") || line.eq_ignore_ascii_case("END:VCARD")
}
