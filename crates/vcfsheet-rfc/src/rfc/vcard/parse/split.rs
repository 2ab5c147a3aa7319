//! Splitting a VCF document into individual `BEGIN:VCARD ... END:VCARD` blocks.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Case-insensitive, non-greedy block pattern; `.` also matches newlines.
const VCARD_BLOCK_PATTERN: &str = r"(?is)BEGIN:VCARD.*?END:VCARD";

#[expect(
    clippy::expect_used,
    reason = "The block pattern is a constant that is covered by unit tests"
)]
fn block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(VCARD_BLOCK_PATTERN).expect("valid vCard block pattern"))
}

/// Extracts every vCard block from `input`, in document order.
///
/// Text outside the delimiters is ignored. An input without any complete
/// block yields an empty vector.
#[must_use]
pub fn split_vcards(input: &str) -> Vec<&str> {
    block_pattern()
        .find_iter(input)
        .map(|m| m.as_str())
        .collect()
}
