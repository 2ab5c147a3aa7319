//! Byte-to-text decoding with an ordered list of candidate encodings.

use std::borrow::Cow;

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::error::{RfcError, RfcResult};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Text encodings tried by [`decode`], in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// Strict UTF-8.
    Utf8,
    /// UTF-8 preceded by a byte-order mark.
    Utf8Sig,
    /// ISO-8859-1 as a byte-to-code-point mapping.
    Latin1,
    /// Windows-1252.
    Cp1252,
    /// ISO-8859-1; same mapping as [`Candidate::Latin1`].
    Iso8859_1,
}

impl Candidate {
    pub const ORDERED: [Self; 5] = [
        Self::Utf8,
        Self::Utf8Sig,
        Self::Latin1,
        Self::Cp1252,
        Self::Iso8859_1,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Sig => "utf-8-sig",
            Self::Latin1 => "latin1",
            Self::Cp1252 => "cp1252",
            Self::Iso8859_1 => "iso-8859-1",
        }
    }

    /// Decodes `bytes`, returning `None` if they are not valid in this encoding.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => strict_utf8(bytes).map(|text| {
                let text: &str = &text;
                text.strip_prefix('\u{feff}').unwrap_or(text).to_string()
            }),
            Self::Utf8Sig => strict_utf8(bytes.strip_prefix(UTF8_BOM)?).map(Cow::into_owned),
            Self::Latin1 | Self::Iso8859_1 => Some(bytes.iter().copied().map(char::from).collect()),
            Self::Cp1252 => WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned),
        }
    }
}

fn strict_utf8(bytes: &[u8]) -> Option<Cow<'_, str>> {
    UTF_8.decode_without_bom_handling_and_without_replacement(bytes)
}

/// Decoded document text and the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: Candidate,
}

/// Decodes raw bytes with the first candidate encoding that accepts them.
///
/// A leading UTF-8 byte-order mark is never part of the returned text.
///
/// ## Errors
/// Returns [`RfcError::Decode`] if every candidate rejects the input. The
/// single-byte candidates accept any input, so this only happens if the
/// candidate list is changed.
pub fn decode(bytes: &[u8]) -> RfcResult<Decoded> {
    for candidate in Candidate::ORDERED {
        if let Some(text) = candidate.decode(bytes) {
            tracing::info!(encoding = candidate.label(), "Decoded VCF input");
            return Ok(Decoded {
                text,
                encoding: candidate,
            });
        }
        tracing::debug!(encoding = candidate.label(), "Encoding rejected input");
    }

    Err(RfcError::Decode {
        attempted: Candidate::ORDERED
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", "),
    })
}
