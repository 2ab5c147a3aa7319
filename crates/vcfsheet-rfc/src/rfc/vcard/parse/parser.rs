//! vCard document parser.
//!
//! Decode → normalize line endings → split into blocks → per block: unfold,
//! parse each content line, map it onto fields → aggregate the field set.

use super::decode::decode;
use super::error::ParseError;
use super::lexer::{is_delimiter, normalize_line_endings, parse_content_line, unfold};
use super::split::split_vcards;
use crate::error::RfcResult;
use crate::rfc::vcard::core::{ContactRecord, FieldSet, ParsedDocument, SkipDiagnostic};
use crate::rfc::vcard::map::{MappedField, map_property};

/// What happened to one logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line produced fields.
    Fields(Vec<MappedField>),
    /// Blank line, delimiter, or property with an empty value.
    Ignored,
    /// The line was malformed and skipped.
    Skipped(ParseError),
}

/// Interprets one logical line (1-based `line_num` within its block).
#[must_use]
pub fn parse_line(line: &str, line_num: usize) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() || is_delimiter(line) {
        return LineOutcome::Ignored;
    }

    match parse_content_line(line, line_num) {
        Ok(Some(content)) => match map_property(&content, line_num) {
            Ok(fields) => LineOutcome::Fields(fields),
            Err(e) => LineOutcome::Skipped(e),
        },
        Ok(None) => LineOutcome::Ignored,
        Err(e) => LineOutcome::Skipped(e),
    }
}

/// Outcome of parsing one vCard block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockReport {
    /// The contact, or `None` if the block produced no fields.
    pub record: Option<ContactRecord>,
    /// Lines skipped inside the block, plus an `EmptyCard` entry when
    /// `record` is `None`.
    pub skipped: Vec<ParseError>,
}

/// Parses a single `BEGIN:VCARD ... END:VCARD` block.
///
/// Folded lines are joined within the block only. When two lines map to the
/// same field name, the later value replaces the earlier one.
#[must_use]
pub fn parse_block(block: &str) -> BlockReport {
    let lines = unfold(block);
    let mut record = ContactRecord::new();
    let mut skipped = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        match parse_line(line, idx + 1) {
            LineOutcome::Fields(fields) => {
                for field in fields {
                    record.insert(field.name, field.value);
                }
            }
            LineOutcome::Ignored => {}
            LineOutcome::Skipped(e) => {
                tracing::debug!(error = %e, "Skipping vCard line");
                skipped.push(e);
            }
        }
    }

    if record.is_empty() {
        skipped.push(ParseError::empty_card(lines.len()));
        return BlockReport {
            record: None,
            skipped,
        };
    }

    BlockReport {
        record: Some(record),
        skipped,
    }
}

/// Parses already-decoded VCF text.
#[must_use]
pub fn parse_text(text: &str) -> ParsedDocument {
    let normalized = normalize_line_endings(text);
    let blocks = split_vcards(&normalized);

    tracing::info!(count = blocks.len(), "Found vCards in input");

    let mut contacts = Vec::with_capacity(blocks.len());
    let mut fields = FieldSet::new();
    let mut diagnostics = Vec::new();

    for (idx, block) in blocks.iter().enumerate() {
        let block_num = idx + 1;
        let report = parse_block(block);

        diagnostics.extend(report.skipped.into_iter().map(|error| SkipDiagnostic {
            block: block_num,
            error,
        }));

        match report.record {
            Some(record) => {
                for name in record.field_names() {
                    fields.insert(name);
                }
                tracing::debug!(
                    block = block_num,
                    name = record.full_name().unwrap_or("Unknown"),
                    "Parsed contact"
                );
                contacts.push(record);
            }
            None => tracing::warn!(block = block_num, "vCard produced no fields; dropping"),
        }
    }

    tracing::info!(
        contacts = contacts.len(),
        fields = fields.len(),
        skipped = diagnostics.len(),
        "Parsed VCF document"
    );

    let groups = fields.groups();

    ParsedDocument {
        contacts,
        fields,
        groups,
        diagnostics,
        block_count: blocks.len(),
        encoding: "",
    }
}

/// Parses a raw VCF document.
///
/// ## Errors
/// Returns an error only if the bytes cannot be decoded. Documents without
/// vCards or without usable contacts come back empty; see
/// [`ParsedDocument::require_contacts`].
#[tracing::instrument(skip_all, fields(bytes = input.len()))]
pub fn parse_document(input: &[u8]) -> RfcResult<ParsedDocument> {
    let decoded = decode(input)?;

    Ok(ParsedDocument {
        encoding: decoded.encoding.label(),
        ..parse_text(&decoded.text)
    })
}
