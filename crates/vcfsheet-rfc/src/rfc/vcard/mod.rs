//! vCard to flat contact records.
//!
//! A VCF document is decoded, split into `BEGIN:VCARD ... END:VCARD` blocks
//! and every content line is mapped onto human-readable field names such as
//! `Full Name`, `Phone (Mobile)` or `City (Home)`. Records are schema-less:
//! each one only carries the fields its vCard actually had.
//!
//! ## Usage
//!
//! ```rust
//! use vcfsheet_rfc::rfc::vcard::parse_document;
//!
//! let input = b"\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! TEL;CELL:555-1234\r\n\
//! END:VCARD\r\n";
//!
//! let doc = parse_document(input).unwrap();
//! assert_eq!(doc.contacts[0].get("Full Name"), Some("John Doe"));
//! assert_eq!(doc.contacts[0].get("Phone (Mobile)"), Some("555-1234"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Records, field sets and the parsed document
//! - [`parse`] - Decoding, splitting, unfolding and line parsing
//! - [`map`] - Property to field name mapping

pub mod core;
pub mod map;
pub mod parse;


pub use core::{ContactRecord, FieldGroup, FieldGroups, FieldSet, ParsedDocument, SkipDiagnostic};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse_document, parse_text};
