//! vCard parsing core for vcfsheet.
//!
//! Turns a VCF document (one or many concatenated vCards, in any of the
//! common encodings) into schema-less contact records plus the discovered
//! set of field names.

pub mod error;
pub mod rfc;
