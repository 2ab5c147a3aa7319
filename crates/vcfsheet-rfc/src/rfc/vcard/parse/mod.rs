//! VCF parsing.
//!
//! ## Features
//!
//! - Encoding fallback (UTF-8, UTF-8 with BOM, Latin-1, Windows-1252)
//! - Multiple vCards per document, surrounded by arbitrary text
//! - Line unfolding per block
//! - Malformed lines and empty blocks are skipped, not fatal

mod decode;
mod error;
mod lexer;
mod parser;
mod split;
mod values;

pub use decode::{Candidate, Decoded, decode};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, is_delimiter, normalize_line_endings, parse_content_line, unfold};
pub use parser::{BlockReport, LineOutcome, parse_block, parse_document, parse_line, parse_text};
pub use split::split_vcards;
pub use values::{DatePattern, normalize_date, split_structured};
