use thiserror::Error;

/// Document-level errors raised by the vCard pipeline.
///
/// Line- and block-level problems never surface here; they are collected as
/// diagnostics on the parsed document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RfcError {
    #[error("Could not decode the VCF file with any supported encoding (tried {attempted})")]
    Decode { attempted: String },

    #[error("No vCards found in input")]
    NoVCardsFound,

    #[error("No valid contacts found in {blocks} vCard block(s)")]
    NoContacts { blocks: usize },
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
