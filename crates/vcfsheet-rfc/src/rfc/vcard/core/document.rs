//! The parsed document aggregate.

use serde::Serialize;

use super::field::{FieldGroups, FieldSet};
use super::record::ContactRecord;
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::parse::ParseError;

/// A line or block that was skipped while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkipDiagnostic {
    /// 1-based index of the vCard block in the document.
    pub block: usize,
    #[serde(flatten)]
    pub error: ParseError,
}

impl std::fmt::Display for SkipDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vCard {}: {}", self.block, self.error)
    }
}

/// Result of parsing one VCF document.
///
/// Built once per input and not mutated afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedDocument {
    /// Contacts in document order; blocks without usable fields are absent.
    pub contacts: Vec<ContactRecord>,
    /// Every field name used by any contact.
    pub fields: FieldSet,
    /// `fields` bucketed for presentation.
    pub groups: FieldGroups,
    /// Lines and blocks skipped on the way.
    pub diagnostics: Vec<SkipDiagnostic>,
    /// Number of `BEGIN:VCARD ... END:VCARD` blocks found.
    pub block_count: usize,
    /// Label of the encoding that decoded the input.
    pub encoding: &'static str,
}

impl ParsedDocument {
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Turns an empty result into an error, keeping "no vCards at all" apart
    /// from "vCards present but none usable".
    ///
    /// ## Errors
    /// Returns [`RfcError::NoVCardsFound`] when the splitter matched nothing and
    /// [`RfcError::NoContacts`] when every block was dropped.
    pub fn require_contacts(self) -> RfcResult<Self> {
        if self.block_count == 0 {
            return Err(RfcError::NoVCardsFound);
        }
        if self.contacts.is_empty() {
            return Err(RfcError::NoContacts {
                blocks: self.block_count,
            });
        }
        Ok(self)
    }
}
