//! Core vCard contact types.

mod document;
mod field;
mod property;
mod record;

pub use document::{ParsedDocument, SkipDiagnostic};
pub use field::{FieldGroup, FieldGroups, FieldSet, GROUP_KEYWORDS, classify};
pub use property::{PropertyKind, names};
pub use record::ContactRecord;
