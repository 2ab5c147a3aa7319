//! Field mapping: one content line to one or more named contact fields.
//!
//! Structured properties expand positionally (`N` into five name parts,
//! `ADR` into seven address parts, `ORG` into organization and department).
//! `TEL`, `EMAIL` and `ADR` take a type suffix from their bare parameters.

mod naming;
mod types;

pub use naming::{dynamic_field_name, title_case};
pub use types::{ADDRESS_TYPES, EMAIL_TYPES, PHONE_TYPES, TypeTable, with_type};

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::rfc::vcard::core::PropertyKind;
use crate::rfc::vcard::parse::{ContentLine, ParseError, ParseResult, normalize_date, split_structured};

/// `N` components, in value order.
pub const NAME_COMPONENTS: [&str; 5] = [
    "Last Name",
    "First Name",
    "Middle Name",
    "Name Prefix",
    "Name Suffix",
];

/// `ADR` components, in value order.
pub const ADDRESS_COMPONENTS: [&str; 7] = [
    "PO Box",
    "Extended Address",
    "Street Address",
    "City",
    "State/Province",
    "Postal Code",
    "Country",
];

/// A single named value produced by the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedField {
    pub name: String,
    pub value: String,
}

impl MappedField {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Maps a parsed content line onto contact fields.
///
/// ## Errors
/// Returns an error if an extension or unknown property yields an empty field name.
pub fn map_property(line: &ContentLine, line_num: usize) -> ParseResult<Vec<MappedField>> {
    let kind = PropertyKind::from_name(&line.name);
    let value = line.value.as_str();

    let fields = match &kind {
        PropertyKind::Name => map_positional(&NAME_COMPONENTS, value, None),
        PropertyKind::Address => map_positional(
            &ADDRESS_COMPONENTS,
            value,
            ADDRESS_TYPES.detect(&line.params),
        ),
        PropertyKind::Organization => map_organization(value),
        PropertyKind::Telephone => vec![MappedField::new(
            PHONE_TYPES.field_name(&line.params),
            sanitize_phone(value),
        )],
        PropertyKind::Email => vec![MappedField::new(
            EMAIL_TYPES.field_name(&line.params),
            value.to_lowercase(),
        )],
        PropertyKind::Birthday => vec![MappedField::new("Birthday", normalize_date(value))],
        PropertyKind::FormattedName
        | PropertyKind::Title
        | PropertyKind::Note
        | PropertyKind::Url
        | PropertyKind::Nickname
        | PropertyKind::Categories => kind
            .simple_field()
            .map(|field| vec![MappedField::new(field, value)])
            .unwrap_or_default(),
        PropertyKind::Extension(name) | PropertyKind::Other(name) => {
            let field = dynamic_field_name(name);
            if field.trim().is_empty() {
                return Err(ParseError::invalid_property_name(line_num, &line.name));
            }
            vec![MappedField::new(field, value)]
        }
    };

    Ok(fields)
}

/// Expands a `;`-separated value onto positional labels, skipping empty parts.
fn map_positional(labels: &[&str], value: &str, type_label: Option<&str>) -> Vec<MappedField> {
    labels
        .iter()
        .zip(split_structured(value))
        .filter(|(_, part)| !part.is_empty())
        .map(|(label, part)| MappedField::new(with_type(label, type_label), part))
        .collect()
}

/// `ORG`: the first component is always the organization; a non-empty second
/// component is the department. Further units are ignored.
fn map_organization(value: &str) -> Vec<MappedField> {
    let parts = split_structured(value);
    let mut fields = vec![MappedField::new(
        "Organization",
        parts.first().copied().unwrap_or_default(),
    )];

    if let Some(department) = parts.get(1).filter(|d| !d.is_empty()) {
        fields.push(MappedField::new("Department", *department));
    }

    fields
}

/// Keeps decimal digits of any script, `+`, `-`, `(`, `)` and whitespace.
#[must_use]
pub fn sanitize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|&c| is_decimal_digit(c) || matches!(c, '+' | '-' | '(' | ')') || c.is_whitespace())
        .collect()
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber
}
