//! Parameter-driven type disambiguation for TEL, EMAIL and ADR.

/// Ordered mapping from bare parameter tokens to display labels.
///
/// Detection walks the table in order and returns the first entry whose token
/// is present among the parameters, so the table order decides ties, not the
/// order parameters appear on the line.
#[derive(Debug, Clone, Copy)]
pub struct TypeTable {
    /// Base field name used when no entry matches.
    pub base: &'static str,
    /// `(TOKEN, Label)` pairs in priority order.
    pub entries: &'static [(&'static str, &'static str)],
}

pub const PHONE_TYPES: TypeTable = TypeTable {
    base: "Phone",
    entries: &[
        ("HOME", "Home"),
        ("WORK", "Work"),
        ("CELL", "Mobile"),
        ("MOBILE", "Mobile"),
        ("FAX", "Fax"),
        ("PAGER", "Pager"),
        ("VOICE", "Voice"),
        ("MAIN", "Main"),
    ],
};

pub const EMAIL_TYPES: TypeTable = TypeTable {
    base: "Email",
    entries: &[("HOME", "Home"), ("WORK", "Work"), ("INTERNET", "Internet")],
};

pub const ADDRESS_TYPES: TypeTable = TypeTable {
    base: "Address",
    entries: &[("HOME", "Home"), ("WORK", "Work")],
};

impl TypeTable {
    /// Returns the label of the highest-priority entry present in `params`.
    #[must_use]
    pub fn detect(&self, params: &[String]) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(token, _)| params.iter().any(|p| p == token))
            .map(|(_, label)| *label)
    }

    /// Field name for single-valued typed properties, e.g. `Phone (Mobile)`.
    #[must_use]
    pub fn field_name(&self, params: &[String]) -> String {
        with_type(self.base, self.detect(params))
    }
}

/// Appends ` (Label)` to `name` when a type was detected.
#[must_use]
pub fn with_type(name: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{name} ({label})"),
        None => name.to_string(),
    }
}
