//! Property kinds recognized by the field mapper.

/// Common property names as constants.
pub mod names {
    pub const N: &str = "N";
    pub const FN: &str = "FN";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const ADR: &str = "ADR";
    pub const ORG: &str = "ORG";
    pub const TITLE: &str = "TITLE";
    pub const BDAY: &str = "BDAY";
    pub const NOTE: &str = "NOTE";
    pub const URL: &str = "URL";
    pub const NICKNAME: &str = "NICKNAME";
    pub const CATEGORIES: &str = "CATEGORIES";

    /// Prefix of vendor extension properties.
    pub const EXTENSION_PREFIX: &str = "X-";
}

/// A property name classified for field mapping.
///
/// Every known property gets its own variant; anything else falls into
/// [`PropertyKind::Extension`] (for `X-` names) or [`PropertyKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    /// `N`: structured name.
    Name,
    /// `FN`: formatted name.
    FormattedName,
    /// `TEL`
    Telephone,
    /// `EMAIL`
    Email,
    /// `ADR`: structured address.
    Address,
    /// `ORG`: organization and optional unit.
    Organization,
    /// `TITLE`
    Title,
    /// `BDAY`
    Birthday,
    /// `NOTE`
    Note,
    /// `URL`
    Url,
    /// `NICKNAME`
    Nickname,
    /// `CATEGORIES`
    Categories,
    /// `X-` vendor property; holds the name with the prefix removed.
    Extension(String),
    /// Any other property; holds the full uppercase name.
    Other(String),
}

impl PropertyKind {
    /// Classifies an uppercase property name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            names::N => Self::Name,
            names::FN => Self::FormattedName,
            names::TEL => Self::Telephone,
            names::EMAIL => Self::Email,
            names::ADR => Self::Address,
            names::ORG => Self::Organization,
            names::TITLE => Self::Title,
            names::BDAY => Self::Birthday,
            names::NOTE => Self::Note,
            names::URL => Self::Url,
            names::NICKNAME => Self::Nickname,
            names::CATEGORIES => Self::Categories,
            _ => name.strip_prefix(names::EXTENSION_PREFIX).map_or_else(
                || Self::Other(name.to_string()),
                |rest| Self::Extension(rest.to_string()),
            ),
        }
    }

    /// Field name for properties that map 1:1 onto a single field.
    ///
    /// Returns `None` for structured, typed and dynamically named kinds.
    #[must_use]
    pub const fn simple_field(&self) -> Option<&'static str> {
        match self {
            Self::FormattedName => Some("Full Name"),
            Self::Title => Some("Job Title"),
            Self::Birthday => Some("Birthday"),
            Self::Note => Some("Notes"),
            Self::Url => Some("Website"),
            Self::Nickname => Some("Nickname"),
            Self::Categories => Some("Categories"),
            Self::Name
            | Self::Telephone
            | Self::Email
            | Self::Address
            | Self::Organization
            | Self::Extension(_)
            | Self::Other(_) => None,
        }
    }
}
