//! Discovered field schema: the field set and its presentation groups.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Presentation bucket for a field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldGroup {
    #[serde(rename = "Name Fields")]
    Name,
    #[serde(rename = "Contact Fields")]
    Contact,
    #[serde(rename = "Address Fields")]
    Address,
    #[serde(rename = "Work Fields")]
    Work,
    #[serde(rename = "Personal Fields")]
    Personal,
    #[serde(rename = "Other Fields")]
    Other,
}

impl FieldGroup {
    /// All groups in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Contact,
        Self::Address,
        Self::Work,
        Self::Personal,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name Fields",
            Self::Contact => "Contact Fields",
            Self::Address => "Address Fields",
            Self::Work => "Work Fields",
            Self::Personal => "Personal Fields",
            Self::Other => "Other Fields",
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword table used for classification, in priority order.
///
/// Keywords are lowercase and matched as substrings of the lowercased field
/// name. Fields matching no row fall into [`FieldGroup::Other`].
pub const GROUP_KEYWORDS: &[(FieldGroup, &[&str])] = &[
    (FieldGroup::Name, &["name", "nickname"]),
    (FieldGroup::Contact, &["phone", "email", "website"]),
    (
        FieldGroup::Address,
        &["address", "street", "city", "state", "postal", "country"],
    ),
    (
        FieldGroup::Work,
        &["organization", "title", "job", "department", "work"],
    ),
    (
        FieldGroup::Personal,
        &["birthday", "anniversary", "note", "categories"],
    ),
];

/// Classifies a single field name. The first matching table row wins.
#[must_use]
pub fn classify(field: &str) -> FieldGroup {
    let lowered = field.to_lowercase();
    GROUP_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(*kw)))
        .map_or(FieldGroup::Other, |(group, _)| *group)
}

/// Group name to member fields, in [`FieldGroup::ALL`] order, empty groups omitted.
pub type FieldGroups = IndexMap<FieldGroup, Vec<String>>;

/// The set of every field name observed in one document, kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
    names: BTreeSet<String>,
}

impl FieldSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field name; returns `true` if it was not seen before.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Unions another set into this one.
    pub fn merge(&mut self, other: Self) {
        self.names.extend(other.names);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Field names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Field names in lexicographic order, as an owned list.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    /// Buckets every field into exactly one group.
    #[must_use]
    pub fn groups(&self) -> FieldGroups {
        let mut buckets: IndexMap<FieldGroup, Vec<String>> = FieldGroup::ALL
            .iter()
            .map(|group| (*group, Vec::new()))
            .collect();

        for name in &self.names {
            if let Some(bucket) = buckets.get_mut(&classify(name)) {
                bucket.push(name.clone());
            }
        }

        buckets.retain(|_, members| !members.is_empty());
        buckets
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
