//! Partial updates addressed to a stored profile.
//!
//! A [`ProfileChanges`] set maps document keys to new values. Keys are not
//! checked against the [`crate::domain::UserProfile`] schema: unrecognised
//! keys travel to the remote source unchanged. [`ProfileChanges::unknown_keys`]
//! reports them for diagnostics only.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Document keys of the profile schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// `uid`
    Uid,
    /// `name`
    Name,
    /// `phone`
    Phone,
    /// `profilePictureUrl`
    ProfilePictureUrl,
    /// `isSeller`
    IsSeller,
}

impl ProfileField {
    /// Every field in document order.
    pub const ALL: [Self; 5] = [
        Self::Uid,
        Self::Name,
        Self::Phone,
        Self::ProfilePictureUrl,
        Self::IsSeller,
    ];

    /// Document key for this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Uid => "uid",
            Self::Name => "name",
            Self::Phone => "phone",
            Self::ProfilePictureUrl => "profilePictureUrl",
            Self::IsSeller => "isSeller",
        }
    }

    /// Look a field up by its document key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// New value for one document key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean value, such as `isSeller`.
    Flag(bool),
    /// String value, such as `name` or `profilePictureUrl`.
    Text(String),
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Set of field changes with unique keys.
///
/// # Examples
/// ```
/// use profile_store::domain::{FieldValue, ProfileChanges, ProfileField};
///
/// let changes = ProfileChanges::new()
///     .with(ProfileField::IsSeller.key(), true)
///     .with("nickname", "Lex");
///
/// assert_eq!(changes.get("isSeller"), Some(&FieldValue::Flag(true)));
/// assert_eq!(changes.unknown_keys(), vec!["nickname"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileChanges(BTreeMap<String, FieldValue>);

impl ProfileChanges {
    /// Create an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a change set holding one entry.
    #[must_use]
    pub fn single(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new().with(key, value)
    }

    /// Add an entry, replacing any earlier value for the same key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Value recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.0.iter()
    }

    /// Keys that are not part of the profile schema, in key order.
    #[must_use]
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| ProfileField::from_key(key).is_none())
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for ProfileChanges
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for ProfileChanges {
    type Item = (String, FieldValue);
    type IntoIter = btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProfileChanges {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
