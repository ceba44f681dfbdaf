//! User profile data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable user identifier assigned by the authentication backend.
///
/// The identifier is opaque to this crate: it is never parsed or validated,
/// so empty or malformed values are forwarded to the remote source, which
/// decides how to fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// One user's profile record.
///
/// ## Invariants
/// - `uid` is fixed at construction; there is no setter.
/// - Optional fields that are `None` mean "not set", not an error.
/// - `is_seller` defaults to `false` when absent from a stored document.
///
/// Documents use camelCase keys (`uid`, `name`, `phone`,
/// `profilePictureUrl`, `isSeller`). Unknown keys are ignored when reading,
/// because partial updates may store keys outside this schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    uid: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_picture_url: Option<String>,
    #[serde(default)]
    is_seller: bool,
}

impl UserProfile {
    /// Create a profile with every optional field unset.
    #[must_use]
    pub fn new(uid: impl Into<UserId>) -> Self {
        Self {
            uid: uid.into(),
            name: None,
            phone: None,
            profile_picture_url: None,
            is_seller: false,
        }
    }

    /// Start building a profile for `uid`.
    ///
    /// # Examples
    /// ```
    /// use profile_store::domain::UserProfile;
    ///
    /// let profile = UserProfile::builder("u1").name("Alex").seller(true).build();
    /// assert_eq!(profile.name(), Some("Alex"));
    /// assert!(profile.is_seller());
    /// ```
    #[must_use]
    pub fn builder(uid: impl Into<UserId>) -> UserProfileBuilder {
        UserProfileBuilder {
            profile: Self::new(uid),
        }
    }

    /// Identifier addressing this record.
    #[must_use]
    pub const fn uid(&self) -> &UserId {
        &self.uid
    }

    /// Display name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Phone number, if set.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Profile picture URL, if set.
    #[must_use]
    pub fn profile_picture_url(&self) -> Option<&str> {
        self.profile_picture_url.as_deref()
    }

    /// Whether the user sells on the marketplace.
    #[must_use]
    pub const fn is_seller(&self) -> bool {
        self.is_seller
    }
}

/// Fluent builder for [`UserProfile`].
#[derive(Debug, Clone)]
pub struct UserProfileBuilder {
    profile: UserProfile,
}

impl UserProfileBuilder {
    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.profile.name = Some(name.into());
        self
    }

    /// Set the phone number.
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.profile.phone = Some(phone.into());
        self
    }

    /// Set the profile picture URL.
    #[must_use]
    pub fn profile_picture_url(mut self, url: impl Into<String>) -> Self {
        self.profile.profile_picture_url = Some(url.into());
        self
    }

    /// Set the seller flag.
    #[must_use]
    pub fn seller(mut self, is_seller: bool) -> Self {
        self.profile.is_seller = is_seller;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> UserProfile {
        self.profile
    }
}

#[cfg(test)]
#[path = "user_profile_tests.rs"]
mod tests;
