//! Driven port for the remote profile backend.
//!
//! The [`RemoteProfileSource`] trait is the only way the domain reaches the
//! backend that actually stores profile documents. Adapters own transport,
//! authentication and document layout; the domain only sees records, the
//! absent signal, and [`RemoteProfileSourceError`].

use async_trait::async_trait;

use crate::domain::{ProfileChanges, UserId, UserProfile};

use super::define_port_error;

define_port_error! {
    /// Errors raised by remote profile source adapters.
    pub enum RemoteProfileSourceError {
        /// The request never reached the backend or its response was lost.
        Transport { message: String } => "{message}",
        /// The backend received the request and refused or failed it.
        Service { message: String } => "{message}",
        /// The backend failed without describing the problem.
        Unspecified => "remote profile source failed without a description",
    }
}

impl RemoteProfileSourceError {
    /// The adapter's own description of the failure, if it gave one.
    ///
    /// Any message the adapter supplied is a description, even an empty
    /// one; only [`RemoteProfileSourceError::Unspecified`] has none.
    ///
    /// # Examples
    /// ```
    /// use profile_store::domain::ports::RemoteProfileSourceError;
    ///
    /// assert_eq!(
    ///     RemoteProfileSourceError::transport("network down").description(),
    ///     Some("network down"),
    /// );
    /// assert_eq!(RemoteProfileSourceError::service("").description(), Some(""));
    /// assert_eq!(RemoteProfileSourceError::unspecified().description(), None);
    /// ```
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Transport { message } | Self::Service { message } => Some(message.as_str()),
            Self::Unspecified => None,
        }
    }
}

/// Port for the remote document store holding user profiles.
///
/// Every call is a single request/response round trip. Implementations must
/// report a missing record from [`RemoteProfileSource::get_user_profile`] as
/// `Ok(None)`, never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteProfileSource: Send + Sync {
    /// Store `profile` under its identifier, replacing any earlier record.
    async fn save_user_profile(&self, profile: &UserProfile)
    -> Result<(), RemoteProfileSourceError>;

    /// Fetch the record for `uid`, or `None` when there is none.
    async fn get_user_profile(
        &self,
        uid: &UserId,
    ) -> Result<Option<UserProfile>, RemoteProfileSourceError>;

    /// Apply `changes` to the record for `uid`.
    ///
    /// Keys are forwarded exactly as given; whether several keys are applied
    /// atomically is up to the implementation.
    async fn update_user_profile(
        &self,
        uid: &UserId,
        changes: &ProfileChanges,
    ) -> Result<(), RemoteProfileSourceError>;
}

/// Fixture implementation for tests that do not exercise persistence.
///
/// Lookups always return `None` and writes are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRemoteProfileSource;

#[async_trait]
impl RemoteProfileSource for FixtureRemoteProfileSource {
    async fn save_user_profile(
        &self,
        _profile: &UserProfile,
    ) -> Result<(), RemoteProfileSourceError> {
        Ok(())
    }

    async fn get_user_profile(
        &self,
        _uid: &UserId,
    ) -> Result<Option<UserProfile>, RemoteProfileSourceError> {
        Ok(None)
    }

    async fn update_user_profile(
        &self,
        _uid: &UserId,
        _changes: &ProfileChanges,
    ) -> Result<(), RemoteProfileSourceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn fixture_source_lookup_returns_none() {
        let source = FixtureRemoteProfileSource;

        let result = source
            .get_user_profile(&UserId::new("u1"))
            .await
            .expect("fixture lookup should succeed");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn fixture_source_accepts_writes() {
        let source = FixtureRemoteProfileSource;
        let profile = UserProfile::builder("u1").name("Alex").build();

        source
            .save_user_profile(&profile)
            .await
            .expect("fixture save should succeed");
        source
            .update_user_profile(profile.uid(), &ProfileChanges::single("isSeller", true))
            .await
            .expect("fixture update should succeed");
    }

    #[rstest]
    #[case::transport(RemoteProfileSourceError::transport("network down"), "network down")]
    #[case::service(RemoteProfileSourceError::service("permission denied"), "permission denied")]
    #[case::empty(RemoteProfileSourceError::service(""), "")]
    #[case::whitespace(RemoteProfileSourceError::transport("  "), "  ")]
    fn messages_display_verbatim(#[case] error: RemoteProfileSourceError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
        assert_eq!(error.description(), Some(expected));
    }
}
