//! Driving port for profile reads.
//!
//! Inbound adapters load profiles through this port without knowing which
//! source backs the store. The fixture keeps view tests independent of any
//! persistence.

use async_trait::async_trait;

use crate::domain::{StoreResult, UserId, UserProfile};

/// Use-case port for reading a profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Return the profile stored for `uid`.
    async fn fetch(&self, uid: &UserId) -> StoreResult<UserProfile>;
}

/// Fixture query that answers every identifier with the same named profile.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileQuery;

#[async_trait]
impl ProfileQuery for FixtureProfileQuery {
    async fn fetch(&self, uid: &UserId) -> StoreResult<UserProfile> {
        Ok(UserProfile::builder(uid.clone()).name("Alex").build())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_query_echoes_the_requested_identifier() {
        let uid = UserId::new("u9");

        let profile = FixtureProfileQuery.fetch(&uid).await.expect("profile");

        assert_eq!(profile.uid(), &uid);
        assert_eq!(profile.name(), Some("Alex"));
        assert!(!profile.is_seller());
    }
}
