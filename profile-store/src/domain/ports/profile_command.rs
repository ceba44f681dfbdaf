//! Driving port for profile writes.

use async_trait::async_trait;

use crate::domain::{ProfileChanges, StoreResult, UserId, UserProfile};

/// Use-case port for creating and changing profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileCommand: Send + Sync {
    /// Persist a whole profile record.
    async fn save(&self, profile: UserProfile) -> StoreResult<()>;

    /// Apply a partial update to the record for `uid`.
    async fn update(&self, uid: &UserId, changes: ProfileChanges) -> StoreResult<()>;

    /// Replace the profile picture URL of the record for `uid`.
    async fn update_profile_picture_url(&self, uid: &UserId, url: &str) -> StoreResult<()>;
}

/// Fixture command that accepts every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileCommand;

#[async_trait]
impl ProfileCommand for FixtureProfileCommand {
    async fn save(&self, _profile: UserProfile) -> StoreResult<()> {
        Ok(())
    }

    async fn update(&self, _uid: &UserId, _changes: ProfileChanges) -> StoreResult<()> {
        Ok(())
    }

    async fn update_profile_picture_url(&self, _uid: &UserId, _url: &str) -> StoreResult<()> {
        Ok(())
    }
}
