//! Profile store service.
//!
//! [`ProfileStore`] wraps a [`RemoteProfileSource`] and turns every outcome
//! into a [`StoreResult`]. Each operation runs as one background task on the
//! tokio runtime and is awaited by the caller. Nothing is retried, cached, or
//! shared between calls; a panic inside the source is caught at the task
//! boundary and reported like any other source failure.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinError;
use tracing::{debug, error, warn};

use crate::domain::ports::{
    ProfileCommand, ProfileQuery, RemoteProfileSource, RemoteProfileSourceError,
};
use crate::domain::{ProfileChanges, ProfileField, StoreError, StoreResult, UserId, UserProfile};

/// Message used when saving fails without a description.
pub const SAVE_FALLBACK_MESSAGE: &str = "Failed to save profile";
/// Message used when fetching fails without a description.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch profile";
/// Message used when updating fails without a description.
pub const UPDATE_FALLBACK_MESSAGE: &str = "Failed to update profile";

/// Why a dispatched source call produced no value.
#[derive(Debug)]
enum DispatchFailure {
    Source(RemoteProfileSourceError),
    Aborted(JoinError),
}

impl DispatchFailure {
    fn description(&self) -> Option<&str> {
        match self {
            Self::Source(err) => err.description(),
            Self::Aborted(_) => None,
        }
    }

    fn into_store_error(self, fallback: &str) -> StoreError {
        let message = self.description().unwrap_or(fallback).to_owned();
        StoreError::collaborator_failure(message)
    }
}

impl std::fmt::Display for DispatchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
            Self::Aborted(err) => write!(f, "source task aborted: {err}"),
        }
    }
}

/// Run one source call on a background task and wait for it.
async fn dispatch<T, F>(work: F) -> Result<T, DispatchFailure>
where
    F: Future<Output = Result<T, RemoteProfileSourceError>> + Send + 'static,
    T: Send + 'static,
{
    match tokio::spawn(work).await {
        Ok(result) => result.map_err(DispatchFailure::Source),
        Err(join_error) => Err(DispatchFailure::Aborted(join_error)),
    }
}

/// Exception-free facade over a remote profile source.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use profile_store::domain::ports::FixtureRemoteProfileSource;
/// use profile_store::domain::{ProfileStore, UserId};
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let store = ProfileStore::new(Arc::new(FixtureRemoteProfileSource));
/// let err = store.fetch(&UserId::new("u1")).await.expect_err("no record");
/// assert_eq!(err.message(), "Profile not found");
/// # });
/// ```
pub struct ProfileStore<S> {
    source: Arc<S>,
}

impl<S> Clone for ProfileStore<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> ProfileStore<S> {
    /// Create a store backed by `source`.
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// The source this store forwards to.
    #[must_use]
    pub const fn source(&self) -> &Arc<S> {
        &self.source
    }
}

impl<S> ProfileStore<S>
where
    S: RemoteProfileSource + 'static,
{
    /// Persist a whole profile record.
    ///
    /// Failures carry the source's description, or
    /// [`SAVE_FALLBACK_MESSAGE`] when it gave none.
    pub async fn save(&self, profile: UserProfile) -> StoreResult<()> {
        let uid = profile.uid().clone();
        debug!(%uid, ?profile, "saving user profile");

        let source = Arc::clone(&self.source);
        let outcome = dispatch(async move { source.save_user_profile(&profile).await }).await;

        outcome.map_err(|failure| {
            error!(%uid, error = %failure, "saving user profile failed");
            failure.into_store_error(SAVE_FALLBACK_MESSAGE)
        })
    }

    /// Fetch the record for `uid`.
    ///
    /// An absent record yields [`StoreError::not_found`]; source failures
    /// carry the source's description or [`FETCH_FALLBACK_MESSAGE`].
    pub async fn fetch(&self, uid: &UserId) -> StoreResult<UserProfile> {
        debug!(%uid, "fetching user profile");

        let source = Arc::clone(&self.source);
        let requested = uid.clone();
        let outcome = dispatch(async move { source.get_user_profile(&requested).await }).await;

        match outcome {
            Ok(Some(profile)) => {
                debug!(%uid, is_seller = profile.is_seller(), "user profile fetched");
                Ok(profile)
            }
            Ok(None) => {
                error!(%uid, "user profile not found");
                Err(StoreError::not_found())
            }
            Err(failure) => {
                error!(%uid, error = %failure, "fetching user profile failed");
                Err(failure.into_store_error(FETCH_FALLBACK_MESSAGE))
            }
        }
    }

    /// Forward `changes` to the record for `uid` as given.
    ///
    /// Keys outside the profile schema are logged and forwarded anyway.
    /// Failures carry the source's description or
    /// [`UPDATE_FALLBACK_MESSAGE`].
    pub async fn update(&self, uid: &UserId, changes: ProfileChanges) -> StoreResult<()> {
        debug!(%uid, ?changes, "updating user profile");
        let unknown_keys = changes.unknown_keys();
        if !unknown_keys.is_empty() {
            warn!(%uid, ?unknown_keys, "update carries keys outside the profile schema");
        }

        let source = Arc::clone(&self.source);
        let target = uid.clone();
        let outcome =
            dispatch(async move { source.update_user_profile(&target, &changes).await }).await;

        outcome.map_err(|failure| {
            error!(%uid, error = %failure, "updating user profile failed");
            failure.into_store_error(UPDATE_FALLBACK_MESSAGE)
        })
    }

    /// Replace the profile picture URL; same as an [`update`](Self::update)
    /// carrying only `profilePictureUrl`.
    pub async fn update_profile_picture_url(&self, uid: &UserId, url: &str) -> StoreResult<()> {
        let changes = ProfileChanges::single(ProfileField::ProfilePictureUrl.key(), url);
        self.update(uid, changes).await
    }
}

#[async_trait]
impl<S> ProfileQuery for ProfileStore<S>
where
    S: RemoteProfileSource + 'static,
{
    async fn fetch(&self, uid: &UserId) -> StoreResult<UserProfile> {
        Self::fetch(self, uid).await
    }
}

#[async_trait]
impl<S> ProfileCommand for ProfileStore<S>
where
    S: RemoteProfileSource + 'static,
{
    async fn save(&self, profile: UserProfile) -> StoreResult<()> {
        Self::save(self, profile).await
    }

    async fn update(&self, uid: &UserId, changes: ProfileChanges) -> StoreResult<()> {
        Self::update(self, uid, changes).await
    }

    async fn update_profile_picture_url(&self, uid: &UserId, url: &str) -> StoreResult<()> {
        Self::update_profile_picture_url(self, uid, url).await
    }
}

#[cfg(test)]
#[path = "profile_store_tests.rs"]
mod tests;
