//! In-memory document store standing in for the remote profile backend.
//!
//! Profiles live as JSON documents keyed by uid, the way the hosted
//! document database keeps them under `users/<uid>`:
//!
//! - `save` replaces the whole document.
//! - `get` returns `None` for a missing document.
//! - `update` merges keys into an existing document and fails when there is
//!   none. Keys outside the profile schema are stored and ignored on read.
//!
//! [`snapshot`] persists the documents to a JSON file so the command-line
//! front end keeps state between runs.

pub mod snapshot;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::domain::ports::{RemoteProfileSource, RemoteProfileSourceError};
use crate::domain::{ProfileChanges, ProfileField, UserId, UserProfile};

/// Collection holding profile documents.
pub const USERS_COLLECTION: &str = "users";

/// A stored profile document.
pub type Document = Map<String, Value>;

/// Documents keyed by uid.
pub type Documents = BTreeMap<String, Document>;

fn document_path(uid: &UserId) -> String {
    format!("{USERS_COLLECTION}/{uid}")
}

/// Profile source keeping documents in process memory.
///
/// Each call takes the document lock once, so single calls are atomic and
/// concurrent updates to one document are last-write-wins per key.
#[derive(Debug, Default)]
pub struct InMemoryProfileSource {
    documents: RwLock<Documents>,
    injected_failure: Mutex<Option<RemoteProfileSourceError>>,
}

impl InMemoryProfileSource {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with `documents`.
    #[must_use]
    pub fn from_documents(documents: Documents) -> Self {
        Self {
            documents: RwLock::new(documents),
            injected_failure: Mutex::new(None),
        }
    }

    /// Copy of every stored document.
    pub async fn documents(&self) -> Documents {
        self.documents.read().await.clone()
    }

    /// Raw document stored for `uid`, including keys outside the schema.
    pub async fn document(&self, uid: &UserId) -> Option<Document> {
        self.documents.read().await.get(uid.as_str()).cloned()
    }

    /// Make the next call fail with `error` instead of touching documents.
    pub async fn fail_next_with(&self, error: RemoteProfileSourceError) {
        *self.injected_failure.lock().await = Some(error);
    }

    async fn take_injected_failure(&self) -> Result<(), RemoteProfileSourceError> {
        match self.injected_failure.lock().await.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn encode_profile(profile: &UserProfile) -> Result<Document, RemoteProfileSourceError> {
    match serde_json::to_value(profile) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => Err(RemoteProfileSourceError::service(format!(
            "profile encoded to a non-object document: {other}"
        ))),
        Err(err) => Err(RemoteProfileSourceError::service(format!(
            "failed to encode profile: {err}"
        ))),
    }
}

fn decode_profile(uid: &UserId, document: Document) -> Result<UserProfile, RemoteProfileSourceError> {
    serde_json::from_value(Value::Object(document)).map_err(|err| {
        RemoteProfileSourceError::service(format!(
            "stored document {} is not a profile: {err}",
            document_path(uid)
        ))
    })
}

fn check_uid_unchanged(
    uid: &UserId,
    changes: &ProfileChanges,
) -> Result<(), RemoteProfileSourceError> {
    let Some(value) = changes.get(ProfileField::Uid.key()) else {
        return Ok(());
    };
    if value.to_string() == uid.as_str() {
        return Ok(());
    }
    Err(RemoteProfileSourceError::service(format!(
        "uid of {} cannot be changed",
        document_path(uid)
    )))
}

#[async_trait]
impl RemoteProfileSource for InMemoryProfileSource {
    async fn save_user_profile(
        &self,
        profile: &UserProfile,
    ) -> Result<(), RemoteProfileSourceError> {
        self.take_injected_failure().await?;
        let document = encode_profile(profile)?;
        let mut documents = self.documents.write().await;
        documents.insert(profile.uid().as_str().to_owned(), document);
        debug!(path = %document_path(profile.uid()), "document written");
        Ok(())
    }

    async fn get_user_profile(
        &self,
        uid: &UserId,
    ) -> Result<Option<UserProfile>, RemoteProfileSourceError> {
        self.take_injected_failure().await?;
        let document = self.documents.read().await.get(uid.as_str()).cloned();
        document
            .map(|document| decode_profile(uid, document))
            .transpose()
    }

    async fn update_user_profile(
        &self,
        uid: &UserId,
        changes: &ProfileChanges,
    ) -> Result<(), RemoteProfileSourceError> {
        self.take_injected_failure().await?;
        check_uid_unchanged(uid, changes)?;
        let encoded = changes
            .iter()
            .map(|(key, value)| {
                serde_json::to_value(value)
                    .map(|encoded| (key.clone(), encoded))
                    .map_err(|err| {
                        RemoteProfileSourceError::service(format!("failed to encode `{key}`: {err}"))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut documents = self.documents.write().await;
        let Some(document) = documents.get_mut(uid.as_str()) else {
            return Err(RemoteProfileSourceError::service(format!(
                "No document to update: {}",
                document_path(uid)
            )));
        };
        let keys = encoded.len();
        document.extend(encoded);
        debug!(path = %document_path(uid), keys, "document merged");
        Ok(())
    }
}
