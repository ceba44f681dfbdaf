//! Errors returned by the profile store.
//!
//! Every store operation resolves to a [`StoreResult`]: either the value, or a
//! [`StoreError`] whose `Display` output is exactly the human-readable
//! message. The message texts match what callers have always compared
//! against; the [`StoreErrorCode`] lets them branch without string equality.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when `fetch` finds no record for an identifier.
pub const PROFILE_NOT_FOUND: &str = "Profile not found";

/// Result type returned by every store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreErrorCode {
    /// The identifier has no stored record. Only `fetch` reports this.
    NotFound,
    /// The remote source failed while serving the request.
    CollaboratorFailure,
}

/// Failure returned by a store operation.
///
/// # Examples
/// ```
/// use profile_store::domain::{StoreError, StoreErrorCode};
///
/// let err = StoreError::not_found();
/// assert_eq!(err.code(), StoreErrorCode::NotFound);
/// assert_eq!(err.to_string(), "Profile not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
}

impl StoreError {
    /// No record exists for the requested identifier.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            code: StoreErrorCode::NotFound,
            message: PROFILE_NOT_FOUND.to_owned(),
        }
    }

    /// The remote source failed with `message`.
    #[must_use]
    pub fn collaborator_failure(message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::CollaboratorFailure,
            message: message.into(),
        }
    }

    /// Failure category.
    #[must_use]
    pub const fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Whether this error reports a missing record.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.code, StoreErrorCode::NotFound)
    }
}
