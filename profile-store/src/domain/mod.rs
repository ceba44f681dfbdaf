//! Domain primitives, ports and services.
//!
//! Purpose: define the profile model, the change sets applied to it, the
//! store error type, and the [`ProfileStore`] service that maps remote
//! outcomes into [`StoreResult`]. Nothing here depends on `inbound` or
//! `outbound`.
//!
//! Public surface:
//! - `UserProfile` / `UserId`: the profile record and its key.
//! - `ProfileChanges` / `FieldValue` / `ProfileField`: partial updates.
//! - `StoreError` / `StoreErrorCode` / `StoreResult`: operation outcomes.
//! - `ProfileStore`: the service implementing the driving ports.

pub mod error;
pub mod ports;
pub mod profile_changes;
pub mod profile_store;
pub mod user_profile;

pub use self::error::{PROFILE_NOT_FOUND, StoreError, StoreErrorCode, StoreResult};
pub use self::profile_changes::{FieldValue, ProfileChanges, ProfileField};
pub use self::profile_store::{
    FETCH_FALLBACK_MESSAGE, ProfileStore, SAVE_FALLBACK_MESSAGE, UPDATE_FALLBACK_MESSAGE,
};
pub use self::user_profile::{UserId, UserProfile, UserProfileBuilder};
