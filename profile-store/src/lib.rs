//! User profile persistence for the marketplace client.
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] holds the profile model, the [`domain::ProfileStore`] service
//!   and the ports it drives or is driven through.
//! - [`inbound`] holds the tab shell and the profile view that consume the
//!   store's result type.
//! - [`outbound`] holds the in-memory document source standing in for the
//!   remote backend.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use profile_store::domain::{ProfileStore, UserProfile};
//! use profile_store::outbound::memory::InMemoryProfileSource;
//!
//! # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
//! let store = ProfileStore::new(Arc::new(InMemoryProfileSource::new()));
//! let profile = UserProfile::builder("u1").name("Alex").build();
//!
//! store.save(profile.clone()).await.expect("save succeeds");
//! assert_eq!(store.fetch(&"u1".into()).await, Ok(profile));
//! # });
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
