//! Outbound adapters implementing the driven ports.
//!
//! The hosted document backend is an external collaborator; this crate
//! ships only [`memory::InMemoryProfileSource`], a faithful in-process
//! stand-in with file snapshots.

pub mod memory;
