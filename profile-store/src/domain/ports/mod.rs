//! Domain ports for the hexagonal boundary.
//!
//! Driven port: [`RemoteProfileSource`], implemented by outbound adapters.
//! Driving ports: [`ProfileQuery`] and [`ProfileCommand`], implemented by
//! [`crate::domain::ProfileStore`] and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod profile_command;
mod profile_query;
mod remote_profile_source;

#[cfg(test)]
pub use profile_command::MockProfileCommand;
pub use profile_command::{FixtureProfileCommand, ProfileCommand};
#[cfg(test)]
pub use profile_query::MockProfileQuery;
pub use profile_query::{FixtureProfileQuery, ProfileQuery};
#[cfg(test)]
pub use remote_profile_source::MockRemoteProfileSource;
pub use remote_profile_source::{
    FixtureRemoteProfileSource, RemoteProfileSource, RemoteProfileSourceError,
};
