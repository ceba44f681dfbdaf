//! Inbound adapters driving the domain.
//!
//! The main screen is a [`tab_shell::TabShell`] switching between home and
//! profile; the profile tab is a [`profile_view::ProfileView`] calling the
//! store through the driving ports.

pub mod profile_view;
pub mod tab_shell;
