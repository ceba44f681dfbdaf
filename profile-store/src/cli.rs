//! Command-line front end over the profile store.
//!
//! Each invocation runs one subcommand against a [`ProfileStore`] and returns
//! the text to print. Loading and persisting the snapshot is left to the
//! binary; [`Command::mutates`] tells it when a write-back is needed.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::domain::ports::RemoteProfileSource;
use crate::domain::{FieldValue, ProfileChanges, ProfileStore, StoreError, UserId, UserProfile};
use crate::inbound::profile_view::ProfileView;
use crate::inbound::tab_shell::{Tab, TabShell};

/// Text shown when the home tab is visible.
pub const HOME_VIEW: &str = "Home";

/// `profile-cli` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "profile-cli",
    about = "Save, fetch and update user profiles in a local document store",
    version
)]
pub struct Cli {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create or replace a profile.
    Save {
        /// Owner id.
        #[arg(long, value_name = "id")]
        uid: String,
        /// Display name.
        #[arg(long)]
        name: Option<String>,
        /// Phone number.
        #[arg(long)]
        phone: Option<String>,
        /// Profile picture location.
        #[arg(long = "picture-url", value_name = "url")]
        picture_url: Option<String>,
        /// Mark the user as a seller.
        #[arg(long)]
        seller: bool,
    },
    /// Print a profile as JSON.
    Fetch {
        /// Owner id.
        uid: String,
    },
    /// Merge `key=value` pairs into a stored profile.
    Update {
        /// Owner id.
        uid: String,
        /// Changes to apply; `true` and `false` are stored as booleans.
        #[arg(value_name = "key=value", required = true, value_parser = parse_assignment)]
        changes: Vec<(String, FieldValue)>,
    },
    /// Replace the profile picture location.
    SetPicture {
        /// Owner id.
        uid: String,
        /// New picture location.
        url: String,
    },
    /// Select a navigation item and print the visible view.
    Tab {
        /// Navigation item id, such as `nav_home` or `nav_profile`.
        item_id: String,
        /// Signed-in user shown by the profile tab.
        #[arg(long, value_name = "id")]
        uid: Option<String>,
    },
}

impl Command {
    /// Whether the command may change stored documents.
    #[must_use]
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Save { .. } | Self::Update { .. } | Self::SetPicture { .. }
        )
    }
}

/// Errors reported by [`run`].
#[derive(Debug, Error)]
pub enum CliError {
    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The navigation item is not bound to a tab.
    #[error("unknown navigation item `{0}`")]
    UnknownNavigationItem(String),
    /// The profile tab was selected without a signed-in user.
    #[error("the profile tab needs --uid")]
    MissingUid,
    /// A fetched profile could not be printed.
    #[error("failed to render profile: {0}")]
    Render(#[from] serde_json::Error),
}

/// Parse one `key=value` argument.
///
/// # Examples
/// ```
/// use profile_store::cli::parse_assignment;
/// use profile_store::domain::FieldValue;
///
/// assert_eq!(
///     parse_assignment("isSeller=true"),
///     Ok(("isSeller".to_owned(), FieldValue::Flag(true)))
/// );
/// ```
pub fn parse_assignment(raw: &str) -> Result<(String, FieldValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }
    let value = match value {
        "true" => FieldValue::Flag(true),
        "false" => FieldValue::Flag(false),
        text => FieldValue::Text(text.to_owned()),
    };
    Ok((key.to_owned(), value))
}

/// Run `command` against `store` and return the text to print.
///
/// # Errors
///
/// Returns [`CliError::Store`] when the store reports a failure and the
/// other variants for invalid navigation or output encoding.
pub async fn run<S>(command: Command, store: &ProfileStore<S>) -> Result<String, CliError>
where
    S: RemoteProfileSource + 'static,
{
    match command {
        Command::Save {
            uid,
            name,
            phone,
            picture_url,
            seller,
        } => {
            let mut builder = UserProfile::builder(uid.as_str()).seller(seller);
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(phone) = phone {
                builder = builder.phone(phone);
            }
            if let Some(url) = picture_url {
                builder = builder.profile_picture_url(url);
            }
            store.save(builder.build()).await?;
            Ok(format!("saved {uid}"))
        }
        Command::Fetch { uid } => {
            let profile = store.fetch(&UserId::new(uid)).await?;
            Ok(serde_json::to_string_pretty(&profile)?)
        }
        Command::Update { uid, changes } => {
            let uid = UserId::new(uid);
            store
                .update(&uid, changes.into_iter().collect::<ProfileChanges>())
                .await?;
            Ok(format!("updated {uid}"))
        }
        Command::SetPicture { uid, url } => {
            let uid = UserId::new(uid);
            store.update_profile_picture_url(&uid, &url).await?;
            Ok(format!("updated {uid}"))
        }
        Command::Tab { item_id, uid } => show_tab(&item_id, uid, store).await,
    }
}

async fn show_tab<S>(
    item_id: &str,
    uid: Option<String>,
    store: &ProfileStore<S>,
) -> Result<String, CliError>
where
    S: RemoteProfileSource + 'static,
{
    let mut shell = TabShell::default();
    if !shell.select(item_id) {
        return Err(CliError::UnknownNavigationItem(item_id.to_owned()));
    }
    match shell.visible() {
        Tab::Home => Ok(HOME_VIEW.to_owned()),
        Tab::Profile => {
            let uid = uid.ok_or(CliError::MissingUid)?;
            let shared = Arc::new(store.clone());
            let mut view = ProfileView::new(UserId::new(uid), Arc::clone(&shared), shared);
            view.load().await;
            Ok(view.render())
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
