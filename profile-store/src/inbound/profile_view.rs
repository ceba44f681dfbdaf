//! View model behind the profile tab.
//!
//! The view talks to the store only through the driving ports and decides
//! what the user sees for each outcome. The loading state lives here; the
//! store's result type has only success and error.

use std::sync::Arc;

use crate::domain::ports::{ProfileCommand, ProfileQuery};
use crate::domain::{ProfileChanges, ProfileField, StoreResult, UserId, UserProfile};

/// What the profile tab currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileViewState {
    /// A request is in flight.
    Loading,
    /// The profile was loaded.
    Loaded(UserProfile),
    /// The last request failed with this message.
    Failed(String),
}

/// Profile tab for one signed-in user.
pub struct ProfileView<Q: ?Sized, C: ?Sized> {
    uid: UserId,
    query: Arc<Q>,
    command: Arc<C>,
    state: ProfileViewState,
}

impl<Q, C> ProfileView<Q, C>
where
    Q: ProfileQuery + ?Sized,
    C: ProfileCommand + ?Sized,
{
    /// Create the view in the loading state.
    pub fn new(uid: UserId, query: Arc<Q>, command: Arc<C>) -> Self {
        Self {
            uid,
            query,
            command,
            state: ProfileViewState::Loading,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &ProfileViewState {
        &self.state
    }

    /// Fetch the profile and show the outcome.
    pub async fn load(&mut self) -> &ProfileViewState {
        self.state = ProfileViewState::Loading;
        self.state = match self.query.fetch(&self.uid).await {
            Ok(profile) => ProfileViewState::Loaded(profile),
            Err(err) => ProfileViewState::Failed(err.to_string()),
        };
        &self.state
    }

    /// Flip the seller flag, then reload.
    pub async fn set_seller(&mut self, is_seller: bool) -> &ProfileViewState {
        let changes = ProfileChanges::single(ProfileField::IsSeller.key(), is_seller);
        let outcome = self.command.update(&self.uid, changes).await;
        self.after_write(outcome).await
    }

    /// Replace the profile picture, then reload.
    pub async fn change_picture(&mut self, url: &str) -> &ProfileViewState {
        let outcome = self
            .command
            .update_profile_picture_url(&self.uid, url)
            .await;
        self.after_write(outcome).await
    }

    async fn after_write(&mut self, outcome: StoreResult<()>) -> &ProfileViewState {
        match outcome {
            Ok(()) => self.load().await,
            Err(err) => {
                self.state = ProfileViewState::Failed(err.to_string());
                &self.state
            }
        }
    }

    /// Plain-text rendering of the current state.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use profile_store::domain::ports::{FixtureProfileCommand, FixtureProfileQuery};
    /// use profile_store::inbound::profile_view::ProfileView;
    ///
    /// let view = ProfileView::new(
    ///     "u1".into(),
    ///     Arc::new(FixtureProfileQuery),
    ///     Arc::new(FixtureProfileCommand),
    /// );
    /// assert_eq!(view.render(), "Loading profile...");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        match &self.state {
            ProfileViewState::Loading => "Loading profile...".to_owned(),
            ProfileViewState::Failed(message) => format!("Could not load profile: {message}"),
            ProfileViewState::Loaded(profile) => render_profile(profile),
        }
    }
}

fn render_profile(profile: &UserProfile) -> String {
    const UNSET: &str = "-";
    format!(
        "Name:    {name}\nPhone:   {phone}\nPicture: {picture}\nSeller:  {seller}",
        name = profile.name().unwrap_or(UNSET),
        phone = profile.phone().unwrap_or(UNSET),
        picture = profile.profile_picture_url().unwrap_or(UNSET),
        seller = if profile.is_seller() { "yes" } else { "no" },
    )
}
