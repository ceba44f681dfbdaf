//! Main screen navigation between the home and profile tabs.
//!
//! Exactly one tab is visible at a time. Selecting a known navigation item
//! always replaces the visible view, even when that tab is already showing,
//! so the profile tab reloads every time it is picked.

use std::fmt;

/// Navigation item id of the home tab.
pub const NAV_HOME: &str = "nav_home";
/// Navigation item id of the profile tab.
pub const NAV_PROFILE: &str = "nav_profile";

/// Views the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Landing view.
    Home,
    /// The signed-in user's profile.
    Profile,
}

impl Tab {
    /// Navigation item id bound to this tab.
    #[must_use]
    pub const fn item_id(self) -> &'static str {
        match self {
            Self::Home => NAV_HOME,
            Self::Profile => NAV_PROFILE,
        }
    }

    /// Tab bound to `item_id`, if any.
    #[must_use]
    pub fn from_item_id(item_id: &str) -> Option<Self> {
        match item_id {
            NAV_HOME => Some(Self::Home),
            NAV_PROFILE => Some(Self::Profile),
            _ => None,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::Profile => f.write_str("profile"),
        }
    }
}

/// Navigation state of the main screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabShell {
    visible: Tab,
    loads: u32,
}

impl TabShell {
    /// Build the shell, restoring `saved` when the screen is recreated.
    ///
    /// A fresh screen (no saved state) loads the home view.
    ///
    /// # Examples
    /// ```
    /// use profile_store::inbound::tab_shell::{Tab, TabShell};
    ///
    /// assert_eq!(TabShell::restore(None).visible(), Tab::Home);
    /// assert_eq!(TabShell::restore(Some(Tab::Profile)).visible(), Tab::Profile);
    /// ```
    #[must_use]
    pub const fn restore(saved: Option<Tab>) -> Self {
        match saved {
            Some(tab) => Self {
                visible: tab,
                loads: 0,
            },
            None => Self {
                visible: Tab::Home,
                loads: 1,
            },
        }
    }

    /// Handle a navigation item selection.
    ///
    /// Returns `true` and replaces the visible view when `item_id` is known;
    /// returns `false` and leaves the view untouched otherwise.
    pub fn select(&mut self, item_id: &str) -> bool {
        let Some(tab) = Tab::from_item_id(item_id) else {
            return false;
        };
        self.visible = tab;
        self.loads = self.loads.saturating_add(1);
        true
    }

    /// Currently visible tab.
    #[must_use]
    pub const fn visible(&self) -> Tab {
        self.visible
    }

    /// Number of view replacements performed by this shell instance.
    #[must_use]
    pub const fn loads(&self) -> u32 {
        self.loads
    }
}

impl Default for TabShell {
    fn default() -> Self {
        Self::restore(None)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fresh_shell_loads_home_once() {
        let shell = TabShell::restore(None);

        assert_eq!(shell.visible(), Tab::Home);
        assert_eq!(shell.loads(), 1);
    }

    #[rstest]
    fn restored_shell_keeps_its_view_without_reloading() {
        let shell = TabShell::restore(Some(Tab::Profile));

        assert_eq!(shell.visible(), Tab::Profile);
        assert_eq!(shell.loads(), 0);
    }

    #[rstest]
    #[case(NAV_HOME, Tab::Home)]
    #[case(NAV_PROFILE, Tab::Profile)]
    fn known_items_switch_the_view(#[case] item_id: &str, #[case] expected: Tab) {
        let mut shell = TabShell::default();

        assert!(shell.select(item_id));
        assert_eq!(shell.visible(), expected);
        assert_eq!(shell.loads(), 2);
    }

    #[rstest]
    #[case("nav_orders")]
    #[case("")]
    #[case("NAV_PROFILE")]
    fn unknown_items_are_not_handled(#[case] item_id: &str) {
        let mut shell = TabShell::restore(Some(Tab::Profile));

        assert!(!shell.select(item_id));
        assert_eq!(shell.visible(), Tab::Profile);
        assert_eq!(shell.loads(), 0);
    }

    #[rstest]
    fn reselecting_the_visible_tab_reloads_it() {
        let mut shell = TabShell::default();
        shell.select(NAV_PROFILE);
        shell.select(NAV_PROFILE);

        assert_eq!(shell.visible(), Tab::Profile);
        assert_eq!(shell.loads(), 3);
    }

    #[rstest]
    fn item_ids_round_trip() {
        for tab in [Tab::Home, Tab::Profile] {
            assert_eq!(Tab::from_item_id(tab.item_id()), Some(tab));
        }
    }
}
