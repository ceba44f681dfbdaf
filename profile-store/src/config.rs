//! Front end settings loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_SNAPSHOT_FILE: &str = "profiles.json";

/// Settings for the `profile-cli` front end.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PROFILE")]
pub struct ProfileSettings {
    /// File holding the in-memory store between runs.
    pub snapshot_path: Option<PathBuf>,
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl ProfileSettings {
    /// Return the configured snapshot path, falling back to
    /// `profiles.json` in the working directory.
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_FILE))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for front end configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ProfileSettings {
        ProfileSettings::load_from_iter([OsString::from("profile-cli")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("PROFILE_SNAPSHOT_PATH", None::<String>),
            ("PROFILE_JSON_LOGS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.json_logs);
        assert_eq!(settings.snapshot_path(), PathBuf::from("profiles.json"));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "PROFILE_SNAPSHOT_PATH",
                Some("/tmp/profile-store/snapshot.json".to_owned()),
            ),
            ("PROFILE_JSON_LOGS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.json_logs);
        assert_eq!(
            settings.snapshot_path(),
            PathBuf::from("/tmp/profile-store/snapshot.json")
        );
    }
}
