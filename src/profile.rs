//! User profile and its persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::{DbPool, KvRepo};
use crate::{Error, Result};

/// Storage key for the profile record
pub const PROFILE_KEY: &str = "sofia_user_data";

/// Message shown when required setup fields are missing
pub const MISSING_FIELDS: &str = "Please fill in your name and location.";

/// Personal details captured by setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    /// When setup was completed (ISO-8601)
    pub setup_date: DateTime<Utc>,
}

impl UserProfile {
    /// Build a profile from raw setup input
    ///
    /// # Errors
    ///
    /// Returns [`Error::Profile`] if name or location is blank
    pub fn new(
        name: &str,
        location: &str,
        github: &str,
        linkedin: &str,
        setup_date: DateTime<Utc>,
    ) -> Result<Self> {
        let name = name.trim();
        let location = location.trim();

        if name.is_empty() || location.is_empty() {
            return Err(Error::Profile(MISSING_FIELDS.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            location: location.to_string(),
            github: github.trim().to_string(),
            linkedin: linkedin.trim().to_string(),
            setup_date,
        })
    }

    /// Greeting spoken right after setup
    #[must_use]
    pub fn setup_message(&self) -> String {
        format!(
            "Welcome {}! Your profile has been set up successfully.",
            self.name
        )
    }
}

/// Profile persistence over the key-value store
#[derive(Clone)]
pub struct ProfileRepo {
    kv: KvRepo,
}

impl ProfileRepo {
    /// Create a new profile repository
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self {
            kv: KvRepo::new(pool),
        }
    }

    /// Load the saved profile, if any
    ///
    /// A record that no longer parses is treated as absent so setup can run again.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read
    pub fn load(&self) -> Result<Option<UserProfile>> {
        let Some(raw) = self.kv.get(PROFILE_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                tracing::warn!(error = %e, "stored profile is unreadable, ignoring");
                Ok(None)
            }
        }
    }

    /// Save the profile, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.kv.set(PROFILE_KEY, &raw)?;
        tracing::info!(name = %profile.name, "profile saved");
        Ok(())
    }

    /// Remove the saved profile
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be written
    pub fn clear(&self) -> Result<bool> {
        let removed = self.kv.remove(PROFILE_KEY)?;
        tracing::info!(removed, "profile cleared");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory;
    use chrono::TimeZone;

    fn setup_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_new_trims_fields() {
        let profile = UserProfile::new("  Ada ", " London", "ada", "", setup_date()).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.location, "London");
        assert_eq!(profile.github, "ada");
    }

    #[test]
    fn test_new_requires_name_and_location() {
        let err = UserProfile::new("Ada", "   ", "", "", setup_date()).unwrap_err();
        assert!(matches!(err, Error::Profile(ref m) if m == MISSING_FIELDS));

        assert!(UserProfile::new("", "London", "", "", setup_date()).is_err());
    }

    #[test]
    fn test_json_field_names() {
        let profile = UserProfile::new("Ada", "London", "", "", setup_date()).unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["name"], "Ada");
        assert_eq!(json["setupDate"], "2026-10-19T09:30:00Z");
        assert!(json.get("setup_date").is_none());
    }

    #[test]
    fn test_repo_save_load_clear() {
        let repo = ProfileRepo::new(init_memory().unwrap());
        assert!(repo.load().unwrap().is_none());

        let profile = UserProfile::new("Ada", "London", "", "", setup_date()).unwrap();
        repo.save(&profile).unwrap();
        assert_eq!(repo.load().unwrap(), Some(profile));

        assert!(repo.clear().unwrap());
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_record_is_absent() {
        let pool = init_memory().unwrap();
        KvRepo::new(pool.clone()).set(PROFILE_KEY, "{not json").unwrap();

        let repo = ProfileRepo::new(pool);
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_setup_message() {
        let profile = UserProfile::new("Ada", "London", "", "", setup_date()).unwrap();
        assert_eq!(
            profile.setup_message(),
            "Welcome Ada! Your profile has been set up successfully."
        );
    }
}
