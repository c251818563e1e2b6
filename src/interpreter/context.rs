//! Ambient context supplied by the caller on every call

use chrono::NaiveDateTime;

use super::effects::OpenOutcome;
use crate::profile::UserProfile;
use crate::weather::WeatherSnapshot;

/// Read-only view of the caller's state
///
/// The interpreter never fetches or stores anything itself; the caller owns the
/// profile and weather cache and passes the current clock in.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Saved user profile, if setup has run
    pub profile: Option<&'a UserProfile>,
    /// Cached weather snapshot, if one has been fetched
    pub weather: Option<&'a WeatherSnapshot>,
    /// Local wall-clock time
    pub now: NaiveDateTime,
    /// Outcome the host reports for opening the help document
    pub help_open: OpenOutcome,
}

impl<'a> Context<'a> {
    /// Context with no profile and no weather
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self {
            profile: None,
            weather: None,
            now,
            help_open: OpenOutcome::Opened,
        }
    }

    /// Attach a profile
    #[must_use]
    pub const fn with_profile(mut self, profile: Option<&'a UserProfile>) -> Self {
        self.profile = profile;
        self
    }

    /// Attach a weather snapshot
    #[must_use]
    pub const fn with_weather(mut self, weather: Option<&'a WeatherSnapshot>) -> Self {
        self.weather = weather;
        self
    }

    /// Set the reported help-document outcome
    #[must_use]
    pub const fn with_help_open(mut self, outcome: OpenOutcome) -> Self {
        self.help_open = outcome;
        self
    }

    /// Name from the profile, if any
    #[must_use]
    pub fn user_name(&self) -> Option<&'a str> {
        self.profile.map(|p| p.name.as_str())
    }
}
