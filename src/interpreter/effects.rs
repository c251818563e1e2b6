//! Replies and the side effects they ask the caller to perform

use serde::Serialize;

/// Why a URL is being opened; selects the failure text the caller speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenPurpose {
    Help,
    Site,
    Search,
}

/// Outcome reported by the host after trying to open a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenOutcome {
    /// The URL was handed to the host
    #[default]
    Opened,
    /// The host refused to open a new context (e.g. popup blocker)
    Blocked,
    /// Opening failed outright
    Failed,
}

/// Side effect the caller should perform; the interpreter never performs these
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SideEffect {
    /// Open a URL in a new context
    OpenUrl { url: String, purpose: OpenPurpose },
    /// Fetch fresh weather for a location and cache it
    RefreshWeather { location: String },
    /// Fetch a joke and speak it when it arrives
    FetchJoke,
}

/// Response text plus requested side effects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Text to display and speak
    pub text: String,
    /// Side effects, in the order they should run
    pub effects: Vec<SideEffect>,
}

impl Reply {
    /// A reply with no side effects
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            effects: Vec::new(),
        }
    }

    /// Append a side effect
    #[must_use]
    pub fn with_effect(mut self, effect: SideEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Whether any side effect was requested
    #[must_use]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}
