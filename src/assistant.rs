//! Assistant runtime
//!
//! Owns everything the interpreter deliberately does not: the saved profile, the
//! weather cache, the recognition session and the collaborators that perform
//! side effects. Each transcript runs through the pure interpreter, the reply is
//! spoken, then the requested side effects are executed in order.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::interpreter::{
    Context, Intent, Interpreter, OpenOutcome, OpenPurpose, Reply, SideEffect,
};
use crate::joke::{JOKE_FOLLOW_UP, JOKE_UNAVAILABLE, JokeProvider};
use crate::opener::UrlOpener;
use crate::profile::{ProfileRepo, UserProfile};
use crate::session::RecognitionSession;
use crate::speech::SpeechSink;
use crate::weather::{WeatherProvider, WeatherSnapshot, fetch_or_placeholder};
use crate::Result;

/// Spoken when a transcript cannot be processed at all
pub const PROCESSING_ERROR: &str = "Sorry, there was an error processing your command.";

/// Spoken when a site or search URL fails to open
pub const OPEN_FAILED: &str = "Failed to open website. Please check your browser settings.";

/// Spoken after the profile is cleared
pub const DATA_CLEARED: &str = "All data cleared successfully!";

/// Collaborators that perform side effects
#[derive(Clone)]
pub struct Collaborators {
    pub weather: Arc<dyn WeatherProvider>,
    pub jokes: Arc<dyn JokeProvider>,
    pub opener: Arc<dyn UrlOpener>,
    pub speech: Arc<dyn SpeechSink>,
}

/// Result of handling one transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Intent the transcript was classified as
    pub intent: Intent,
    /// Everything spoken, in order
    pub spoken: Vec<String>,
}

/// Voice assistant runtime
pub struct Assistant {
    interpreter: Interpreter,
    profiles: ProfileRepo,
    collaborators: Collaborators,
    profile: Option<UserProfile>,
    weather: Option<WeatherSnapshot>,
    session: RecognitionSession,
}

impl Assistant {
    /// Create an assistant, loading any saved profile
    ///
    /// # Errors
    ///
    /// Returns error if the profile store cannot be read
    pub fn new(
        interpreter: Interpreter,
        profiles: ProfileRepo,
        collaborators: Collaborators,
    ) -> Result<Self> {
        let profile = profiles.load()?;

        match &profile {
            Some(p) => tracing::info!(name = %p.name, "user profile found"),
            None => tracing::info!("no user profile, setup required"),
        }

        Ok(Self {
            interpreter,
            profiles,
            collaborators,
            profile,
            weather: None,
            session: RecognitionSession::new(),
        })
    }

    /// Saved profile, if any
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Cached weather snapshot, if any
    #[must_use]
    pub const fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    /// Replace the cached weather snapshot
    pub fn prime_weather(&mut self, snapshot: WeatherSnapshot) {
        self.weather = Some(snapshot);
    }

    /// Speak a line outside a turn, logging rather than returning speech failures
    pub fn speak_error(&self, text: &str) {
        if let Err(e) = self.collaborators.speech.speak(text) {
            tracing::warn!(error = %e, "speech output failed");
        }
    }

    /// Recognition session
    pub const fn session_mut(&mut self) -> &mut RecognitionSession {
        &mut self.session
    }

    /// Welcome line for startup
    #[must_use]
    pub fn welcome_message(&self) -> String {
        let name = self.interpreter.responder().assistant_name();
        match &self.profile {
            Some(p) => format!("Welcome back, {}! {name} is ready to assist you.", p.name),
            None => format!("Welcome to {name}! Please complete the setup to get started."),
        }
    }

    /// Speak the welcome line and prefetch weather for a known profile
    ///
    /// # Errors
    ///
    /// Returns error if speech output fails
    pub async fn start(&mut self) -> Result<()> {
        if let Some(location) = self.profile.as_ref().map(|p| p.location.clone()) {
            self.refresh_weather(&location).await;
        }
        let welcome = self.welcome_message();
        self.collaborators.speech.speak(&welcome)
    }

    /// Speak a fixed line to check speech output
    ///
    /// # Errors
    ///
    /// Returns error if speech output fails
    pub fn test_speech(&self) -> Result<String> {
        let text = match &self.profile {
            Some(p) => format!("Hello {}! Speech synthesis is working perfectly.", p.name),
            None => "Hello! Speech synthesis is working perfectly.".to_string(),
        };
        self.collaborators.speech.speak(&text)?;
        Ok(text)
    }

    /// Save a new profile, fetch its weather and welcome the user
    ///
    /// # Errors
    ///
    /// Returns error if the profile cannot be saved or speech output fails
    pub async fn complete_setup(&mut self, profile: UserProfile) -> Result<()> {
        self.profiles.save(&profile)?;
        let message = profile.setup_message();
        let location = profile.location.clone();
        self.profile = Some(profile);

        self.refresh_weather(&location).await;
        self.collaborators.speech.speak(&message)
    }

    /// Clear the profile and the weather cache
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be written or speech output fails
    pub fn reset(&mut self) -> Result<()> {
        self.profiles.clear()?;
        self.profile = None;
        self.weather = None;
        self.collaborators.speech.speak(DATA_CLEARED)
    }

    /// Feed a raw recognizer result through the session and handle it
    ///
    /// Starts a session if none is listening. Returns `None` if the session
    /// discarded the result.
    ///
    /// # Errors
    ///
    /// Returns error if speech output fails
    pub async fn hear(&mut self, raw: &str, now: NaiveDateTime) -> Result<Option<Turn>> {
        if !self.session.is_listening() {
            self.session.start()?;
        }

        let Some(transcript) = self.session.accept_result(raw) else {
            return Ok(None);
        };

        self.handle_transcript(&transcript, now).await.map(Some)
    }

    /// Interpret a normalized transcript, speak the reply and run its side effects
    ///
    /// The help document is opened before replying so the reply can reflect
    /// whether it actually opened.
    ///
    /// # Errors
    ///
    /// Returns error if speech output fails
    pub async fn handle_transcript(&mut self, transcript: &str, now: NaiveDateTime) -> Result<Turn> {
        let intent = self.interpreter.classify(transcript);

        let help_open = if intent == Intent::Help {
            let url = self.interpreter.responder().help_url();
            let outcome = self.collaborators.opener.open(url).await;
            if outcome != OpenOutcome::Opened {
                tracing::warn!(url, ?outcome, "help document did not open");
            }
            outcome
        } else {
            OpenOutcome::Opened
        };

        let Reply { text, effects } = {
            let ctx = Context::new(now)
                .with_profile(self.profile.as_ref())
                .with_weather(self.weather.as_ref())
                .with_help_open(help_open);
            self.interpreter.responder().respond(&intent, transcript, &ctx)
        };

        let mut spoken = Vec::new();
        self.say(&mut spoken, text)?;

        for effect in effects {
            self.perform(effect, &mut spoken).await?;
        }

        tracing::info!(intent = intent.label(), "command processed");

        Ok(Turn { intent, spoken })
    }

    async fn perform(&mut self, effect: SideEffect, spoken: &mut Vec<String>) -> Result<()> {
        match effect {
            // Already opened while building the reply
            SideEffect::OpenUrl {
                purpose: OpenPurpose::Help,
                ..
            } => {}
            SideEffect::OpenUrl { url, .. } => {
                if self.collaborators.opener.open(&url).await != OpenOutcome::Opened {
                    tracing::warn!(url = %url, "failed to open website");
                    self.say(spoken, OPEN_FAILED.to_string())?;
                }
            }
            SideEffect::RefreshWeather { location } => {
                self.refresh_weather(&location).await;
            }
            SideEffect::FetchJoke => match self.collaborators.jokes.random().await {
                Ok(joke) => {
                    self.say(spoken, joke.text())?;
                    self.say(spoken, JOKE_FOLLOW_UP.to_string())?;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "joke fetch failed");
                    self.say(spoken, JOKE_UNAVAILABLE.to_string())?;
                }
            },
        }

        Ok(())
    }

    async fn refresh_weather(&mut self, location: &str) {
        let snapshot = fetch_or_placeholder(self.collaborators.weather.as_ref(), location).await;
        self.weather = Some(snapshot);
    }

    fn say(&self, spoken: &mut Vec<String>, text: String) -> Result<()> {
        self.collaborators.speech.speak(&text)?;
        spoken.push(text);
        Ok(())
    }
}
