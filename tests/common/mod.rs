//! Shared test utilities

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

use sofia_voice::interpreter::Interpreter;
use sofia_voice::{
    Assistant, Collaborators, DbPool, Error, Joke, JokeProvider, OpenOutcome, ProfileRepo,
    RecordingSpeech, Result, TemperatureUnit, UrlOpener, UserProfile, WeatherProvider,
    WeatherSnapshot, db,
};

/// Set up an in-memory test database
#[must_use]
pub fn setup_test_db() -> DbPool {
    db::init_memory().expect("failed to init test db")
}

/// Fixed clock: Monday 5 October 2026, 15:04:05
#[must_use]
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 5)
        .unwrap()
        .and_hms_opt(15, 4, 5)
        .unwrap()
}

/// Profile for a user in London
#[must_use]
pub fn test_profile() -> UserProfile {
    UserProfile::new(
        "Ada",
        "London",
        "ada",
        "",
        Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap(),
    )
    .expect("valid profile")
}

/// Snapshot the fake provider returns, in Kelvin
#[must_use]
pub fn kelvin_snapshot(location: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        location: location.to_string(),
        country: "GB".to_string(),
        temperature: 288.65,
        feels_like: 287.4,
        temp_min: 286.0,
        temp_max: 290.0,
        humidity: Some(80),
        unit: TemperatureUnit::Kelvin,
        condition: "Clouds".to_string(),
        description: "broken clouds".to_string(),
        placeholder: false,
    }
}

/// Weather provider that counts calls and optionally fails
#[derive(Default)]
pub struct FakeWeather {
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FakeWeather {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Weather("city not found".to_string()));
        }
        Ok(kelvin_snapshot(location))
    }
}

/// Joke provider with a fixed joke, or a failure
pub struct FakeJokes {
    pub joke: Option<Joke>,
}

impl FakeJokes {
    pub fn fixed() -> Self {
        Self {
            joke: Some(Joke {
                setup: "Why did the scarecrow win an award?".to_string(),
                punchline: "Because he was outstanding in his field.".to_string(),
            }),
        }
    }

    pub const fn failing() -> Self {
        Self { joke: None }
    }
}

#[async_trait]
impl JokeProvider for FakeJokes {
    async fn random(&self) -> Result<Joke> {
        self.joke
            .clone()
            .ok_or_else(|| Error::Joke("service unavailable".to_string()))
    }
}

/// Opener that records URLs and reports a fixed outcome
pub struct RecordingOpener {
    pub outcome: OpenOutcome,
    pub opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn new(outcome: OpenOutcome) -> Self {
        Self {
            outcome,
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlOpener for RecordingOpener {
    async fn open(&self, url: &str) -> OpenOutcome {
        self.opened.lock().unwrap().push(url.to_string());
        self.outcome
    }
}

/// Assistant wired to fakes, with handles kept for assertions
pub struct Harness {
    pub assistant: Assistant,
    pub db: DbPool,
    pub weather: Arc<FakeWeather>,
    pub opener: Arc<RecordingOpener>,
    pub speech: Arc<RecordingSpeech>,
}

/// Builder for a [`Harness`]
pub struct HarnessBuilder {
    db: DbPool,
    weather: FakeWeather,
    jokes: FakeJokes,
    outcome: OpenOutcome,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            db: setup_test_db(),
            weather: FakeWeather::default(),
            jokes: FakeJokes::fixed(),
            outcome: OpenOutcome::Opened,
        }
    }

    /// Start with the test profile already saved
    pub fn with_saved_profile(self) -> Self {
        ProfileRepo::new(self.db.clone())
            .save(&test_profile())
            .expect("failed to save profile");
        self
    }

    pub fn weather(mut self, weather: FakeWeather) -> Self {
        self.weather = weather;
        self
    }

    pub fn jokes(mut self, jokes: FakeJokes) -> Self {
        self.jokes = jokes;
        self
    }

    pub const fn open_outcome(mut self, outcome: OpenOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn build(self) -> Harness {
        let weather = Arc::new(self.weather);
        let opener = Arc::new(RecordingOpener::new(self.outcome));
        let speech = Arc::new(RecordingSpeech::default());

        let collaborators = Collaborators {
            weather: weather.clone(),
            jokes: Arc::new(self.jokes),
            opener: opener.clone(),
            speech: speech.clone(),
        };

        let assistant = Assistant::new(
            Interpreter::default(),
            ProfileRepo::new(self.db.clone()),
            collaborators,
        )
        .expect("failed to build assistant");

        Harness {
            assistant,
            db: self.db,
            weather,
            opener,
            speech,
        }
    }
}
