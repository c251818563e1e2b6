//! SOFIA - voice command interpreter and assistant runtime
//!
//! This library provides:
//! - A pure command interpreter (transcript → intent → reply + side effects)
//! - Arithmetic over numbers spoken in the transcript
//! - An assistant runtime that owns the profile, weather cache and recognition
//!   session, and performs the side effects the interpreter requests
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │            Host (CLI, recognizer, speaker)           │
//! └────────────────────┬────────────────────────────────┘
//!                      │ transcript
//! ┌────────────────────▼────────────────────────────────┐
//! │                   Assistant                          │
//! │   Session  │  Profile  │  Weather cache  │  Opener  │
//! └────────────────────┬────────────────────────────────┘
//!                      │ Context
//! ┌────────────────────▼────────────────────────────────┐
//! │                  Interpreter                         │
//! │        Classifier  →  Responder  →  Reply            │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod assistant;
pub mod config;
pub mod db;
pub mod error;
pub mod interpreter;
pub mod joke;
pub mod opener;
pub mod profile;
pub mod session;
pub mod setup;
pub mod speech;
pub mod weather;

pub use assistant::{Assistant, Collaborators, Turn};
pub use config::Config;
pub use db::{DbConn, DbPool};
pub use error::{Error, Result};
pub use interpreter::{
    Context, Intent, Interpretation, Interpreter, OpenOutcome, Reply, SideEffect, Site, classify,
    extract_numbers,
};
pub use joke::{Joke, JokeApiClient, JokeProvider};
pub use opener::{PrintOpener, SystemOpener, UrlOpener};
pub use profile::{ProfileRepo, UserProfile};
pub use session::{RecognitionSession, SessionState};
pub use speech::{ConsoleSpeech, RecordingSpeech, SpeechSink};
pub use weather::{OpenWeatherClient, TemperatureUnit, WeatherProvider, WeatherSnapshot};
