//! Configuration management for SOFIA
//!
//! Precedence, lowest to highest: built-in defaults, the TOML file, environment
//! variables.

pub mod file;

use std::path::PathBuf;
use std::time::Duration;

use crate::interpreter::Responder;
use crate::interpreter::responder::{DEFAULT_HELP_URL, DEFAULT_SEARCH_URL};
use crate::{Error, Result};

use file::SofiaConfigFile;

/// Default weather endpoint (OpenWeather current weather)
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Default joke endpoint
pub const DEFAULT_JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Assistant identity
    pub assistant: AssistantConfig,

    /// Help document URL
    pub help_url: String,

    /// Search URL prefix
    pub search_url: String,

    /// Weather provider
    pub weather: WeatherConfig,

    /// Joke API URL
    pub joke_url: String,

    /// Timeout applied to provider requests
    pub http_timeout: Duration,

    /// Path to data directory (profile database)
    pub data_dir: PathBuf,

    /// Print URLs instead of launching a browser
    pub headless: bool,
}

/// Assistant identity
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Spoken name
    pub name: String,

    /// Credited creator
    pub creator: String,
}

/// Weather provider configuration
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_url: String,
    pub api_key: String,

    /// "metric" (Celsius) or "standard" (Kelvin)
    pub units: String,
}

impl Config {
    /// Load configuration from the config file and environment
    ///
    /// # Errors
    ///
    /// Returns error if a setting is out of range
    pub fn load() -> Result<Self> {
        let file = file::load_config_file();
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Build configuration from a parsed file and an environment lookup
    ///
    /// # Errors
    ///
    /// Returns error if a setting is out of range
    pub fn from_sources<F>(file: SofiaConfigFile, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let assistant = AssistantConfig {
            name: env("SOFIA_NAME")
                .or(file.assistant.name)
                .unwrap_or_else(|| "SOFIA".to_string()),
            creator: file
                .assistant
                .creator
                .unwrap_or_else(|| "Mohammad Kaif".to_string()),
        };

        let weather = WeatherConfig {
            api_url: env("SOFIA_WEATHER_URL")
                .or(file.weather.api_url)
                .unwrap_or_else(|| DEFAULT_WEATHER_URL.to_string()),
            api_key: env("SOFIA_WEATHER_API_KEY")
                .or(file.weather.api_key)
                .unwrap_or_else(|| "demo".to_string()),
            units: env("SOFIA_WEATHER_UNITS")
                .or(file.weather.units)
                .unwrap_or_else(|| "metric".to_string()),
        };

        if !matches!(weather.units.as_str(), "metric" | "standard") {
            return Err(Error::Config(format!(
                "unsupported weather units: {} (expected \"metric\" or \"standard\")",
                weather.units
            )));
        }

        let timeout_secs = env("SOFIA_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .or(file.runtime.http_timeout_secs)
            .unwrap_or(10);

        if timeout_secs == 0 {
            return Err(Error::Config("http timeout must be at least 1 second".to_string()));
        }

        // ~/.local/share/sofia on Linux
        let data_dir = env("SOFIA_DATA_DIR")
            .or(file.runtime.data_dir)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let headless = env("SOFIA_HEADLESS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .or(file.runtime.headless)
            .unwrap_or(false);

        Ok(Self {
            assistant,
            help_url: file
                .links
                .help_url
                .unwrap_or_else(|| DEFAULT_HELP_URL.to_string()),
            search_url: file
                .links
                .search_url
                .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
            weather,
            joke_url: env("SOFIA_JOKE_URL")
                .or(file.joke.url)
                .unwrap_or_else(|| DEFAULT_JOKE_URL.to_string()),
            http_timeout: Duration::from_secs(timeout_secs),
            data_dir,
            headless,
        })
    }

    /// Path of the profile database
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("sofia.db")
    }

    /// Responder configured with this identity and these links
    #[must_use]
    pub fn responder(&self) -> Responder {
        Responder::new(
            self.assistant.name.clone(),
            self.assistant.creator.clone(),
            self.help_url.clone(),
            self.search_url.clone(),
        )
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("dev", "sofia", "sofia")
        .map_or_else(|| PathBuf::from(".sofia"), |d| d.data_dir().to_path_buf())
}
