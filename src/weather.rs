//! Weather snapshots and the provider that fetches them

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Offset between Kelvin and Celsius
const KELVIN_OFFSET: f64 = 273.15;

/// Unit the snapshot's temperatures are stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Kelvin,
    #[default]
    Celsius,
}

/// Most recently fetched weather for a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: Option<u8>,
    pub unit: TemperatureUnit,
    /// Primary condition, e.g. "Clear"
    pub condition: String,
    /// Longer description, e.g. "clear sky"
    pub description: String,
    /// Demo values substituted after a failed fetch
    #[serde(default)]
    pub placeholder: bool,
}

impl WeatherSnapshot {
    /// Fixed demo snapshot used when the provider fails
    #[must_use]
    pub fn placeholder(location: &str) -> Self {
        Self {
            location: location.to_string(),
            country: "Demo".to_string(),
            temperature: 22.0,
            feels_like: 25.0,
            temp_min: 18.0,
            temp_max: 28.0,
            humidity: Some(65),
            unit: TemperatureUnit::Celsius,
            condition: "Clear".to_string(),
            description: "clear sky".to_string(),
            placeholder: true,
        }
    }

    /// Convert a stored temperature to whole degrees Celsius
    #[must_use]
    pub fn celsius(&self, value: f64) -> i64 {
        match self.unit {
            TemperatureUnit::Kelvin => kelvin_to_celsius(value),
            TemperatureUnit::Celsius => round_half_up(value),
        }
    }

    /// Spoken weather sentence
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Today's weather in {}: {}, temperature {}°C, feels like {}°C.",
            self.location,
            self.description,
            self.celsius(self.temperature),
            self.celsius(self.feels_like)
        )
    }

    /// Multi-line summary for display
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{}, {}\n{} ({})\n{}°C, feels like {}°C\nmin/max {}°C / {}°C",
            self.location,
            self.country,
            self.condition,
            self.description,
            self.celsius(self.temperature),
            self.celsius(self.feels_like),
            self.celsius(self.temp_min),
            self.celsius(self.temp_max),
        );
        if self.placeholder {
            out.push_str("\n(demo data)");
        }
        out
    }
}

/// `celsius = round(kelvin - 273.15)`
#[must_use]
pub fn kelvin_to_celsius(kelvin: f64) -> i64 {
    round_half_up(kelvin - KELVIN_OFFSET)
}

/// Round to the nearest integer, halves towards positive infinity
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Source of weather snapshots
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch current weather for a location
    async fn current(&self, location: &str) -> Result<WeatherSnapshot>;
}

/// Fetch weather, substituting the placeholder on any failure
pub async fn fetch_or_placeholder(
    provider: &dyn WeatherProvider,
    location: &str,
) -> WeatherSnapshot {
    match provider.current(location).await {
        Ok(snapshot) => {
            tracing::info!(location, "weather data loaded");
            snapshot
        }
        Err(e) => {
            tracing::warn!(location, error = %e, "weather fetch failed, using demo data");
            WeatherSnapshot::placeholder(location)
        }
    }
}

/// OpenWeather current-weather response
#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    name: String,
    sys: OpenWeatherSys,
    main: OpenWeatherMain,
    weather: Vec<OpenWeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    main: String,
    description: String,
}

impl OpenWeatherResponse {
    fn into_snapshot(self, unit: TemperatureUnit) -> Result<WeatherSnapshot> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| Error::Weather("response has no conditions".to_string()))?;

        Ok(WeatherSnapshot {
            location: self.name,
            country: self.sys.country,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            temp_min: self.main.temp_min,
            temp_max: self.main.temp_max,
            humidity: self.main.humidity,
            unit,
            condition: condition.main,
            description: condition.description,
            placeholder: false,
        })
    }
}

/// OpenWeather HTTP client
pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    units: String,
}

impl OpenWeatherClient {
    /// Create a new client
    ///
    /// `units` is passed through to the API: "metric" yields Celsius,
    /// "standard" yields Kelvin.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(api_url: String, api_key: String, units: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url,
            api_key,
            units,
        })
    }

    /// Unit the configured API units produce
    #[must_use]
    pub fn temperature_unit(&self) -> TemperatureUnit {
        match self.units.as_str() {
            "metric" => TemperatureUnit::Celsius,
            _ => TemperatureUnit::Kelvin,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot> {
        tracing::debug!(location, "fetching weather");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await?;

        let response = response.error_for_status()?;
        let body: OpenWeatherResponse = response.json().await?;

        body.into_snapshot(self.temperature_unit())
    }
}
