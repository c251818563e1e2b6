//! Joke provider

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::Result;

/// Spoken when the joke provider fails
pub const JOKE_UNAVAILABLE: &str =
    "Sorry, I couldn't get a joke right now. Please try again later.";

/// Spoken after a joke has been told
pub const JOKE_FOLLOW_UP: &str = "That was funny!";

/// A two-part joke
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    /// Text spoken for the joke
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {}", self.setup, self.punchline)
    }
}

/// Source of jokes
#[async_trait]
pub trait JokeProvider: Send + Sync {
    /// Fetch a random joke
    async fn random(&self) -> Result<Joke>;
}

/// HTTP joke API client (`{setup, punchline}` JSON)
pub struct JokeApiClient {
    client: reqwest::Client,
    url: String,
}

impl JokeApiClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl JokeProvider for JokeApiClient {
    async fn random(&self) -> Result<Joke> {
        tracing::debug!(url = %self.url, "fetching joke");

        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let joke: Joke = response.json().await?;

        Ok(joke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joke_text() {
        let joke: Joke = serde_json::from_str(
            r#"{"id": 7, "type": "general", "setup": "Why?", "punchline": "Because."}"#,
        )
        .unwrap();
        assert_eq!(joke.text(), "Why? Because.");
    }

    #[test]
    fn test_missing_punchline_is_error() {
        assert!(serde_json::from_str::<Joke>(r#"{"setup": "Why?"}"#).is_err());
    }
}
