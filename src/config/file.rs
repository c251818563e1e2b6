//! TOML configuration file loading
//!
//! Supports `~/.config/sofia/config.toml` as a persistent config source.
//! All fields are optional — the file is a partial overlay on top of defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct SofiaConfigFile {
    /// Assistant identity
    #[serde(default)]
    pub assistant: AssistantFileConfig,

    /// Help and search links
    #[serde(default)]
    pub links: LinksFileConfig,

    /// Weather provider
    #[serde(default)]
    pub weather: WeatherFileConfig,

    /// Joke provider
    #[serde(default)]
    pub joke: JokeFileConfig,

    /// Storage and networking
    #[serde(default)]
    pub runtime: RuntimeFileConfig,
}

/// Assistant identity
#[derive(Debug, Default, Deserialize)]
pub struct AssistantFileConfig {
    /// Spoken name (e.g. "SOFIA")
    pub name: Option<String>,

    /// Who the assistant credits as its creator
    pub creator: Option<String>,
}

/// Help document and search engine
#[derive(Debug, Default, Deserialize)]
pub struct LinksFileConfig {
    pub help_url: Option<String>,

    /// Prefix the encoded query is appended to
    pub search_url: Option<String>,
}

/// Weather provider configuration
#[derive(Debug, Default, Deserialize)]
pub struct WeatherFileConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,

    /// "metric" or "standard"
    pub units: Option<String>,
}

/// Joke provider configuration
#[derive(Debug, Default, Deserialize)]
pub struct JokeFileConfig {
    pub url: Option<String>,
}

/// Storage and networking
#[derive(Debug, Default, Deserialize)]
pub struct RuntimeFileConfig {
    /// Directory holding the profile database
    pub data_dir: Option<String>,

    /// HTTP timeout for providers, in seconds
    pub http_timeout_secs: Option<u64>,

    /// Print URLs instead of launching a browser
    pub headless: Option<bool>,
}

/// Load the TOML config file from the standard path
///
/// Returns `SofiaConfigFile::default()` if the file doesn't exist or can't be parsed.
pub fn load_config_file() -> SofiaConfigFile {
    config_file_path().map_or_else(SofiaConfigFile::default, |path| load_config_file_from(&path))
}

/// Load a TOML config file from an explicit path, falling back to defaults
pub fn load_config_file_from(path: &Path) -> SofiaConfigFile {
    if !path.exists() {
        return SofiaConfigFile::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                SofiaConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            SofiaConfigFile::default()
        }
    }
}

/// Return the config file path: `~/.config/sofia/config.toml`
pub fn config_file_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.config_dir().join("sofia").join("config.toml"))
}
