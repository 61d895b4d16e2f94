use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const EXPECTED_LAYOUT: &str = "[openweather]\napi_key = \"<your OpenWeather API key>\"";

/// Credentials for the OpenWeather API.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Secrets file contents.
///
/// Example TOML:
/// [openweather]
/// api_key = "..."
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    pub openweather: Option<ProviderConfig>,
}

impl Config {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self { openweather: Some(ProviderConfig { api_key: Some(api_key.into()) }) }
    }

    /// Load from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_file_path()?,
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow!(
                "Config file not found: {}\n\
                 Hint: create it with the following contents:\n{EXPECTED_LAYOUT}",
                path.display()
            ));
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if cfg.api_key().is_err() {
            return Err(anyhow!(
                "No OpenWeather API key in config file: {}\n\
                 Hint: add the following to it:\n{EXPECTED_LAYOUT}",
                path.display()
            ));
        }

        Ok(cfg)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Default path to the secrets file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("secrets.toml"))
    }

    pub fn api_key(&self) -> Result<&str> {
        self.openweather
            .as_ref()
            .and_then(|cfg| cfg.api_key.as_deref())
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured for OpenWeather.\n\
                     Hint: add the following to your config file:\n{EXPECTED_LAYOUT}"
                )
            })
    }
}
