use crate::{
    Config, WeatherError, WeatherQuery, WeatherReport, provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions. Performs exactly one request.
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError>;
}

/// Construct the OpenWeather provider from the credentials in `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No API key configured for OpenWeather"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let cfg = Config::with_api_key("KEY");
        assert!(provider_from_config(&cfg).is_ok());
    }
}
