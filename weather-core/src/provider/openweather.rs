use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::WeatherError,
    model::{WeatherQuery, WeatherReport},
    query::{BASE_WEATHER_API_URL, build_weather_url},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: Url,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, BASE_WEATHER_API_URL)
    }

    /// Use an alternative endpoint, e.g. a local mock server.
    pub fn with_base_url(api_key: String, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid OpenWeather endpoint: {base_url}"))?;

        Ok(Self { api_key, base_url, http: Client::new() })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u32,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

impl TryFrom<OwCurrentResponse> for WeatherReport {
    type Error = WeatherError;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherError::IncompleteResponse("empty `weather` list"))?;

        Ok(WeatherReport {
            city: parsed.name,
            condition_code: condition.id,
            description: condition.description,
            temperature: parsed.main.temp,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        let url = build_weather_url(&self.base_url, query, &self.api_key);
        debug!(
            city = %query.city,
            units = %query.units,
            endpoint = %self.base_url,
            "requesting current weather"
        );

        // reqwest errors carry the request URL, and with it the `appid` key.
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.without_url()))?;

        let status = res.status();
        debug!(%status, "OpenWeather responded");
        if !status.is_success() {
            warn!(%status, "OpenWeather request failed");
            return Err(WeatherError::from_status(status.as_u16()));
        }

        let body = res.text().await.map_err(|e| WeatherError::UnreadableBody(e.without_url()))?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;

        parsed.try_into()
    }
}
