use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use weather_core::{Config, Units, WeatherProvider, WeatherQuery, provider_from_config};

use crate::display;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Gets weather and temperature information for a city")]
pub struct Cli {
    /// City name; several words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub city: Vec<String>,

    /// Display the temperature in imperial units.
    #[arg(short, long)]
    pub imperial: bool,

    /// Secrets file holding the OpenWeather API key.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn query(&self) -> WeatherQuery {
        WeatherQuery::from_tokens(&self.city, Units::from_imperial_flag(self.imperial))
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let provider = provider_from_config(&config)?;

        let line = self.report(provider.as_ref()).await?;
        println!("{line}");

        Ok(())
    }

    /// Fetch and format the one-line summary.
    pub async fn report(&self, provider: &dyn WeatherProvider) -> anyhow::Result<String> {
        let query = self.query();
        debug!(?query, "looking up current weather");

        let report = provider.current_weather(&query).await?;
        Ok(display::render(&report, query.units))
    }
}
