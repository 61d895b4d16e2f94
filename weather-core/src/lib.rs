//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Credentials loading
//! - Query building for the OpenWeather current-weather endpoint
//! - The provider abstraction and its OpenWeather implementation
//! - Condition-code to display mapping and shared models
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod query;

pub use condition::{Bucket, DisplayParams, Tint, display_params};
pub use config::{Config, ProviderConfig};
pub use error::WeatherError;
pub use model::{Units, WeatherQuery, WeatherReport};
pub use provider::{WeatherProvider, provider_from_config};
