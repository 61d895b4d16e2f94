use thiserror::Error;

/// Failures of a single weather lookup. The `Display` text is what the user sees.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// HTTP 401
    #[error("Access denied. Check your API key.")]
    AccessDenied,

    /// HTTP 404
    #[error("Can't find weather data for this city.")]
    CityNotFound,

    /// Any other non-success HTTP status
    #[error("Something went wrong... ({0})")]
    Upstream(u16),

    #[error("Couldn't read the server response.")]
    UnreadableBody(#[source] reqwest::Error),

    #[error("Couldn't read the server response.")]
    Decode(#[from] serde_json::Error),

    /// The body parsed but lacks a required part, e.g. an empty `weather` list.
    #[error("Couldn't read the server response.")]
    IncompleteResponse(&'static str),

    /// DNS, connect, reset or timeout below the HTTP layer.
    #[error("Couldn't reach the weather service.")]
    Network(#[source] reqwest::Error),
}

impl WeatherError {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => WeatherError::AccessDenied,
            404 => WeatherError::CityNotFound,
            other => WeatherError::Upstream(other),
        }
    }
}
