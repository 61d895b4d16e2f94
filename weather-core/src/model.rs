use std::fmt;

/// Temperature convention requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn from_imperial_flag(imperial: bool) -> Self {
        if imperial { Units::Imperial } else { Units::Metric }
    }

    /// Value of the `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn degree_suffix(&self) -> char {
        match self {
            Units::Metric => 'C',
            Units::Imperial => 'F',
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
    pub units: Units,
}

impl WeatherQuery {
    /// Joins city tokens with single spaces. Tokens are kept as given.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], units: Units) -> Self {
        let city = tokens.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
        Self { city, units }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub condition_code: u32,
    pub description: String,
    /// In the unit system of the query that produced this report.
    pub temperature: f64,
}
