use reqwest::Url;

use crate::model::WeatherQuery;

pub const BASE_WEATHER_API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Build the current-weather request URL.
///
/// Parameters are appended as `q`, `units`, `appid`, form-urlencoded
/// (space becomes `+`). Existing query pairs on `base` are kept.
pub fn build_weather_url(base: &Url, query: &WeatherQuery, api_key: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("q", &query.city)
        .append_pair("units", query.units.as_str())
        .append_pair("appid", api_key);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Units;

    fn base() -> Url {
        Url::parse(BASE_WEATHER_API_URL).unwrap()
    }

    #[test]
    fn builds_full_url_in_parameter_order() {
        let query = WeatherQuery::from_tokens(&["New", "York"], Units::Metric);
        let url = build_weather_url(&base(), &query, "KEY");

        assert_eq!(
            url.as_str(),
            "http://api.openweathermap.org/data/2.5/weather?q=New+York&units=metric&appid=KEY"
        );
        assert!(!url.query().unwrap().contains(' '));
    }

    #[test]
    fn imperial_flag_selects_imperial_units() {
        let query = WeatherQuery::from_tokens(&["Boston"], Units::from_imperial_flag(true));
        let url = build_weather_url(&base(), &query, "KEY");

        assert!(url.as_str().contains("&units=imperial&"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let query = WeatherQuery::from_tokens(&["a&b=c", "d?e"], Units::Metric);
        let url = build_weather_url(&base(), &query, "KEY");

        assert_eq!(url.query(), Some("q=a%26b%3Dc+d%3Fe&units=metric&appid=KEY"));
    }

    #[test]
    fn non_ascii_city_roundtrips_through_query() {
        let query = WeatherQuery::from_tokens(&["São Paulo"], Units::Metric);
        let url = build_weather_url(&base(), &query, "KEY");

        assert!(url.as_str().contains("q=S%C3%A3o+Paulo"));
        let q = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned());
        assert_eq!(q.as_deref(), Some("São Paulo"));
    }
}
