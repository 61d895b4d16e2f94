use colored::{Color, ColoredString, Colorize};
use weather_core::{Tint, Units, WeatherReport, display_params};

/// Display width of the city and description bands.
pub const PADDING: usize = 20;

fn color(tint: Tint) -> Option<Color> {
    match tint {
        Tint::Red => Some(Color::Red),
        Tint::Cyan => Some(Color::Cyan),
        Tint::Blue => Some(Color::Blue),
        Tint::White => Some(Color::White),
        Tint::Yellow => Some(Color::Yellow),
        Tint::Default => None,
    }
}

fn tinted(text: &str, tint: Tint) -> ColoredString {
    match color(tint) {
        Some(c) => text.color(c),
        None => text.normal(),
    }
}

/// Upper-case the first character, lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Format a report as one line. Every styled segment carries its own reset.
pub fn render(report: &WeatherReport, units: Units) -> String {
    let params = display_params(report.condition_code);

    let city = format!("{:^width$}", report.city, width = PADDING);
    let description = format!("{:^width$}", capitalize(&report.description), width = PADDING);

    format!(
        "{}\t{} {} ({}°{})",
        city.as_str().reversed(),
        tinted(params.symbol, params.tint),
        tinted(&description, params.tint),
        report.temperature,
        units.degree_suffix(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(city: &str, code: u32, description: &str, temperature: f64) -> WeatherReport {
        WeatherReport {
            city: city.into(),
            condition_code: code,
            description: description.into(),
            temperature,
        }
    }

    #[test]
    fn clear_sky_in_paris() {
        let line = render(&report("Paris", 800, "clear sky", 15.0), Units::Metric);

        assert!(line.contains("Paris"));
        assert!(line.contains("🔆"));
        assert!(line.contains("Clear sky"));
        assert!(line.contains("(15°C)"));
    }

    #[test]
    fn imperial_suffix_and_fractional_temperature() {
        let line = render(&report("Boston", 211, "thunderstorm", 71.6), Units::Imperial);

        assert!(line.contains("💥"));
        assert!(line.ends_with("(71.6°F)"));
    }

    #[test]
    fn unknown_code_still_renders() {
        let line = render(&report("Nowhere", 951, "calm", -3.5), Units::Metric);

        assert!(line.contains("🌈"));
        assert!(line.ends_with("(-3.5°C)"));
    }

    #[test]
    fn bands_are_centered_in_fixed_width() {
        colored::control::set_override(false);
        let line = render(&report("Rome", 500, "light rain", 20.0), Units::Metric);
        colored::control::unset_override();

        let (city, rest) = line.split_once('\t').unwrap();
        assert_eq!(city, "        Rome        ");
        assert_eq!(city.chars().count(), PADDING);
        assert!(rest.contains("     Light rain     "));
    }

    #[test]
    fn capitalize_matches_sentence_case() {
        assert_eq!(capitalize("clear sky"), "Clear sky");
        assert_eq!(capitalize("HEAVY Snow"), "Heavy snow");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn tint_mapping() {
        assert_eq!(color(Tint::Yellow), Some(Color::Yellow));
        assert_eq!(color(Tint::Default), None);
    }
}
