//! Mapping of OpenWeather condition codes to display buckets.
//!
//! See <https://openweathermap.org/weather-conditions> for the vendor ranges.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Cloudy,
    Unknown,
}

/// Terminal color of a bucket. `Default` means no color at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Cyan,
    Blue,
    White,
    Yellow,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayParams {
    pub bucket: Bucket,
    pub symbol: &'static str,
    pub tint: Tint,
}

const UNKNOWN: DisplayParams =
    DisplayParams { bucket: Bucket::Unknown, symbol: "🌈", tint: Tint::Default };

// Ordered, half-open. 400..500 and 900.. are unassigned by the vendor.
static CONDITIONS: &[(Range<u32>, DisplayParams)] = &[
    (200..300, DisplayParams { bucket: Bucket::Thunderstorm, symbol: "💥", tint: Tint::Red }),
    (300..400, DisplayParams { bucket: Bucket::Drizzle, symbol: "💧", tint: Tint::Cyan }),
    (500..600, DisplayParams { bucket: Bucket::Rain, symbol: "💦", tint: Tint::Blue }),
    (600..700, DisplayParams { bucket: Bucket::Snow, symbol: "⛄️", tint: Tint::White }),
    (700..800, DisplayParams { bucket: Bucket::Atmosphere, symbol: "🌀", tint: Tint::Blue }),
    (800..801, DisplayParams { bucket: Bucket::Clear, symbol: "🔆", tint: Tint::Yellow }),
    (801..900, DisplayParams { bucket: Bucket::Cloudy, symbol: "💨", tint: Tint::White }),
];

/// Select symbol and color for a condition code. Never fails: codes outside
/// every known range get the `Unknown` bucket.
pub fn display_params(code: u32) -> DisplayParams {
    CONDITIONS
        .iter()
        .find(|(range, _)| range.contains(&code))
        .map(|(_, params)| *params)
        .unwrap_or(UNKNOWN)
}
