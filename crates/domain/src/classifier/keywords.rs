//! Fixed keyword tables and unit whitelists used by the heuristics.
//!
//! All entries are lower-case; callers lower-case the haystack first.

/// Plant / soil sensors that carry valid temperature or humidity values but
/// never describe room climate.
pub const PLANT_KEYWORDS: &[&str] = &[
    "plant", "pflanze", "flora", "flower", "soil", "moisture", "boden", "erde",
];

/// Ids suggesting the sensor sits outside the building.
pub const OUTDOOR_KEYWORDS: &[&str] = &[
    "outdoor", "outside", "aussen", "au\u{df}en", "balcony", "balkon", "garden", "garten",
    "terrace", "terrasse", "yard", "porch", "veranda",
];

/// Area names suggesting an outdoor location.
pub const OUTDOOR_AREA_KEYWORDS: &[&str] = &[
    "balcony", "balkon", "garden", "garten", "terrace", "terrasse", "outdoor", "outside",
    "aussen", "au\u{df}en", "yard", "porch", "veranda",
];

/// Power, energy, network and diagnostic readings that may share a unit or
/// a numeric range with climate sensors.
pub const EXCLUDED_KEYWORDS: &[&str] = &[
    "power",
    "energy",
    "voltage",
    "wifi",
    "signal",
    "rssi",
    "linkquality",
    "battery",
    "uptime",
];

pub const TEMPERATURE_UNITS: &[&str] = &[
    "\u{b0}c",
    "c",
    "\u{2103}",
    "celsius",
    "\u{b0}f",
    "f",
    "fahrenheit",
];

pub const TEMPERATURE_NAME_KEYWORDS: &[&str] = &["temp", "temperatur", "temperature", "t_"];

pub const HUMIDITY_UNITS: &[&str] = &["%", "percent", "rel. %", "rh"];

pub const HUMIDITY_NAME_KEYWORDS: &[&str] = &["hum", "humidity", "feuchte", "r_h", "rh"];

/// Whether `haystack` (already lower-cased) contains any of `keywords`.
#[must_use]
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}
