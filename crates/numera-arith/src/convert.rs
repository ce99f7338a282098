//! Unit conversions.

/// Converts degrees Celsius to Fahrenheit.
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Converts degrees Fahrenheit to Celsius.
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Splits a second count into (hours, minutes, seconds).
#[must_use]
pub fn seconds_to_hms(total: u64) -> (u64, u64, u64) {
    (total / 3600, total % 3600 / 60, total % 60)
}

/// Collapses an (hours, minutes, seconds) reading into seconds.
#[must_use]
pub fn hms_to_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    hours * 3600 + minutes * 60 + seconds
}
