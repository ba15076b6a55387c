//! Synthetic sensor history for newly created components.
//!
//! New components get [`SAMPLE_POINTS`] readings per channel drawn uniformly
//! from fixed ranges and rounded to one decimal, stamped hourly and ending
//! at the creation time.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, UtcOffset};

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

/// Number of points generated per channel.
pub const SAMPLE_POINTS: usize = 7;

/// Spacing between generated timestamps.
pub const SAMPLE_INTERVAL: Duration = Duration::hours(1);

pub const TEMPERATURE_RANGE: (f64, f64) = (20.0, 25.0);
pub const HUMIDITY_RANGE: (f64, f64) = (45.0, 55.0);
pub const GAS_LEVEL_RANGE: (f64, f64) = (380.0, 420.0);

/// Source of uniformly distributed values.
///
/// The server backs this with `rand`, the browser with `Math.random`.
pub trait Sampler {
    /// Draw a value in `[min, max)`.
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

/// Always returns the middle of the range.
#[derive(Clone, Copy, Debug, Default)]
pub struct Midpoint;

impl Sampler for Midpoint {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) / 2.0
    }
}

/// One generated sensor history.
#[derive(Clone, Debug, PartialEq)]
pub struct Readings {
    pub temperature: Vec<f64>,
    pub humidity: Vec<f64>,
    pub gas_level: Vec<f64>,
    pub timestamps: Vec<String>,
}

/// Generate a full history ending at `now`.
pub fn synthesize(now: OffsetDateTime, sampler: &mut dyn Sampler) -> Readings {
    Readings {
        temperature: series(sampler, TEMPERATURE_RANGE),
        humidity: series(sampler, HUMIDITY_RANGE),
        gas_level: series(sampler, GAS_LEVEL_RANGE),
        timestamps: hourly_timestamps(now, SAMPLE_POINTS),
    }
}

fn series(sampler: &mut dyn Sampler, (min, max): (f64, f64)) -> Vec<f64> {
    (0..SAMPLE_POINTS).map(|_| round_tenth(sampler.uniform(min, max))).collect()
}

/// `count` timestamps spaced by [`SAMPLE_INTERVAL`], oldest first, the last
/// one equal to `now`.
#[must_use]
pub fn hourly_timestamps(now: OffsetDateTime, count: usize) -> Vec<String> {
    (0..count)
        .rev()
        .map(|back| {
            let steps = i32::try_from(back).unwrap_or(i32::MAX);
            format_timestamp(now - SAMPLE_INTERVAL * steps)
        })
        .collect()
}

/// RFC 3339 in UTC, always with three fractional digits.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Format as RFC 3339 in UTC with millisecond precision (`...T12:00:00.000Z`).
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.to_offset(UtcOffset::UTC).format(TIMESTAMP_FORMAT).unwrap_or_default()
}

#[must_use]
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
