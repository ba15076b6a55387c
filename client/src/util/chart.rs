//! Line-chart geometry for component sensor histories.
//!
//! All three channels share one y axis spanning the min..max of every
//! plotted value, and one x axis with a slot per timestamp. Values are
//! mapped linearly; nothing is smoothed or aggregated.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use inventory::Component;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub const CHART_WIDTH: f64 = 640.0;
pub const CHART_HEIGHT: f64 = 320.0;
/// Inset reserved for axis labels on every side.
pub const CHART_PADDING: f64 = 40.0;
pub const Y_TICKS: usize = 5;

/// Label and stroke color of one channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel {
    pub label: &'static str,
    pub color: &'static str,
}

pub const TEMPERATURE: Channel = Channel { label: "Temperature (°C)", color: "rgb(255, 99, 132)" };
pub const HUMIDITY: Channel = Channel { label: "Humidity (%)", color: "rgb(53, 162, 235)" };
pub const GAS_LEVEL: Channel = Channel { label: "Gas Level (ppm)", color: "rgb(75, 192, 192)" };

/// One channel projected into chart coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub channel: Channel,
    pub points: Vec<(f64, f64)>,
}

impl Line {
    /// Points in SVG `polyline` syntax.
    #[must_use]
    pub fn svg_points(&self) -> String {
        self.points.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect::<Vec<_>>().join(" ")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub label: String,
    pub position: f64,
}

/// Everything the graph component draws.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    pub lines: Vec<Line>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl Plot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_ticks.is_empty()
    }
}

/// Project a component's history onto the chart area.
#[must_use]
pub fn plot(component: &Component) -> Plot {
    let series = [
        (TEMPERATURE, component.temperature.as_slice()),
        (HUMIDITY, component.humidity.as_slice()),
        (GAS_LEVEL, component.gas_level.as_slice()),
    ];
    let count = component.len();
    let empty = Plot { lines: Vec::new(), x_ticks: Vec::new(), y_ticks: Vec::new() };
    if component.is_empty() {
        return empty;
    }
    let Some((min, max)) = value_range(series.iter().flat_map(|(_, values)| values.iter().copied())) else {
        return empty;
    };

    let lines = series
        .iter()
        .map(|(channel, values)| Line {
            channel: *channel,
            points: values
                .iter()
                .take(count)
                .enumerate()
                .map(|(i, v)| (x_position(i, count), y_position(*v, min, max)))
                .collect(),
        })
        .collect();

    let x_ticks = component
        .timestamps
        .iter()
        .enumerate()
        .map(|(i, ts)| Tick { label: time_label(ts), position: x_position(i, count) })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let y_ticks = (0..Y_TICKS)
        .map(|i| {
            let value = min + (max - min) * i as f64 / (Y_TICKS - 1) as f64;
            Tick { label: format!("{value:.0}"), position: y_position(value, min, max) }
        })
        .collect();

    Plot { lines, x_ticks, y_ticks }
}

/// Smallest and largest finite value. A flat series is widened by one unit
/// each way so it plots mid-height.
pub fn value_range(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;
    if (max - min).abs() < f64::EPSILON {
        Some((min - 1.0, max + 1.0))
    } else {
        Some((min, max))
    }
}

/// X coordinate of slot `index` out of `count`; a single point sits centered.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn x_position(index: usize, count: usize) -> f64 {
    let span = CHART_WIDTH - 2.0 * CHART_PADDING;
    if count <= 1 {
        return CHART_PADDING + span / 2.0;
    }
    CHART_PADDING + span * index as f64 / (count - 1) as f64
}

/// Y coordinate of `value` on an axis spanning `min..max` (SVG y grows down).
#[must_use]
pub fn y_position(value: f64, min: f64, max: f64) -> f64 {
    let span = CHART_HEIGHT - 2.0 * CHART_PADDING;
    let ratio = if max > min { (value - min) / (max - min) } else { 0.5 };
    CHART_HEIGHT - CHART_PADDING - span * ratio
}

/// `HH:MM` for an RFC 3339 timestamp, or the raw string if it does not parse.
#[must_use]
pub fn time_label(timestamp: &str) -> String {
    match OffsetDateTime::parse(timestamp, &Rfc3339) {
        Ok(at) => format!("{:02}:{:02}", at.hour(), at.minute()),
        Err(_) => timestamp.to_owned(),
    }
}
