use pulsar_core::{FadeConfig, TimeRange, Timestamp};

use crate::curve;

/// Position of `timestamp` within `range`, `0.0` at the oldest item and
/// `1.0` at the newest.
///
/// Returns `None` for a zero-width range. Timestamps outside the range are
/// not clamped.
pub fn normalize(timestamp: Timestamp, range: TimeRange) -> Option<f64> {
    if range.is_degenerate() {
        return None;
    }
    Some((timestamp as f64 - range.oldest as f64) / range.width())
}

/// Intensity of an item.
///
/// ```text
/// intensity = min + curve(normalized) × (max − min)
/// ```
///
/// A zero-width range (a single item, or all items sharing one timestamp)
/// yields `max_intensity`.
pub fn fade(timestamp: Timestamp, range: TimeRange, config: &FadeConfig) -> f64 {
    match normalize(timestamp, range) {
        None => config.max_intensity,
        Some(normalized) => scale(curve::apply(config.curve, normalized, config), config),
    }
}

fn scale(factor: f64, config: &FadeConfig) -> f64 {
    config.min_intensity + factor * (config.max_intensity - config.min_intensity)
}

/// Each intermediate of [`fade`], for debugging and observability.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeBreakdown {
    /// `None` when the range has zero width.
    pub normalized: Option<f64>,
    pub fade_factor: f64,
    pub intensity: f64,
}

/// Compute [`fade`] with a full breakdown.
pub fn fade_breakdown(
    timestamp: Timestamp,
    range: TimeRange,
    config: &FadeConfig,
) -> FadeBreakdown {
    let normalized = normalize(timestamp, range);
    let fade_factor = match normalized {
        None => 1.0,
        Some(n) => curve::apply(config.curve, n, config),
    };
    let intensity = match normalized {
        None => config.max_intensity,
        Some(_) => scale(fade_factor, config),
    };

    FadeBreakdown {
        normalized,
        fade_factor,
        intensity,
    }
}
