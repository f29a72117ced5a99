use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{INTENSITY_CEILING, INTENSITY_FLOOR};
use crate::errors::{ConfigError, PulsarResult};
use crate::models::FadeCurve;

/// Parameters of the fade function.
///
/// Owned by the host's settings layer. The cache only reads it, and treats
/// any replacement as a change that invalidates every cached value.
///
/// The legacy plugin keys (`fadeType`, `minOpacity`, `maxOpacity`) are
/// accepted as aliases so existing settings files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Curve applied to the normalized age.
    #[serde(alias = "fadeType")]
    pub curve: FadeCurve,
    /// Intensity of the oldest item.
    #[serde(alias = "minOpacity", alias = "minIntensity")]
    pub min_intensity: f64,
    /// Intensity of the newest item.
    #[serde(alias = "maxOpacity", alias = "maxIntensity")]
    pub max_intensity: f64,
    /// Exponent of the exponential curve. Ignored by the other curves.
    pub steepness: f64,
    /// Number of output levels of the step curve. Ignored by the other curves.
    #[serde(alias = "stepCount")]
    pub step_count: u32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            curve: defaults::DEFAULT_FADE_CURVE,
            min_intensity: defaults::DEFAULT_MIN_INTENSITY,
            max_intensity: defaults::DEFAULT_MAX_INTENSITY,
            steepness: defaults::DEFAULT_STEEPNESS,
            step_count: defaults::DEFAULT_STEP_COUNT,
        }
    }
}

impl FadeConfig {
    /// Linear curve over the given intensity bounds.
    pub fn linear(min_intensity: f64, max_intensity: f64) -> Self {
        Self {
            curve: FadeCurve::Linear,
            min_intensity,
            max_intensity,
            ..Self::default()
        }
    }

    /// Exponential curve with the given steepness over the given bounds.
    pub fn exponential(min_intensity: f64, max_intensity: f64, steepness: f64) -> Self {
        Self {
            curve: FadeCurve::Exponential,
            min_intensity,
            max_intensity,
            steepness,
            ..Self::default()
        }
    }

    /// Step curve with `step_count` levels over the given bounds.
    pub fn step(min_intensity: f64, max_intensity: f64, step_count: u32) -> Self {
        Self {
            curve: FadeCurve::Step,
            min_intensity,
            max_intensity,
            step_count,
            ..Self::default()
        }
    }

    /// Load a flat settings object as persisted by the host plugin.
    ///
    /// Tolerant: the result is passed through [`FadeConfig::sanitized`], not
    /// [`FadeConfig::validate`], because older settings files carry values the
    /// current settings form would reject.
    pub fn from_plugin_data(json: &str) -> PulsarResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Strict check applied when loading user-authored configuration.
    pub fn validate(&self) -> PulsarResult<()> {
        check_intensity("min_intensity", self.min_intensity)?;
        check_intensity("max_intensity", self.max_intensity)?;
        if self.min_intensity > self.max_intensity {
            return Err(ConfigError::InvertedRange {
                min: self.min_intensity,
                max: self.max_intensity,
            }
            .into());
        }
        if !self.steepness.is_finite() || self.steepness <= 0.0 {
            return Err(ConfigError::InvalidField {
                field: "steepness",
                reason: format!("must be finite and > 0, got {}", self.steepness),
            }
            .into());
        }
        if self.step_count == 0 {
            return Err(ConfigError::InvalidField {
                field: "step_count",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Normalize any out-of-domain field so the fade function stays well defined.
    ///
    /// Never fails. Each correction is logged at `warn`.
    pub fn sanitized(mut self) -> Self {
        if !self.min_intensity.is_finite() {
            tracing::warn!(
                field = "min_intensity",
                value = self.min_intensity,
                "non-finite intensity replaced by default"
            );
            self.min_intensity = defaults::DEFAULT_MIN_INTENSITY;
        }
        if !self.max_intensity.is_finite() {
            tracing::warn!(
                field = "max_intensity",
                value = self.max_intensity,
                "non-finite intensity replaced by default"
            );
            self.max_intensity = defaults::DEFAULT_MAX_INTENSITY;
        }
        if self.min_intensity > self.max_intensity {
            tracing::warn!(
                min = self.min_intensity,
                max = self.max_intensity,
                "inverted intensity range swapped"
            );
            std::mem::swap(&mut self.min_intensity, &mut self.max_intensity);
        }
        if !self.steepness.is_finite() || self.steepness <= 0.0 {
            tracing::warn!(
                field = "steepness",
                value = self.steepness,
                "invalid steepness replaced by 1.0"
            );
            self.steepness = 1.0;
        }
        if self.step_count == 0 {
            tracing::warn!(field = "step_count", "step_count of 0 raised to 1");
            self.step_count = 1;
        }
        self
    }
}

fn check_intensity(field: &'static str, value: f64) -> PulsarResult<()> {
    if !value.is_finite() || !(INTENSITY_FLOOR..=INTENSITY_CEILING).contains(&value) {
        return Err(ConfigError::InvalidField {
            field,
            reason: format!(
                "must be within [{INTENSITY_FLOOR}, {INTENSITY_CEILING}], got {value}"
            ),
        }
        .into());
    }
    Ok(())
}
