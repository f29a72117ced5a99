// Single source of truth for all default values.

use crate::models::FadeCurve;

// --- Fade ---
pub const DEFAULT_FADE_CURVE: FadeCurve = FadeCurve::Linear;
pub const DEFAULT_MIN_INTENSITY: f64 = 0.1;
pub const DEFAULT_MAX_INTENSITY: f64 = 1.0;
pub const DEFAULT_STEEPNESS: f64 = 2.0;
pub const DEFAULT_STEP_COUNT: u32 = 5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
