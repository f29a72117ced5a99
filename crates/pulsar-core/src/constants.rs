/// Pulsar version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable read by the tracing setup.
pub const LOG_ENV_VAR: &str = "PULSAR_LOG";

/// Lowest intensity a loaded configuration may specify.
pub const INTENSITY_FLOOR: f64 = 0.0;

/// Highest intensity a loaded configuration may specify.
pub const INTENSITY_CEILING: f64 = 1.0;
