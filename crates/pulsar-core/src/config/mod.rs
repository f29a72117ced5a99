//! Configuration.
//!
//! Every struct uses `#[serde(default)]`, so a partial document only
//! overrides the fields it names.

pub mod defaults;
mod fade_config;
mod observability_config;

pub use fade_config::FadeConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::PulsarResult;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulsarConfig {
    pub fade: FadeConfig,
    pub observability: ObservabilityConfig,
}

impl PulsarConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> PulsarResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.fade.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(s: &str) -> PulsarResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.fade.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> PulsarResult<String> {
        Ok(toml::to_string(self)?)
    }
}
