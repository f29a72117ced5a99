//! Error types.
//!
//! The cache, registry, and fade function never fail. Errors only arise at
//! the edges where configuration is loaded or serialized.

mod config_error;

pub use config_error::ConfigError;

/// Top-level error for the Pulsar workspace.
#[derive(Debug, thiserror::Error)]
pub enum PulsarError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {message}")]
    Serialization { message: String },
}

/// Convenience alias used across the workspace.
pub type PulsarResult<T> = Result<T, PulsarError>;

impl From<toml::de::Error> for PulsarError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            format: "toml",
            message: err.to_string(),
        }
        .into()
    }
}

impl From<toml::ser::Error> for PulsarError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PulsarError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            format: "json",
            message: err.to_string(),
        }
        .into()
    }
}
