use std::fmt;

use serde::{Deserialize, Serialize};

/// Named curve mapping normalized age to a fade factor.
///
/// Parsing is tolerant: any name outside the known set becomes [`FadeCurve::Linear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FadeCurve {
    /// `factor = normalized`.
    #[default]
    Linear,
    /// `factor = normalized ^ steepness`.
    Exponential,
    /// `factor = round(normalized × (steps − 1)) / steps`.
    Step,
}

impl FadeCurve {
    pub const ALL: [FadeCurve; 3] = [Self::Linear, Self::Exponential, Self::Step];

    /// Parse a curve name, case-insensitively. Unknown names fall back to Linear.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "exponential" => Self::Exponential,
            "step" => Self::Step,
            "linear" => Self::Linear,
            other => {
                tracing::debug!(curve = %other, "unknown fade curve, using linear");
                Self::Linear
            }
        }
    }

    /// Canonical display name, matching the names the settings surface offers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Exponential => "Exponential",
            Self::Step => "Step",
        }
    }
}

impl fmt::Display for FadeCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for FadeCurve {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<&str> for FadeCurve {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<FadeCurve> for String {
    fn from(curve: FadeCurve) -> Self {
        curve.name().to_string()
    }
}
