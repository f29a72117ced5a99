use pulsar_core::{FadeConfig, FadeCurve};

/// Apply the configured curve to a normalized age.
///
/// `normalized` is expected in `[0, 1]`; the result is the fade factor,
/// also in `[0, 1]` for in-range input.
pub fn apply(curve: FadeCurve, normalized: f64, config: &FadeConfig) -> f64 {
    match curve {
        FadeCurve::Linear => linear(normalized),
        FadeCurve::Exponential => exponential(normalized, config.steepness),
        FadeCurve::Step => step(normalized, config.step_count),
    }
}

/// `factor = normalized`.
pub fn linear(normalized: f64) -> f64 {
    normalized
}

/// `factor = normalized ^ steepness`.
///
/// `steepness > 1` keeps most items dim except the most recent ones;
/// `steepness < 1` does the opposite. `steepness == 1` is linear.
pub fn exponential(normalized: f64, steepness: f64) -> f64 {
    normalized.powf(steepness)
}

/// `factor = round(normalized × (steps − 1)) / steps`.
///
/// Yields `steps` distinct levels, the highest being `(steps − 1) / steps`.
/// The top bucket never reaches 1.0; existing settings depend on this.
pub fn step(normalized: f64, step_count: u32) -> f64 {
    let steps = f64::from(step_count.max(1));
    (normalized * (steps - 1.0)).round() / steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_ceiling_is_below_one() {
        assert_eq!(step(1.0, 5), 0.8);
        assert_eq!(step(1.0, 2), 0.5);
    }

    #[test]
    fn step_with_zero_count_behaves_like_one() {
        assert_eq!(step(0.7, 0), 0.0);
        assert_eq!(step(0.7, 1), 0.0);
    }

    #[test]
    fn exponential_biases_low_for_steepness_above_one() {
        assert!(exponential(0.5, 2.0) < linear(0.5));
        assert!(exponential(0.5, 0.5) > linear(0.5));
    }
}
