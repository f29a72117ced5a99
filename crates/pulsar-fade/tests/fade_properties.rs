use proptest::prelude::*;
use pulsar_core::{FadeConfig, FadeCurve, TimeRange};
use pulsar_fade::fade;

fn arb_curve() -> impl Strategy<Value = FadeCurve> {
    prop_oneof![
        Just(FadeCurve::Linear),
        Just(FadeCurve::Exponential),
        Just(FadeCurve::Step),
    ]
}

fn arb_config() -> impl Strategy<Value = FadeConfig> {
    (arb_curve(), 0.0f64..0.5, 0.5f64..1.0, 0.1f64..8.0, 1u32..20).prop_map(
        |(curve, min_intensity, max_intensity, steepness, step_count)| FadeConfig {
            curve,
            min_intensity,
            max_intensity,
            steepness,
            step_count,
        },
    )
}

proptest! {
    #[test]
    fn intensity_stays_within_bounds(
        config in arb_config(),
        oldest in -1_000_000i64..1_000_000,
        width in 1i64..10_000_000,
        offset in 0.0f64..=1.0,
    ) {
        let range = TimeRange::new(oldest, oldest + width);
        let ts = oldest + (width as f64 * offset) as i64;
        let intensity = fade(ts, range, &config);
        prop_assert!(
            intensity >= config.min_intensity - 1e-9 && intensity <= config.max_intensity + 1e-9,
            "intensity {} outside [{}, {}]",
            intensity,
            config.min_intensity,
            config.max_intensity
        );
    }

    #[test]
    fn linear_and_exponential_are_monotone_in_age(
        steepness in 0.1f64..8.0,
        a in 0i64..=1000,
        b in 0i64..=1000,
    ) {
        let range = TimeRange::new(0, 1000);
        let (older, newer) = (a.min(b), a.max(b));
        for config in [FadeConfig::linear(0.0, 1.0), FadeConfig::exponential(0.0, 1.0, steepness)] {
            prop_assert!(fade(older, range, &config) <= fade(newer, range, &config));
        }
    }

    #[test]
    fn step_with_one_bucket_is_constant_min(config in arb_config(), ts in 0i64..=1000) {
        let config = FadeConfig { curve: FadeCurve::Step, step_count: 1, ..config };
        let intensity = fade(ts, TimeRange::new(0, 1000), &config);
        prop_assert!((intensity - config.min_intensity).abs() < 1e-12);
    }
}
