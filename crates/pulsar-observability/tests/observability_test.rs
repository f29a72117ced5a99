use pulsar_core::config::ObservabilityConfig;
use pulsar_observability::tracing_setup::{self, events};

#[test]
fn events_do_not_panic_without_subscriber() {
    events::cache_rebuilt(3, 1);
    events::range_recalculated(0, None, None);
    events::range_recalculated(2, Some(10), Some(20));
    events::config_changed("Linear", 0.1, 1.0);
    events::bootstrap_completed(12);
    events::tick_applied(4, 1);
}

#[test]
fn second_initialization_reports_existing_subscriber() {
    // Whichever call runs first installs the global subscriber; the other must
    // decline without panicking.
    let first = tracing_setup::init_tracing_with_filter("pulsar=debug");
    let second = tracing_setup::init_from_config(&ObservabilityConfig::default());
    assert!(!(first && second));
    assert!(!tracing_setup::init_tracing());
}
