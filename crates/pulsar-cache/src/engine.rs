//! FreshnessEngine owns the registry, the derived cache, and the fade
//! config, and routes host events through the invalidation protocol.
//!
//! A range change (or a config change) marks the whole cache dirty; any
//! other mutation recomputes or evicts the single affected entry.
//!
//! Every mutating call takes `&mut self`: one mutator at a time is what keeps
//! the protocol correct. Hosts with several event sources must serialize
//! them before they reach the engine.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use pulsar_core::{FadeConfig, ItemSource, RangeChange, RenderSurface, TimeRange, Timestamp};
use pulsar_observability::tracing_setup::events;
use serde::Serialize;
use tracing::debug;

use crate::derived::DerivedCache;
use crate::metrics::CacheMetrics;
use crate::registry::IdentityRegistry;

/// Outcome of one render tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Slots written with a tracked key's intensity.
    pub applied: usize,
    /// Slots whose key the registry does not track; left untouched.
    pub skipped: usize,
}

/// One freshness session. Create at session start, drop at session end.
#[derive(Debug, Clone)]
pub struct FreshnessEngine<K = String> {
    registry: IdentityRegistry<K>,
    cache: DerivedCache<K>,
    config: FadeConfig,
}

impl<K: Eq + Hash + Clone> FreshnessEngine<K> {
    /// Create an empty engine. The config is sanitized first.
    pub fn new(config: FadeConfig) -> Self {
        Self {
            registry: IdentityRegistry::new(),
            cache: DerivedCache::new(),
            config: config.sanitized(),
        }
    }

    /// Create an engine seeded from the host's enumeration of items.
    pub fn with_items<S>(config: FadeConfig, source: &mut S) -> Self
    where
        S: ItemSource<K> + ?Sized,
    {
        let mut engine = Self::new(config);
        engine.bootstrap(source);
        engine
    }

    /// Bulk-upsert every item from `source`, then mark the cache dirty once.
    ///
    /// Returns the number of items tracked afterwards.
    pub fn bootstrap<S>(&mut self, source: &mut S) -> usize
    where
        S: ItemSource<K> + ?Sized,
    {
        for (key, ts) in source.items() {
            self.registry.upsert(key, ts);
        }
        self.cache.invalidate_all();
        events::bootstrap_completed(self.registry.len());
        self.registry.len()
    }

    /// An item was created or modified.
    pub fn on_item_upserted(&mut self, key: K, timestamp: Timestamp) -> RangeChange {
        let change = self.registry.upsert(key.clone(), timestamp);
        if change.is_changed() {
            self.cache.invalidate_all();
        } else {
            self.cache.invalidate_one(&key, &self.registry, &self.config);
        }
        change
    }

    /// An item was deleted. Unknown keys are ignored.
    pub fn on_item_removed<Q>(&mut self, key: &Q) -> RangeChange
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let before = self.registry.range();
        if self.registry.remove(key) {
            self.registry.recalculate();
        }
        let change = RangeChange::between(before, self.registry.range());
        if change.is_changed() {
            self.cache.invalidate_all();
        }
        self.cache.forget(key);
        change
    }

    /// An item moved from `old_key` to `new_key`.
    pub fn on_item_renamed<Q>(
        &mut self,
        old_key: &Q,
        new_key: K,
        timestamp: Timestamp,
    ) -> RangeChange
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let change = self.registry.rename(old_key, new_key.clone(), timestamp);
        self.cache.forget(old_key);
        if change.is_changed() {
            self.cache.invalidate_all();
        } else {
            self.cache
                .invalidate_one::<K>(&new_key, &self.registry, &self.config);
        }
        change
    }

    /// Replace the fade configuration. Every cached value becomes stale.
    pub fn on_config_changed(&mut self, config: FadeConfig) {
        self.config = config.sanitized();
        self.cache.invalidate_all();
        events::config_changed(
            self.config.curve.name(),
            self.config.min_intensity,
            self.config.max_intensity,
        );
    }

    /// Key → intensity for every tracked item. Rebuilds first if dirty.
    pub fn materialize(&mut self) -> &HashMap<K, f64> {
        self.cache.materialize(&self.registry, &self.config)
    }

    /// Intensity of a single item, or `None` if it is not tracked.
    pub fn intensity<Q>(&mut self, key: &Q) -> Option<f64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cache.get(key, &self.registry, &self.config)
    }

    /// Write the current intensities into `surface` and ask it to redraw.
    ///
    /// Slots for keys the registry does not track keep their value.
    pub fn tick<S>(&mut self, surface: &mut S) -> TickReport
    where
        S: RenderSurface<K> + ?Sized,
    {
        let values = self.cache.materialize(&self.registry, &self.config);
        let mut report = TickReport::default();

        surface.visit_slots(&mut |key, slot| match values.get(key) {
            Some(&intensity) => {
                *slot = intensity;
                report.applied += 1;
            }
            None => report.skipped += 1,
        });
        surface.request_redraw();

        events::tick_applied(report.applied, report.skipped);
        report
    }

    /// Forget every item, e.g. when the host reloads its whole collection.
    pub fn reset(&mut self) {
        debug!(items = self.registry.len(), "resetting freshness engine");
        self.registry.clear();
        self.cache.invalidate_all();
    }

    pub fn range(&self) -> Option<TimeRange> {
        self.registry.range()
    }

    pub fn config(&self) -> &FadeConfig {
        &self.config
    }

    pub fn registry(&self) -> &IdentityRegistry<K> {
        &self.registry
    }

    pub fn is_dirty(&self) -> bool {
        self.cache.is_dirty()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Work counters for the cache and the registry combined.
    pub fn metrics(&self) -> CacheMetrics {
        CacheMetrics {
            range_recalculations: self.registry.recalculations(),
            ..*self.cache.metrics()
        }
    }
}

impl<K: Eq + Hash + Clone> Default for FreshnessEngine<K> {
    fn default() -> Self {
        Self::new(FadeConfig::default())
    }
}
