//! DerivedCache: key → intensity, behind a single dirty flag.
//!
//! Clean → (range change | config change) → Dirty → (get | materialize) → Clean.
//!
//! While clean, every key in the registry maps to
//! `fade(timestamp, range, config)` under the current range and config, and
//! no other key is present. Anything that may shift every value marks the
//! whole cache dirty; there is no per-entry staleness.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use pulsar_core::FadeConfig;
use pulsar_fade::fade;
use pulsar_observability::tracing_setup::events;

use crate::metrics::CacheMetrics;
use crate::registry::IdentityRegistry;

#[derive(Debug, Clone)]
pub struct DerivedCache<K = String> {
    values: HashMap<K, f64>,
    dirty: bool,
    metrics: CacheMetrics,
}

impl<K> Default for DerivedCache<K> {
    /// Starts dirty: nothing has been computed yet.
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            dirty: true,
            metrics: CacheMetrics::default(),
        }
    }
}

impl<K: Eq + Hash + Clone> DerivedCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every entry stale. The next read rebuilds.
    pub fn invalidate_all(&mut self) {
        if !self.dirty {
            tracing::trace!("derived cache marked dirty");
        }
        self.dirty = true;
        self.metrics.invalidations += 1;
    }

    /// Recompute only `key`'s entry. Used when the range did not move.
    ///
    /// No-op while dirty, since the next read rebuilds everything anyway.
    /// A key the registry no longer tracks is evicted instead.
    pub fn invalidate_one<Q>(
        &mut self,
        key: &Q,
        registry: &IdentityRegistry<K>,
        config: &FadeConfig,
    ) where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        if self.dirty {
            return;
        }
        match (registry.timestamp(key), registry.range()) {
            (Some(ts), Some(range)) => {
                let intensity = fade(ts, range, config);
                match self.values.get_mut(key) {
                    Some(slot) => *slot = intensity,
                    None => {
                        self.values.insert(key.to_owned(), intensity);
                    }
                }
                self.metrics.incremental_updates += 1;
            }
            _ => self.forget(key),
        }
    }

    /// Drop `key`'s entry after the key left the registry.
    pub fn forget<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.values.remove(key).is_some() {
            self.metrics.evictions += 1;
        }
    }

    /// Intensity for `key`, rebuilding first if dirty.
    ///
    /// `None` means the registry does not track the key. It never stands for
    /// an intensity of zero.
    pub fn get<Q>(
        &mut self,
        key: &Q,
        registry: &IdentityRegistry<K>,
        config: &FadeConfig,
    ) -> Option<f64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.refresh(registry, config);
        self.values.get(key).copied()
    }

    /// The full key → intensity mapping, rebuilding first if dirty.
    ///
    /// Repeated calls with no mutation in between return the same mapping
    /// and do no work.
    pub fn materialize(
        &mut self,
        registry: &IdentityRegistry<K>,
        config: &FadeConfig,
    ) -> &HashMap<K, f64> {
        self.refresh(registry, config);
        &self.values
    }

    fn refresh(&mut self, registry: &IdentityRegistry<K>, config: &FadeConfig) {
        if self.dirty {
            self.rebuild(registry, config);
        }
    }

    /// Discard every entry and recompute from the registry. O(n).
    pub fn rebuild(&mut self, registry: &IdentityRegistry<K>, config: &FadeConfig) {
        self.values.clear();
        if let Some(range) = registry.range() {
            self.values.reserve(registry.len());
            for (key, &ts) in registry.iter() {
                self.values.insert(key.clone(), fade(ts, range, config));
            }
        }
        self.dirty = false;
        self.metrics.full_rebuilds += 1;
        events::cache_rebuilt(self.values.len(), self.metrics.full_rebuilds);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of cached entries. May lag the registry while dirty.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsar_core::TimeRange;

    fn setup() -> (IdentityRegistry, FadeConfig) {
        let mut reg = IdentityRegistry::new();
        reg.upsert("a".to_string(), 0);
        reg.upsert("b".to_string(), 1000);
        (reg, FadeConfig::linear(0.0, 1.0))
    }

    #[test]
    fn starts_dirty_and_first_read_rebuilds() {
        let (reg, config) = setup();
        let mut cache = DerivedCache::new();
        assert!(cache.is_dirty());
        assert_eq!(cache.get("b", &reg, &config), Some(1.0));
        assert!(!cache.is_dirty());
        assert_eq!(cache.metrics().full_rebuilds, 1);
    }

    #[test]
    fn invalidate_one_is_ignored_while_dirty() {
        let (reg, config) = setup();
        let mut cache = DerivedCache::new();
        cache.invalidate_one("a", &reg, &config);
        assert_eq!(cache.metrics().incremental_updates, 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_one_updates_single_entry() {
        let (mut reg, config) = setup();
        let mut cache = DerivedCache::new();
        cache.materialize(&reg, &config);

        reg.upsert("c".to_string(), 250);
        cache.invalidate_one("c", &reg, &config);
        assert!(!cache.is_dirty());
        assert_eq!(cache.get("c", &reg, &config), Some(0.25));
        assert_eq!(cache.metrics().full_rebuilds, 1);
        assert_eq!(cache.metrics().incremental_updates, 1);
    }

    #[test]
    fn invalidate_one_evicts_untracked_key() {
        let (mut reg, config) = setup();
        let mut cache = DerivedCache::new();
        cache.materialize(&reg, &config);
        reg.upsert("c".to_string(), 500);
        cache.invalidate_one("c", &reg, &config);

        reg.remove("c");
        cache.invalidate_one("c", &reg, &config);
        assert_eq!(cache.get("c", &reg, &config), None);
        assert_eq!(cache.metrics().evictions, 1);
    }

    #[test]
    fn untracked_key_is_absent_not_zero() {
        let (reg, config) = setup();
        let mut cache = DerivedCache::new();
        assert_eq!(cache.get("a", &reg, &config), Some(0.0));
        assert_eq!(cache.get("never-seen", &reg, &config), None);
    }

    #[test]
    fn empty_registry_materializes_empty() {
        let reg: IdentityRegistry = IdentityRegistry::new();
        let mut cache = DerivedCache::new();
        assert!(cache.materialize(&reg, &FadeConfig::default()).is_empty());
        assert_eq!(reg.range(), None::<TimeRange>);
    }
}
