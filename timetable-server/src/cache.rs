//! Caching layer for timetable reads.
//!
//! Board and planner queries hit the store with the same `(company, stop)`
//! pair several times per request; a small TTL-bounded cache in front of the
//! store keeps those reads cheap without letting stale timetables linger.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;

use crate::domain::ScheduledTrip;
use crate::store::TimetableStore;

/// Cache key: (company, stop name).
type StopKey = (String, String);

/// Cached trip rows for one stop.
type StopEntry = Arc<Vec<ScheduledTrip>>;

/// Configuration for the timetable cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// A [`TimetableStore`] decorator that caches per-stop trip rows.
pub struct CachedTimetable<S: TimetableStore> {
    inner: Arc<S>,
    cache: MokaCache<StopKey, StopEntry>,
}

impl<S: TimetableStore> CachedTimetable<S> {
    /// Wrap a store with a cache.
    pub fn new(inner: Arc<S>, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Number of entries currently cached.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl<S: TimetableStore> TimetableStore for CachedTimetable<S> {
    fn trips_at_stop(&self, company: &str, stop_name: &str) -> Vec<ScheduledTrip> {
        let key = (company.to_string(), stop_name.to_string());
        let entry = self
            .cache
            .get_with(key, || Arc::new(self.inner.trips_at_stop(company, stop_name)));
        (*entry).clone()
    }
}
