//! Single-entry TTL cache with an injectable clock.
//!
//! The fetched dataset is rebuilt wholesale on every refresh, so the cache
//! holds exactly one `(value, fetched-at)` pair: no keys, no size bounds, no
//! eviction beyond TTL expiry. The cache is an explicit object that callers
//! construct and share (typically behind an [`Arc`](std::sync::Arc)) rather
//! than hidden module-level state, and it takes its [`Clock`] as a
//! dependency so tests can control time.
//!
//! There is no invalidation API. The only way to force a refresh is for the
//! entry to age past its TTL.

mod clock;

#[cfg(feature = "mock")]
pub use crate::clock::ManualClock;
pub use crate::clock::{Clock, SystemClock};

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// A process-wide memo of the most recent value, valid for a fixed TTL.
///
/// `get` and `set` replace or clone the entry as a whole under one short
/// lock, so concurrent readers always observe a complete pair and never a
/// torn write.
///
/// # Examples
///
/// ```
/// use blend_cache::DataCache;
/// use std::time::Duration;
///
/// let cache: DataCache<Vec<String>> = DataCache::new(Duration::from_secs(300));
/// assert!(cache.get().is_none());
/// cache.set(vec!["Set 1".to_string()]);
/// assert!(cache.is_valid());
/// ```
pub struct DataCache<T> {
    entry: Mutex<Option<(T, Instant)>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<T: Clone> DataCache<T> {
    /// Creates an empty cache on the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache with an explicit time source.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entry: Mutex::new(None),
            ttl,
            clock,
        }
    }

    /// Returns a clone of the cached value if one exists and is younger
    /// than the TTL.
    pub fn get(&self) -> Option<T> {
        let guard = self.lock();
        let (value, stored_at) = guard.as_ref()?;
        if self.clock.now().duration_since(*stored_at) < self.ttl {
            Some(value.clone())
        } else {
            tracing::debug!("cache entry expired");
            None
        }
    }

    /// Stores a fresh value, replacing any previous entry wholesale.
    pub fn set(&self, value: T) {
        let mut guard = self.lock();
        *guard = Some((value, self.clock.now()));
    }

    /// Returns `true` if a get would currently hit.
    pub fn is_valid(&self) -> bool {
        let guard = self.lock();
        guard.as_ref().is_some_and(|(_, stored_at)| self.clock.now().duration_since(*stored_at) < self.ttl)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<(T, Instant)>> {
        // A poisoned lock means a panic mid-assignment of an already-built
        // pair; the entry is still coherent, so recover rather than unwind.
        self.entry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> std::fmt::Debug for DataCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataCache").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(300);

    fn cache_on_manual_clock() -> (DataCache<&'static str>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = DataCache::with_clock(TTL, clock.clone());
        (cache, clock)
    }

    #[test]
    fn cold_cache_misses() {
        let (cache, _clock) = cache_on_manual_clock();
        assert!(cache.get().is_none());
        assert!(!cache.is_valid());
    }

    #[test]
    fn hit_within_ttl() {
        let (cache, clock) = cache_on_manual_clock();
        cache.set("fresh");
        clock.advance(TTL - Duration::from_secs(1));
        assert_eq!(cache.get(), Some("fresh"));
        assert!(cache.is_valid());
    }

    #[test]
    fn miss_at_and_after_ttl() {
        let (cache, clock) = cache_on_manual_clock();
        cache.set("stale");
        clock.advance(TTL);
        assert!(cache.get().is_none());
        assert!(!cache.is_valid());
    }

    #[test]
    fn set_replaces_wholesale_and_resets_age() {
        let (cache, clock) = cache_on_manual_clock();
        cache.set("first");
        clock.advance(TTL - Duration::from_secs(1));
        cache.set("second");
        clock.advance(Duration::from_secs(2));
        // The second write restarted the TTL window.
        assert_eq!(cache.get(), Some("second"));
    }

    #[test]
    fn concurrent_readers_see_the_same_value() {
        let (cache, _clock) = cache_on_manual_clock();
        cache.set("shared");
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| assert_eq!(cache.get(), Some("shared")));
            }
        });
    }
}
