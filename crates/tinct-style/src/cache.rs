//! LRU cache for SGR parameter generation.
//!
//! Rendering the same handful of styles over and over is the common case;
//! this cache memoizes [`to_params`] per `(attributes, profile)` pair. It
//! never changes output.
//!
//! # Example
//! ```
//! use tinct_style::{Attributes, ParamCache, TerminalProfile};
//!
//! let mut cache = ParamCache::new(64);
//! let bold = Attributes::new().bold();
//!
//! assert_eq!(cache.get_or_compute(&bold, TerminalProfile::TrueColor), [1]);
//! assert_eq!(cache.get_or_compute(&bold, TerminalProfile::TrueColor), [1]);
//!
//! let stats = cache.stats();
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses, 1);
//! ```

use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxBuildHasher;

use crate::attributes::Attributes;
use crate::profile::TerminalProfile;
use crate::sgr::to_params;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

type Key = (Attributes, TerminalProfile);

/// Bounded LRU map from attributes to their SGR parameter list.
///
/// Hits move the entry to the front; inserting past capacity evicts the
/// least recently used entry.
///
/// # Thread Safety
/// `ParamCache` is not thread-safe. For concurrent use, wrap in a mutex
/// or enable the `thread_local_cache` feature and use [`cached_params`].
#[derive(Debug)]
pub struct ParamCache {
    cache: LruCache<Key, Vec<u16>, FxBuildHasher>,
    hits: u64,
    misses: u64,
}

fn capacity_of(capacity: usize) -> NonZeroUsize {
    NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)
}

impl ParamCache {
    /// Create a new cache with the specified capacity.
    ///
    /// If capacity is zero, defaults to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::with_hasher(capacity_of(capacity), FxBuildHasher),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a new cache with the default capacity (256 entries).
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    /// Get cached parameters or generate and cache them.
    pub fn get_or_compute(&mut self, attrs: &Attributes, profile: TerminalProfile) -> &[u16] {
        let key = (*attrs, profile);
        if self.cache.contains(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            #[cfg(feature = "tracing")]
            if self.cache.len() == self.cache.cap().get() {
                tracing::debug!(capacity = self.cache.cap().get(), "sgr param cache evicting");
            }
        }
        self.cache
            .get_or_insert(key, || to_params(attrs, profile))
            .as_slice()
    }

    /// Peek at cached parameters without updating LRU order.
    #[must_use]
    pub fn peek(&self, attrs: &Attributes, profile: TerminalProfile) -> Option<&[u16]> {
        self.cache.peek(&(*attrs, profile)).map(Vec::as_slice)
    }

    /// Check if an entry is cached.
    #[must_use]
    pub fn contains(&self, attrs: &Attributes, profile: TerminalProfile) -> bool {
        self.cache.contains(&(*attrs, profile))
    }

    /// Clear the cache.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    /// Get the current number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get the cache capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Resize the cache capacity.
    ///
    /// If the new capacity is smaller than the current size,
    /// entries will be evicted (LRU order).
    pub fn resize(&mut self, new_capacity: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = self.cache.cap().get(),
            to = new_capacity,
            "resizing sgr param cache"
        );
        self.cache.resize(capacity_of(new_capacity));
    }
}

impl Default for ParamCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

// Thread-local parameter cache, so hot render paths need not thread a cache
// through every call.
#[cfg(feature = "thread_local_cache")]
thread_local! {
    static THREAD_CACHE: std::cell::RefCell<ParamCache> =
        std::cell::RefCell::new(ParamCache::with_default_capacity());
}

/// Generate parameters through the thread-local cache.
#[cfg(feature = "thread_local_cache")]
pub fn cached_params(attrs: &Attributes, profile: TerminalProfile) -> Vec<u16> {
    THREAD_CACHE.with(|cache| cache.borrow_mut().get_or_compute(attrs, profile).to_vec())
}

/// Clear the thread-local cache.
#[cfg(feature = "thread_local_cache")]
pub fn clear_thread_cache() {
    THREAD_CACHE.with(|cache| cache.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Ansi16, Color};

    #[test]
    fn new_cache_is_empty() {
        let cache = ParamCache::new(10);
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.capacity(), 10);
    }

    #[test]
    fn zero_capacity_becomes_one() {
        assert_eq!(ParamCache::new(0).capacity(), 1);
    }

    #[test]
    fn default_capacity() {
        assert_eq!(ParamCache::default().capacity(), DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn results_match_uncached_generation() {
        let mut cache = ParamCache::new(8);
        let attrs = Attributes::new().bold().fg(Color::rgb(9, 9, 200));
        for profile in [
            TerminalProfile::TrueColor,
            TerminalProfile::Xterm256,
            TerminalProfile::Basic16,
            TerminalProfile::NoColor,
        ] {
            let expected = to_params(&attrs, profile);
            assert_eq!(cache.get_or_compute(&attrs, profile), expected.as_slice());
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn hits_and_misses_are_counted() {
        let mut cache = ParamCache::new(8);
        let attrs = Attributes::new().underline();
        let _ = cache.get_or_compute(&attrs, TerminalProfile::TrueColor);
        let _ = cache.get_or_compute(&attrs, TerminalProfile::TrueColor);
        let _ = cache.get_or_compute(&attrs, TerminalProfile::TrueColor);
        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 2.0 / 3.0).abs() < 1e-9);
        cache.reset_stats();
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = ParamCache::new(2);
        let a = Attributes::new().bold();
        let b = Attributes::new().italic();
        let c = Attributes::new().fg(Ansi16::Red);
        let p = TerminalProfile::TrueColor;

        let _ = cache.get_or_compute(&a, p);
        let _ = cache.get_or_compute(&b, p);
        // Touch `a` so `b` is the oldest.
        let _ = cache.get_or_compute(&a, p);
        let _ = cache.get_or_compute(&c, p);

        assert!(cache.contains(&a, p));
        assert!(!cache.contains(&b, p));
        assert!(cache.contains(&c, p));
    }

    #[test]
    fn peek_does_not_count() {
        let mut cache = ParamCache::new(4);
        let attrs = Attributes::new().dim();
        assert!(cache.peek(&attrs, TerminalProfile::TrueColor).is_none());
        let _ = cache.get_or_compute(&attrs, TerminalProfile::TrueColor);
        assert_eq!(cache.peek(&attrs, TerminalProfile::TrueColor), Some(&[2u16][..]));
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn resize_evicts() {
        let mut cache = ParamCache::new(4);
        for attrs in [
            Attributes::new().bold(),
            Attributes::new().dim(),
            Attributes::new().italic(),
        ] {
            let _ = cache.get_or_compute(&attrs, TerminalProfile::TrueColor);
        }
        cache.resize(1);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&Attributes::new().italic(), TerminalProfile::TrueColor));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[cfg(feature = "thread_local_cache")]
    #[test]
    fn thread_local_cache_matches() {
        clear_thread_cache();
        let attrs = Attributes::new().inverse();
        assert_eq!(cached_params(&attrs, TerminalProfile::TrueColor), vec![7]);
        assert_eq!(cached_params(&attrs, TerminalProfile::TrueColor), vec![7]);
    }
}
