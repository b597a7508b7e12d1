//! Memoizing decorator for breed providers
//!
//! `CachingBreedProvider` wraps any `BreedProvider` and serves repeated
//! lookups from an in-memory map, recording how many calls actually
//! reached the wrapped provider. Failed lookups are deliberately never
//! cached: a breed that was not found is retried against the wrapped
//! provider on every subsequent request until it succeeds once.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use dogdex_domain::{Result, SubBreeds};
use tracing::debug;

use super::ports::BreedProvider;

/// Caching decorator around a [`BreedProvider`]
///
/// The cache maps a breed name to its sub-breed list. A key is present if
/// and only if a prior lookup for that breed succeeded; entries are never
/// removed or overwritten, so the map grows monotonically for the lifetime
/// of the instance. Each instance owns its own cache and counter, so
/// independent wrappers can coexist without interference.
///
/// # Concurrency
///
/// The cache check and the insert are each serialized by an internal lock,
/// but the delegated call is awaited with no lock held. Two tasks missing
/// on the same breed concurrently may therefore both reach the wrapped
/// provider; the duplicate insert carries the same successful value and
/// the first stored result wins, so "present implies succeeded" holds
/// either way.
pub struct CachingBreedProvider<P> {
    inner: P,
    cache: RwLock<HashMap<String, SubBreeds>>,
    calls_made: AtomicU64,
}

impl<P: BreedProvider> CachingBreedProvider<P> {
    /// Wrap the given provider with an empty cache and a zeroed counter
    pub fn new(inner: P) -> Self {
        Self { inner, cache: RwLock::new(HashMap::new()), calls_made: AtomicU64::new(0) }
    }

    /// Number of calls that reached the wrapped provider
    ///
    /// Counts both successful and failing delegated calls; cache hits are
    /// never counted. Purely observational.
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::Relaxed)
    }

    /// Number of breeds with a cached result
    pub fn cached_breeds(&self) -> usize {
        self.cache.read().unwrap().len()
    }

    /// Whether no lookup has succeeded yet
    pub fn is_empty(&self) -> bool {
        self.cached_breeds() == 0
    }

    fn lookup_cached(&self, breed: &str) -> Option<SubBreeds> {
        self.cache.read().unwrap().get(breed).cloned()
    }

    fn store(&self, breed: &str, sub_breeds: &SubBreeds) {
        let mut cache = self.cache.write().unwrap();
        // First success wins; racing misses may insert the same value twice
        cache.entry(breed.to_string()).or_insert_with(|| sub_breeds.clone());
    }
}

#[async_trait]
impl<P: BreedProvider> BreedProvider for CachingBreedProvider<P> {
    async fn sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        if let Some(cached) = self.lookup_cached(breed) {
            debug!(breed, "serving sub-breeds from cache");
            return Ok(cached);
        }

        self.calls_made.fetch_add(1, Ordering::Relaxed);
        debug!(breed, "cache miss, delegating to wrapped provider");

        // Failures propagate unchanged and are never stored, so the next
        // request for this breed delegates again.
        let sub_breeds = self.inner.sub_breeds(breed).await?;

        self.store(breed, &sub_breeds);
        debug!(breed, count = sub_breeds.len(), "cached sub-breeds");
        Ok(sub_breeds)
    }
}
