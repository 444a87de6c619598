// src/edgar/cache.rs
//! Remembers resolved CIKs so repeated lookups skip the company index download.

use crate::edgar::models::Cik;
use cached::{Cached, UnboundCache};
use tokio::sync::Mutex;

/// Name -> CIK cache, keyed by the upper-cased company name.
///
/// Only successful resolutions are stored. The index is static for the
/// length of a session, so entries never expire.
pub struct CikCache {
    inner: Mutex<UnboundCache<String, Cik>>,
}

impl CikCache {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(UnboundCache::new()),
        }
    }

    /// Matches the resolver's case folding, so any casing of a name shares one entry.
    fn normalize(company_name: &str) -> String {
        company_name.to_uppercase()
    }

    pub async fn get(&self, company_name: &str) -> Option<Cik> {
        let key = Self::normalize(company_name);
        let mut cache = self.inner.lock().await;
        cache.cache_get(&key).cloned()
    }

    pub async fn insert(&self, company_name: &str, cik: Cik) {
        let key = Self::normalize(company_name);
        let mut cache = self.inner.lock().await;
        let _ = cache.cache_set(key, cik);
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.cache_size()
    }
}

impl Default for CikCache {
    fn default() -> Self {
        Self::new()
    }
}
