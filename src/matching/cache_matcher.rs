use std::sync::Arc;

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, trace};

use crate::matching::eligibility::preload_fingerprint;
use crate::matching::key::derive_key;
use crate::matching::outcome::CachedOutcome;
use crate::models::{MatchedPair, RequestFingerprint, Simulation};
use crate::store::CacheBackend;

/// Returned by every operation when no backend has been attached.
#[derive(Debug, Error)]
#[error("No cache set")]
pub struct CacheNotConfigured;

/// Fast-path cache over the full matching engine.
///
/// A stateless facade: all shared state lives in the injected backend, which
/// is assumed safe for concurrent use. A reload's flush-then-preload is not
/// atomic with respect to concurrent lookups; a request arriving mid-reload
/// may see an empty or partially preloaded cache, which only ever causes a
/// safe miss.
#[derive(Clone, Default)]
pub struct CacheMatcher {
    store: Option<Arc<dyn CacheBackend>>,
}

impl CacheMatcher {
    pub fn new(store: Arc<dyn CacheBackend>) -> Self {
        Self { store: Some(store) }
    }

    fn backend(&self) -> Result<&dyn CacheBackend, CacheNotConfigured> {
        self.store.as_deref().ok_or(CacheNotConfigured)
    }

    /// Looks up a previously computed outcome for a fingerprint.
    ///
    /// `Ok(None)` means the fingerprint has not been evaluated yet; the
    /// caller should run the full matching engine and save its result.
    pub fn get_cached_response(
        &self,
        fingerprint: &RequestFingerprint,
    ) -> Result<Option<CachedOutcome>> {
        let store = self.backend()?;
        let key = derive_key(fingerprint);
        let Some(raw) = store.get(key.as_bytes())? else {
            trace!(%key, "match cache miss");
            return Ok(None);
        };
        let outcome = CachedOutcome::from_bytes(&raw)?;
        trace!(%key, found = outcome.is_found(), "match cache hit");
        Ok(Some(outcome))
    }

    /// Decodes every stored outcome, for diagnostics and export. A decode
    /// failure on any entry fails the whole call.
    pub fn get_all_responses(&self) -> Result<Vec<CachedOutcome>> {
        let store = self.backend()?;
        let mut outcomes = Vec::new();
        for key in store.keys()? {
            // A key may disappear between listing and reading during a
            // concurrent flush; skip it rather than fail.
            let Some(raw) = store.get(&key)? else { continue };
            outcomes.push(CachedOutcome::from_bytes(&raw)?);
        }
        Ok(outcomes)
    }

    /// Records the matching engine's outcome for a fingerprint.
    ///
    /// Passing `None` stores a confirmed negative so future identical
    /// requests skip the engine entirely. Callers record a failed engine run
    /// the same way, as an absent pair.
    pub fn save_request_matcher_response_pair(
        &self,
        fingerprint: &RequestFingerprint,
        pair: Option<&MatchedPair>,
    ) -> Result<()> {
        let store = self.backend()?;
        let outcome = CachedOutcome::from_pair(pair.cloned());
        let key = derive_key(fingerprint);
        store.set(key.as_bytes(), &outcome.to_bytes()?)?;
        trace!(%key, found = outcome.is_found(), "match outcome saved");
        Ok(())
    }

    /// Drops every entry. Called when a simulation is reloaded: stored
    /// outcomes may reference pairs that no longer exist or are shadowed by
    /// new earlier-ordered templates.
    pub fn flush_cache(&self) -> Result<()> {
        self.backend()?.flush()
    }

    /// Primes the cache from a simulation's templates before any traffic
    /// arrives.
    ///
    /// Only templates reducible to a single concrete fingerprint are written;
    /// the rest are skipped silently and fall through to the engine at
    /// request time. Pairs are processed in simulation order, so when two
    /// eligible templates share a derived key the later write wins.
    pub fn preload_cache(&self, simulation: &Simulation) -> Result<()> {
        let store = self.backend()?;
        let mut preloaded = 0usize;
        for pair in simulation.pairs() {
            let Some(fingerprint) = preload_fingerprint(&pair.template) else {
                continue;
            };
            let key = derive_key(&fingerprint);
            let outcome = CachedOutcome::from_pair(Some(pair.clone()));
            store.set(key.as_bytes(), &outcome.to_bytes()?)?;
            preloaded += 1;
        }
        debug!(preloaded, total = simulation.len(), "match cache preloaded");
        Ok(())
    }
}
