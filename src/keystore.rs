//! Public key store with scheduled refresh
//!
//! Holds the provider's current signing key behind a read-write lock and
//! swaps it atomically on refresh. Readers always get either the full
//! previous key or the full new one. A failed refresh leaves the stored
//! key untouched, so verification keeps working on stale material until
//! the endpoint recovers.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::jwks;

/// RSA public key material fetched from the key-distribution endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyMaterial {
    /// Big-endian modulus bytes
    pub modulus: Vec<u8>,
    /// Public exponent
    pub exponent: u32,
    /// URL the material was fetched from
    pub source_url: String,
    /// Unix seconds of the last successful refresh
    pub last_refreshed: i64,
}

/// Shared store for the provider's signing key
pub struct KeyStore {
    // None until the first successful refresh. Readers never see a
    // half-written key; only complete Arcs are swapped in.
    current: RwLock<Option<Arc<PublicKeyMaterial>>>,
    // Serializes refresh attempts without blocking readers.
    refresh_guard: tokio::sync::Mutex<()>,
    client: reqwest::Client,
    jwks_url: String,
    refresh_interval: Duration,
}

impl KeyStore {
    pub(crate) fn new(
        client: reqwest::Client,
        jwks_url: String,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            current: RwLock::new(None),
            refresh_guard: tokio::sync::Mutex::new(()),
            client,
            jwks_url,
            refresh_interval,
        }
    }

    /// The current key, without blocking on any network operation
    ///
    /// Fails with `KeyNotAvailable` until the first refresh has
    /// succeeded.
    pub fn current_key(&self) -> Result<Arc<PublicKeyMaterial>> {
        // Writers only store prebuilt Arcs, so a poisoned lock still
        // holds a coherent value.
        let guard = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().cloned().ok_or(Error::KeyNotAvailable)
    }

    /// Fetch the key-distribution document once and swap in the result
    ///
    /// On failure the previously stored key stays in place and the error
    /// is returned to the caller. At most one refresh runs at a time;
    /// concurrent calls wait for the running attempt and then start
    /// their own.
    pub async fn refresh_once(&self) -> Result<Arc<PublicKeyMaterial>> {
        let _refresh = self.refresh_guard.lock().await;

        let material = Arc::new(jwks::fetch_key_material(&self.client, &self.jwks_url).await?);
        {
            let mut current = self
                .current
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *current = Some(Arc::clone(&material));
        }

        info!(
            url = %self.jwks_url,
            modulus_bits = material.modulus.len() * 8,
            "Signing key refreshed"
        );
        Ok(material)
    }

    /// Start the periodic refresh loop on the current tokio runtime
    ///
    /// The first attempt runs immediately, then once per configured
    /// interval. Failures are logged and the loop keeps going. The
    /// returned handle stops the loop when dropped.
    pub fn spawn_refresh_task(self: &Arc<Self>) -> RefreshTask {
        let store = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(store.refresh_interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Err(e) = store.refresh_once().await {
                    warn!(
                        url = %store.jwks_url,
                        error = %e,
                        "Key refresh failed, keeping previous key"
                    );
                }
            }
        });
        RefreshTask { handle }
    }
}

/// Handle owning the background refresh loop
///
/// The loop is aborted when this handle is dropped, so whoever starts
/// the task decides how long it runs.
pub struct RefreshTask {
    handle: JoinHandle<()>,
}

impl RefreshTask {
    /// Stop the refresh loop
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
