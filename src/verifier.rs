//! Token verification facade
//!
//! Wires the key store, the signature check, and the claim rules into a
//! single verifier. One instance is built per service and shared;
//! verification itself is synchronous and safe to call from many tasks
//! at once.

use std::sync::Arc;

use crate::claims::{self, ClaimRules};
use crate::config::VerifierConfig;
use crate::error::{Error, Result};
use crate::introspect;
use crate::keystore::{KeyStore, PublicKeyMaterial, RefreshTask};
use crate::token::DecodedToken;
use crate::user::UserView;
use crate::verify;

/// Verifies provider-issued access tokens against the current signing key
pub struct TokenVerifier {
    config: VerifierConfig,
    rules: ClaimRules,
    keys: Arc<KeyStore>,
    client: reqwest::Client,
}

impl TokenVerifier {
    /// Build a verifier from the configuration
    ///
    /// Returns `ConfigurationInvalid` instead of panicking, so a bad
    /// deployment setting surfaces as an error the service can report.
    pub fn new(config: VerifierConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| {
                Error::ConfigurationInvalid(format!("failed to build http client: {e}"))
            })?;

        let keys = Arc::new(KeyStore::new(
            client.clone(),
            config.jwks_url.clone(),
            config.refresh_interval,
        ));
        let rules =
            ClaimRules::new(config.expected_audience.clone()).leeway(config.leeway.as_secs());

        Ok(Self {
            config,
            rules,
            keys,
            client,
        })
    }

    /// The key store backing this verifier
    pub fn key_store(&self) -> &Arc<KeyStore> {
        &self.keys
    }

    /// Fetch the signing key once, outside the schedule
    pub async fn refresh_key_once(&self) -> Result<Arc<PublicKeyMaterial>> {
        self.keys.refresh_once().await
    }

    /// Start the periodic key refresh on the current tokio runtime
    ///
    /// The returned handle stops the refresh loop when dropped.
    pub fn start_refresh(&self) -> RefreshTask {
        self.keys.spawn_refresh_task()
    }

    /// Decode a token and run the full offline verification
    ///
    /// The signature is checked before any claim; a claim error implies
    /// the signature already verified.
    pub fn verify(&self, token: &str) -> Result<DecodedToken> {
        let decoded = DecodedToken::decode(token)?;
        let key = self.keys.current_key()?;
        verify::verify_signature(&decoded, &key, self.config.expected_issuer.as_deref())?;
        claims::validate_claims(&decoded.payload, &self.rules)?;
        Ok(decoded)
    }

    /// Verify a token and derive the owner's user record
    pub fn verify_user(&self, token: &str) -> Result<UserView> {
        let decoded = self.verify(token)?;
        UserView::from_payload(&decoded.payload)
    }

    /// Ask the identity provider whether the token is still active
    ///
    /// Requires an introspection endpoint in the configuration.
    pub async fn introspect(&self, token: &str) -> Result<()> {
        let introspection = self.config.introspection.as_ref().ok_or_else(|| {
            Error::ConfigurationInvalid("no introspection endpoint configured".to_string())
        })?;
        introspect::introspect_token(&self.client, introspection, token).await
    }
}
