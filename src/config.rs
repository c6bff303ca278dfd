//! Verifier configuration

use std::time::Duration;

use crate::claims::DEFAULT_LEEWAY_SECONDS;
use crate::error::{Error, Result};
use crate::limits::MAX_URL_LENGTH;

/// Default interval between key refreshes (fifteen minutes)
pub(crate) const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(900);

/// Default timeout for requests to the identity provider
pub(crate) const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint and credentials for online token introspection
#[derive(Debug, Clone)]
pub struct IntrospectionConfig {
    /// Introspection endpoint URL
    pub url: String,
    /// Client id, also the audience tokens are issued for
    pub client_id: String,
    /// Client secret for the Basic auth challenge
    pub client_secret: String,
}

/// Configuration for a [`TokenVerifier`](crate::TokenVerifier)
///
/// ```
/// use std::time::Duration;
/// use siam_auth::VerifierConfig;
///
/// let config = VerifierConfig::new(
///     "https://idp.example/nidp/oauth/nam/keys",
///     "client-1234",
/// )
/// .refresh_interval(Duration::from_secs(300))
/// .leeway(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    pub(crate) jwks_url: String,
    pub(crate) expected_audience: String,
    pub(crate) expected_issuer: Option<String>,
    pub(crate) refresh_interval: Duration,
    pub(crate) leeway: Duration,
    pub(crate) http_timeout: Duration,
    pub(crate) introspection: Option<IntrospectionConfig>,
}

impl VerifierConfig {
    /// Configuration with defaults for everything but the key endpoint
    /// and the expected audience
    pub fn new(jwks_url: impl Into<String>, expected_audience: impl Into<String>) -> Self {
        Self {
            jwks_url: jwks_url.into(),
            expected_audience: expected_audience.into(),
            expected_issuer: None,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            leeway: Duration::from_secs(DEFAULT_LEEWAY_SECONDS),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            introspection: None,
        }
    }

    /// Interval between scheduled key refreshes
    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Leeway granted on the expiry claim
    pub fn leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// Require the token issuer to match this value exactly instead of
    /// checking it against the key source URL
    pub fn expected_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.expected_issuer = Some(issuer.into());
        self
    }

    /// Timeout for requests to the identity provider
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Enable online introspection against the given endpoint
    pub fn introspection(mut self, config: IntrospectionConfig) -> Self {
        self.introspection = Some(config);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_endpoint_url(&self.jwks_url, "key endpoint URL")?;

        if self.expected_audience.trim().is_empty() {
            return Err(Error::ConfigurationInvalid(
                "expected audience cannot be empty".to_string(),
            ));
        }
        if self.refresh_interval.is_zero() {
            return Err(Error::ConfigurationInvalid(
                "refresh interval cannot be zero".to_string(),
            ));
        }
        if self.http_timeout.is_zero() {
            return Err(Error::ConfigurationInvalid(
                "http timeout cannot be zero".to_string(),
            ));
        }

        if let Some(introspection) = &self.introspection {
            validate_endpoint_url(&introspection.url, "introspection URL")?;
            if introspection.client_id.trim().is_empty() {
                return Err(Error::ConfigurationInvalid(
                    "introspection client id cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn validate_endpoint_url(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ConfigurationInvalid(format!("{name} cannot be empty")));
    }
    if value.len() > MAX_URL_LENGTH {
        return Err(Error::ConfigurationInvalid(format!(
            "{name} too long: {} characters",
            value.len()
        )));
    }

    let parsed = value
        .parse::<url::Url>()
        .map_err(|e| Error::ConfigurationInvalid(format!("invalid {name}: {e}")))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::ConfigurationInvalid(format!(
            "{name} must use http or https"
        )));
    }
    if parsed.host_str().is_none() {
        return Err(Error::ConfigurationInvalid(format!(
            "{name} must have a host"
        )));
    }

    Ok(())
}
