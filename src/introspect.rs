//! Online token introspection
//!
//! Asks the identity provider's introspection endpoint whether a token
//! is still active. This is the online complement to the offline
//! checks: revocation only shows up here. Every failure mode counts as
//! "not valid"; the caller never treats a transport problem as an
//! active token.

use miniserde::Deserialize;
use tracing::debug;

use crate::config::IntrospectionConfig;
use crate::error::{Error, Result};
use crate::limits::MAX_INTROSPECTION_RESPONSE_SIZE;

#[derive(Debug, Deserialize)]
struct IntrospectionResponse {
    active: bool,
}

/// Ask the provider whether the token is active
///
/// Sends the RFC 7662 form request with the client credentials as HTTP
/// Basic auth. Returns `TokenInactive` when the provider says the token
/// is revoked or unknown, `IntrospectionFailed` for every transport or
/// protocol problem.
pub(crate) async fn introspect_token(
    client: &reqwest::Client,
    config: &IntrospectionConfig,
    raw_token: &str,
) -> Result<()> {
    debug!(url = %config.url, "Introspecting token");

    let response = client
        .post(&config.url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[("token", raw_token)])
        .send()
        .await
        .map_err(|e| Error::IntrospectionFailed(format!("network: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::IntrospectionFailed(format!("http: status {status}")));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::IntrospectionFailed(format!("network: {e}")))?;
    if bytes.len() > MAX_INTROSPECTION_RESPONSE_SIZE {
        return Err(Error::IntrospectionFailed(format!(
            "response too large: {} bytes",
            bytes.len()
        )));
    }

    let body = std::str::from_utf8(&bytes)
        .map_err(|e| Error::IntrospectionFailed(format!("invalid utf-8: {e}")))?;
    let result: IntrospectionResponse = miniserde::json::from_str(body)
        .map_err(|_| Error::IntrospectionFailed("invalid introspection json".to_string()))?;

    if !result.active {
        return Err(Error::TokenInactive);
    }

    debug!("Provider reports the token active");
    Ok(())
}
