//! Key-distribution document fetching and parsing
//!
//! The provider publishes its signing key as a JSON document with a
//! `keys` list. Only the first entry is used; the provider signs all
//! access tokens with a single RSA key.

use miniserde::Deserialize;
use tracing::debug;

use crate::claims::current_timestamp;
use crate::error::{Error, Result};
use crate::keystore::PublicKeyMaterial;
use crate::limits::{MAX_EXPONENT_SIZE, MAX_JWKS_RESPONSE_SIZE, MAX_MODULUS_SIZE};
use crate::utils::base64url;

/// A single key entry in the key-distribution document
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Jwk {
    /// Algorithm the key is meant for
    pub alg: Option<String>,
    /// Key type, "RSA" when present
    pub kty: Option<String>,
    /// RSA modulus, Base64URL without padding
    pub n: Option<String>,
    /// RSA public exponent, Base64URL without padding
    pub e: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct JwkSet {
    pub keys: Vec<Jwk>,
}

/// Fetch the key-distribution document and turn its first entry into
/// usable key material.
pub(crate) async fn fetch_key_material(
    client: &reqwest::Client,
    url: &str,
) -> Result<PublicKeyMaterial> {
    debug!(url = %url, "Fetching key-distribution document");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::KeyFetchError(format!("network: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::KeyFetchError(format!("http: status {status}")));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::KeyFetchError(format!("network: {e}")))?;
    if bytes.len() > MAX_JWKS_RESPONSE_SIZE {
        return Err(Error::KeyFetchError(format!(
            "response too large: {} bytes",
            bytes.len()
        )));
    }

    let body = std::str::from_utf8(&bytes)
        .map_err(|e| Error::KeyFetchError(format!("invalid utf-8: {e}")))?;
    let set: JwkSet = miniserde::json::from_str(body)
        .map_err(|_| Error::KeyFetchError("invalid key document json".to_string()))?;

    let key = set
        .keys
        .first()
        .ok_or_else(|| Error::KeyFetchError("no keys in document".to_string()))?;

    key_material_from_jwk(key, url)
}

/// Decode one key entry into key material
pub(crate) fn key_material_from_jwk(key: &Jwk, source_url: &str) -> Result<PublicKeyMaterial> {
    if let Some(kty) = &key.kty {
        if kty != "RSA" {
            return Err(Error::KeyFetchError(format!("unsupported key type '{kty}'")));
        }
    }

    let n = key
        .n
        .as_deref()
        .ok_or_else(|| Error::KeyFetchError("key entry missing modulus (n)".to_string()))?;
    let e = key
        .e
        .as_deref()
        .ok_or_else(|| Error::KeyFetchError("key entry missing exponent (e)".to_string()))?;

    let modulus = base64url::decode_bytes(n, "modulus", MAX_MODULUS_SIZE)?;
    if modulus.iter().all(|&b| b == 0) {
        return Err(Error::DecodingError {
            segment: "modulus".to_string(),
            reason: "modulus is zero".to_string(),
        });
    }

    let exponent_bytes = base64url::decode_bytes(e, "exponent", MAX_EXPONENT_SIZE)?;
    let exponent = decode_exponent(&exponent_bytes)?;

    if let Some(alg) = &key.alg {
        debug!(alg = %alg, modulus_bits = modulus.len() * 8, "Decoded key material");
    }

    Ok(PublicKeyMaterial {
        modulus,
        exponent,
        source_url: source_url.to_string(),
        last_refreshed: current_timestamp(),
    })
}

/// The provider encodes the exponent with as few bytes as possible.
/// Left-pad with zero bytes to a 32-bit field and read it big-endian.
fn decode_exponent(bytes: &[u8]) -> Result<u32> {
    if bytes.len() > 4 {
        return Err(Error::DecodingError {
            segment: "exponent".to_string(),
            reason: format!("exponent too large: {} bytes", bytes.len()),
        });
    }

    let mut padded = [0u8; 4];
    padded[4 - bytes.len()..].copy_from_slice(bytes);
    let exponent = u32::from_be_bytes(padded);

    if exponent == 0 {
        return Err(Error::DecodingError {
            segment: "exponent".to_string(),
            reason: "exponent is zero".to_string(),
        });
    }

    Ok(exponent)
}
