//! Access token decoding
//!
//! Splits a compact-serialized token into its three segments and parses
//! the JSON carried in the first two. Decoding performs no verification;
//! a decoded token is untrusted until its signature and claims have been
//! checked.

use miniserde::Deserialize;

use crate::error::{Error, Result};
use crate::limits::{
    MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_DECODED_SIGNATURE_SIZE,
    MAX_TOKEN_LENGTH,
};
use crate::utils::base64url;

/// Token header fields relevant for verification
#[derive(Debug, Clone, Deserialize)]
pub struct TokenHeader {
    /// Signature algorithm named by the issuer
    #[serde(rename = "alg")]
    pub algorithm: String,
    /// Identifier of the signing key
    #[serde(rename = "kid")]
    pub key_id: Option<String>,
    /// Token type, usually "JWT"
    #[serde(rename = "typ")]
    pub token_type: Option<String>,
}

/// Claims carried by a provider-issued access token
///
/// All fields are required; the provider always emits them and a token
/// missing any of them cannot be validated.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPayload {
    /// Issuer URL
    #[serde(rename = "iss")]
    pub issuer: String,
    /// Account name of the token owner
    #[serde(rename = "uid")]
    pub subject_id: String,
    /// Human-readable name of the token owner
    #[serde(rename = "fullName")]
    pub display_name: String,
    /// Mail address of the token owner
    #[serde(rename = "mail")]
    pub email: String,
    /// Client id the token was issued for
    #[serde(rename = "aud")]
    pub audience: String,
    /// Directory group entries carrying the role assignments
    #[serde(rename = "groupMembership")]
    pub group_membership: Vec<String>,
    /// Expiry as unix seconds
    #[serde(rename = "exp")]
    pub expiry: i64,
    /// Issue time as unix seconds
    #[serde(rename = "iat")]
    pub issued_at: i64,
}

/// A decoded but not yet verified access token
#[derive(Debug, Clone)]
pub struct DecodedToken {
    pub header: TokenHeader,
    pub payload: TokenPayload,
    /// The first two encoded segments exactly as signed by the issuer
    pub signing_input: Vec<u8>,
    /// Decoded signature bytes
    pub signature: Vec<u8>,
    /// The compact serialization the token arrived as
    pub raw: String,
}

impl DecodedToken {
    /// Split and decode a compact-serialized token
    pub fn decode(token: &str) -> Result<DecodedToken> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let mut parts = token.split('.');
        let header_b64 = parts.next().ok_or(Error::MalformedToken)?;
        let payload_b64 = parts.next().ok_or(Error::MalformedToken)?;
        let signature_b64 = parts.next().ok_or(Error::MalformedToken)?;
        if parts.next().is_some() {
            return Err(Error::MalformedToken);
        }

        // The signature covers the encoded segments as they arrived.
        // Re-encoding the parsed JSON is not canonical and would change
        // the signed bytes.
        let signing_input = format!("{header_b64}.{payload_b64}").into_bytes();

        let header_json = base64url::decode_string(header_b64, "header", MAX_DECODED_HEADER_SIZE)?;
        let header: TokenHeader = miniserde::json::from_str(&header_json).map_err(|e| {
            Error::DecodingError {
                segment: "header".to_string(),
                reason: format!("invalid json: {e}"),
            }
        })?;

        let payload_json =
            base64url::decode_string(payload_b64, "payload", MAX_DECODED_PAYLOAD_SIZE)?;
        let payload: TokenPayload = miniserde::json::from_str(&payload_json).map_err(|e| {
            Error::DecodingError {
                segment: "payload".to_string(),
                reason: format!("invalid json: {e}"),
            }
        })?;

        let signature =
            base64url::decode_bytes(signature_b64, "signature", MAX_DECODED_SIGNATURE_SIZE)?;

        Ok(DecodedToken {
            header,
            payload,
            signing_input,
            signature,
            raw: token.to_string(),
        })
    }
}
