//! Base64URL decoding per RFC 4648
//!
//! Thin wrapper around the `base64` crate. Decoding errors carry the name
//! of the segment being decoded so callers can tell which part of a token
//! or key document was rejected.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Decode a Base64URL string (no padding) to bytes with a maximum size limit
pub(crate) fn decode_bytes(input: &str, segment: &str, max_size: usize) -> Result<Vec<u8>> {
    let result = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::DecodingError {
            segment: segment.to_string(),
            reason: format!("base64url decode failed: {e}"),
        })?;

    if result.len() > max_size {
        return Err(Error::DecodingError {
            segment: segment.to_string(),
            reason: format!(
                "decoded size exceeds limit: {} bytes (max: {})",
                result.len(),
                max_size
            ),
        });
    }

    Ok(result)
}

/// Decode a Base64URL string to UTF-8 with a size limit
pub(crate) fn decode_string(input: &str, segment: &str, max_size: usize) -> Result<String> {
    decode_bytes(input, segment, max_size).and_then(|bytes| {
        String::from_utf8(bytes).map_err(|e| Error::DecodingError {
            segment: segment.to_string(),
            reason: format!("invalid UTF-8: {e}"),
        })
    })
}
