//! Size limit constants for input validation

/// Maximum length for a token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for the decoded token header JSON (8KB)
/// Headers are typically well under 1KB
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for the decoded token payload JSON (64KB)
/// Group membership lists can grow large, but must stay bounded
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

/// Maximum size for decoded signature bytes (1KB)
/// RSA signatures are 256-512 bytes for practical key sizes
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;

/// Maximum size for the key-distribution response body (512KB)
pub(crate) const MAX_JWKS_RESPONSE_SIZE: usize = 512 * 1024;

/// Maximum size for the decoded RSA modulus (1KB, an 8192-bit key)
pub(crate) const MAX_MODULUS_SIZE: usize = 1024;

/// Maximum size for the decoded RSA exponent (4 bytes, a 32-bit field)
pub(crate) const MAX_EXPONENT_SIZE: usize = 4;

/// Maximum size for the introspection response body (64KB)
pub(crate) const MAX_INTROSPECTION_RESPONSE_SIZE: usize = 64 * 1024;

/// Maximum length for configured endpoint URLs (2048 characters)
pub(crate) const MAX_URL_LENGTH: usize = 2048;
