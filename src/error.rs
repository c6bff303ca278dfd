//! Errors for siam-auth

use thiserror::Error;

/// Verification errors
///
/// Every failure a caller can observe is one of these variants. Callers
/// should log the specific variant but expose only a generic
/// "unauthorized" outcome to end users.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Token Format Errors
    // ============================================================================
    #[error("Invalid token format: expected three parts separated by '.'")]
    MalformedToken,

    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("Failed to decode {segment}: {reason}")]
    DecodingError { segment: String, reason: String },

    // ============================================================================
    // Key Material Errors
    // ============================================================================
    #[error("Key fetch failed: {0}")]
    KeyFetchError(String),

    #[error("No verification key available yet")]
    KeyNotAvailable,

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Token issuer '{issuer}' does not match the key source '{source_url}'")]
    IssuerMismatch { issuer: String, source_url: String },

    #[error("Signature verification failed")]
    SignatureInvalid,

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Token issued in the future at {issued_at} (now: {now})")]
    TokenNotYetValid { issued_at: i64, now: i64 },

    #[error("Token expired at {expired_at} (now: {now}, leeway: {leeway}s)")]
    TokenExpired {
        expired_at: i64,
        now: i64,
        leeway: u64,
    },

    #[error("Token audience mismatch: expected '{expected}', found '{found}'")]
    AudienceMismatch { expected: String, found: String },

    // ============================================================================
    // Role Extraction Errors
    // ============================================================================
    #[error("Group membership entry has no 'cn' component: '{0}'")]
    RoleParseError(String),

    // ============================================================================
    // Introspection Errors
    // ============================================================================
    #[error("Token reported inactive by the identity provider")]
    TokenInactive,

    #[error("Introspection call failed: {0}")]
    IntrospectionFailed(String),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid configuration: {0}")]
    ConfigurationInvalid(String),
}

/// Result type alias for verification operations
pub type Result<T> = std::result::Result<T, Error>;
