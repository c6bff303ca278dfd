//! Claim validation for decoded access tokens

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};
use crate::token::TokenPayload;

/// Default expiry leeway in seconds (ten minutes)
pub(crate) const DEFAULT_LEEWAY_SECONDS: u64 = 600;

/// Rules for validating the time and audience claims of a token
#[derive(Debug, Clone)]
pub struct ClaimRules {
    expected_audience: String,
    leeway_seconds: u64,
}

impl ClaimRules {
    /// Rules accepting the given audience, with the default expiry leeway
    pub fn new(expected_audience: impl Into<String>) -> Self {
        Self {
            expected_audience: expected_audience.into(),
            leeway_seconds: DEFAULT_LEEWAY_SECONDS,
        }
    }

    /// Override the expiry leeway
    pub fn leeway(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds;
        self
    }
}

/// Validate claims against the system clock
pub fn validate_claims(payload: &TokenPayload, rules: &ClaimRules) -> Result<()> {
    validate_claims_at(payload, rules, current_timestamp())
}

/// Validate claims at the given unix timestamp
///
/// Checks run in order and stop at the first failure: the token must
/// have been issued in the past, must not be past its expiry plus the
/// leeway, and must carry the expected audience. The leeway applies to
/// the expiry only, never to the issue time.
pub fn validate_claims_at(payload: &TokenPayload, rules: &ClaimRules, now: i64) -> Result<()> {
    if payload.issued_at >= now {
        return Err(Error::TokenNotYetValid {
            issued_at: payload.issued_at,
            now,
        });
    }

    if payload.expiry.saturating_add(rules.leeway_seconds as i64) < now {
        return Err(Error::TokenExpired {
            expired_at: payload.expiry,
            now,
            leeway: rules.leeway_seconds,
        });
    }

    if payload.audience != rules.expected_audience {
        return Err(Error::AudienceMismatch {
            expected: rules.expected_audience.clone(),
            found: payload.audience.clone(),
        });
    }

    Ok(())
}

/// Current unix timestamp in seconds
pub(crate) fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
