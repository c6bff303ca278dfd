//! User identity and role extraction
//!
//! The provider encodes role assignments as LDAP-style group entries
//! in the token payload, one `cn=<role>,...` string per group. The
//! application only cares about the `cn` value.

use crate::error::{Error, Result};
use crate::token::TokenPayload;

/// Application-level view of a verified token's owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    /// Account name
    pub subject_id: String,
    /// Human-readable name
    pub display_name: String,
    /// Mail address
    pub email: String,
    /// Role names in group-membership order, duplicates preserved
    pub roles: Vec<String>,
}

impl UserView {
    /// Derive the user record from a decoded payload
    ///
    /// Fails with `RoleParseError` when any group entry is malformed; a
    /// partial role list is never returned.
    pub fn from_payload(payload: &TokenPayload) -> Result<UserView> {
        let roles = extract_roles(&payload.group_membership)?;
        Ok(UserView {
            subject_id: payload.subject_id.clone(),
            display_name: payload.display_name.clone(),
            email: payload.email.clone(),
            roles,
        })
    }

    /// Case-insensitive role membership check
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }
}

/// Extract role names from directory group entries
///
/// Each entry must start with a `cn=` component; the role name is that
/// component's value with surrounding whitespace trimmed.
pub(crate) fn extract_roles(entries: &[String]) -> Result<Vec<String>> {
    entries.iter().map(|entry| parse_role_entry(entry)).collect()
}

fn parse_role_entry(entry: &str) -> Result<String> {
    // Only the text up to the first comma belongs to the first component.
    let component = entry.split_once(',').map_or(entry, |(first, _)| first);
    let (key, value) = component
        .split_once('=')
        .ok_or_else(|| Error::RoleParseError(entry.to_string()))?;

    let value = value.trim();
    if key != "cn" || value.is_empty() {
        return Err(Error::RoleParseError(entry.to_string()));
    }

    Ok(value.to_string())
}
