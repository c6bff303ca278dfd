//! RSA signature verification
//!
//! Binds the token's claimed issuer to the key in use, then checks the
//! RSASSA-PKCS1-v1_5 signature over the SHA-256 digest of the signing
//! input. Pure computation; network and clock never enter here.

use aws_lc_rs::signature::{self, UnparsedPublicKey};

use crate::error::{Error, Result};
use crate::keystore::PublicKeyMaterial;
use crate::token::DecodedToken;
use crate::utils::der;

/// Verify that the token was signed by the key's owner
///
/// The issuer check runs first: with `expected_issuer` set, the token's
/// issuer must match it exactly; otherwise the issuer must be a prefix
/// of the URL the key was fetched from. Only then is the signature
/// checked against the signing input.
pub fn verify_signature(
    token: &DecodedToken,
    key: &PublicKeyMaterial,
    expected_issuer: Option<&str>,
) -> Result<()> {
    let issuer = token.payload.issuer.as_str();
    let issuer_ok = match expected_issuer {
        Some(expected) => issuer == expected,
        None => !issuer.is_empty() && key.source_url.starts_with(issuer),
    };
    if !issuer_ok {
        return Err(Error::IssuerMismatch {
            issuer: issuer.to_string(),
            source_url: key.source_url.clone(),
        });
    }

    let key_der = der::rsa_spki_from_n_e(&key.modulus, key.exponent)?;
    let public_key = UnparsedPublicKey::new(&signature::RSA_PKCS1_2048_8192_SHA256, &key_der);

    // The backend hashes the signing input with SHA-256 internally.
    public_key
        .verify(&token.signing_input, &token.signature)
        .map_err(|_| Error::SignatureInvalid)
}
