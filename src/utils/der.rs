//! DER encoding of RSA public keys
//!
//! The key-distribution endpoint hands out raw modulus and exponent
//! values; the verification backend wants a DER-encoded
//! SubjectPublicKeyInfo document. This module bridges the two.

use der::asn1::{BitString, UintRef};
use der::{Encode, Sequence};
use spki::{AlgorithmIdentifierOwned, ObjectIdentifier, SubjectPublicKeyInfoOwned};

use crate::error::{Error, Result};
use crate::limits::MAX_MODULUS_SIZE;

/// OID for rsaEncryption (RFC 3279)
const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

fn key_error(operation: &str, details: impl std::fmt::Display) -> Error {
    Error::DecodingError {
        segment: "public key".to_string(),
        reason: format!("{operation}: {details}"),
    }
}

/// RSAPublicKey as defined in RFC 3447:
/// ```text
/// RSAPublicKey ::= SEQUENCE {
///     modulus           INTEGER,  -- n
///     publicExponent    INTEGER   -- e
/// }
/// ```
#[derive(Sequence)]
struct RsaPublicKey<'a> {
    modulus: UintRef<'a>,
    public_exponent: UintRef<'a>,
}

/// Build a DER-encoded SubjectPublicKeyInfo from a big-endian modulus
/// and a public exponent.
pub(crate) fn rsa_spki_from_n_e(modulus: &[u8], exponent: u32) -> Result<Vec<u8>> {
    if modulus.is_empty() {
        return Err(key_error("invalid rsa key", "empty modulus"));
    }
    if modulus.len() > MAX_MODULUS_SIZE {
        return Err(key_error(
            "invalid rsa key",
            format!("modulus too large: {} bytes", modulus.len()),
        ));
    }
    if exponent == 0 {
        return Err(key_error("invalid rsa key", "zero exponent"));
    }

    // UintRef handles INTEGER encoding, including the leading zero byte
    // required for positive values with the high bit set.
    let exponent_bytes = exponent.to_be_bytes();
    let rsa_key = RsaPublicKey {
        modulus: UintRef::new(modulus).map_err(|e| key_error("encode modulus", e))?,
        public_exponent: UintRef::new(&exponent_bytes)
            .map_err(|e| key_error("encode exponent", e))?,
    };
    let rsa_key_der = rsa_key
        .to_der()
        .map_err(|e| key_error("encode rsa key", e))?;

    let spki = SubjectPublicKeyInfoOwned {
        algorithm: AlgorithmIdentifierOwned {
            oid: RSA_ENCRYPTION_OID,
            parameters: Some(der::asn1::AnyRef::NULL.into()),
        },
        subject_public_key: BitString::new(0, rsa_key_der)
            .map_err(|e| key_error("encode subject public key", e))?,
    };

    spki.to_der().map_err(|e| key_error("encode spki", e))
}
