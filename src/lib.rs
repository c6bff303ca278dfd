//! Offline verification of SIAM OAuth access tokens.
//!
//! Tokens are RS256-signed JWTs. The provider's public key is fetched
//! from its key-distribution endpoint and cached; verification itself
//! runs without any network round trip. Online introspection is
//! available separately for revocation checks.
//!
//! ```no_run
//! use siam_auth::{TokenVerifier, VerifierConfig};
//!
//! # async fn example(raw_token: &str) -> siam_auth::Result<()> {
//! let verifier = TokenVerifier::new(VerifierConfig::new(
//!     "https://idp.example/nidp/oauth/nam/keys",
//!     "client-1234",
//! ))?;
//! verifier.refresh_key_once().await?;
//! let _refresh = verifier.start_refresh();
//!
//! let user = verifier.verify_user(raw_token)?;
//! if user.has_role("news-member") {
//!     // grant access
//! }
//! # Ok(())
//! # }
//! ```

mod claims;
mod config;
mod error;
mod introspect;
mod jwks;
mod keystore;
mod token;
mod user;
mod verifier;
mod verify;

pub(crate) mod limits;
pub(crate) mod utils;

pub use claims::{validate_claims, validate_claims_at, ClaimRules};
pub use config::{IntrospectionConfig, VerifierConfig};
pub use error::{Error, Result};
pub use keystore::{KeyStore, PublicKeyMaterial, RefreshTask};
pub use token::{DecodedToken, TokenHeader, TokenPayload};
pub use user::UserView;
pub use verifier::TokenVerifier;
pub use verify::verify_signature;
