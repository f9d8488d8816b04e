//! Request signing for Kraken's private REST API
//!
//! Private endpoints authenticate each call with two headers: `API-Key`,
//! the public key, and `API-Sign`, an HMAC-SHA512 signature over the URL
//! path and a SHA256 digest of the nonce and the form-encoded body.
//!
//! # Example
//!
//! ```no_run
//! use kraken_auth::{Credentials, Params, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!
//!     let mut params = Params::new();
//!     params.insert("trades".to_string(), "true".to_string());
//!
//!     let signed = RequestSigner::new(&creds, "/0/private/OpenOrders").sign(&params)?;
//!     println!("API-Sign: {}", signed.signature);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod nonce;
mod signer;

pub use credentials::{Credentials, API_KEY_ENV, PRIVATE_KEY_ENV};
pub use error::{AuthError, AuthResult};
pub use nonce::{next_nonce, NonceGenerator};
pub use signer::{encode_params, sign, sign_encoded, Params, RequestSigner, SignedRequest, NONCE_PARAM};
