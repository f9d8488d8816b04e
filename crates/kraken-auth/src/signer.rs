//! HMAC-SHA512 request signing
//!
//! Kraken signature algorithm:
//! 1. SHA256(nonce + POST_data)
//! 2. HMAC-SHA512(secret, uri_path + SHA256_result)
//! 3. Base64 encode result
//!
//! The POST data is the form-encoded parameter map with keys in ascending
//! order, so the same parameters always produce the same body and signature.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};
use std::collections::BTreeMap;
use tracing::trace;

use crate::credentials::Credentials;
use crate::error::AuthResult;
use crate::nonce::next_nonce;

type HmacSha512 = Hmac<Sha512>;

/// Request parameters, ordered by key
pub type Params = BTreeMap<String, String>;

/// Name of the nonce parameter in private requests
pub const NONCE_PARAM: &str = "nonce";

/// Form-encode parameters as `application/x-www-form-urlencoded`
pub fn encode_params(params: &Params) -> AuthResult<String> {
    Ok(serde_urlencoded::to_string(params)?)
}

/// Sign a parameter map for the given path
///
/// The nonce hashed into the signature is the `nonce` entry of `params`, or
/// the empty string when there is none.
pub fn sign(path: &str, params: &Params, secret: &[u8]) -> AuthResult<String> {
    let post_data = encode_params(params)?;
    let nonce = params.get(NONCE_PARAM).map(String::as_str).unwrap_or("");
    Ok(sign_encoded(path, nonce, &post_data, secret))
}

/// Sign an already-encoded POST body
pub fn sign_encoded(path: &str, nonce: &str, post_data: &str, secret: &[u8]) -> String {
    let mut sha256 = Sha256::new();
    sha256.update(nonce.as_bytes());
    sha256.update(post_data.as_bytes());
    let digest = sha256.finalize();

    let mut mac = HmacSha512::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(path.as_bytes());
    mac.update(&digest);

    BASE64.encode(mac.finalize().into_bytes())
}

/// A private request ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Form-encoded body, including the nonce
    pub post_data: String,
    /// Value for the `API-Key` header
    pub api_key: String,
    /// Value for the `API-Sign` header
    pub signature: String,
}

/// Request signer for building authenticated requests
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    path: String,
    nonce: u64,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer that uses the next process-wide nonce
    pub fn new(credentials: &'a Credentials, path: impl Into<String>) -> Self {
        Self::with_nonce(credentials, path, next_nonce())
    }

    /// Create a signer with a fixed nonce
    pub fn with_nonce(credentials: &'a Credentials, path: impl Into<String>, nonce: u64) -> Self {
        Self {
            credentials,
            path: path.into(),
            nonce,
        }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Get the URL path being signed
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Add the nonce to `params`, encode them and sign the result
    ///
    /// A caller-supplied `nonce` entry is overwritten.
    pub fn sign(&self, params: &Params) -> AuthResult<SignedRequest> {
        let nonce = self.nonce.to_string();
        let mut params = params.clone();
        params.insert(NONCE_PARAM.to_string(), nonce.clone());

        let post_data = encode_params(&params)?;
        let signature = self.credentials.sign(&self.path, &nonce, &post_data);

        trace!(path = %self.path, nonce = self.nonce, "Signed private request");

        Ok(SignedRequest {
            post_data,
            api_key: self.credentials.api_key().to_string(),
            signature,
        })
    }
}
