//! Authentication credentials for Kraken API
//!
//! # Security
//!
//! Private keys are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use secrecy::{ExposeSecret, SecretBox};

use crate::error::{AuthError, AuthResult};
use crate::signer::sign_encoded;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "KRAKEN_API_KEY";
/// Environment variable holding the base64 private key
pub const PRIVATE_KEY_ENV: &str = "KRAKEN_PRIVATE_KEY";

/// API credentials for authenticated requests
///
/// Private keys are automatically zeroized when the Credentials are dropped,
/// preventing sensitive data from remaining in memory.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// Private key (decoded from base64, zeroized on drop)
    private_key: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from API key and private key
    ///
    /// # Arguments
    /// * `api_key` - Your Kraken API key
    /// * `private_key` - Your private key (base64 encoded string)
    ///
    /// An empty private key is accepted and yields an empty signing key.
    pub fn new(api_key: impl Into<String>, private_key: impl AsRef<str>) -> AuthResult<Self> {
        let decoded = BASE64.decode(private_key.as_ref()).map_err(|e| {
            AuthError::InvalidCredentials(format!("Invalid base64 private key: {}", e))
        })?;

        Ok(Self::from_raw(api_key, decoded))
    }

    /// Create credentials from an already-decoded private key
    pub fn from_raw(api_key: impl Into<String>, private_key: Vec<u8>) -> Self {
        Self {
            api_key: api_key.into(),
            private_key: SecretBox::new(Box::new(private_key)),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `KRAKEN_API_KEY` and `KRAKEN_PRIVATE_KEY` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let private_key = std::env::var(PRIVATE_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(PRIVATE_KEY_ENV.to_string()))?;

        Self::new(api_key, private_key)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign an encoded POST body for `path`
    ///
    /// # Returns
    /// Base64-encoded signature
    pub fn sign(&self, path: &str, nonce: &str, post_data: &str) -> String {
        sign_encoded(path, nonce, post_data, self.private_key.expose_secret())
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self::from_raw(self.api_key.clone(), self.private_key.expose_secret().clone())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", visible))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
