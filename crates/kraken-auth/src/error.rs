//! Error types for authentication operations

/// Errors that can occur while preparing signed requests
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Request parameters could not be form-encoded
    #[error("Failed to encode parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("KRAKEN_API_KEY".to_string());
        assert!(err.to_string().contains("KRAKEN_API_KEY"));
    }

    #[test]
    fn test_invalid_credentials_display() {
        let err = AuthError::InvalidCredentials("bad padding".to_string());
        assert_eq!(err.to_string(), "Invalid credentials: bad padding");
    }
}
