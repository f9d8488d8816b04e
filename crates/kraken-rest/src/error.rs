//! Error types for REST API operations

use kraken_auth::AuthError;

/// Kraken API error categories, taken from the error string prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// EAPI:* errors - API-level issues
    Api,
    /// EGeneral:* errors - General errors
    General,
    /// EService:* errors - Service availability
    Service,
    /// EOrder:* errors - Trading/order errors
    Order,
    /// EFunding:* errors - Deposit/withdrawal errors
    Funding,
    /// EQuery:* errors - Query/search errors
    Query,
    /// ETrade:* errors - Trade execution errors
    Trade,
    /// Unknown error category
    Unknown,
}

impl ErrorCategory {
    /// Classify a raw error string such as `"EQuery:Unknown asset pair"`
    pub fn from_error(error: &str) -> Self {
        let prefix = error.split(':').next().unwrap_or("");
        match prefix {
            "EAPI" => Self::Api,
            "EGeneral" => Self::General,
            "EService" => Self::Service,
            "EOrder" => Self::Order,
            "EFunding" => Self::Funding,
            "EQuery" => Self::Query,
            "ETrade" => Self::Trade,
            _ => Self::Unknown,
        }
    }
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials or signing failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// API returned an error
    #[error("API error: {message}")]
    Api {
        /// Category of the first error
        category: ErrorCategory,
        /// All error strings from the envelope, joined
        message: String,
    },

    /// Non-success HTTP status without a JSON body
    #[error("HTTP status {status}: {body}")]
    Status {
        /// Status code
        status: u16,
        /// Response body, lossily decoded
        body: String,
    },

    /// Response was not JSON
    #[error("Response Content-Type is '{0}', but should be 'application/json'")]
    UnexpectedContentType(String),

    /// Method name is neither a known public nor private method
    #[error("Method is not supported: {0}")]
    UnsupportedMethod(String),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Result payload did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RestError {
    /// Create an API error from error strings returned by Kraken
    pub fn from_api_errors(errors: Vec<String>) -> Self {
        let category = errors
            .first()
            .map(|e| ErrorCategory::from_error(e))
            .unwrap_or(ErrorCategory::Unknown);

        Self::Api {
            category,
            message: errors.join(", "),
        }
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            Self::Api { category: ErrorCategory::Api, message } if message.contains("Rate limit")
        )
    }

    /// Check if the exchange rejected the key, signature or nonce
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::AuthRequired | Self::Auth(_) => true,
            Self::Api {
                category: ErrorCategory::Api,
                message,
            } => {
                message.contains("Invalid key")
                    || message.contains("Invalid signature")
                    || message.contains("Invalid nonce")
            }
            _ => false,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_error() {
        let err = RestError::from_api_errors(vec!["EAPI:Rate limit exceeded".to_string()]);
        assert!(err.is_rate_limited());
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_multiple_errors_joined() {
        let err = RestError::from_api_errors(vec![
            "EQuery:Unknown asset pair".to_string(),
            "EGeneral:Invalid arguments".to_string(),
        ]);

        match &err {
            RestError::Api { category, message } => {
                assert_eq!(*category, ErrorCategory::Query);
                assert_eq!(message, "EQuery:Unknown asset pair, EGeneral:Invalid arguments");
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "API error: EQuery:Unknown asset pair, EGeneral:Invalid arguments"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ErrorCategory::from_error("EOrder:Insufficient funds"), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from_error("EService:Unavailable"), ErrorCategory::Service);
        assert_eq!(ErrorCategory::from_error("EFunding:Unknown asset"), ErrorCategory::Funding);
        assert_eq!(ErrorCategory::from_error("ETrade:Locked"), ErrorCategory::Trade);
        assert_eq!(ErrorCategory::from_error("something else"), ErrorCategory::Unknown);
    }

    #[test]
    fn test_auth_errors() {
        assert!(RestError::AuthRequired.is_auth_error());
        assert!(RestError::from_api_errors(vec!["EAPI:Invalid nonce".to_string()]).is_auth_error());
        assert!(!RestError::UnsupportedMethod("Foo".to_string()).is_auth_error());
    }

    #[test]
    fn test_empty_error_list_is_unknown() {
        let err = RestError::from_api_errors(Vec::new());
        assert!(matches!(
            err,
            RestError::Api {
                category: ErrorCategory::Unknown,
                ..
            }
        ));
    }
}
