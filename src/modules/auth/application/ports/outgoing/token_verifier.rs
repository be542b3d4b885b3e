use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidAudience,
    InvalidSignature,
    MalformedToken,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            TokenError::InvalidAudience => write!(f, "Token audience is not accepted"),
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::MalformedToken => write!(f, "Malformed token"),
        }
    }
}
impl Error for TokenError {}

/// Provider-managed metadata; only the admin role flag matters here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Claims of an access token minted by the hosted identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub aud: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

pub trait TokenVerifier: Send + Sync {
    fn verify_access_token(&self, token: &str) -> Result<AccessClaims, TokenError>;
}
