use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::fmt;

use crate::auth::application::ports::outgoing::{AccessClaims, TokenError, TokenVerifier};

use super::jwt_config::JwtConfig;

/// Verifies HS256 access tokens minted by the identity provider.
#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("audience", &self.config.audience)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.config.leeway_seconds;
        validation.set_audience(&[self.config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);
        validation
    }
}

impl TokenVerifier for JwtTokenService {
    fn verify_access_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let decoded = decode::<AccessClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Token verification failed: Unexpected audience");
                        TokenError::InvalidAudience
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: {}", e);
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::AppMetadata;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    const SECRET: &str = "test_secret_key_for_testing_only_32b";

    fn service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: SECRET.to_string(),
            audience: "authenticated".to_string(),
            leeway_seconds: 0,
        })
    }

    fn claims(exp_offset: i64, aud: &str) -> AccessClaims {
        let now = Utc::now();
        AccessClaims {
            sub: Uuid::new_v4(),
            exp: (now + Duration::seconds(exp_offset)).timestamp(),
            iat: now.timestamp(),
            aud: aud.to_string(),
            email: Some("owner@example.com".to_string()),
            role: Some("authenticated".to_string()),
            app_metadata: AppMetadata {
                role: Some("admin".to_string()),
            },
        }
    }

    fn sign(claims: &AccessClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn verifies_valid_token() {
        let original = claims(3600, "authenticated");
        let token = sign(&original, SECRET);

        let verified = service().verify_access_token(&token).unwrap();

        assert_eq!(verified.sub, original.sub);
        assert_eq!(verified.email.as_deref(), Some("owner@example.com"));
        assert_eq!(verified.app_metadata.role.as_deref(), Some("admin"));
    }

    #[test]
    fn rejects_expired_token() {
        let token = sign(&claims(-3600, "authenticated"), SECRET);
        assert_eq!(
            service().verify_access_token(&token).unwrap_err(),
            TokenError::TokenExpired
        );
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = sign(
            &claims(3600, "authenticated"),
            "another_secret_key_that_is_long_enough",
        );
        assert_eq!(
            service().verify_access_token(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn rejects_wrong_audience() {
        let token = sign(&claims(3600, "anon"), SECRET);
        assert_eq!(
            service().verify_access_token(&token).unwrap_err(),
            TokenError::InvalidAudience
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            service().verify_access_token("not-a-jwt").unwrap_err(),
            TokenError::MalformedToken
        );
    }
}
