#[cfg(test)]
pub mod test_helpers {
    use actix_web::web;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::outgoing::{AccessClaims, AppMetadata, TokenVerifier};

    pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_32b";
    pub const TEST_AUDIENCE: &str = "authenticated";
    pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";

    pub fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: TEST_JWT_SECRET.to_string(),
            audience: TEST_AUDIENCE.to_string(),
            leeway_seconds: 0,
        })
    }

    /// App data the auth extractors look up.
    pub fn token_verifier_data() -> web::Data<Arc<dyn TokenVerifier + Send + Sync>> {
        let verifier: Arc<dyn TokenVerifier + Send + Sync> = Arc::new(create_test_jwt_service());
        web::Data::new(verifier)
    }

    fn sign(email: Option<&str>, app_role: Option<&str>, exp_offset: i64) -> String {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: Uuid::new_v4(),
            exp: (now + Duration::seconds(exp_offset)).timestamp(),
            iat: now.timestamp(),
            aud: TEST_AUDIENCE.to_string(),
            email: email.map(str::to_string),
            role: Some("authenticated".to_string()),
            app_metadata: AppMetadata {
                role: app_role.map(str::to_string),
            },
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .unwrap()
    }

    pub fn token_for(email: Option<&str>, app_role: Option<&str>) -> String {
        sign(email, app_role, 3600)
    }

    /// Token for the allow-listed admin used by `TestAppStateBuilder`.
    pub fn admin_token() -> String {
        token_for(Some(TEST_ADMIN_EMAIL), None)
    }

    pub fn expired_admin_token() -> String {
        sign(Some(TEST_ADMIN_EMAIL), None, -3600)
    }

    pub fn admin_bearer() -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", admin_token()))
    }
}
