use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::application::ports::outgoing::{AccessClaims, AppMetadata};

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Valid,
    Expired,
    InvalidSignature,
    Malformed,
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Valid" => Ok(TokenKind::Valid),
            "Expired" => Ok(TokenKind::Expired),
            "InvalidSignature" => Ok(TokenKind::InvalidSignature),
            "Malformed" => Ok(TokenKind::Malformed),
            _ => Err(format!("Unknown token_kind: {}", s)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub email: Option<String>,
    /// `admin` sets `app_metadata.role`
    pub role: Option<String>,
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        tracing::error!("🚨 Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

fn claims_for(kind: TokenKind, user_id: Uuid, query: &TokenQuery, audience: &str) -> AccessClaims {
    let now = Utc::now().timestamp();
    let (iat, exp) = match kind {
        TokenKind::Expired => (now - 7200, now - 3600),
        _ => (now, now + 3600),
    };

    AccessClaims {
        sub: user_id,
        exp,
        iat,
        aud: audience.to_string(),
        email: query.email.clone(),
        role: Some("authenticated".to_string()),
        app_metadata: AppMetadata {
            role: query.role.clone(),
        },
    }
}

/// Mint access tokens shaped like the identity provider's
/// GET /test/token/{token_kind}/{user_id}?email=..&role=admin
pub async fn generate_test_token(
    path: web::Path<(String, String)>,
    query: web::Query<TokenQuery>,
) -> Result<HttpResponse> {
    let (token_kind_str, user_id_str) = path.into_inner();

    let user_id = Uuid::parse_str(&user_id_str)
        .map_err(|_| actix_web::error::ErrorBadRequest("Invalid UUID format"))?;

    let token_kind: TokenKind = token_kind_str
        .parse()
        .map_err(|e: String| actix_web::error::ErrorBadRequest(e))?;

    tracing::debug!(
        "Generating test token - Kind: {:?}, User ID: {}, Email: {:?}",
        token_kind,
        user_id,
        query.email
    );

    if token_kind == TokenKind::Malformed {
        return Ok(HttpResponse::Ok().json(TokenResponse {
            token: format!("malformed.{}.token", Uuid::new_v4()),
        }));
    }

    let config = JwtConfig::from_env()
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    let secret = if token_kind == TokenKind::InvalidSignature {
        "wrong-secret-wrong-secret-wrong-secret".to_string()
    } else {
        config.secret_key.clone()
    };

    let claims = claims_for(token_kind, user_id, &query, &config.audience);
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Token encoding error: {}", e))
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route(
                "/token/{token_kind}/{user_id}",
                web::get().to(generate_test_token),
            ),
    );
}
