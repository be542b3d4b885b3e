use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{AccessClaims, TokenVerifier};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Any caller holding a valid access token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub claims: AccessClaims,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = match req.app_data::<web::Data<Arc<dyn TokenVerifier + Send + Sync>>>() {
            Some(verifier) => verifier,
            None => {
                tracing::error!("Token verifier is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match verifier.verify_access_token(&token) {
            Ok(claims) => ready(Ok(AuthenticatedUser {
                user_id: claims.sub,
                claims,
            })),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// Authenticated caller that passed the admin policy
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth_user = match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) => user,
            Err(e) => return ready(Err(e)),
        };

        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state,
            None => {
                tracing::error!("AppState is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        if !state.admin_policy.is_admin(&auth_user.claims) {
            tracing::warn!("Non-admin user {} tried an admin endpoint", auth_user.user_id);
            return ready(Err(create_api_error(ApiResponse::forbidden(
                "NOT_ADMIN",
                "Admin privileges required",
            ))));
        }

        ready(Ok(AdminUser {
            user_id: auth_user.user_id,
            email: auth_user.claims.email,
        }))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
