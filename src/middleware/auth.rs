//! JWT authentication extractor for Axum handlers.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRole;
use crate::services::auth::{self as auth_service, Claims};
use crate::AppState;

/// Authenticated user extracted from JWT Bearer token.
///
/// Use as an Axum extractor in handlers that require authentication:
/// ```ignore
/// async fn handler(current_user: CurrentUser) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    /// Raw tenant claim; resolved into a tenant by `CurrentTenant`.
    pub tenant_claim: String,
}

impl CurrentUser {
    /// Build the user from validated claims. Only access tokens are accepted.
    pub fn from_claims(claims: Claims) -> Result<Self, AppError> {
        if claims.token_type != "access" {
            return Err(AppError::Unauthorized);
        }

        let id: Uuid = claims
            .user_id
            .parse()
            .map_err(|_| AppError::Unauthorized)?;

        let role: UserRole =
            serde_json::from_str(&format!("\"{}\"", claims.role)).map_err(|_| {
                AppError::Internal(format!("Invalid role in token: {}", claims.role))
            })?;

        Ok(CurrentUser {
            id,
            username: claims.sub,
            role,
            tenant_claim: claims.tenant_id,
        })
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Unauthorized)?;

        let claims = auth_service::validate_token(bearer.token(), &state.config.jwt_secret)?;
        CurrentUser::from_claims(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(token_type: &str, role: &str) -> Claims {
        Claims {
            sub: "alice".to_string(),
            user_id: Uuid::nil().to_string(),
            tenant_id: Uuid::nil().to_string(),
            role: role.to_string(),
            token_type: token_type.to_string(),
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn access_claims_build_current_user() {
        let user = CurrentUser::from_claims(claims("access", "Staff")).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, UserRole::Staff);
        assert_eq!(user.tenant_claim, Uuid::nil().to_string());
    }

    #[test]
    fn refresh_claims_are_rejected() {
        let err = CurrentUser::from_claims(claims("refresh", "Staff")).unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn unknown_role_is_internal_error() {
        let err = CurrentUser::from_claims(claims("access", "Overlord")).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
