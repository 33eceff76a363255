//! Feature-access extractors for Axum handlers.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::middleware::tenant::CurrentTenant;
use crate::models::tenant::Tenant;
use crate::models::user::UserRole;
use crate::AppState;

/// Extractor that requires the asset-management module for the current tenant and user.
#[derive(Debug, Clone)]
pub struct RequireAssetModule(pub CurrentTenant);

/// Check whether a user with `role` may use the asset module of `tenant`.
pub fn check_asset_module(tenant: &Tenant, role: &UserRole) -> Result<(), AppError> {
    if !tenant.asset_module_enabled {
        return Err(AppError::NotAuthorized(
            "Asset module is not enabled for this tenant".to_string(),
        ));
    }
    if !role.has_asset_access() {
        return Err(AppError::NotAuthorized(
            "Asset module access required".to_string(),
        ));
    }
    Ok(())
}

impl FromRequestParts<AppState> for RequireAssetModule {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let current = CurrentTenant::from_request_parts(parts, state).await?;
        check_asset_module(&current.tenant, &current.user.role)?;
        Ok(RequireAssetModule(current))
    }
}
