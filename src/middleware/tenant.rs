//! Tenant resolution: turns the authenticated user's tenant claim into a tenant row.

use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::middleware::auth::CurrentUser;
use crate::models::tenant::{Tenant, TenantId};
use crate::AppState;

/// The tenant the current request operates in, with the user who made it.
#[derive(Debug, Clone)]
pub struct CurrentTenant {
    pub tenant: Tenant,
    pub user: CurrentUser,
}

impl CurrentTenant {
    pub fn id(&self) -> TenantId {
        self.tenant.id
    }
}

/// Parse a tenant claim into a `TenantId`.
pub fn parse_tenant_claim(claim: &str) -> Result<TenantId, AppError> {
    claim
        .parse::<Uuid>()
        .map(TenantId)
        .map_err(|_| AppError::TenantResolution("Malformed tenant claim".to_string()))
}

/// Load an active tenant, failing with `TenantResolution` if none matches.
pub async fn resolve_tenant(pool: &PgPool, tenant_id: TenantId) -> Result<Tenant, AppError> {
    let tenant = sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = $1")
        .bind(tenant_id)
        .fetch_optional(pool)
        .await?;

    match tenant {
        Some(t) if t.is_active => Ok(t),
        Some(_) => {
            tracing::warn!(tenant_id = %tenant_id, "Request for inactive tenant");
            Err(AppError::TenantResolution("Tenant is not active".to_string()))
        }
        None => {
            tracing::warn!(tenant_id = %tenant_id, "Request for unknown tenant");
            Err(AppError::TenantResolution("Tenant not found".to_string()))
        }
    }
}

impl FromRequestParts<AppState> for CurrentTenant {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        let tenant_id = parse_tenant_claim(&user.tenant_claim)?;
        let tenant = resolve_tenant(&state.db, tenant_id).await?;
        Ok(CurrentTenant { tenant, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_claim_parses() {
        let id = Uuid::now_v7();
        assert_eq!(parse_tenant_claim(&id.to_string()).unwrap(), TenantId(id));
    }

    #[test]
    fn empty_claim_is_tenant_resolution_error() {
        let err = parse_tenant_claim("").unwrap_err();
        assert!(matches!(err, AppError::TenantResolution(_)));
    }

    #[test]
    fn garbage_claim_is_tenant_resolution_error() {
        let err = parse_tenant_claim("acme-corp").unwrap_err();
        assert!(matches!(err, AppError::TenantResolution(_)));
    }
}
