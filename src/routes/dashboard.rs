//! Dashboard routes: the asset-management overview.

use axum::{extract::State, Json};

use crate::db::PgAssetStore;
use crate::errors::{ApiResponse, AppError};
use crate::middleware::rbac::RequireAssetModule;
use crate::services::dashboard::{self, DashboardSnapshot};
use crate::AppState;

/// GET /api/v1/dashboard — tenant-scoped asset metrics (asset module required).
pub async fn index(
    State(state): State<AppState>,
    RequireAssetModule(current): RequireAssetModule,
) -> Result<Json<ApiResponse<DashboardSnapshot>>, AppError> {
    let store = PgAssetStore::new(state.db.clone());
    let snapshot = dashboard::build_dashboard(&store, current.id()).await?;
    Ok(ApiResponse::success(snapshot))
}
