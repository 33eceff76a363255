//! Dashboard aggregation: tenant-scoped asset counts, sums and recents.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::db::AssetStore;
use crate::errors::AppError;
use crate::models::asset::AssetWithCategory;
use crate::models::asset_category::CategoryWithAssets;
use crate::models::asset_lease::{LeaseStatus, LeaseWithRelations};
use crate::models::asset_maintenance::MaintenanceStatus;
use crate::models::tenant::TenantId;

/// Number of entries in each "recent" feed.
pub const RECENT_LIMIT: i64 = 5;

/// Snapshot of a tenant's asset-management metrics for the overview page.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_assets: i64,
    pub active_leases: i64,
    pub pending_maintenance: i64,
    pub total_value: Decimal,
    pub category_stats: Vec<CategoryStat>,
    pub recent_assets: Vec<AssetWithCategory>,
    pub recent_leases: Vec<LeaseWithRelations>,
}

/// One category row with its derived totals.
#[derive(Debug, Serialize, PartialEq)]
pub struct CategoryStat {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub asset_count: i64,
    pub total_value: Decimal,
    pub leasable_count: i64,
}

impl From<CategoryWithAssets> for CategoryStat {
    fn from(CategoryWithAssets { category, assets }: CategoryWithAssets) -> Self {
        let total_value: Decimal = assets.iter().map(|a| a.current_value).sum();
        let leasable_count = assets.iter().filter(|a| a.is_leasable).count() as i64;
        Self {
            id: category.id,
            tenant_id: category.tenant_id,
            name: category.name,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
            asset_count: assets.len() as i64,
            total_value,
            leasable_count,
        }
    }
}

/// Build the dashboard snapshot for `tenant_id`.
///
/// The caller has already authenticated the request and checked access to the
/// asset module. The reads run concurrently; any failure fails the whole
/// snapshot.
pub async fn build_dashboard<S: AssetStore>(
    store: &S,
    tenant_id: TenantId,
) -> Result<DashboardSnapshot, AppError> {
    let (
        total_assets,
        active_leases,
        pending_maintenance,
        total_value,
        categories,
        recent_assets,
        recent_leases,
    ) = tokio::try_join!(
        store.count_assets(tenant_id),
        store.count_leases(tenant_id, LeaseStatus::Active),
        store.count_maintenance(tenant_id, MaintenanceStatus::Scheduled),
        store.total_asset_value(tenant_id),
        store.categories_with_assets(tenant_id),
        store.recent_assets(tenant_id, RECENT_LIMIT),
        store.recent_leases(tenant_id, LeaseStatus::Active, RECENT_LIMIT),
    )?;

    tracing::debug!(
        tenant_id = %tenant_id,
        total_assets,
        categories = categories.len(),
        "Built dashboard snapshot"
    );

    Ok(DashboardSnapshot {
        total_assets,
        active_leases,
        pending_maintenance,
        total_value,
        category_stats: categories.into_iter().map(CategoryStat::from).collect(),
        recent_assets,
        recent_leases,
    })
}
