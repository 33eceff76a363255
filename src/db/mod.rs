//! Database connection pool and the tenant-scoped asset store.

mod assets;
#[cfg(test)]
pub(crate) mod memory;

use std::future::Future;

use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::asset::AssetWithCategory;
use crate::models::asset_category::CategoryWithAssets;
use crate::models::asset_lease::{LeaseStatus, LeaseWithRelations};
use crate::models::asset_maintenance::MaintenanceStatus;
use crate::models::tenant::TenantId;

pub use assets::PgAssetStore;

/// Create a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Read-only, tenant-scoped queries over assets, categories, leases and
/// maintenance records.
///
/// Every method filters by `tenant`, including eager-loaded relations. The
/// `recent_*` methods order by `created_at` descending, then `id` descending.
pub trait AssetStore: Send + Sync {
    /// Number of assets owned by the tenant.
    fn count_assets(&self, tenant: TenantId)
        -> impl Future<Output = Result<i64, AppError>> + Send;

    /// Sum of `current_value` over the tenant's assets; zero when there are none.
    fn total_asset_value(
        &self,
        tenant: TenantId,
    ) -> impl Future<Output = Result<Decimal, AppError>> + Send;

    /// Every category of the tenant with the value columns of its assets,
    /// ordered by category name, then id.
    fn categories_with_assets(
        &self,
        tenant: TenantId,
    ) -> impl Future<Output = Result<Vec<CategoryWithAssets>, AppError>> + Send;

    /// The tenant's newest assets with their category.
    fn recent_assets(
        &self,
        tenant: TenantId,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<AssetWithCategory>, AppError>> + Send;

    /// Number of the tenant's leases in `status`.
    fn count_leases(
        &self,
        tenant: TenantId,
        status: LeaseStatus,
    ) -> impl Future<Output = Result<i64, AppError>> + Send;

    /// The tenant's newest leases in `status` with their asset and member.
    fn recent_leases(
        &self,
        tenant: TenantId,
        status: LeaseStatus,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<LeaseWithRelations>, AppError>> + Send;

    /// Number of the tenant's maintenance records whose status is exactly `status`.
    fn count_maintenance(
        &self,
        tenant: TenantId,
        status: MaintenanceStatus,
    ) -> impl Future<Output = Result<i64, AppError>> + Send;
}
