//! PostgreSQL implementation of [`AssetStore`].

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::AssetStore;
use crate::errors::AppError;
use crate::models::asset::{Asset, AssetSummary, AssetWithCategory, CategoryAssetValue};
use crate::models::asset_category::{AssetCategory, CategorySummary, CategoryWithAssets};
use crate::models::asset_lease::{AssetLease, LeaseStatus, LeaseWithRelations};
use crate::models::asset_maintenance::MaintenanceStatus;
use crate::models::member::MemberSummary;
use crate::models::tenant::TenantId;

/// Asset store backed by the shared connection pool.
#[derive(Debug, Clone)]
pub struct PgAssetStore {
    pool: PgPool,
}

impl PgAssetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Asset row joined with its (same-tenant) category.
#[derive(Debug, FromRow)]
struct RecentAssetRow {
    #[sqlx(flatten)]
    asset: Asset,
    category_ref: Option<Uuid>,
    category_name: Option<String>,
}

impl From<RecentAssetRow> for AssetWithCategory {
    fn from(row: RecentAssetRow) -> Self {
        let category = row
            .category_ref
            .zip(row.category_name)
            .map(|(id, name)| CategorySummary { id, name });
        Self {
            asset: row.asset,
            category,
        }
    }
}

/// Lease row joined with its (same-tenant) asset and member.
#[derive(Debug, FromRow)]
struct RecentLeaseRow {
    #[sqlx(flatten)]
    lease: AssetLease,
    asset_ref: Option<Uuid>,
    asset_name: Option<String>,
    asset_tag: Option<String>,
    member_ref: Option<Uuid>,
    member_name: Option<String>,
    member_email: Option<String>,
}

impl From<RecentLeaseRow> for LeaseWithRelations {
    fn from(row: RecentLeaseRow) -> Self {
        let asset = row
            .asset_ref
            .zip(row.asset_name)
            .map(|(id, name)| AssetSummary {
                id,
                name,
                asset_tag: row.asset_tag,
            });
        let member = row
            .member_ref
            .zip(row.member_name)
            .map(|(id, name)| MemberSummary {
                id,
                name,
                email: row.member_email,
            });
        Self {
            lease: row.lease,
            asset,
            member,
        }
    }
}

impl AssetStore for PgAssetStore {
    async fn count_assets(&self, tenant: TenantId) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM assets WHERE tenant_id = $1")
            .bind(tenant)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn total_asset_value(&self, tenant: TenantId) -> Result<Decimal, AppError> {
        let total = sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(current_value), 0) FROM assets WHERE tenant_id = $1",
        )
        .bind(tenant)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    async fn categories_with_assets(
        &self,
        tenant: TenantId,
    ) -> Result<Vec<CategoryWithAssets>, AppError> {
        let categories = sqlx::query_as::<_, AssetCategory>(
            r#"
            SELECT id, tenant_id, name, description, created_at, updated_at
            FROM asset_categories
            WHERE tenant_id = $1
            ORDER BY name, id
            "#,
        )
        .bind(tenant)
        .fetch_all(&self.pool)
        .await?;

        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let category_ids: Vec<Uuid> = categories.iter().map(|c| c.id).collect();
        let values = sqlx::query_as::<_, CategoryAssetValue>(
            r#"
            SELECT category_id, current_value, is_leasable
            FROM assets
            WHERE tenant_id = $1 AND category_id = ANY($2)
            "#,
        )
        .bind(tenant)
        .bind(&category_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_category: HashMap<Uuid, Vec<CategoryAssetValue>> = HashMap::new();
        for value in values {
            by_category.entry(value.category_id).or_default().push(value);
        }

        Ok(categories
            .into_iter()
            .map(|category| CategoryWithAssets {
                assets: by_category.remove(&category.id).unwrap_or_default(),
                category,
            })
            .collect())
    }

    async fn recent_assets(
        &self,
        tenant: TenantId,
        limit: i64,
    ) -> Result<Vec<AssetWithCategory>, AppError> {
        let rows = sqlx::query_as::<_, RecentAssetRow>(
            r#"
            SELECT
                a.id, a.tenant_id, a.category_id, a.name, a.asset_tag,
                a.current_value, a.is_leasable, a.created_at, a.updated_at,
                c.id   AS category_ref,
                c.name AS category_name
            FROM assets a
            LEFT JOIN asset_categories c
                ON c.id = a.category_id AND c.tenant_id = a.tenant_id
            WHERE a.tenant_id = $1
            ORDER BY a.created_at DESC, a.id DESC
            LIMIT $2
            "#,
        )
        .bind(tenant)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_leases(&self, tenant: TenantId, status: LeaseStatus) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM asset_leases WHERE tenant_id = $1 AND status = $2",
        )
        .bind(tenant)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn recent_leases(
        &self,
        tenant: TenantId,
        status: LeaseStatus,
        limit: i64,
    ) -> Result<Vec<LeaseWithRelations>, AppError> {
        let rows = sqlx::query_as::<_, RecentLeaseRow>(
            r#"
            SELECT
                l.id, l.tenant_id, l.asset_id, l.member_id, l.status,
                l.starts_at, l.ends_at, l.created_at,
                a.id        AS asset_ref,
                a.name      AS asset_name,
                a.asset_tag AS asset_tag,
                m.id        AS member_ref,
                m.name      AS member_name,
                m.email     AS member_email
            FROM asset_leases l
            LEFT JOIN assets a
                ON a.id = l.asset_id AND a.tenant_id = l.tenant_id
            LEFT JOIN members m
                ON m.id = l.member_id AND m.tenant_id = l.tenant_id
            WHERE l.tenant_id = $1 AND l.status = $2
            ORDER BY l.created_at DESC, l.id DESC
            LIMIT $3
            "#,
        )
        .bind(tenant)
        .bind(status)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_maintenance(
        &self,
        tenant: TenantId,
        status: MaintenanceStatus,
    ) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM asset_maintenances WHERE tenant_id = $1 AND status = $2",
        )
        .bind(tenant)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
