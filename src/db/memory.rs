//! In-memory [`AssetStore`] for exercising the dashboard without a database.

use rust_decimal::Decimal;

use super::AssetStore;
use crate::errors::AppError;
use crate::models::asset::{Asset, AssetSummary, AssetWithCategory, CategoryAssetValue};
use crate::models::asset_category::{AssetCategory, CategorySummary, CategoryWithAssets};
use crate::models::asset_lease::{AssetLease, LeaseStatus, LeaseWithRelations};
use crate::models::asset_maintenance::{AssetMaintenance, MaintenanceStatus};
use crate::models::member::{Member, MemberSummary};
use crate::models::tenant::TenantId;

#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryStore {
    pub categories: Vec<AssetCategory>,
    pub assets: Vec<Asset>,
    pub leases: Vec<AssetLease>,
    pub maintenances: Vec<AssetMaintenance>,
    pub members: Vec<Member>,
    /// When set, every query fails as if the pool were unreachable.
    pub unavailable: bool,
}

impl MemoryStore {
    fn check(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::StoreUnavailable(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn tenant_assets(&self, tenant: TenantId) -> impl Iterator<Item = &Asset> {
        self.assets.iter().filter(move |a| a.tenant_id == tenant)
    }
}

impl AssetStore for MemoryStore {
    async fn count_assets(&self, tenant: TenantId) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.tenant_assets(tenant).count() as i64)
    }

    async fn total_asset_value(&self, tenant: TenantId) -> Result<Decimal, AppError> {
        self.check()?;
        Ok(self.tenant_assets(tenant).map(|a| a.current_value).sum())
    }

    async fn categories_with_assets(
        &self,
        tenant: TenantId,
    ) -> Result<Vec<CategoryWithAssets>, AppError> {
        self.check()?;
        let mut categories: Vec<&AssetCategory> = self
            .categories
            .iter()
            .filter(|c| c.tenant_id == tenant)
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(categories
            .into_iter()
            .map(|category| CategoryWithAssets {
                assets: self
                    .tenant_assets(tenant)
                    .filter(|a| a.category_id == category.id)
                    .map(CategoryAssetValue::from)
                    .collect(),
                category: category.clone(),
            })
            .collect())
    }

    async fn recent_assets(
        &self,
        tenant: TenantId,
        limit: i64,
    ) -> Result<Vec<AssetWithCategory>, AppError> {
        self.check()?;
        let mut assets: Vec<&Asset> = self.tenant_assets(tenant).collect();
        assets.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(assets
            .into_iter()
            .take(limit.max(0) as usize)
            .map(|asset| AssetWithCategory {
                category: self
                    .categories
                    .iter()
                    .find(|c| c.id == asset.category_id && c.tenant_id == tenant)
                    .map(CategorySummary::from),
                asset: asset.clone(),
            })
            .collect())
    }

    async fn count_leases(&self, tenant: TenantId, status: LeaseStatus) -> Result<i64, AppError> {
        self.check()?;
        Ok(self
            .leases
            .iter()
            .filter(|l| l.tenant_id == tenant && l.status == status)
            .count() as i64)
    }

    async fn recent_leases(
        &self,
        tenant: TenantId,
        status: LeaseStatus,
        limit: i64,
    ) -> Result<Vec<LeaseWithRelations>, AppError> {
        self.check()?;
        let mut leases: Vec<&AssetLease> = self
            .leases
            .iter()
            .filter(|l| l.tenant_id == tenant && l.status == status)
            .collect();
        leases.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(leases
            .into_iter()
            .take(limit.max(0) as usize)
            .map(|lease| LeaseWithRelations {
                asset: self
                    .tenant_assets(tenant)
                    .find(|a| a.id == lease.asset_id)
                    .map(AssetSummary::from),
                member: self
                    .members
                    .iter()
                    .find(|m| m.id == lease.member_id && m.tenant_id == tenant)
                    .map(MemberSummary::from),
                lease: lease.clone(),
            })
            .collect())
    }

    async fn count_maintenance(
        &self,
        tenant: TenantId,
        status: MaintenanceStatus,
    ) -> Result<i64, AppError> {
        self.check()?;
        Ok(self
            .maintenances
            .iter()
            .filter(|m| m.tenant_id == tenant && m.status == status)
            .count() as i64)
    }
}
