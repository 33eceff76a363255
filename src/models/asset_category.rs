//! Asset categories group assets for reporting and leasing eligibility.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::asset::CategoryAssetValue;
use crate::models::tenant::TenantId;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct AssetCategory {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category fields attached to an asset on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
}

impl From<&AssetCategory> for CategorySummary {
    fn from(c: &AssetCategory) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
        }
    }
}

/// A category together with the value columns of its assets.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithAssets {
    pub category: AssetCategory,
    pub assets: Vec<CategoryAssetValue>,
}
