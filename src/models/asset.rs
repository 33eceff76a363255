//! Asset model and the projections the dashboard reads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::asset_category::CategorySummary;
use crate::models::tenant::TenantId;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Asset {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub category_id: Uuid,
    pub name: String,
    pub asset_tag: Option<String>,
    pub current_value: Decimal,
    pub is_leasable: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The three asset columns needed for the per-category roll-up.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct CategoryAssetValue {
    pub category_id: Uuid,
    pub current_value: Decimal,
    pub is_leasable: bool,
}

impl From<&Asset> for CategoryAssetValue {
    fn from(a: &Asset) -> Self {
        Self {
            category_id: a.category_id,
            current_value: a.current_value,
            is_leasable: a.is_leasable,
        }
    }
}

/// Asset fields attached to a lease on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetSummary {
    pub id: Uuid,
    pub name: String,
    pub asset_tag: Option<String>,
}

impl From<&Asset> for AssetSummary {
    fn from(a: &Asset) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            asset_tag: a.asset_tag.clone(),
        }
    }
}

/// Asset with its category eager-loaded.
///
/// `category` is `None` only when the referenced category does not belong to
/// the asset's tenant.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssetWithCategory {
    #[serde(flatten)]
    pub asset: Asset,
    pub category: Option<CategorySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_asset() -> Asset {
        Asset {
            id: Uuid::nil(),
            tenant_id: TenantId(Uuid::nil()),
            category_id: Uuid::nil(),
            name: "Projector".to_string(),
            asset_tag: Some("PRJ-001".to_string()),
            current_value: Decimal::from_str("1249.90").unwrap(),
            is_leasable: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn current_value_serializes_as_exact_string() {
        let json = serde_json::to_value(sample_asset()).unwrap();
        assert_eq!(json["current_value"], "1249.90");
    }

    #[test]
    fn asset_with_category_flattens_asset_fields() {
        let asset = sample_asset();
        let with_category = AssetWithCategory {
            category: Some(CategorySummary {
                id: asset.category_id,
                name: "AV Equipment".to_string(),
            }),
            asset,
        };
        let json = serde_json::to_value(&with_category).unwrap();
        assert_eq!(json["name"], "Projector");
        assert_eq!(json["category"]["name"], "AV Equipment");
    }

    #[test]
    fn category_value_projection_keeps_roll_up_columns() {
        let asset = sample_asset();
        let value = CategoryAssetValue::from(&asset);
        assert_eq!(value.category_id, asset.category_id);
        assert_eq!(value.current_value, asset.current_value);
        assert!(value.is_leasable);
    }
}
