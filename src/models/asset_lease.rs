//! Asset leases: an asset lent to a member for a period.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::asset::AssetSummary;
use crate::models::member::MemberSummary;
use crate::models::tenant::TenantId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "lease_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeaseStatus {
    /// The lease is currently in effect.
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct AssetLease {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub asset_id: Uuid,
    pub member_id: Uuid,
    pub status: LeaseStatus,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Lease with its asset and member eager-loaded.
///
/// A relation is `None` only when the referenced row belongs to another tenant.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeaseWithRelations {
    #[serde(flatten)]
    pub lease: AssetLease,
    pub asset: Option<AssetSummary>,
    pub member: Option<MemberSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lease_status_serialization() {
        assert_eq!(serde_json::to_string(&LeaseStatus::Active).unwrap(), "\"active\"");
        assert_eq!(
            serde_json::to_string(&LeaseStatus::Inactive).unwrap(),
            "\"inactive\""
        );
    }
}
