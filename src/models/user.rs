//! Tenant user model with role-based access to the asset module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::tenant::TenantId;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type, PartialEq)]
#[sqlx(type_name = "user_role")]
pub enum UserRole {
    #[sqlx(rename = "Tenant_Admin")]
    TenantAdmin,
    #[sqlx(rename = "Asset_Manager")]
    AssetManager,
    Staff,
    Member,
}

impl UserRole {
    /// Whether this role may open the asset-management module.
    pub fn has_asset_access(&self) -> bool {
        matches!(self, Self::TenantAdmin | Self::AssetManager | Self::Staff)
    }
}

/// Full user row from database (includes password_hash — never serialize to API).
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub failed_login_attempts: i32,
    pub locked_until: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User response DTO — excludes password_hash and internal fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            tenant_id: u.tenant_id,
            username: u.username,
            email: u.email,
            display_name: u.display_name,
            role: u.role,
            is_active: u.is_active,
            last_login: u.last_login,
            created_at: u.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: UserRole) -> User {
        User {
            id: Uuid::nil(),
            tenant_id: TenantId(Uuid::nil()),
            username: "test".to_string(),
            email: "test@test.com".to_string(),
            password_hash: "secret_hash".to_string(),
            display_name: "Test".to_string(),
            role,
            is_active: true,
            failed_login_attempts: 0,
            locked_until: None,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn user_role_serialization() {
        let json = serde_json::to_string(&UserRole::AssetManager).unwrap();
        assert_eq!(json, "\"AssetManager\"");
    }

    #[test]
    fn members_have_no_asset_access() {
        assert!(UserRole::TenantAdmin.has_asset_access());
        assert!(UserRole::AssetManager.has_asset_access());
        assert!(UserRole::Staff.has_asset_access());
        assert!(!UserRole::Member.has_asset_access());
    }

    #[test]
    fn user_response_excludes_password() {
        let response: UserResponse = user_with_role(UserRole::Staff).into();
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("hash"));
    }

    #[test]
    fn user_to_response_conversion() {
        let response: UserResponse = user_with_role(UserRole::TenantAdmin).into();
        assert_eq!(response.username, "test");
        assert_eq!(response.role, UserRole::TenantAdmin);
        assert_eq!(response.tenant_id, TenantId(Uuid::nil()));
    }
}
