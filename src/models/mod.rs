//! Database models and DTOs for all domain entities.

pub mod asset;
pub mod asset_category;
pub mod asset_lease;
pub mod asset_maintenance;
pub mod member;
pub mod tenant;
pub mod user;
