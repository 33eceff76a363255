//! Request extractors that gate handlers: authentication, tenant resolution, and module access.

pub mod auth;
pub mod rbac;
pub mod tenant;
