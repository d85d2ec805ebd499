//! Authorization module for teamdeck
//!
//! This module implements the role/permission model the frontends depend on:
//! raw session users are normalized into a [`LogicalRole`], which is then
//! checked against static permission, role-management and route tables.
//! Every function here is a pure query over immutable data.
//!
//! [`LogicalRole`]: teamdeck_types::LogicalRole

pub mod context;
pub mod grouping;
pub mod hierarchy;
pub mod permission_table;
pub mod role;
pub mod routes;


// Re-export the query API for easy access
pub use context::AccessContext;
pub use grouping::{group_routes, ungrouped_routes};
pub use hierarchy::{can_manage_role, manageable_roles};
pub use permission_table::{
    has_all_permissions, has_any_permission, has_permission, is_organization_role,
    is_platform_role, is_role, parse_permission, permissions_for,
};
pub use role::{derive_role, derive_role_with, parse_role, RawRole};
pub use routes::{
    dashboard_routes, filter_routes, find_route, get_user_routes, has_route_access,
    platform_admin_routes,
};
