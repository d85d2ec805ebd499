use teamdeck_types::{
    CurrentUser, LogicalRole, Permission, RouteDescriptor, RouteSection, UnknownRolePolicy,
};

use super::grouping::group_routes;
use super::hierarchy::can_manage_role;
use super::permission_table::{
    has_all_permissions, has_any_permission, has_permission, is_organization_role,
    is_platform_role, is_role,
};
use super::role::derive_role_with;
use super::routes::{get_user_routes, has_route_access};

/// Request scoped view of the signed-in user and the decisions that follow
/// from their role.
///
/// The role is derived once on construction; every query delegates to the
/// pure functions of this module. A context without a user denies everything.
#[derive(Debug, Clone)]
pub struct AccessContext {
    user: Option<CurrentUser>,
    role: Option<LogicalRole>,
}

impl AccessContext {
    pub fn new(user: Option<CurrentUser>) -> Self {
        Self::with_policy(user, UnknownRolePolicy::default())
    }

    pub fn with_policy(user: Option<CurrentUser>, policy: UnknownRolePolicy) -> Self {
        let role = derive_role_with(user.as_ref(), policy);
        Self { user, role }
    }

    /// Context for a visitor that is not signed in
    pub fn anonymous() -> Self {
        Self {
            user: None,
            role: None,
        }
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<LogicalRole> {
        self.role
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn can(&self, permission: Permission) -> bool {
        has_permission(self.role, permission)
    }

    pub fn can_any(&self, permissions: &[Permission]) -> bool {
        has_any_permission(self.role, permissions)
    }

    pub fn can_all(&self, permissions: &[Permission]) -> bool {
        has_all_permissions(self.role, permissions)
    }

    pub fn is_role(&self, roles: &[LogicalRole]) -> bool {
        is_role(self.role, roles)
    }

    pub fn is_platform_admin(&self) -> bool {
        is_platform_role(self.role)
    }

    pub fn is_organization_member(&self) -> bool {
        is_organization_role(self.role)
    }

    pub fn can_manage(&self, target: LogicalRole) -> bool {
        can_manage_role(self.role, target)
    }

    /// Navigation for this user, platform block included for platform roles
    pub fn routes(&self) -> Vec<RouteDescriptor> {
        get_user_routes(self.role, self.is_platform_admin())
    }

    pub fn grouped_routes(&self) -> Vec<RouteSection> {
        group_routes(&self.routes())
    }

    pub fn can_access(&self, path: &str) -> bool {
        has_route_access(path, self.role)
    }
}

impl Default for AccessContext {
    fn default() -> Self {
        Self::anonymous()
    }
}
