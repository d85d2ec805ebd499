//! Static mapping from logical roles to the permissions they hold.

use teamdeck_types::{LogicalRole, Permission};
use tracing::trace;

use crate::error::{PolicyError, Result};

const ADMIN_GRANTS: &[Permission] = &[
    Permission::PlatformManageOrganizations,
    Permission::PlatformViewOrganizations,
    Permission::PlatformViewAnalytics,
    Permission::ViewDashboard,
    Permission::ViewTeams,
    Permission::ViewUsers,
    Permission::ManageUsers,
    Permission::ManageProfile,
];

const ORG_OWNER_GRANTS: &[Permission] = &[
    Permission::OrgView,
    Permission::OrgUpdate,
    Permission::OrgDelete,
    Permission::OrgViewBilling,
    Permission::OrgManageBilling,
    Permission::OrgViewMembers,
    Permission::OrgManageMembers,
    Permission::OrgInviteMembers,
    Permission::OrgViewAnalytics,
    Permission::OrgTransferOwnership,
    Permission::ViewDashboard,
    Permission::ViewTeams,
    Permission::CreateTeams,
    Permission::ManageTeams,
    Permission::ManageProfile,
];

const ORG_ADMIN_GRANTS: &[Permission] = &[
    Permission::OrgView,
    Permission::OrgUpdate,
    Permission::OrgViewMembers,
    Permission::OrgManageMembers,
    Permission::OrgInviteMembers,
    Permission::OrgViewAnalytics,
    Permission::ViewDashboard,
    Permission::ViewTeams,
    Permission::CreateTeams,
    Permission::ManageTeams,
    Permission::ManageProfile,
];

const ORG_MEMBER_GRANTS: &[Permission] = &[
    Permission::OrgView,
    Permission::OrgViewMembers,
    Permission::ViewDashboard,
    Permission::ViewTeams,
    Permission::ManageProfile,
];

/// Permissions granted to `role`, in [`Permission::all`] order
pub fn permissions_for(role: LogicalRole) -> &'static [Permission] {
    match role {
        LogicalRole::SuperAdmin => Permission::all(),
        LogicalRole::Admin => ADMIN_GRANTS,
        LogicalRole::OrgOwner => ORG_OWNER_GRANTS,
        LogicalRole::OrgAdmin => ORG_ADMIN_GRANTS,
        LogicalRole::OrgMember => ORG_MEMBER_GRANTS,
    }
}

pub fn has_permission(role: Option<LogicalRole>, permission: Permission) -> bool {
    let granted = role.is_some_and(|role| permissions_for(role).contains(&permission));
    trace!(
        "Permission check: role={:?} permission='{}' granted={}",
        role,
        permission,
        granted
    );
    granted
}

/// True if `role` holds at least one of `permissions`; false for an empty list
pub fn has_any_permission(role: Option<LogicalRole>, permissions: &[Permission]) -> bool {
    permissions.iter().any(|p| has_permission(role, *p))
}

/// True if `role` holds every one of `permissions`; true for an empty list
pub fn has_all_permissions(role: Option<LogicalRole>, permissions: &[Permission]) -> bool {
    permissions.iter().all(|p| has_permission(role, *p))
}

/// True if `role` is one of `roles`
pub fn is_role(role: Option<LogicalRole>, roles: &[LogicalRole]) -> bool {
    role.is_some_and(|role| roles.contains(&role))
}

pub fn is_platform_role(role: Option<LogicalRole>) -> bool {
    matches!(role, Some(LogicalRole::SuperAdmin | LogicalRole::Admin))
}

pub fn is_organization_role(role: Option<LogicalRole>) -> bool {
    matches!(
        role,
        Some(LogicalRole::OrgOwner | LogicalRole::OrgAdmin | LogicalRole::OrgMember)
    )
}

/// Parse a permission identifier such as `org:view_billing`
pub fn parse_permission(name: &str) -> Result<Permission> {
    Permission::from_str(name).ok_or_else(|| PolicyError::UnknownPermission(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn grants(role: LogicalRole) -> HashSet<Permission> {
        permissions_for(role).iter().copied().collect()
    }

    #[test]
    fn test_grants_are_in_display_order_without_duplicates() {
        for role in LogicalRole::all() {
            let granted = permissions_for(*role);
            let positions: Vec<usize> = granted
                .iter()
                .map(|p| Permission::all().iter().position(|q| q == p).unwrap())
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "grants of {role} are not in display order"
            );
        }
    }

    #[test]
    fn test_organization_roles_are_monotonic() {
        assert!(grants(LogicalRole::OrgMember).is_subset(&grants(LogicalRole::OrgAdmin)));
        assert!(grants(LogicalRole::OrgAdmin).is_subset(&grants(LogicalRole::OrgOwner)));
        assert!(grants(LogicalRole::OrgOwner).is_subset(&grants(LogicalRole::SuperAdmin)));
        assert!(grants(LogicalRole::Admin).is_subset(&grants(LogicalRole::SuperAdmin)));
    }

    #[test]
    fn test_billing_is_owner_only_among_organization_roles() {
        assert!(has_permission(
            Some(LogicalRole::OrgOwner),
            Permission::OrgViewBilling
        ));
        assert!(!has_permission(
            Some(LogicalRole::OrgAdmin),
            Permission::OrgViewBilling
        ));
        assert!(!has_permission(
            Some(LogicalRole::OrgMember),
            Permission::OrgManageBilling
        ));
    }

    #[test]
    fn test_admin_cannot_manage_other_admins() {
        assert!(has_permission(
            Some(LogicalRole::Admin),
            Permission::PlatformManageOrganizations
        ));
        assert!(!has_permission(
            Some(LogicalRole::Admin),
            Permission::PlatformManageAdmins
        ));
        assert!(!has_permission(
            Some(LogicalRole::Admin),
            Permission::PlatformManageSettings
        ));
    }

    #[test]
    fn test_organization_roles_hold_no_platform_permissions() {
        for role in [
            LogicalRole::OrgOwner,
            LogicalRole::OrgAdmin,
            LogicalRole::OrgMember,
        ] {
            assert!(permissions_for(role)
                .iter()
                .all(|p| p.scope() != teamdeck_types::PermissionScope::Platform));
        }
    }

    #[test]
    fn test_is_role() {
        let managers = [LogicalRole::OrgOwner, LogicalRole::OrgAdmin];
        assert!(is_role(Some(LogicalRole::OrgAdmin), &managers));
        assert!(!is_role(Some(LogicalRole::OrgMember), &managers));
        assert!(!is_role(None, &managers));
        assert!(!is_role(Some(LogicalRole::OrgAdmin), &[]));
    }

    #[test]
    fn test_parse_permission() {
        assert_eq!(
            parse_permission("ORG:VIEW_BILLING").unwrap(),
            Permission::OrgViewBilling
        );
        assert!(parse_permission("billing").unwrap_err().is_unknown_name());
    }
}
