//! Dashboard route tables and role based route visibility.

use once_cell::sync::Lazy;
use teamdeck_types::{LogicalRole, RouteDescriptor};
use tracing::debug;

use LogicalRole::{Admin, OrgAdmin, OrgMember, OrgOwner, SuperAdmin};

const EVERYONE: &[LogicalRole] = &[SuperAdmin, Admin, OrgOwner, OrgAdmin, OrgMember];
const ORGANIZATION: &[LogicalRole] = &[OrgOwner, OrgAdmin, OrgMember];
const ORGANIZATION_MANAGERS: &[LogicalRole] = &[OrgOwner, OrgAdmin];
const PLATFORM: &[LogicalRole] = &[SuperAdmin, Admin];

static DASHBOARD_ROUTES: Lazy<Vec<RouteDescriptor>> = Lazy::new(|| {
    vec![
        RouteDescriptor::new("/dashboard", "Dashboard", "layout-dashboard", EVERYONE),
        RouteDescriptor::new("/dashboard/org", "Organization", "building", ORGANIZATION),
        RouteDescriptor::new(
            "/dashboard/org/analytics",
            "Analytics",
            "bar-chart",
            ORGANIZATION_MANAGERS,
        ),
        RouteDescriptor::new("/dashboard/org/billing", "Billing", "credit-card", &[OrgOwner]),
        RouteDescriptor::new("/dashboard/teams", "Teams", "users", ORGANIZATION).with_children(
            vec![RouteDescriptor::new(
                "/dashboard/teams/new",
                "Create Team",
                "plus",
                ORGANIZATION_MANAGERS,
            )],
        ),
        RouteDescriptor::new(
            "/dashboard/org/members",
            "Members",
            "user-check",
            ORGANIZATION_MANAGERS,
        ),
        RouteDescriptor::new(
            "/dashboard/org/invitations",
            "Invitations",
            "mail",
            ORGANIZATION_MANAGERS,
        ),
        RouteDescriptor::new("/dashboard/users", "Users", "user-cog", PLATFORM),
        RouteDescriptor::new("/dashboard/settings", "Settings", "settings", EVERYONE),
    ]
});

static PLATFORM_ADMIN_ROUTES: Lazy<Vec<RouteDescriptor>> = Lazy::new(|| {
    vec![
        RouteDescriptor::new("/dashboard/platform", "Platform Overview", "shield", PLATFORM),
        RouteDescriptor::new(
            "/dashboard/platform/organizations",
            "Organizations",
            "building-2",
            PLATFORM,
        ),
        RouteDescriptor::new(
            "/dashboard/platform/analytics",
            "Platform Analytics",
            "activity",
            PLATFORM,
        ),
        RouteDescriptor::new(
            "/dashboard/platform/admins",
            "Administrators",
            "shield-check",
            &[SuperAdmin],
        ),
        RouteDescriptor::new(
            "/dashboard/platform/settings",
            "Platform Settings",
            "sliders",
            &[SuperAdmin],
        ),
    ]
});

/// General dashboard routes in display order
pub fn dashboard_routes() -> &'static [RouteDescriptor] {
    &DASHBOARD_ROUTES
}

/// Routes only shown to platform administrators, in display order
pub fn platform_admin_routes() -> &'static [RouteDescriptor] {
    &PLATFORM_ADMIN_ROUTES
}

/// Keep the routes `role` may see, preserving their order.
///
/// Only the top-level descriptors are tested; children are carried along
/// unchanged, see [`RouteDescriptor::visible_children`].
pub fn filter_routes(
    routes: &[RouteDescriptor],
    role: Option<LogicalRole>,
) -> Vec<RouteDescriptor> {
    routes
        .iter()
        .filter(|route| route.allows(role))
        .cloned()
        .collect()
}

/// Navigation for a user: dashboard routes first, then the platform block
/// when `is_platform_admin` is set.
pub fn get_user_routes(role: Option<LogicalRole>, is_platform_admin: bool) -> Vec<RouteDescriptor> {
    let mut routes = filter_routes(dashboard_routes(), role);
    if is_platform_admin {
        routes.extend(filter_routes(platform_admin_routes(), role));
    }
    debug!(
        "Resolved {} routes for role {:?} (platform admin: {})",
        routes.len(),
        role,
        is_platform_admin
    );
    routes
}

/// Look up a top-level route by exact path, dashboard routes first
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    dashboard_routes()
        .iter()
        .chain(platform_admin_routes())
        .find(|route| route.path == path)
}

pub fn has_route_access(path: &str, role: Option<LogicalRole>) -> bool {
    let allowed = find_route(path).is_some_and(|route| route.allows(role));
    debug!(
        "Route access check: path='{}' role={:?} allowed={}",
        path, role, allowed
    );
    allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn paths(routes: &[RouteDescriptor]) -> Vec<&str> {
        routes.iter().map(|r| r.path.as_str()).collect()
    }

    #[test]
    fn test_paths_are_unique() {
        let mut seen = HashSet::new();
        for route in dashboard_routes().iter().chain(platform_admin_routes()) {
            assert!(seen.insert(route.path.clone()), "duplicate path {}", route.path);
            for child in &route.children {
                assert!(seen.insert(child.path.clone()), "duplicate path {}", child.path);
            }
        }
    }

    #[test]
    fn test_every_role_sees_dashboard_and_settings() {
        for role in LogicalRole::all() {
            let visible = get_user_routes(Some(*role), false);
            let visible = paths(&visible);
            assert_eq!(visible.first(), Some(&"/dashboard"));
            assert!(visible.contains(&"/dashboard/settings"));
        }
    }

    #[test]
    fn test_platform_block_follows_dashboard_block() {
        let routes = get_user_routes(Some(SuperAdmin), true);
        assert_eq!(
            paths(&routes),
            vec![
                "/dashboard",
                "/dashboard/users",
                "/dashboard/settings",
                "/dashboard/platform",
                "/dashboard/platform/organizations",
                "/dashboard/platform/analytics",
                "/dashboard/platform/admins",
                "/dashboard/platform/settings",
            ]
        );
    }

    #[test]
    fn test_admin_platform_block_excludes_super_admin_pages() {
        let routes = get_user_routes(Some(Admin), true);
        let visible = paths(&routes);
        assert!(visible.contains(&"/dashboard/platform/organizations"));
        assert!(!visible.contains(&"/dashboard/platform/admins"));
        assert!(!visible.contains(&"/dashboard/platform/settings"));
    }

    #[test]
    fn test_platform_block_needs_flag() {
        let routes = get_user_routes(Some(SuperAdmin), false);
        assert!(routes
            .iter()
            .all(|r| !r.path.starts_with("/dashboard/platform")));
    }

    #[test]
    fn test_filter_keeps_children_untouched() {
        let routes = filter_routes(dashboard_routes(), Some(OrgMember));
        let teams = routes
            .iter()
            .find(|r| r.path == "/dashboard/teams")
            .unwrap();
        assert_eq!(teams.children.len(), 1);
        assert!(teams.visible_children(Some(OrgMember)).is_empty());
        assert_eq!(teams.visible_children(Some(OrgOwner)).len(), 1);
    }

    #[test]
    fn test_route_access_does_not_match_children_or_prefixes() {
        assert!(!has_route_access("/dashboard/teams/new", Some(OrgOwner)));
        assert!(!has_route_access("/dashboard/org/", Some(OrgOwner)));
        assert!(!has_route_access("/dashboard/org/billing/invoices", Some(OrgOwner)));
        assert!(has_route_access("/dashboard/platform/admins", Some(SuperAdmin)));
        assert!(!has_route_access("/dashboard/platform/admins", Some(Admin)));
    }

    #[test]
    fn test_find_route() {
        assert_eq!(find_route("/dashboard/org/billing").unwrap().label, "Billing");
        assert!(find_route("/nonexistent").is_none());
    }
}
