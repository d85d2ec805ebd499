/*!
 * Minimal types-only crate for the teamdeck RBAC contract
 *
 * This crate contains only the types shared between the policy engine and
 * the frontends consuming it, so TypeScript generation does not need to
 * compile teamdeck-core.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// Re-export core types for easier access
pub use serde;
pub use ts_rs;

/// Normalized authorization role of a user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export)]
pub enum LogicalRole {
    /// Platform operator with unrestricted access
    SuperAdmin,
    /// Platform administrator, not bound to an organization
    Admin,
    OrgOwner,
    OrgAdmin,
    OrgMember,
}

impl LogicalRole {
    /// Get all roles in display order
    pub fn all() -> &'static [LogicalRole] {
        &[
            LogicalRole::SuperAdmin,
            LogicalRole::Admin,
            LogicalRole::OrgOwner,
            LogicalRole::OrgAdmin,
            LogicalRole::OrgMember,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalRole::SuperAdmin => "SuperAdmin",
            LogicalRole::Admin => "Admin",
            LogicalRole::OrgOwner => "OrgOwner",
            LogicalRole::OrgAdmin => "OrgAdmin",
            LogicalRole::OrgMember => "OrgMember",
        }
    }

    /// Human readable name used in role pickers and badges
    pub fn label(&self) -> &'static str {
        match self {
            LogicalRole::SuperAdmin => "Super Admin",
            LogicalRole::Admin => "Platform Admin",
            LogicalRole::OrgOwner => "Organization Owner",
            LogicalRole::OrgAdmin => "Organization Admin",
            LogicalRole::OrgMember => "Organization Member",
        }
    }

    /// Parse from string, ignoring case as well as `-` and `_` separators
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<LogicalRole> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "superadmin" => Some(LogicalRole::SuperAdmin),
            "admin" => Some(LogicalRole::Admin),
            "orgowner" => Some(LogicalRole::OrgOwner),
            "orgadmin" => Some(LogicalRole::OrgAdmin),
            "orgmember" => Some(LogicalRole::OrgMember),
            _ => None,
        }
    }
}

impl fmt::Display for LogicalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Namespace of a permission, derived from its identifier prefix
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PermissionScope {
    /// `platform:*`
    Platform,
    /// `org:*`
    Organization,
    /// Unprefixed permissions
    General,
}

impl fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionScope::Platform => write!(f, "platform"),
            PermissionScope::Organization => write!(f, "organization"),
            PermissionScope::General => write!(f, "general"),
        }
    }
}

/// Fine-grained capability checked against the grants of a role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export)]
pub enum Permission {
    #[serde(rename = "platform:manage_organizations")]
    PlatformManageOrganizations,
    #[serde(rename = "platform:view_organizations")]
    PlatformViewOrganizations,
    #[serde(rename = "platform:manage_admins")]
    PlatformManageAdmins,
    #[serde(rename = "platform:view_analytics")]
    PlatformViewAnalytics,
    #[serde(rename = "platform:manage_settings")]
    PlatformManageSettings,
    #[serde(rename = "org:view")]
    OrgView,
    #[serde(rename = "org:update")]
    OrgUpdate,
    #[serde(rename = "org:delete")]
    OrgDelete,
    #[serde(rename = "org:view_billing")]
    OrgViewBilling,
    #[serde(rename = "org:manage_billing")]
    OrgManageBilling,
    #[serde(rename = "org:view_members")]
    OrgViewMembers,
    #[serde(rename = "org:manage_members")]
    OrgManageMembers,
    #[serde(rename = "org:invite_members")]
    OrgInviteMembers,
    #[serde(rename = "org:view_analytics")]
    OrgViewAnalytics,
    #[serde(rename = "org:transfer_ownership")]
    OrgTransferOwnership,
    #[serde(rename = "view_dashboard")]
    ViewDashboard,
    #[serde(rename = "view_teams")]
    ViewTeams,
    #[serde(rename = "create_teams")]
    CreateTeams,
    #[serde(rename = "manage_teams")]
    ManageTeams,
    #[serde(rename = "view_users")]
    ViewUsers,
    #[serde(rename = "manage_users")]
    ManageUsers,
    /// Edit the signed-in user's own profile
    #[serde(rename = "manage_profile")]
    ManageProfile,
}

impl Permission {
    /// Get all available permissions in display order
    pub fn all() -> &'static [Permission] {
        &[
            Permission::PlatformManageOrganizations,
            Permission::PlatformViewOrganizations,
            Permission::PlatformManageAdmins,
            Permission::PlatformViewAnalytics,
            Permission::PlatformManageSettings,
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
            Permission::ViewUsers,
            Permission::ManageUsers,
            Permission::ManageProfile,
        ]
    }

    /// Identifier as issued by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::PlatformManageOrganizations => "platform:manage_organizations",
            Permission::PlatformViewOrganizations => "platform:view_organizations",
            Permission::PlatformManageAdmins => "platform:manage_admins",
            Permission::PlatformViewAnalytics => "platform:view_analytics",
            Permission::PlatformManageSettings => "platform:manage_settings",
            Permission::OrgView => "org:view",
            Permission::OrgUpdate => "org:update",
            Permission::OrgDelete => "org:delete",
            Permission::OrgViewBilling => "org:view_billing",
            Permission::OrgManageBilling => "org:manage_billing",
            Permission::OrgViewMembers => "org:view_members",
            Permission::OrgManageMembers => "org:manage_members",
            Permission::OrgInviteMembers => "org:invite_members",
            Permission::OrgViewAnalytics => "org:view_analytics",
            Permission::OrgTransferOwnership => "org:transfer_ownership",
            Permission::ViewDashboard => "view_dashboard",
            Permission::ViewTeams => "view_teams",
            Permission::CreateTeams => "create_teams",
            Permission::ManageTeams => "manage_teams",
            Permission::ViewUsers => "view_users",
            Permission::ManageUsers => "manage_users",
            Permission::ManageProfile => "manage_profile",
        }
    }

    /// Parse from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Permission> {
        let needle = s.trim().to_lowercase();
        Permission::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == needle)
    }

    pub fn scope(&self) -> PermissionScope {
        let id = self.as_str();
        if id.starts_with("platform:") {
            PermissionScope::Platform
        } else if id.starts_with("org:") {
            PermissionScope::Organization
        } else {
            PermissionScope::General
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The signed-in user as delivered by the session endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CurrentUser {
    /// Coarse backend role, one of `SuperAdmin`, `Admin` or `Member`
    pub role: String,
    /// Only consulted when `role` is `Member`
    #[serde(default)]
    #[ts(as = "Option<bool>", optional)]
    pub is_organization_owner: bool,
    /// Only consulted when `role` is `Member` and the owner flag is unset
    #[serde(default)]
    #[ts(as = "Option<bool>", optional)]
    pub is_organization_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub organization_id: Option<String>,
}

impl CurrentUser {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..Default::default()
        }
    }

    pub fn member(is_owner: bool, is_admin: bool) -> Self {
        Self {
            role: "Member".to_string(),
            is_organization_owner: is_owner,
            is_organization_admin: is_admin,
            organization_id: None,
        }
    }

    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    pub fn has_organization(&self) -> bool {
        self.organization_id.is_some()
    }
}

/// What an unrecognized backend role string resolves to
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum UnknownRolePolicy {
    /// Treat the user as a plain organization member
    #[default]
    Member,
    /// Treat the user as having no role at all
    Deny,
}

impl fmt::Display for UnknownRolePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownRolePolicy::Member => write!(f, "member"),
            UnknownRolePolicy::Deny => write!(f, "deny"),
        }
    }
}

/// A navigable dashboard destination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RouteDescriptor {
    /// Unique path, matched exactly
    pub path: String,
    pub label: String,
    /// Name of the icon in the frontend icon set
    pub icon: String,
    /// Roles allowed to see this route
    pub allowed_roles: Vec<LogicalRole>,
    /// Nested destinations in display order
    #[serde(default)]
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    pub fn new(path: &str, label: &str, icon: &str, allowed_roles: &[LogicalRole]) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            allowed_roles: allowed_roles.to_vec(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<RouteDescriptor>) -> Self {
        self.children = children;
        self
    }

    /// Whether `role` may see this route. No role never sees anything.
    pub fn allows(&self, role: Option<LogicalRole>) -> bool {
        role.is_some_and(|role| self.allowed_roles.contains(&role))
    }

    /// Children visible to `role`, in display order
    pub fn visible_children(&self, role: Option<LogicalRole>) -> Vec<RouteDescriptor> {
        self.children
            .iter()
            .filter(|child| child.allows(role))
            .cloned()
            .collect()
    }
}

/// A titled block of routes in the sidebar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export)]
pub struct RouteSection {
    /// `None` for the untitled main section
    #[ts(optional)]
    pub title: Option<String>,
    pub items: Vec<RouteDescriptor>,
}
