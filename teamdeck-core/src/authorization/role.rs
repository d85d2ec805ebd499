use teamdeck_types::{CurrentUser, LogicalRole, UnknownRolePolicy};
use tracing::{trace, warn};

use crate::error::{PolicyError, Result};

/// Coarse role strings issued by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawRole {
    SuperAdmin,
    Admin,
    Member,
}

impl RawRole {
    /// Parse a backend role string. Matching is exact, the backend never
    /// varies the casing.
    pub fn parse(s: &str) -> Option<RawRole> {
        match s {
            "SuperAdmin" => Some(RawRole::SuperAdmin),
            "Admin" => Some(RawRole::Admin),
            "Member" => Some(RawRole::Member),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RawRole::SuperAdmin => "SuperAdmin",
            RawRole::Admin => "Admin",
            RawRole::Member => "Member",
        }
    }
}

/// Derive the logical role of a session user.
///
/// Unrecognized backend roles resolve to [`LogicalRole::OrgMember`]; use
/// [`derive_role_with`] to pick a stricter policy.
pub fn derive_role(user: Option<&CurrentUser>) -> Option<LogicalRole> {
    derive_role_with(user, UnknownRolePolicy::default())
}

/// Derive the logical role of a session user, resolving unrecognized backend
/// roles according to `policy`.
pub fn derive_role_with(
    user: Option<&CurrentUser>,
    policy: UnknownRolePolicy,
) -> Option<LogicalRole> {
    let user = user?;

    let role = match RawRole::parse(&user.role) {
        Some(RawRole::SuperAdmin) => Some(LogicalRole::SuperAdmin),
        Some(RawRole::Admin) => Some(LogicalRole::Admin),
        // Owner wins over admin when both flags are set
        Some(RawRole::Member) if user.is_organization_owner => Some(LogicalRole::OrgOwner),
        Some(RawRole::Member) if user.is_organization_admin => Some(LogicalRole::OrgAdmin),
        Some(RawRole::Member) => Some(LogicalRole::OrgMember),
        None => {
            let fallback = match policy {
                UnknownRolePolicy::Member => Some(LogicalRole::OrgMember),
                UnknownRolePolicy::Deny => None,
            };
            warn!(
                "Unrecognized backend role '{}', resolving to {} (policy: {})",
                user.role,
                fallback.map(|r| r.as_str()).unwrap_or("no role"),
                policy
            );
            fallback
        }
    };

    trace!("Derived role {:?} for backend role '{}'", role, user.role);
    role
}

/// Parse a logical role name, e.g. from a command line argument
pub fn parse_role(name: &str) -> Result<LogicalRole> {
    LogicalRole::from_str(name).ok_or_else(|| PolicyError::UnknownRole(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_role_parse_is_exact() {
        assert_eq!(RawRole::parse("Member"), Some(RawRole::Member));
        assert_eq!(RawRole::parse("member"), None);
        assert_eq!(RawRole::parse(" Admin"), None);
        assert_eq!(RawRole::Admin.as_str(), "Admin");
    }

    #[test]
    fn test_platform_roles_ignore_organization_flags() {
        let mut user = CurrentUser::new("Admin");
        user.is_organization_owner = true;
        user.is_organization_admin = true;
        assert_eq!(derive_role(Some(&user)), Some(LogicalRole::Admin));

        user.role = "SuperAdmin".to_string();
        assert_eq!(derive_role(Some(&user)), Some(LogicalRole::SuperAdmin));
    }

    #[test]
    fn test_unknown_role_policy_deny() {
        let user = CurrentUser::new("Auditor");
        assert_eq!(
            derive_role_with(Some(&user), UnknownRolePolicy::Member),
            Some(LogicalRole::OrgMember)
        );
        assert_eq!(derive_role_with(Some(&user), UnknownRolePolicy::Deny), None);
    }

    #[test]
    fn test_unknown_role_ignores_organization_flags() {
        let mut user = CurrentUser::new("Auditor");
        user.is_organization_owner = true;
        user.is_organization_admin = true;
        assert_eq!(derive_role(Some(&user)), Some(LogicalRole::OrgMember));
    }

    #[test]
    fn test_deny_policy_keeps_known_roles() {
        let user = CurrentUser::member(false, true);
        assert_eq!(
            derive_role_with(Some(&user), UnknownRolePolicy::Deny),
            Some(LogicalRole::OrgAdmin)
        );
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("orgadmin").unwrap(), LogicalRole::OrgAdmin);
        let err = parse_role("Member").unwrap_err();
        assert!(matches!(err, PolicyError::UnknownRole(name) if name == "Member"));
    }
}
