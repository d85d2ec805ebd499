use teamdeck_types::LogicalRole;
use tracing::debug;

/// Roles whose assignment `role` may change.
///
/// Hand-authored: platform admins manage every organization role but not
/// each other, super admins additionally manage platform admins. Nobody
/// manages their own role.
pub fn manageable_roles(role: LogicalRole) -> &'static [LogicalRole] {
    match role {
        LogicalRole::SuperAdmin => &[
            LogicalRole::Admin,
            LogicalRole::OrgOwner,
            LogicalRole::OrgAdmin,
            LogicalRole::OrgMember,
        ],
        LogicalRole::Admin => &[
            LogicalRole::OrgOwner,
            LogicalRole::OrgAdmin,
            LogicalRole::OrgMember,
        ],
        LogicalRole::OrgOwner => &[LogicalRole::OrgAdmin, LogicalRole::OrgMember],
        LogicalRole::OrgAdmin => &[LogicalRole::OrgMember],
        LogicalRole::OrgMember => &[],
    }
}

pub fn can_manage_role(acting: Option<LogicalRole>, target: LogicalRole) -> bool {
    let allowed = acting.is_some_and(|acting| manageable_roles(acting).contains(&target));
    debug!(
        "Role management check: {:?} -> {} allowed={}",
        acting, target, allowed
    );
    allowed
}
