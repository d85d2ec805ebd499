use owo_colors::OwoColorize;
use serde::Serialize;
use teamdeck_core::authorization::{
    has_all_permissions, has_any_permission, has_permission, parse_permission, parse_role,
    permissions_for,
};
use teamdeck_types::{LogicalRole, Permission, PermissionScope};

use crate::{
    cli::{PermissionListCommand, PermissionTestCommand},
    context::AppContext,
    utils::formatting::{format_decision, format_roles, format_yes_no, render_table},
};

#[derive(Serialize)]
struct PermissionInfo {
    permission: Permission,
    scope: PermissionScope,
    granted_to: Vec<LogicalRole>,
}

#[derive(Serialize)]
struct PermissionTestResult {
    role: LogicalRole,
    mode: &'static str,
    allowed: bool,
    checks: Vec<PermissionCheck>,
}

#[derive(Serialize)]
struct PermissionCheck {
    permission: Permission,
    granted: bool,
}

fn granted_to(permission: Permission) -> Vec<LogicalRole> {
    LogicalRole::all()
        .iter()
        .copied()
        .filter(|role| has_permission(Some(*role), permission))
        .collect()
}

pub fn render_permission_list(
    context: &AppContext,
    cmd: &PermissionListCommand,
) -> anyhow::Result<String> {
    let permissions: &[Permission] = match &cmd.role {
        Some(role) => permissions_for(parse_role(role)?),
        None => Permission::all(),
    };

    let infos: Vec<PermissionInfo> = permissions
        .iter()
        .map(|permission| PermissionInfo {
            permission: *permission,
            scope: permission.scope(),
            granted_to: granted_to(*permission),
        })
        .collect();

    if context.is_json() {
        return Ok(serde_json::to_string_pretty(&infos)?);
    }

    let records = infos
        .iter()
        .map(|info| {
            vec![
                info.permission.as_str().to_string(),
                info.scope.to_string(),
                format_roles(&info.granted_to),
            ]
        })
        .collect();
    Ok(render_table(&["Permission", "Scope", "Granted to"], records))
}

pub fn list_permissions(context: &AppContext, cmd: &PermissionListCommand) -> anyhow::Result<()> {
    context.ui().run(|| render_permission_list(context, cmd))
}

pub fn render_permission_test(
    context: &AppContext,
    cmd: &PermissionTestCommand,
) -> anyhow::Result<String> {
    let role = parse_role(&cmd.role)?;
    let permissions = cmd
        .permissions
        .iter()
        .map(|name| parse_permission(name))
        .collect::<Result<Vec<_>, _>>()?;

    let allowed = if cmd.all {
        has_all_permissions(Some(role), &permissions)
    } else {
        has_any_permission(Some(role), &permissions)
    };
    let result = PermissionTestResult {
        role,
        mode: if cmd.all { "all" } else { "any" },
        allowed,
        checks: permissions
            .iter()
            .map(|permission| PermissionCheck {
                permission: *permission,
                granted: has_permission(Some(role), *permission),
            })
            .collect(),
    };

    if context.is_json() {
        return Ok(serde_json::to_string_pretty(&result)?);
    }

    let records = result
        .checks
        .iter()
        .map(|check| {
            vec![
                check.permission.as_str().to_string(),
                format_yes_no(check.granted),
            ]
        })
        .collect();
    Ok(format!(
        "{}\n{} with {} of {} permission(s): {}",
        render_table(&["Permission", "Granted"], records),
        role.as_str().bright_blue(),
        result.mode,
        result.checks.len(),
        format_decision(allowed)
    ))
}

pub fn test_permission(context: &AppContext, cmd: &PermissionTestCommand) -> anyhow::Result<()> {
    context.ui().run(|| render_permission_test(context, cmd))
}
