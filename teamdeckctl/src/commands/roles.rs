use anyhow::Context;
use owo_colors::OwoColorize;
use serde::Serialize;
use teamdeck_core::authorization::{
    can_manage_role, derive_role_with, is_platform_role, manageable_roles, parse_role,
    permissions_for,
};
use teamdeck_types::{CurrentUser, LogicalRole};

use crate::{
    cli::{RoleCanManageCommand, RoleDeriveCommand},
    context::AppContext,
    utils::formatting::{
        format_decision, format_optional_role, format_roles, format_yes_no, render_table,
    },
};

#[derive(Serialize)]
struct RoleInfo {
    role: LogicalRole,
    label: &'static str,
    scope: &'static str,
    manages: &'static [LogicalRole],
    permissions: usize,
}

#[derive(Serialize)]
struct DerivedRole<'a> {
    user: &'a CurrentUser,
    role: Option<LogicalRole>,
}

#[derive(Serialize)]
struct ManageDecision {
    acting: LogicalRole,
    target: LogicalRole,
    allowed: bool,
}

fn scope_name(role: LogicalRole) -> &'static str {
    if is_platform_role(Some(role)) {
        "platform"
    } else {
        "organization"
    }
}

pub fn render_role_list(context: &AppContext) -> anyhow::Result<String> {
    let roles: Vec<RoleInfo> = LogicalRole::all()
        .iter()
        .map(|role| RoleInfo {
            role: *role,
            label: role.label(),
            scope: scope_name(*role),
            manages: manageable_roles(*role),
            permissions: permissions_for(*role).len(),
        })
        .collect();

    if context.is_json() {
        return Ok(serde_json::to_string_pretty(&roles)?);
    }

    let records = roles
        .iter()
        .map(|info| {
            vec![
                info.role.as_str().to_string(),
                info.label.to_string(),
                info.scope.to_string(),
                format_roles(info.manages),
                info.permissions.to_string(),
            ]
        })
        .collect();
    Ok(render_table(
        &["Role", "Label", "Scope", "Manages", "Permissions"],
        records,
    ))
}

pub fn list_roles(context: &AppContext) -> anyhow::Result<()> {
    context.ui().run(|| render_role_list(context))
}

/// Build the session user from the command, either from flags or a JSON file
pub fn read_user(cmd: &RoleDeriveCommand) -> anyhow::Result<CurrentUser> {
    if let Some(path) = &cmd.from_json {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session user from {path}"))?;
        return serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session user in {path}"));
    }

    let role = cmd
        .role
        .as_deref()
        .context("Either --role or --from-json is required")?;
    Ok(CurrentUser {
        role: role.to_string(),
        is_organization_owner: cmd.owner,
        is_organization_admin: cmd.admin,
        organization_id: cmd.organization_id.clone(),
    })
}

pub fn render_derived_role(context: &AppContext, cmd: &RoleDeriveCommand) -> anyhow::Result<String> {
    let user = read_user(cmd)?;
    let role = derive_role_with(Some(&user), context.settings().unknown_role);

    if context.is_json() {
        return Ok(serde_json::to_string_pretty(&DerivedRole {
            user: &user,
            role,
        })?);
    }

    Ok(render_table(
        &["Backend role", "Owner", "Admin", "Organization", "Logical role"],
        vec![vec![
            user.role.clone(),
            format_yes_no(user.is_organization_owner),
            format_yes_no(user.is_organization_admin),
            user.organization_id.clone().unwrap_or_else(|| "-".to_string()),
            format_optional_role(role),
        ]],
    ))
}

pub fn derive_role(context: &AppContext, cmd: &RoleDeriveCommand) -> anyhow::Result<()> {
    context.ui().run(|| render_derived_role(context, cmd))
}

pub fn render_can_manage(
    context: &AppContext,
    cmd: &RoleCanManageCommand,
) -> anyhow::Result<String> {
    let acting = parse_role(&cmd.acting)?;
    let target = parse_role(&cmd.target)?;
    let allowed = can_manage_role(Some(acting), target);

    if context.is_json() {
        return Ok(serde_json::to_string_pretty(&ManageDecision {
            acting,
            target,
            allowed,
        })?);
    }

    Ok(format!(
        "{} managing the role of {}: {}",
        acting.as_str().bright_blue(),
        target.as_str().bright_blue(),
        format_decision(allowed)
    ))
}

pub fn can_manage(context: &AppContext, cmd: &RoleCanManageCommand) -> anyhow::Result<()> {
    context.ui().run(|| render_can_manage(context, cmd))
}
