use owo_colors::OwoColorize;
use serde::Serialize;
use teamdeck_core::authorization::{
    get_user_routes, group_routes, has_route_access, parse_role, ungrouped_routes,
};
use teamdeck_types::{LogicalRole, RouteDescriptor};

use crate::{
    cli::{RouteAccessCommand, RouteListCommand},
    context::AppContext,
    utils::formatting::{format_decision, render_table},
};

#[derive(Serialize)]
struct RouteAccessDecision<'a> {
    path: &'a str,
    role: LogicalRole,
    allowed: bool,
}

fn route_record(section: Option<&str>, route: &RouteDescriptor, role: LogicalRole) -> Vec<String> {
    let children = route
        .visible_children(Some(role))
        .iter()
        .map(|child| child.path.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let mut record = Vec::with_capacity(5);
    if let Some(section) = section {
        record.push(section.to_string());
    }
    record.extend([
        route.path.clone(),
        route.label.clone(),
        route.icon.clone(),
        if children.is_empty() {
            "-".to_string()
        } else {
            children
        },
    ]);
    record
}

pub fn render_route_list(context: &AppContext, cmd: &RouteListCommand) -> anyhow::Result<String> {
    let role = parse_role(&cmd.role)?;
    let routes = get_user_routes(Some(role), cmd.platform_admin);

    if cmd.grouped {
        for route in ungrouped_routes(&routes) {
            context.ui().eprintln(format!(
                "{} {} is not part of any sidebar section",
                "Note:".yellow(),
                route.path
            ));
        }
        let sections = group_routes(&routes);
        if context.is_json() {
            return Ok(serde_json::to_string_pretty(&sections)?);
        }
        let records = sections
            .iter()
            .flat_map(|section| {
                let title = section.title.as_deref().unwrap_or("Main");
                section
                    .items
                    .iter()
                    .map(move |route| route_record(Some(title), route, role))
            })
            .collect();
        return Ok(render_table(
            &["Section", "Path", "Label", "Icon", "Children"],
            records,
        ));
    }

    if context.is_json() {
        return Ok(serde_json::to_string_pretty(&routes)?);
    }
    let records = routes
        .iter()
        .map(|route| route_record(None, route, role))
        .collect();
    Ok(render_table(&["Path", "Label", "Icon", "Children"], records))
}

pub fn list_routes(context: &AppContext, cmd: &RouteListCommand) -> anyhow::Result<()> {
    context.ui().run(|| render_route_list(context, cmd))
}

pub fn render_route_access(
    context: &AppContext,
    cmd: &RouteAccessCommand,
) -> anyhow::Result<String> {
    let role = parse_role(&cmd.role)?;
    let allowed = has_route_access(&cmd.path, Some(role));

    if context.is_json() {
        return Ok(serde_json::to_string_pretty(&RouteAccessDecision {
            path: &cmd.path,
            role,
            allowed,
        })?);
    }

    Ok(format!(
        "Access to {} for {}: {}",
        cmd.path.bright_blue(),
        role.as_str().bright_blue(),
        format_decision(allowed)
    ))
}

pub fn check_route_access(context: &AppContext, cmd: &RouteAccessCommand) -> anyhow::Result<()> {
    context.ui().run(|| render_route_access(context, cmd))
}
