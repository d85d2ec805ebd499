use owo_colors::OwoColorize;
use tabled::{builder::Builder, settings::Style};
use teamdeck_types::LogicalRole;

pub fn format_decision(allowed: bool) -> String {
    if allowed {
        "allowed".green().to_string()
    } else {
        "denied".bright_red().to_string()
    }
}

pub fn format_yes_no(value: bool) -> String {
    if value {
        "yes".green().to_string()
    } else {
        "no".dimmed().to_string()
    }
}

pub fn format_roles(roles: &[LogicalRole]) -> String {
    if roles.is_empty() {
        return "-".to_string();
    }
    roles
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_optional_role(role: Option<LogicalRole>) -> String {
    match role {
        Some(role) => role.as_str().bright_blue().to_string(),
        None => "no role".dimmed().to_string(),
    }
}

/// Render a header row plus records as a rounded table
pub fn render_table(header: &[&str], records: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|h| h.to_string()));
    for record in records {
        builder.push_record(record);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_roles() {
        assert_eq!(format_roles(&[]), "-");
        assert_eq!(
            format_roles(&[LogicalRole::OrgAdmin, LogicalRole::OrgMember]),
            "OrgAdmin, OrgMember"
        );
    }

    #[test]
    fn test_render_table_contains_cells() {
        let table = render_table(
            &["Role", "Label"],
            vec![vec!["OrgOwner".to_string(), "Organization Owner".to_string()]],
        );
        assert!(table.contains("Role"));
        assert!(table.contains("Organization Owner"));
    }

    #[test]
    fn test_format_decision() {
        assert!(format_decision(true).contains("allowed"));
        assert!(format_decision(false).contains("denied"));
    }
}
