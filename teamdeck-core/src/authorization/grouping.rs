//! Sidebar sections for an already filtered route list.

use teamdeck_types::{RouteDescriptor, RouteSection};
use tracing::warn;

enum PathMatch {
    Exact(&'static [&'static str]),
    Prefix(&'static str),
}

impl PathMatch {
    fn matches(&self, path: &str) -> bool {
        match self {
            PathMatch::Exact(paths) => paths.iter().any(|p| *p == path),
            PathMatch::Prefix(prefix) => path.starts_with(*prefix),
        }
    }
}

struct SectionRule {
    title: Option<&'static str>,
    matcher: PathMatch,
}

// Section order is sidebar order
const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        title: None,
        matcher: PathMatch::Exact(&["/dashboard"]),
    },
    SectionRule {
        title: Some("Platform"),
        matcher: PathMatch::Prefix("/dashboard/platform"),
    },
    SectionRule {
        title: Some("Organization"),
        matcher: PathMatch::Exact(&[
            "/dashboard/org",
            "/dashboard/org/analytics",
            "/dashboard/org/billing",
        ]),
    },
    SectionRule {
        title: Some("Team Management"),
        matcher: PathMatch::Exact(&["/dashboard/teams"]),
    },
    SectionRule {
        title: Some("User Management"),
        matcher: PathMatch::Exact(&[
            "/dashboard/org/members",
            "/dashboard/org/invitations",
            "/dashboard/users",
        ]),
    },
    SectionRule {
        title: Some("Settings"),
        matcher: PathMatch::Exact(&["/dashboard/settings"]),
    },
];

fn is_grouped(route: &RouteDescriptor) -> bool {
    SECTION_RULES
        .iter()
        .any(|rule| rule.matcher.matches(&route.path))
}

/// Partition `routes` into sidebar sections.
///
/// Sections keep their fixed order, routes keep their input order within a
/// section and empty sections are left out. Routes no section claims are
/// dropped with a warning; [`ungrouped_routes`] lists them.
pub fn group_routes(routes: &[RouteDescriptor]) -> Vec<RouteSection> {
    for route in routes.iter().filter(|route| !is_grouped(route)) {
        warn!(
            "Route '{}' ({}) matches no sidebar section and is not shown",
            route.path, route.label
        );
    }

    SECTION_RULES
        .iter()
        .filter_map(|rule| {
            let items: Vec<RouteDescriptor> = routes
                .iter()
                .filter(|route| rule.matcher.matches(&route.path))
                .cloned()
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(RouteSection {
                    title: rule.title.map(str::to_string),
                    items,
                })
            }
        })
        .collect()
}

/// Routes that [`group_routes`] would drop
pub fn ungrouped_routes(routes: &[RouteDescriptor]) -> Vec<RouteDescriptor> {
    routes
        .iter()
        .filter(|route| !is_grouped(route))
        .cloned()
        .collect()
}
