pub mod authorization;
pub mod error;
pub mod settings;

// Contract types live in teamdeck-types so the TypeScript generator does not
// have to build this crate; re-export the ones every caller needs.
pub use teamdeck_types::{
    CurrentUser, LogicalRole, Permission, PermissionScope, RouteDescriptor, RouteSection,
    UnknownRolePolicy,
};
