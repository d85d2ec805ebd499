//! Error types for the fallible edges of the policy engine.
//!
//! Authorization decisions themselves never fail: unknown input degrades to
//! "no access". Errors only arise when turning user supplied names into
//! roles or permissions, and when loading settings.
//!
//! # Examples
//!
//! ```
//! use teamdeck_core::authorization::parse_permission;
//! use teamdeck_core::error::PolicyError;
//!
//! let err = parse_permission("org:launch_rockets").unwrap_err();
//! assert!(matches!(err, PolicyError::UnknownPermission(_)));
//! assert!(err.is_unknown_name());
//! ```

use config::ConfigError;

/// Errors raised while parsing policy names or loading policy settings
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// A role name did not match any logical role
    #[error("Unknown role '{0}', expected one of SuperAdmin, Admin, OrgOwner, OrgAdmin, OrgMember")]
    UnknownRole(String),

    /// A permission identifier did not match any known permission
    #[error("Unknown permission '{0}'")]
    UnknownPermission(String),

    /// Policy settings could not be loaded
    #[error("Failed to load policy settings: {0}")]
    Settings(#[from] ConfigError),
}

impl PolicyError {
    /// Check if this error was caused by an unrecognized role or permission name
    pub fn is_unknown_name(&self) -> bool {
        matches!(self, Self::UnknownRole(_) | Self::UnknownPermission(_))
    }
}

pub type Result<T, E = PolicyError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_message_lists_roles() {
        let err = PolicyError::UnknownRole("Owner".to_string());
        assert!(err.is_unknown_name());
        assert!(err.to_string().contains("'Owner'"));
        assert!(err.to_string().contains("OrgMember"));
    }

    #[test]
    fn test_settings_error_from_config_error() {
        let err: PolicyError = ConfigError::Message("broken".to_string()).into();
        assert!(!err.is_unknown_name());
        assert_eq!(err.to_string(), "Failed to load policy settings: broken");
    }
}
