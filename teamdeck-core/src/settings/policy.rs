use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::env;
use teamdeck_types::UnknownRolePolicy;
use tracing::debug;

use crate::error::Result;

/// Settings for the decisions the policy tables leave open
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[readonly::make]
pub struct PolicySettings {
    /// How backend role strings outside `SuperAdmin | Admin | Member` resolve
    #[serde(default)]
    pub unknown_role: UnknownRolePolicy,
}

impl PolicySettings {
    pub fn get_environment() -> Environment {
        Environment::default()
            .prefix("TEAMDECK")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    /// Load settings from `config/default`, `config/{run mode}`,
    /// `config/local` and the environment, later sources winning. Every
    /// file is optional.
    pub fn new() -> Result<Self> {
        let run_mode = env::var("TEAMDECK_RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Self::get_environment());

        Self::build(builder)
    }

    /// Load settings from a single file, environment variables still apply
    pub fn from_file(path: &str) -> Result<Self> {
        Self::from_file_with_environment(path, Self::get_environment())
    }

    fn from_file_with_environment(path: &str, environment: Environment) -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(File::with_name(path))
            .add_source(environment);
        Self::build(builder)
    }

    /// Override the unknown role policy, e.g. from a command line flag
    pub fn with_unknown_role(mut self, policy: UnknownRolePolicy) -> Self {
        self.unknown_role = policy;
        self
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder().set_default("unknown_role", "member")?)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: PolicySettings = builder.build()?.try_deserialize()?;
        debug!("Loaded policy settings: {:?}", settings);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PolicySettings::get_environment().source(Some(vars))
    }

    fn settings_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_policy_is_member() {
        assert_eq!(
            PolicySettings::default().unknown_role,
            UnknownRolePolicy::Member
        );
    }

    #[test]
    fn test_load_from_file() {
        let file = settings_file("unknown_role: deny\n");
        let settings = PolicySettings::from_file_with_environment(
            file.path().to_str().unwrap(),
            environment(&[]),
        )
        .unwrap();
        assert_eq!(settings.unknown_role, UnknownRolePolicy::Deny);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let file = settings_file("{}\n");
        let settings = PolicySettings::from_file_with_environment(
            file.path().to_str().unwrap(),
            environment(&[]),
        )
        .unwrap();
        assert_eq!(settings.unknown_role, UnknownRolePolicy::Member);
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = settings_file("unknown_role: member\n");
        let settings = PolicySettings::from_file_with_environment(
            file.path().to_str().unwrap(),
            environment(&[("TEAMDECK__UNKNOWN_ROLE", "deny")]),
        )
        .unwrap();
        assert_eq!(settings.unknown_role, UnknownRolePolicy::Deny);
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let file = settings_file("unknown_role: maybe\n");
        let err = PolicySettings::from_file_with_environment(
            file.path().to_str().unwrap(),
            environment(&[]),
        )
        .unwrap_err();
        assert!(!err.is_unknown_name());
        assert!(err.to_string().starts_with("Failed to load policy settings"));
    }

    #[test]
    fn test_with_unknown_role_override() {
        let settings = PolicySettings::default().with_unknown_role(UnknownRolePolicy::Deny);
        assert_eq!(settings.unknown_role, UnknownRolePolicy::Deny);
    }
}
