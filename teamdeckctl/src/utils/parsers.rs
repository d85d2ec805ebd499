use teamdeck_types::UnknownRolePolicy;

pub fn parse_unknown_role_policy(s: &str) -> Result<UnknownRolePolicy, String> {
    match s.to_lowercase().as_str() {
        "member" => Ok(UnknownRolePolicy::Member),
        "deny" => Ok(UnknownRolePolicy::Deny),
        _ => Err(format!(
            "Invalid unknown role policy '{s}', expected 'member' or 'deny'"
        )),
    }
}
