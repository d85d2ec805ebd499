use crate::utils::parsers::parse_unknown_role_policy;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use teamdeck_types::UnknownRolePolicy;

#[derive(Parser)]
#[command(name = "teamdeckctl")]
#[command(about = "Inspect the teamdeck role and permission model")]
#[command(version)]
pub struct Cli {
    /// Output format of command results
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub output: OutputFormat,

    /// Policy settings file, defaults to config/default and friends
    #[arg(long, env = "TEAMDECK_CONFIG", global = true)]
    pub config: Option<String>,

    /// How unrecognized backend roles resolve (member or deny), overrides the settings
    #[arg(long, value_parser = parse_unknown_role_policy, global = true)]
    pub unknown_role: Option<UnknownRolePolicy>,

    #[arg(long, default_value = "false", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all logical roles
    #[command(name = "role:list")]
    RoleList,

    /// Derive the logical role of a session user
    #[command(name = "role:derive")]
    RoleDerive(RoleDeriveCommand),

    /// Check whether one role may change the assignment of another
    #[command(name = "role:can-manage")]
    RoleCanManage(RoleCanManageCommand),

    /// List permissions and the roles holding them
    #[command(name = "permission:list")]
    PermissionList(PermissionListCommand),

    /// Check whether a role holds the given permissions
    #[command(name = "permission:test")]
    PermissionTest(PermissionTestCommand),

    /// List the dashboard routes visible to a role
    #[command(name = "route:list")]
    RouteList(RouteListCommand),

    /// Check whether a role may open a route
    #[command(name = "route:access")]
    RouteAccess(RouteAccessCommand),

    /// Show shell completion script.
    #[command(name = "completion")]
    Completion(CompletionCommand),
}

#[derive(Debug, Parser, Default)]
pub struct RoleDeriveCommand {
    /// Backend role string, usually SuperAdmin, Admin or Member
    #[arg(long, required_unless_present = "from_json", conflicts_with = "from_json")]
    pub role: Option<String>,

    /// The user owns their organization
    #[arg(long)]
    pub owner: bool,

    /// The user administers their organization
    #[arg(long)]
    pub admin: bool,

    #[arg(long)]
    pub organization_id: Option<String>,

    /// Read the session user from a JSON file instead
    #[arg(long)]
    pub from_json: Option<String>,
}

#[derive(Debug, Parser)]
pub struct RoleCanManageCommand {
    /// Role performing the change
    pub acting: String,
    /// Role being assigned or revoked
    pub target: String,
}

#[derive(Debug, Parser, Default)]
pub struct PermissionListCommand {
    /// Only list the permissions of this role
    #[arg(long)]
    pub role: Option<String>,
}

#[derive(Debug, Parser)]
pub struct PermissionTestCommand {
    /// Role to test
    pub role: String,

    /// Permissions to test, e.g. org:view_billing
    #[arg(required = true)]
    pub permissions: Vec<String>,

    /// Require every permission instead of any of them
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Parser)]
pub struct RouteListCommand {
    /// Role to list routes for
    #[arg(long)]
    pub role: String,

    /// Include the platform administration block
    #[arg(long)]
    pub platform_admin: bool,

    /// Group routes into sidebar sections
    #[arg(long)]
    pub grouped: bool,
}

#[derive(Debug, Parser)]
pub struct RouteAccessCommand {
    /// Exact route path, e.g. /dashboard/org/billing
    pub path: String,
    /// Role to test
    pub role: String,
}

#[derive(Debug, Parser)]
pub struct CompletionCommand {
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn print_completions<G: clap_complete::Generator>(gen: G, cmd: &mut clap::Command) {
    clap_complete::generate(gen, cmd, cmd.get_name().to_string(), &mut std::io::stdout());
}
