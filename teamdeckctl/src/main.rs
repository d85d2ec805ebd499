mod cli;
mod commands;
mod context;
mod utils;

use clap::{CommandFactory, Parser};
use cli::print_completions;
use cli::{Cli, Commands};
use context::AppContext;
use std::process::ExitCode;
use std::sync::Arc;
use teamdeck_core::settings::PolicySettings;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};
use utils::tracing_layer::UiLayer;
use utils::ui::Ui;

fn load_settings(cli: &Cli) -> anyhow::Result<PolicySettings> {
    let settings = match &cli.config {
        Some(path) => PolicySettings::from_file(path)?,
        None => PolicySettings::new()?,
    };
    Ok(match cli.unknown_role {
        Some(policy) => settings.with_unknown_role(policy),
        None => settings,
    })
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let ui = Arc::new(Ui::new());

    // Warnings about unrecognized roles and ungrouped routes are on by default
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(UiLayer::new(ui.clone()))
        .with(filter)
        .init();

    info!("Running command {:?} ...", &cli.command);

    let settings = load_settings(&cli)?;
    let app_context = AppContext::new(ui, settings, cli.output);

    let result = match &cli.command {
        Commands::RoleList => commands::roles::list_roles(&app_context),
        Commands::RoleDerive(cmd) => commands::roles::derive_role(&app_context, cmd),
        Commands::RoleCanManage(cmd) => commands::roles::can_manage(&app_context, cmd),
        Commands::PermissionList(cmd) => commands::permissions::list_permissions(&app_context, cmd),
        Commands::PermissionTest(cmd) => commands::permissions::test_permission(&app_context, cmd),
        Commands::RouteList(cmd) => commands::routes::list_routes(&app_context, cmd),
        Commands::RouteAccess(cmd) => commands::routes::check_route_access(&app_context, cmd),
        Commands::Completion(cmd) => {
            let mut cli_cmd = Cli::command();
            print_completions(cmd.shell, &mut cli_cmd);
            Ok(())
        }
    };

    // Command errors are printed once by the ui, not again by anyhow
    Ok(app_context.ui().report(result))
}
