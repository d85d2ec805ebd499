/*!
 * Generates the TypeScript bindings for the role, permission and route
 * types consumed by the dashboard frontend.
 *
 * Usage: cargo run (from ts-generator directory)
 */

use std::path::{Path, PathBuf};
use teamdeck_types::{ts_rs::TS, *};

fn export_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // CARGO_MANIFEST_DIR is the ts-generator directory, its parent the workspace root
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")?;
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .ok_or("ts-generator has no parent directory")?;
    Ok(workspace_root.join("frontend/src/generated"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let export_dir = export_dir()?;
    std::env::set_var("TS_RS_EXPORT_DIR", &export_dir);

    println!("🔧 Generating TypeScript bindings for roles and routes...");

    // Roles and permissions
    LogicalRole::export()?;
    PermissionScope::export()?;
    Permission::export()?;
    UnknownRolePolicy::export()?;

    // Session
    CurrentUser::export()?;

    // Navigation
    RouteDescriptor::export()?;
    RouteSection::export()?;

    println!("✅ TypeScript bindings generated successfully!");
    println!("📁 Generated files location: {}", export_dir.display());

    if export_dir.exists() {
        println!("\n📋 Generated files:");
        let mut entries: Vec<_> = std::fs::read_dir(&export_dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == "ts")
            })
            .collect();

        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            println!("   - {}", entry.file_name().to_string_lossy());
        }
    }

    Ok(())
}
