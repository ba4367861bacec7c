//! Dashboard command implementations

use std::path::{Path, PathBuf};

use chrono::Utc;
use colored::Colorize;
use dialoguer::Confirm;
use log::{debug, warn};
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::DashboardApi;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{DashboardDisplay, TileDisplay};
use crate::output::{Formattable, json, progress, table};
use crate::transfer::{self, file};

/// Run the dashboard list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org_id = ctx.require_org_id()?;

    debug!("Fetching dashboards for org {}", org_id);
    let spinner = progress::spinner(ctx.format, "Fetching dashboards...");
    let dashboards = ctx.client.list_dashboards(ctx.grant_key()?, org_id).await;
    spinner.finish_and_clear();
    let dashboards = dashboards?;
    debug!("Fetched {} dashboards", dashboards.len());

    let rows: Vec<DashboardDisplay> = dashboards.into_iter().map(DashboardDisplay::from).collect();
    rows.print(ctx.format)
}

/// Run the dashboard get command
pub async fn get(dashboard_id: &str, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let spinner = progress::spinner(ctx.format, "Fetching dashboard...");
    let detail = ctx.client.get_dashboard(ctx.grant_key()?, dashboard_id).await;
    spinner.finish_and_clear();
    let detail = detail?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&detail)?),
        OutputFormat::Table => TileDisplay::rows(&detail.tiles).print(ctx.format)?,
        OutputFormat::Pretty => {
            println!("{}", detail.name.bold());
            println!();
            println!(
                "{}",
                table::format_fields(&[
                    ("ID", detail.id.clone()),
                    ("Type", detail.dashboard_type.clone()),
                    ("Tiles", detail.tiles.len().to_string()),
                    ("Roles", detail.roles.len().to_string()),
                ])
            );
            if !detail.tiles.is_empty() {
                println!();
                println!("{}", table::format_table(&TileDisplay::rows(&detail.tiles)));
            }
        }
    }

    Ok(())
}

/// Run the dashboard export command
pub async fn export(
    dashboard_id: &str,
    output: Option<&str>,
    legacy: bool,
    opts: &GlobalOptions,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org_id = ctx.require_org_id()?;
    let grant_key = ctx.grant_key()?;

    let spinner = progress::spinner(ctx.format, "Exporting dashboard...");
    let exported =
        export_to_file(&ctx.client, grant_key, org_id, dashboard_id, output, legacy).await;
    spinner.finish_and_clear();
    let exported = exported?;

    match ctx.format {
        OutputFormat::Json => {
            let data = json!({
                "dashboard_id": dashboard_id,
                "name": exported.name,
                "tiles": exported.tiles,
                "path": exported.path.display().to_string(),
                "legacy": legacy,
            });
            println!("{}", json::format_json(&data)?);
        }
        _ => {
            println!(
                "{} Dashboard \"{}\" exported to {} ({} tiles)",
                "✓".green(),
                exported.name,
                exported.path.display(),
                exported.tiles
            );
            if legacy {
                println!(
                    "  {} Legacy snapshots cannot be imported",
                    "⚠".yellow()
                );
            }
        }
    }

    Ok(())
}

/// What an export wrote to disk
#[derive(Debug)]
struct ExportedFile {
    path: PathBuf,
    name: String,
    tiles: usize,
}

async fn export_to_file<A: DashboardApi + ?Sized>(
    api: &A,
    grant_key: &str,
    org_id: &str,
    dashboard_id: &str,
    output: Option<&str>,
    legacy: bool,
) -> Result<ExportedFile> {
    if legacy {
        let snapshot = api
            .export_org_dashboard(grant_key, org_id, dashboard_id)
            .await?;
        let path = output_path(output, || file::legacy_file_name(&snapshot.name));
        file::write_json(&path, &snapshot)?;
        Ok(ExportedFile {
            path,
            tiles: snapshot.tiles.len(),
            name: snapshot.name,
        })
    } else {
        let export =
            transfer::export_dashboard(api, grant_key, org_id, dashboard_id, Utc::now()).await?;
        let path = output_path(output, || file::export_file_name(&export.name));
        file::write_json(&path, &export)?;
        Ok(ExportedFile {
            path,
            tiles: export.tiles.len(),
            name: export.name,
        })
    }
}

fn output_path(output: Option<&str>, default_name: impl FnOnce() -> String) -> PathBuf {
    output.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(default_name()))
}

/// Run the dashboard import command
///
/// The file is read and validated before any network call; `--dry-run`
/// stops there.
pub async fn import(
    path: &str,
    name: Option<&str>,
    dry_run: bool,
    opts: &GlobalOptions,
) -> Result<()> {
    let raw = file::read_export(Path::new(path))?;
    let export = transfer::prepare_import(raw, name)?;

    if dry_run {
        let mut config = Config::load_or_default(opts.config_ref())?;
        config.apply_overrides(None, opts.org_ref(), None, None);
        let target = config
            .organization
            .as_ref()
            .map(|o| o.id.clone())
            .unwrap_or_else(|| "(no organization set)".to_string());

        eprintln!("{}", "DRY RUN - no changes will be made".yellow());
        eprintln!();
        eprintln!(
            "Would create dashboard \"{}\" ({}) in {}",
            export.name, export.dashboard_type, target
        );
        eprintln!("  Tiles: {}", export.tiles.len());
        eprintln!("  Visible to roles: {}", export.visible_role_ids().len());
        return Ok(());
    }

    let ctx = CommandContext::new(opts)?;
    let org_id = ctx.require_org_id()?;

    let spinner = progress::spinner(ctx.format, "Importing dashboard...");
    let created = transfer::import_dashboard(&ctx.client, ctx.grant_key()?, org_id, &export).await;
    spinner.finish_and_clear();
    let created = created?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&created)?),
        _ => {
            println!(
                "{} Dashboard \"{}\" imported successfully! (ID: {}, {} tiles)",
                "✓".green(),
                created.name,
                created.id,
                created.tiles.len()
            );
        }
    }

    Ok(())
}

/// Run the dashboard delete command
pub async fn delete(dashboard_id: &str, yes: bool, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let Some(name) = delete_with_confirmation(&ctx.client, ctx.grant_key()?, dashboard_id, yes)
        .await?
    else {
        eprintln!("Cancelled.");
        return Ok(());
    };

    match ctx.format {
        OutputFormat::Json => {
            let data = json!({
                "deleted": true,
                "dashboard_id": dashboard_id,
                "dashboard_name": name,
            });
            println!("{}", json::format_json(&data)?);
        }
        _ => {
            eprintln!("{} Dashboard \"{}\" deleted", "✓".green(), name);
        }
    }

    Ok(())
}

/// Look the dashboard up, confirm unless `yes`, then delete it.
///
/// Returns the deleted dashboard's name, or `None` when the user declined.
/// A dashboard that fails validation can still be deleted; it is named by ID.
async fn delete_with_confirmation<A: DashboardApi + ?Sized>(
    api: &A,
    grant_key: &str,
    dashboard_id: &str,
    yes: bool,
) -> Result<Option<String>> {
    let (name, tiles) = match api.get_dashboard(grant_key, dashboard_id).await {
        Ok(detail) => (detail.name, Some(detail.tiles.len())),
        Err(Error::Validation(err)) => {
            warn!("Dashboard {} did not validate: {}", dashboard_id, err);
            (dashboard_id.to_string(), None)
        }
        Err(err) => return Err(err),
    };

    if !yes {
        eprintln!(
            "{} Delete dashboard \"{}\"? This cannot be undone.",
            "⚠".yellow(),
            name
        );
        if let Some(tiles) = tiles {
            eprintln!("  Tiles: {} will be removed", tiles);
        }
        eprintln!();

        let confirm = Confirm::new()
            .with_prompt("Confirm deletion?")
            .default(false)
            .interact()?;

        if !confirm {
            return Ok(None);
        }
    }

    api.delete_dashboard(grant_key, dashboard_id).await?;
    Ok(Some(name))
}
