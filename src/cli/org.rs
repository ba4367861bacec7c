//! Organization command implementations

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::OrgApi;
use crate::config::{Config, OrgSelection};
use crate::error::{ConfigError, Error, Result};
use crate::models::OrgDisplay;
use crate::output::{Formattable, json, progress};

/// Run the org list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let spinner = progress::spinner(ctx.format, "Fetching organizations...");
    let orgs = ctx.client.list_organizations(ctx.grant_key()?).await;
    spinner.finish_and_clear();
    let orgs = orgs?;
    debug!("Fetched {} organizations", orgs.len());

    let default_id = ctx.config.organization.as_ref().map(|o| o.id.as_str());
    let rows: Vec<OrgDisplay> = orgs
        .into_iter()
        .map(|org| OrgDisplay::new(org, default_id))
        .collect();
    rows.print(ctx.format)
}

/// Run the org set command
///
/// The organization must be one the grant key can access.
pub async fn set(org_id: String, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let spinner = progress::spinner(ctx.format, "Verifying organization...");
    let orgs = ctx.client.list_organizations(ctx.grant_key()?).await;
    spinner.finish_and_clear();

    let org = orgs?.into_iter().find(|o| o.id == org_id).ok_or_else(|| {
        Error::Other(format!(
            "Organization {} is not accessible with this grant key",
            org_id
        ))
    })?;

    // Save against the file as written, without flag overrides baked in
    let mut config = Config::load_or_default(opts.config_ref())?;
    config.organization = Some(OrgSelection {
        id: org.id.clone(),
        name: org.name.clone(),
    });
    config.save_at(opts.config_ref())?;

    println!(
        "{} Set default organization to: {} ({})",
        "✓".green(),
        org.name.bold(),
        org.id
    );

    Ok(())
}

/// Run the org get command
pub fn get(opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_or_default(opts.config_ref())?;
    config.apply_overrides(None, opts.org_ref(), None, None);

    let org = config.organization.ok_or(ConfigError::MissingOrgId)?;

    match opts.format {
        OutputFormat::Json => println!("{}", json::format_json(&org)?),
        OutputFormat::Pretty | OutputFormat::Table => {
            println!("{}", "Current Default Organization".bold());
            println!();
            println!("  ID:   {}", org.id);
            if !org.name.is_empty() {
                println!("  Name: {}", org.name);
            }
        }
    }

    Ok(())
}
