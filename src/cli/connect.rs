//! Connect and disconnect command implementations

use colored::Colorize;
use dialoguer::{Password, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{OrgApi, Organization, PaveClient};
use crate::config::{Config, OrgSelection};
use crate::error::{Error, Result};
use crate::output::progress;

/// Run the connect command
///
/// Prompts for a grant key unless one was passed, verifies it by listing
/// organizations, then saves the key and a default organization.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let mut config = Config::load_or_default(opts.config_ref())?;
    config.apply_overrides(None, None, opts.endpoint_ref(), opts.environment);

    println!("{}", "Connect dashcopy to JobTread".bold().green());

    let grant_key = match opts.grant_key_ref() {
        Some(key) => key.to_string(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your Pave grant key")
            .interact()?,
    };

    let client = PaveClient::new(
        config.endpoint(),
        config.preferences.retry_policy(),
        config.environment,
    )?;

    let spinner = progress::spinner(opts.format, "Fetching your organizations...");
    let orgs = client.list_organizations(&grant_key).await;
    spinner.finish_and_clear();
    let orgs = orgs?;

    let org = choose_org(orgs, opts.org_ref())?;
    println!("{} Grant key verified", "✓".green());

    config.grant_key = Some(grant_key);
    config.organization = Some(OrgSelection {
        id: org.id.clone(),
        name: org.name.clone(),
    });
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );
    println!("  Default organization: {} ({})", org.name.bold(), org.id);

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - List dashboards", "dashcopy dashboard list".cyan());
    println!(
        "  {} - Export one to a file",
        "dashcopy dashboard export <ID>".cyan()
    );

    Ok(())
}

/// Pick the default organization: the requested one, the only one, or ask.
fn choose_org(orgs: Vec<Organization>, requested: Option<&str>) -> Result<Organization> {
    if orgs.is_empty() {
        return Err(Error::Other(
            "No organizations found for this grant key".to_string(),
        ));
    }

    if let Some(id) = requested {
        return orgs.into_iter().find(|o| o.id == id).ok_or_else(|| {
            Error::Other(format!(
                "Organization {} is not accessible with this grant key",
                id
            ))
        });
    }

    if let [org] = orgs.as_slice() {
        println!("Found organization: {}", org.name.bold());
        return Ok(org.clone());
    }

    let names: Vec<String> = orgs
        .iter()
        .map(|o| format!("{} ({})", o.name, o.id))
        .collect();
    println!("Found {} organizations.", orgs.len());
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select your default organization")
        .items(&names)
        .default(0)
        .interact()?;

    orgs.into_iter()
        .nth(selection)
        .ok_or_else(|| Error::Other("Invalid organization selection".to_string()))
}

/// Run the disconnect command
pub fn disconnect(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    if !path.exists() {
        println!("{} Not connected", "○".dimmed());
        return Ok(());
    }

    let mut config = Config::load_from(&path)?;
    config.grant_key = None;
    config.organization = None;
    config.save_to(&path)?;

    println!("{} Grant key and organization removed", "✓".green());
    Ok(())
}
