//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::{Config, mask_key};
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "dashcopy Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let mut config = match Config::load_from(&config_path) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            Config::default()
        }
    };
    config.apply_overrides(
        opts.grant_key_ref(),
        opts.org_ref(),
        opts.endpoint_ref(),
        opts.environment,
    );

    println!();

    match config.grant_key.as_deref().filter(|k| !k.is_empty()) {
        Some(key) => println!("{} Grant key configured ({})", "✓".green(), mask_key(key)),
        None => {
            println!("{} Grant key not configured", "✗".red());
            println!("  → Run 'dashcopy connect' to configure");
        }
    }

    match &config.organization {
        Some(org) if org.name.is_empty() => {
            println!("{} Default organization: {}", "✓".green(), org.id)
        }
        Some(org) => println!(
            "{} Default organization: {} ({})",
            "✓".green(),
            org.name,
            org.id
        ),
        None => {
            println!("{} No default organization set", "○".dimmed());
            println!("  → Run 'dashcopy org set <ID>' to set one");
        }
    }

    println!("{} Endpoint: {}", "○".dimmed(), config.endpoint().cyan());
    println!(
        "{} Environment: {}",
        "○".dimmed(),
        format!("{:?}", config.environment).to_lowercase()
    );
    println!();

    Ok(())
}
