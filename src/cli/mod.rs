//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use crate::client::Environment;

pub mod args;
pub mod completions;
pub mod connect;
pub mod context;
pub mod dashboard;
pub mod org;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

/// dashcopy - copy JobTread dashboards between organizations
#[derive(Parser, Debug)]
#[command(name = "dashcopy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "DASHCOPY_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override default organization
    #[arg(long, global = true, env = "DASHCOPY_ORG_ID", hide_env = true)]
    pub org: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "DASHCOPY_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Grant key to use instead of the configured one
    #[arg(
        long,
        global = true,
        env = "DASHCOPY_GRANT_KEY",
        hide_env = true,
        hide_env_values = true
    )]
    pub grant_key: Option<String>,

    /// API endpoint or relay URL
    #[arg(long, global = true, env = "DASHCOPY_ENDPOINT", hide_env = true)]
    pub endpoint: Option<String>,

    /// Runtime environment; only changes network failure hints
    #[arg(
        long = "env",
        global = true,
        env = "DASHCOPY_ENV",
        hide_env = true,
        value_enum
    )]
    pub environment: Option<Environment>,

    /// Enable debug logging
    #[arg(long, global = true, env = "DASHCOPY_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a grant key and default organization
    Connect,

    /// Forget the saved grant key and organization
    Disconnect,

    /// Show connection and configuration status
    Status,

    /// Manage organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// List, inspect, export, import and delete dashboards
    #[command(subcommand)]
    Dashboard(DashboardCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   dashcopy completion bash > /etc/bash_completion.d/dashcopy
  zsh:    dashcopy completion zsh > \"${fpath[1]}/_dashcopy\"
  fish:   dashcopy completion fish > ~/.config/fish/completions/dashcopy.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization management subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations the grant key can access
    List,

    /// Set default organization
    Set {
        /// Organization ID to set as default
        org_id: String,
    },

    /// Show current default organization
    Get,
}

/// Dashboard subcommands
#[derive(Subcommand, Debug)]
pub enum DashboardCommands {
    /// List dashboards in the current organization
    #[command(visible_alias = "ls")]
    List,

    /// Show a dashboard and its tiles
    Get {
        /// Dashboard ID
        dashboard_id: String,
    },

    /// Export a dashboard to a JSON file
    Export {
        /// Dashboard ID
        dashboard_id: String,

        /// Output path (defaults to <Name>_dashboard_export.json)
        #[arg(long, short = 'o')]
        output: Option<String>,

        /// Write the older org-scoped snapshot shape (cannot be imported)
        #[arg(long)]
        legacy: bool,
    },

    /// Create a dashboard from an export file
    Import {
        /// Path to a dashboard export file
        file: String,

        /// Name for the new dashboard (defaults to the exported name)
        #[arg(long)]
        name: Option<String>,

        /// Validate the file without creating anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Permanently delete a dashboard
    Delete {
        /// Dashboard ID
        dashboard_id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
