//! dashcopy - copy JobTread dashboards between organizations

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod transfer;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, DashboardCommands, OrgCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if debug {
        builder.filter_module("dashcopy", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Connect => cli::connect::run(&opts).await,
        Commands::Disconnect => cli::connect::disconnect(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::List => cli::org::list(&opts).await,
            OrgCommands::Set { org_id } => cli::org::set(org_id, &opts).await,
            OrgCommands::Get => cli::org::get(&opts),
        },
        Commands::Dashboard(dash_cmd) => match dash_cmd {
            DashboardCommands::List => cli::dashboard::list(&opts).await,
            DashboardCommands::Get { dashboard_id } => {
                cli::dashboard::get(&dashboard_id, &opts).await
            }
            DashboardCommands::Export {
                dashboard_id,
                output,
                legacy,
            } => cli::dashboard::export(&dashboard_id, output.as_deref(), legacy, &opts).await,
            DashboardCommands::Import {
                file,
                name,
                dry_run,
            } => cli::dashboard::import(&file, name.as_deref(), dry_run, &opts).await,
            DashboardCommands::Delete { dashboard_id, yes } => {
                cli::dashboard::delete(&dashboard_id, yes, &opts).await
            }
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
