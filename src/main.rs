//! Showcase - serve one of several project pages inside a shared shell.
//!
//! Main entry point for the Showcase CLI and server.

mod cli;
mod commands;
mod register;
mod server;

use clap::Parser;
use tracing::warn;

use showcase_config::{ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands};
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(&cli.config)?;
    if let Some(Commands::Run { host, port }) = &cli.command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }

    // Initialize tracing with file and console output
    init_tracing(&config.logging)?;

    for warning in ConfigValidator::validate(&config).into_result()? {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let selected = config
        .project
        .effective_selection(cli.project.as_deref())
        .map(str::to_string);

    match cli.command {
        None | Some(Commands::Run { .. }) => run_server(&config, selected).await,
        Some(Commands::Render) => {
            println!("{}", commands::render_page(&config, selected.as_deref())?);
            Ok(())
        }
        Some(Commands::Projects { format }) => {
            print!("{}", commands::list_projects(&config, selected.as_deref(), &format)?);
            Ok(())
        }
    }
}
