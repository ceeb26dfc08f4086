//! CLI definitions for Showcase.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Showcase CLI.
#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Serve one of several project pages inside a shared page shell")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults are used when it does not exist)
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Project to serve; unknown or empty values serve the default project
    #[arg(short, long, env = "PROJECT", global = true)]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Serve the page over HTTP (default)
    Run {
        /// Server host (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides server.port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the composed page to stdout
    Render,

    /// List registered projects
    Projects {
        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["showcase"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_run_overrides() {
        let cli = Cli::try_parse_from([
            "showcase",
            "--project",
            "projectTwo",
            "run",
            "--host",
            "0.0.0.0",
            "--port",
            "8000",
        ])
        .unwrap();
        assert_eq!(cli.project.as_deref(), Some("projectTwo"));
        match cli.command {
            Some(Commands::Run { host, port }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8000));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_parse_global_project_after_subcommand() {
        let cli = Cli::try_parse_from(["showcase", "render", "-p", "projectWeather"]).unwrap();
        assert_eq!(cli.project.as_deref(), Some("projectWeather"));
        assert!(matches!(cli.command, Some(Commands::Render)));
    }

    #[test]
    fn test_parse_projects_format() {
        let cli = Cli::try_parse_from(["showcase", "projects", "--format", "json"]).unwrap();
        match cli.command {
            Some(Commands::Projects { format }) => assert_eq!(format, "json"),
            _ => panic!("expected projects command"),
        }
    }
}
