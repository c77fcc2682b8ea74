//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mdeck_core::config::{self, Config};

#[derive(Parser)]
#[command(name = "mdeck")]
#[command(version)]
#[command(about = "Markdown widget dashboard for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the config file location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(config::paths::config_path);

    // Default action: launch the dashboard.
    let Some(command) = cli.command else {
        let config = Config::load_from(&config_path).context("load config")?;
        let _guard = logging_guard(&config)?;
        tracing::info!("starting dashboard");
        return mdeck_tui::run_dashboard(config);
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                println!("{}", config_path.display());
                Ok(())
            }
            ConfigCommands::Init => {
                Config::init(&config_path)?;
                println!("Created {}", config_path.display());
                Ok(())
            }
        },
    }
}

fn logging_guard(config: &Config) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !config.log_to_file {
        return Ok(None);
    }
    crate::logging::init(&config::paths::log_dir()).map(Some)
}
