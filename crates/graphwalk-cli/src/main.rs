//! graphwalk - build small graphs by name and walk them depth-first.

mod config;
#[cfg(test)]
mod config_tests;
mod repl;
mod repl_commands;
#[cfg(test)]
mod repl_commands_tests;

use std::path::PathBuf;

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use graphwalk_core::GraphSession;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{CliConfig, OutputFormat};
use crate::repl::ReplConfig;

/// graphwalk - interactive graph builder with depth-first traversal
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, env = "GRAPHWALK_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Run a command and exit (repeatable, run in order)
    #[arg(short = 'c', long = "command", value_name = "CMD")]
    commands: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive shell (default)
    Repl,
    /// Execute a file of shell commands, stopping at the first error
    Run {
        /// Script path; one command per line, `#` starts a comment
        script: PathBuf,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Repl => "repl",
            Commands::Run { .. } => "run",
            Commands::Config => "config",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if !cli.commands.is_empty() {
        if let Some(subcommand) = &cli.command {
            let msg = format!(
                "--command cannot be combined with the `{}` subcommand",
                subcommand.name()
            );
            Cli::command().error(ErrorKind::ArgumentConflict, msg).exit();
        }
    }

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_color {
        config.color = false;
    }

    init_tracing(&config.log_level);
    if !config.color {
        colored::control::set_override(false);
    }
    tracing::debug!(?config, "configuration loaded");

    let mut session = GraphSession::new();
    let mut repl_config = ReplConfig::from(&config);

    if !cli.commands.is_empty() {
        return repl::run_batch(
            &mut session,
            cli.commands.iter().map(String::as_str),
            &mut repl_config,
        );
    }

    match cli.command {
        Some(Commands::Run { script }) => repl::run_script(&mut session, &script, &mut repl_config),
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Some(Commands::Repl) | None => repl::run(&mut session, &config),
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
