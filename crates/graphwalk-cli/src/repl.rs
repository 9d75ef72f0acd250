//! Interactive shell and script runner.

use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use graphwalk_core::GraphSession;
use instant::Instant;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::{CliConfig, OutputFormat};
use crate::repl_commands::{handle_command, CommandResult};

/// Mutable per-session display settings.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub format: OutputFormat,
    pub timing: bool,
}

impl From<&CliConfig> for ReplConfig {
    fn from(config: &CliConfig) -> Self {
        Self {
            format: config.format,
            timing: config.timing,
        }
    }
}

/// Runs one input line. Blank lines and `#` comments are skipped.
pub fn execute_line(
    session: &mut GraphSession,
    line: &str,
    config: &mut ReplConfig,
) -> CommandResult {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return CommandResult::Continue;
    }

    let start = Instant::now();
    let result = if line.starts_with('.') {
        handle_command(session, line, config)
    } else {
        CommandResult::Error(format!("Commands start with '.', try .help (got: {line})"))
    };

    if config.timing && result != CommandResult::Quit {
        println!("Time: {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);
    }
    result
}

/// Runs commands in order, stopping at the first error or `.quit`.
pub fn run_batch<'a, I>(
    session: &mut GraphSession,
    lines: I,
    config: &mut ReplConfig,
) -> anyhow::Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for (index, line) in lines.into_iter().enumerate() {
        match execute_line(session, line, config) {
            CommandResult::Continue => {}
            CommandResult::Quit => break,
            CommandResult::Error(msg) => bail!("line {}: {}", index + 1, msg),
        }
    }
    Ok(())
}

/// Runs every line of a script file.
pub fn run_script(
    session: &mut GraphSession,
    path: &Path,
    config: &mut ReplConfig,
) -> anyhow::Result<()> {
    let script = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    tracing::debug!(script = %path.display(), "running script");
    run_batch(session, script.lines(), config)
}

/// Runs the interactive REPL until `.quit` or end of input.
pub fn run(session: &mut GraphSession, cli_config: &CliConfig) -> anyhow::Result<()> {
    let mut config = ReplConfig::from(cli_config);
    let mut editor = DefaultEditor::new().context("failed to start line editor")?;

    if let Some(history) = &cli_config.history_file {
        if editor.load_history(history).is_err() {
            tracing::debug!(history = %history.display(), "no previous history");
        }
    }

    println!(
        "{} {} - type {} for commands\n",
        "graphwalk".bold(),
        env!("CARGO_PKG_VERSION"),
        ".help".yellow()
    );

    loop {
        match editor.readline(&cli_config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                match execute_line(session, &line, &mut config) {
                    CommandResult::Continue => {}
                    CommandResult::Quit => break,
                    CommandResult::Error(msg) => {
                        println!("{} {}\n", "Error:".red().bold(), msg);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        }
    }

    if let Some(history) = &cli_config.history_file {
        if let Err(e) = editor.save_history(history) {
            tracing::warn!(history = %history.display(), error = %e, "failed to save history");
        }
    }
    println!("Goodbye!");
    Ok(())
}
