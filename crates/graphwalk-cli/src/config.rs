//! Shell configuration.
//!
//! Layered with figment: built-in defaults, then a TOML file, then
//! `GRAPHWALK_*` environment variables. Command-line flags are applied on
//! top by `main`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "graphwalk.toml";

/// Prefix for environment overrides, e.g. `GRAPHWALK_FORMAT=json`.
pub const ENV_PREFIX: &str = "GRAPHWALK_";

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Settings for the interactive shell and script runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// REPL prompt.
    pub prompt: String,
    /// Output format for query commands.
    pub format: OutputFormat,
    /// Print elapsed time after each command.
    pub timing: bool,
    /// REPL history file. `None` disables history.
    pub history_file: Option<PathBuf>,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Colored output.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            prompt: "graphwalk> ".to_string(),
            format: OutputFormat::Table,
            timing: false,
            history_file: dirs::home_dir().map(|home| home.join(".graphwalk_history")),
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from defaults, an optional TOML file and the
    /// environment.
    ///
    /// An explicit `path` must exist. Without one, `graphwalk.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::figment(path)?
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("invalid configuration")
    }

    /// Renders the configuration as TOML, in the layout `load` accepts.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to encode configuration")
    }

    fn figment(path: Option<&Path>) -> anyhow::Result<Figment> {
        let figment = Figment::from(Serialized::defaults(Self::default()));
        let file = match path {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };
        Ok(figment.merge(Toml::file(file)))
    }
}
