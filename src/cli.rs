use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use crate::logging::LogTarget;

/// Environment variable consulted when `--log-level` is not given
pub const LOG_ENV: &str = "GUESSTERM_LOG";

#[derive(Parser, Debug)]
#[command(name = "guessterm")]
#[command(about = "🎯 Guess the number between 0 and 100, right in your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed for reproducible secrets (defaults to OS entropy)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log verbosity: trace, debug, info, warn or error
    #[arg(long, global = true)]
    pub log_level: Option<Level>,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Play in the terminal (default)
    Play,
    /// Read commands from stdin and answer with JSON lines
    Script,
}

/// Resolved run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: Commands,
    pub seed: Option<u64>,
    pub log_level: Level,
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fill in defaults. `env_level` is the value of [`LOG_ENV`], if set.
    pub fn into_settings(self, env_level: Option<String>) -> Settings {
        let log_level = self
            .log_level
            .or_else(|| env_level.and_then(|lvl| lvl.parse().ok()))
            .unwrap_or(Level::INFO);

        Settings {
            mode: self.command.unwrap_or(Commands::Play),
            seed: self.seed,
            log_level,
            log_file: self.log_file,
        }
    }
}

impl Settings {
    pub fn from_args() -> Self {
        Cli::parse().into_settings(std::env::var(LOG_ENV).ok())
    }

    /// The interactive screen owns the terminal, so it only logs to a file.
    pub fn log_target(&self) -> LogTarget {
        match (&self.log_file, self.mode) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Commands::Script) => LogTarget::Stderr,
            (None, Commands::Play) => LogTarget::Disabled,
        }
    }
}
