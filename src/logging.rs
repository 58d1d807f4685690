//! Logging through `tracing` and `tracing-subscriber`.
//!
//! The composer owns the terminal while it runs, so its logs go to a file
//! or nowhere. Headless runs log to stderr, keeping stdout for labels.

use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    Discard,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    /// Takes precedence over `fallback` when set.
    pub log_file: Option<PathBuf>,
    pub fallback: LogTarget,
}

impl LogConfig {
    /// - 0: warn
    /// - 1 (`-v`): debug
    /// - 2+ (`-vv`): trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            log_file: None,
            fallback: LogTarget::Stderr,
        }
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: LogTarget) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global
/// subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    match (&config.log_file, config.fallback) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            init_with_writer(config.level, Mutex::new(file), false)
        }
        (None, LogTarget::Stderr) => init_with_writer(config.level, io::stderr, true),
        (None, LogTarget::Discard) => init_with_writer(config.level, io::sink, false),
    }
}

fn init_with_writer<W>(level: Level, writer: W, ansi: bool) -> Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}

/// `RUST_LOG` wins over the verbosity flag.
fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,smsyank={level}")))
}
