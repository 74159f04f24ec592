//! Log subscriber setup
//!
//! The TUI owns the terminal, so in interactive mode logs go to a file or
//! nowhere. Headless commands log to stderr. `RUST_LOG` overrides the level
//! picked from `-v`/`-q`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Append to a file
    File(PathBuf),
    /// Drop everything
    Discard,
}

impl LogTarget {
    /// Target for the interactive keypad: a log file if given, else nothing
    #[must_use]
    pub fn for_tui(log_file: Option<&Path>) -> Self {
        log_file.map_or(Self::Discard, |path| Self::File(path.to_path_buf()))
    }

    /// Target for headless commands: a log file if given, else stderr
    #[must_use]
    pub fn for_headless(log_file: Option<&Path>) -> Self {
        log_file.map_or(Self::Stderr, |path| Self::File(path.to_path_buf()))
    }
}

/// Default level for a verbosity count. `quiet` wins over `-v`.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber
pub fn init(level: Level, target: &LogTarget) -> CliResult<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        LogTarget::Discard => (BoxMakeWriter::new(std::io::sink), false),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
