//! CLI command definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// keypad-calc: a calculator you click
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// View configuration file (JSON)
    #[arg(short, long, global = true, env = "KEYPAD_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the TUI discards them otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Returns the subcommand, defaulting to the interactive keypad
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive keypad
    Run,

    /// Press buttons headlessly and print the display
    ///
    /// Labels: 0-9 . + - * / = C
    Press(PressArgs),
}

/// Arguments for the press command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct PressArgs {
    /// Button labels, in order. "7*6=" and "7 * 6 =" are the same.
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,
}
