//! keypad-calc CLI library
//!
//! Argument parsing, logging setup and the two ways to drive the calculator:
//! the interactive keypad and headless `press`.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod error;
pub mod logging;
pub mod press;
pub mod terminal;

pub use commands::{Cli, Commands, PressArgs};
pub use error::{CliError, CliResult};
