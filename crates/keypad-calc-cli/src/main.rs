//! keypad-calc: a calculator you click
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc                        # Open the keypad
//! keypad-calc --config view.json     # Custom colors and button sizes
//! keypad-calc press 7 '*' 6 =        # Prints 42.0
//! ```

use clap::Parser;
use keypad_calc::config::ViewConfig;
use keypad_calc::tui::CalculatorApp;
use keypad_calc_cli::{
    logging::{self, LogTarget},
    press, terminal, Cli, CliResult, Commands,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let level = logging::level_for(cli.verbose, cli.quiet);
    let log_file = cli.log_file.as_deref();

    match cli.command() {
        Commands::Run => {
            logging::init(level, &LogTarget::for_tui(log_file))?;
            run_keypad(&cli)
        }
        Commands::Press(args) => {
            logging::init(level, &LogTarget::for_headless(log_file))?;
            println!("{}", press::press_keys(&args.keys)?);
            Ok(())
        }
    }
}

fn run_keypad(cli: &Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => ViewConfig::load(path)?,
        None => ViewConfig::default(),
    };
    let app = CalculatorApp::with_config(&config)?;
    terminal::run(app)
}
