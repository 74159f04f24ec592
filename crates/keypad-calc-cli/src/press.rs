//! Headless button presses

use keypad_calc::controller::Controller;
use keypad_calc::keypad::CalculatorButton;

use crate::error::{CliError, CliResult};

/// Parses button labels. Each argument may hold several labels (`"7*6="`);
/// whitespace is skipped. Fails on the first unknown label.
pub fn parse_keys<S: AsRef<str>>(keys: &[S]) -> CliResult<Vec<CalculatorButton>> {
    let mut buttons = Vec::new();
    for key in keys {
        for ch in key.as_ref().chars().filter(|c| !c.is_whitespace()) {
            let button = CalculatorButton::from_label(ch.encode_utf8(&mut [0; 4]))
                .ok_or_else(|| {
                    CliError::invalid_argument(format!("unknown button label {ch:?}"))
                })?;
            buttons.push(button);
        }
    }
    Ok(buttons)
}

/// Presses the labelled buttons on a fresh calculator and returns the display
pub fn press_keys<S: AsRef<str>>(keys: &[S]) -> CliResult<String> {
    let buttons = parse_keys(keys)?;
    tracing::info!(count = buttons.len(), "pressing buttons");

    let mut controller = Controller::new();
    Ok(controller.press_all(buttons).to_string())
}
