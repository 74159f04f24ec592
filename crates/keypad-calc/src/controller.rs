//! Controller: owns the calculator state and dispatches button presses
//!
//! Views either poll [`Controller::state`] after each press or subscribe a
//! [`StateListener`] to be told about every change.

use crate::core::{CalculatorState, Operation};
use crate::keypad::CalculatorButton;
use std::fmt;

/// Receives the new state after every dispatched press
pub trait StateListener {
    /// Called once per press, after the transition has been applied
    fn on_press(&mut self, button: CalculatorButton, state: &CalculatorState);
}

impl<F> StateListener for F
where
    F: FnMut(CalculatorButton, &CalculatorState),
{
    fn on_press(&mut self, button: CalculatorButton, state: &CalculatorState) {
        self(button, state);
    }
}

/// Dispatches button presses into a [`CalculatorState`]
#[derive(Default)]
pub struct Controller {
    state: CalculatorState,
    listeners: Vec<Box<dyn StateListener>>,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Controller {
    /// Creates a controller showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Shortcut for the display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.state.display_text()
    }

    /// Registers a listener
    pub fn subscribe(&mut self, listener: impl StateListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Number of registered listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Applies one button press and notifies listeners
    pub fn press(&mut self, button: CalculatorButton) {
        match button {
            CalculatorButton::Number(d) => self.state.press_digit(d),
            CalculatorButton::Operator(op) => self.state.press_operator(op),
            CalculatorButton::Decimal => self.state.press_decimal(),
            CalculatorButton::Equals => self.state.press_equals(),
            CalculatorButton::Clear => self.state.clear(),
        }

        tracing::debug!(
            button = %button,
            display = self.state.display_text(),
            pending = self.state.pending_operation().map(Operation::name),
            phase = ?self.state.phase(),
            "button pressed"
        );

        for listener in &mut self.listeners {
            listener.on_press(button, &self.state);
        }
    }

    /// Presses a sequence of buttons and returns the final display text
    pub fn press_all(&mut self, buttons: impl IntoIterator<Item = CalculatorButton>) -> &str {
        for button in buttons {
            self.press(button);
        }
        self.state.display_text()
    }
}
