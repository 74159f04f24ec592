//! Calculator state machine
//!
//! One pending binary operation, no precedence: the display accumulates the
//! operand being typed, an operator captures it as the left operand, and `=`
//! folds the two together.

use super::format::{format_number, parse_display};
use super::operations::Operation;
use serde::Serialize;

/// Placeholder shown on a fresh or cleared calculator
pub const INITIAL_DISPLAY: &str = "0";

/// Implicit phase of the state machine, derived from the fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Typing the left operand (also the state after Clear)
    EnteringFirstOperand,
    /// An operator was pressed; the next digit starts a fresh number
    AwaitingOperand,
    /// Typing the right operand of a pending operation
    EnteringSecondOperand,
    /// `=` rewrote the display with a result
    ResultDisplayed,
}

impl Phase {
    /// Short label for the status line
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EnteringFirstOperand => "entering",
            Self::AwaitingOperand => "awaiting operand",
            Self::EnteringSecondOperand => "entering operand",
            Self::ResultDisplayed => "result",
        }
    }
}

/// Calculator state - every button press mutates it in place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    /// Text shown on the display
    display: String,
    /// Numeric value of the display (reparsed on digit entry)
    current: f64,
    /// Left operand captured by the first operator press
    previous: f64,
    /// Operation waiting for its right operand
    pending: Option<Operation>,
    /// Next digit replaces the display instead of extending it
    awaiting_new_number: bool,
    /// Display holds the output of `=`
    showing_result: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates a calculator showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            current: 0.0,
            previous: 0.0,
            pending: None,
            awaiting_new_number: false,
            showing_result: false,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Returns the current number
    #[must_use]
    pub fn current_number(&self) -> f64 {
        self.current
    }

    /// Returns the captured left operand
    #[must_use]
    pub fn previous_number(&self) -> f64 {
        self.previous
    }

    /// Returns the pending operation, if any
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending
    }

    /// Returns whether the next digit starts a fresh number
    #[must_use]
    pub fn is_awaiting_new_number(&self) -> bool {
        self.awaiting_new_number
    }

    /// Derives the implicit phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.awaiting_new_number {
            Phase::AwaitingOperand
        } else if self.showing_result {
            Phase::ResultDisplayed
        } else if self.pending.is_some() {
            Phase::EnteringSecondOperand
        } else {
            Phase::EnteringFirstOperand
        }
    }

    /// Digit press. Values above 9 are ignored.
    pub fn press_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };

        if self.awaiting_new_number {
            self.display.clear();
            self.awaiting_new_number = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display.clear();
        }
        self.display.push(ch);
        self.showing_result = false;

        self.current = parse_display(&self.display);
    }

    /// Decimal press. Appends `.` unless the display already has one.
    ///
    /// The current number is not reparsed here; `3.` keeps the value 3 until
    /// a digit follows.
    pub fn press_decimal(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
            self.showing_result = false;
        }
    }

    /// Operator press.
    ///
    /// The left operand is captured only on the first operator of a chain;
    /// pressing another operator before typing a number just swaps the
    /// pending operation.
    pub fn press_operator(&mut self, op: Operation) {
        if !self.awaiting_new_number {
            self.previous = self.current;
        }
        self.awaiting_new_number = true;
        self.pending = Some(op);
        self.showing_result = false;
    }

    /// Equals press. Applies the pending operation, or keeps the current
    /// number when there is none, and rewrites the display either way.
    pub fn press_equals(&mut self) {
        if let Some(op) = self.pending {
            self.current = op.apply(self.previous, self.current);
        }

        self.display = format_number(self.current);
        self.previous = 0.0;
        self.pending = None;
        self.awaiting_new_number = false;
        self.showing_result = true;
    }

    /// Clear press. Resets every field at once.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
