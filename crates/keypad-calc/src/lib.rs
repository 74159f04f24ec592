//! keypad-calc - a button-driven calculator
//!
//! A single pending binary operation, entered one button press at a time:
//! digits accumulate on the display, an operator captures the left operand,
//! `=` applies it. The keypad is rendered with ratatui and pressed with the
//! mouse.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut controller = Controller::new();
//! let display = controller.press_all([
//!     CalculatorButton::Number(7),
//!     CalculatorButton::Operator(Operation::Multiply),
//!     CalculatorButton::Number(6),
//!     CalculatorButton::Equals,
//! ]);
//! assert_eq!(display, "42.0");
//!
//! // Division by zero is a value, not an error
//! controller.press_all("5/0=".chars().filter_map(|c| {
//!     CalculatorButton::from_label(c.encode_utf8(&mut [0; 4]))
//! }));
//! assert_eq!(controller.display_text(), "inf");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
mod error;
pub mod keypad;
pub mod tui;

pub use error::{CalcError, CalcResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{Palette, ViewConfig};
    pub use crate::controller::{Controller, StateListener};
    pub use crate::core::{format_number, CalculatorState, Operation, Phase};
    pub use crate::driver::{
        verify_basic_arithmetic, verify_entry, verify_equals_and_clear, verify_non_finite,
        verify_operator_rules, CalculatorDriver, TuiDriver,
    };
    pub use crate::keypad::{CalculatorButton, ColorCategory, Keypad, KeypadGeometry};
    pub use crate::tui::{CalculatorApp, InputAction, InputHandler};
    pub use crate::{CalcError, CalcResult};
}
