//! Calculator core: the state machine and its arithmetic
//!
//! Nothing in here can fail. Unparseable display text reads as zero and
//! division by zero produces `inf`/`nan` like any other float operation.

mod format;
mod operations;
mod state;

pub use format::{format_number, parse_display};
pub use operations::Operation;
pub use state::{CalculatorState, Phase, INITIAL_DISPLAY};
