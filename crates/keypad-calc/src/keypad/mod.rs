//! Button grid: descriptors, layout and geometry

mod button;
mod grid;

pub use button::{CalculatorButton, ColorCategory};
pub use grid::{Keypad, KeypadGeometry, PlacedButton};
