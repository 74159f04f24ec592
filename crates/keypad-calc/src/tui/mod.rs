//! TUI frontend for the calculator

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputAction, InputHandler};
pub use keypad::KeypadWidget;
pub use ui::{layout, render, CalculatorUI, UiLayout, APP_TITLE, QUIT_HINT};
