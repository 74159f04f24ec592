//! Calculator drivers
//!
//! Write the scenario once, run it against any front end. The headless
//! [`Controller`] and the rendered [`TuiDriver`] both implement
//! [`CalculatorDriver`]; the `verify_*` functions below exercise either.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! # fn main() -> CalcResult<()> {
//! let mut driver = TuiDriver::new()?;
//! verify_basic_arithmetic(&mut driver);
//!
//! let mut headless = Controller::new();
//! verify_basic_arithmetic(&mut headless);
//! # Ok(())
//! # }
//! ```

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::controller::Controller;
use crate::core::Operation;
use crate::error::{CalcError, CalcResult};
use crate::keypad::CalculatorButton;
use crate::tui::{render, CalculatorApp};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses a single button
    fn press(&mut self, button: CalculatorButton) -> CalcResult<()>;

    /// Gets the current display text
    fn display(&self) -> String;

    /// Presses a sequence of buttons
    fn press_all(&mut self, buttons: &[CalculatorButton]) -> CalcResult<()> {
        for &button in buttons {
            self.press(button)?;
        }
        Ok(())
    }

    /// Presses the buttons with the given labels (`"7*6="`)
    fn press_labels(&mut self, labels: &str) -> CalcResult<()> {
        for ch in labels.chars().filter(|c| !c.is_whitespace()) {
            let button = CalculatorButton::from_label(ch.encode_utf8(&mut [0; 4]))
                .ok_or_else(|| CalcError::UnknownLabel {
                    label: ch.to_string(),
                })?;
            self.press(button)?;
        }
        Ok(())
    }

    /// Presses Clear
    fn clear(&mut self) -> CalcResult<()> {
        self.press(CalculatorButton::Clear)
    }
}

impl CalculatorDriver for Controller {
    fn press(&mut self, button: CalculatorButton) -> CalcResult<()> {
        Controller::press(self, button);
        Ok(())
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }
}

/// Default screen the TUI driver renders to
pub const TUI_DRIVER_SIZE: (u16, u16) = (40, 30);

/// TUI driver: presses buttons by clicking their rendered rectangles and
/// redraws after every press
#[derive(Debug)]
pub struct TuiDriver {
    app: CalculatorApp,
    terminal: Terminal<TestBackend>,
}

impl TuiDriver {
    /// Creates a new TUI driver on a 40x30 screen
    pub fn new() -> CalcResult<Self> {
        Self::with_app(CalculatorApp::new(), TUI_DRIVER_SIZE.0, TUI_DRIVER_SIZE.1)
    }

    /// Creates a TUI driver with an existing app and screen size
    pub fn with_app(app: CalculatorApp, width: u16, height: u16) -> CalcResult<Self> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self { app, terminal })
    }

    /// Returns a reference to the underlying app
    #[must_use]
    pub fn app(&self) -> &CalculatorApp {
        &self.app
    }

    /// Returns the rendered screen as text, one line per row
    #[must_use]
    pub fn screen_text(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn screen(&self) -> Rect {
        self.terminal.backend().buffer().area
    }

    fn redraw(&mut self) -> CalcResult<()> {
        let app = &self.app;
        self.terminal.draw(|frame| render(app, frame))?;
        Ok(())
    }
}

impl CalculatorDriver for TuiDriver {
    fn press(&mut self, button: CalculatorButton) -> CalcResult<()> {
        let screen = self.screen();
        let rect = self
            .app
            .button_area(screen, button)
            .ok_or_else(|| CalcError::ButtonNotVisible {
                label: button.label(),
            })?;

        let (column, row) = (rect.x + rect.width / 2, rect.y + rect.height / 2);
        if self.app.click(column, row, screen) != Some(button) {
            return Err(CalcError::ButtonNotVisible {
                label: button.label(),
            });
        }
        self.redraw()
    }

    fn display(&self) -> String {
        self.app.display_text().to_string()
    }
}

// ===== Shared scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("2+3=", "5.0"),
        ("10-4=", "6.0"),
        ("7*6=", "42.0"),
        ("20/4=", "5.0"),
        ("1/4=", "0.25"),
        ("3-8=", "-5.0"),
    ];
    for (labels, expected) in cases {
        driver.clear().unwrap();
        driver.press_labels(labels).unwrap();
        assert_eq!(driver.display(), expected, "{labels}");
    }
    driver.clear().unwrap();
}

/// Verifies digit entry and the decimal point
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.press_labels("007").unwrap();
    assert_eq!(driver.display(), "7");

    driver.clear().unwrap();
    driver.press_labels("3..").unwrap();
    assert_eq!(driver.display(), "3.");

    driver.clear().unwrap();
    driver.press_labels(".5").unwrap();
    assert_eq!(driver.display(), "0.5");

    driver.clear().unwrap();
    driver.press_labels("12.5=").unwrap();
    assert_eq!(driver.display(), "12.5");
    driver.clear().unwrap();
}

/// Verifies the single-pending-operation rules
pub fn verify_operator_rules<D: CalculatorDriver>(driver: &mut D) {
    // First operand captured once per chain
    driver.clear().unwrap();
    driver.press_labels("5++3=").unwrap();
    assert_eq!(driver.display(), "8.0");

    // Last operator wins
    driver.clear().unwrap();
    driver
        .press_all(&[
            CalculatorButton::Number(9),
            CalculatorButton::Operator(Operation::Add),
            CalculatorButton::Operator(Operation::Subtract),
            CalculatorButton::Number(4),
            CalculatorButton::Equals,
        ])
        .unwrap();
    assert_eq!(driver.display(), "5.0");

    // No precedence, no chaining
    driver.clear().unwrap();
    driver.press_labels("2+3*4=").unwrap();
    assert_eq!(driver.display(), "12.0");
    driver.clear().unwrap();
}

/// Verifies float edge cases are shown, not raised
pub fn verify_non_finite<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.press_labels("5/0=").unwrap();
    assert_eq!(driver.display(), "inf");

    driver.clear().unwrap();
    driver.press_labels("0/0=").unwrap();
    assert_eq!(driver.display(), "nan");
    driver.clear().unwrap();
}

/// Verifies `=` and `C` behave the same from any state
pub fn verify_equals_and_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.clear().unwrap();
    driver.press_labels("7*6=").unwrap();
    let first = driver.display();
    driver.press_labels("==").unwrap();
    assert_eq!(driver.display(), first);

    driver.press_labels("9+").unwrap();
    driver.clear().unwrap();
    assert_eq!(driver.display(), "0");
}
