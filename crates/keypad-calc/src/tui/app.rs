//! TUI application state
//!
//! Wraps the controller with what the terminal front end needs: the keypad
//! (for highlighting and hit testing), resolved colors and a quit flag.

use ratatui::layout::Rect;

use super::input::InputAction;
use super::ui;
use crate::config::{Palette, ViewConfig};
use crate::controller::Controller;
use crate::core::CalculatorState;
use crate::error::CalcResult;
use crate::keypad::{CalculatorButton, Keypad, KeypadGeometry};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Dispatches presses into the state machine
    controller: Controller,
    /// Button grid, carries the highlight
    keypad: Keypad,
    /// Button sizes
    geometry: KeypadGeometry,
    /// Resolved colors
    palette: Palette,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: Controller::new(),
            keypad: Keypad::new(),
            geometry: KeypadGeometry::default(),
            palette: Palette::default(),
            should_quit: false,
        }
    }

    /// Creates a calculator app from a view configuration
    pub fn with_config(config: &ViewConfig) -> CalcResult<Self> {
        config.validate()?;
        Ok(Self {
            geometry: config.geometry(),
            palette: config.palette()?,
            ..Self::new()
        })
    }

    /// Returns the calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.controller.state()
    }

    /// Returns the display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.controller.display_text()
    }

    /// Returns the controller, e.g. to subscribe listeners
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the button geometry
    #[must_use]
    pub fn geometry(&self) -> KeypadGeometry {
        self.geometry
    }

    /// Returns the palette
    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a button and highlights it
    pub fn press(&mut self, button: CalculatorButton) {
        self.controller.press(button);
        self.keypad.highlight(button);
    }

    /// Screen rectangle of a button for a given screen size
    #[must_use]
    pub fn button_area(&self, screen: Rect, button: CalculatorButton) -> Option<Rect> {
        let regions = ui::layout(screen, &self.geometry, &self.keypad);
        self.keypad.button_area(&self.geometry, regions.keypad, button)
    }

    /// Handles a click at a screen cell. Returns the pressed button, if the
    /// click landed on one.
    pub fn click(&mut self, column: u16, row: u16, screen: Rect) -> Option<CalculatorButton> {
        let regions = ui::layout(screen, &self.geometry, &self.keypad);
        let hit = self
            .keypad
            .hit_test(&self.geometry, regions.keypad, column, row);

        match hit {
            Some(button) => self.press(button),
            None => tracing::trace!(column, row, "click outside keypad buttons"),
        }
        hit
    }

    /// Applies an input action
    pub fn handle(&mut self, action: InputAction, screen: Rect) {
        match action {
            InputAction::Click { column, row } => {
                self.click(column, row, screen);
            }
            InputAction::Quit => self.quit(),
            InputAction::Redraw | InputAction::None => {}
        }
    }
}
