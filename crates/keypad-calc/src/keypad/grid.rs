//! Keypad layout and geometry
//!
//! ```text
//! [ C ] [ / ] [ * ] [ - ]
//! [ 7 ] [ 8 ] [ 9 ] [ + ]
//! [ 4 ] [ 5 ] [ 6 ]
//! [ 1 ] [ 2 ] [ 3 ]
//! [    0    ] [ . ] [ = ]
//! ```
//!
//! Positions are in grid units; a unit maps to a fixed number of terminal
//! cells through [`KeypadGeometry`], so rendering and hit testing agree.

use super::button::CalculatorButton;
use crate::core::Operation;
use ratatui::layout::Rect;

/// Cell size of one grid unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadGeometry {
    /// Width of a single-width button in cells
    pub button_width: u16,
    /// Height of every button in cells
    pub button_height: u16,
    /// Empty cells between adjacent buttons
    pub gap: u16,
}

impl Default for KeypadGeometry {
    fn default() -> Self {
        Self {
            button_width: 7,
            button_height: 3,
            gap: 1,
        }
    }
}

impl KeypadGeometry {
    /// Rectangle of a button at grid position `(row, col)` spanning `span`
    /// columns, relative to `origin`. May extend past the visible area.
    #[must_use]
    pub fn button_rect(&self, origin: Rect, row: u16, col: u16, span: u16) -> Rect {
        let x = origin
            .x
            .saturating_add(col.saturating_mul(self.button_width.saturating_add(self.gap)));
        let y = origin
            .y
            .saturating_add(row.saturating_mul(self.button_height.saturating_add(self.gap)));
        let width = span
            .saturating_mul(self.button_width)
            .saturating_add(span.saturating_sub(1).saturating_mul(self.gap));
        Rect {
            x,
            y,
            width,
            height: self.button_height,
        }
    }

    /// Cells needed to show a `rows x cols` grid in full
    #[must_use]
    pub fn grid_size(&self, rows: u16, cols: u16) -> (u16, u16) {
        let width = cols
            .saturating_mul(self.button_width)
            .saturating_add(cols.saturating_sub(1).saturating_mul(self.gap));
        let height = rows
            .saturating_mul(self.button_height)
            .saturating_add(rows.saturating_sub(1).saturating_mul(self.gap));
        (width, height)
    }
}

/// A button placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedButton {
    /// Grid row
    pub row: u16,
    /// First grid column
    pub col: u16,
    /// The button
    pub button: CalculatorButton,
}

/// The static 5-row calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order with their grid positions
    placed: Vec<PlacedButton>,
    /// Number of rows
    rows: u16,
    /// Number of columns
    cols: u16,
    /// Most recently pressed button
    highlighted: Option<CalculatorButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use CalculatorButton::{Clear, Decimal, Equals, Number};
        let op = CalculatorButton::Operator;

        let rows: [&[CalculatorButton]; 5] = [
            &[
                Clear,
                op(Operation::Divide),
                op(Operation::Multiply),
                op(Operation::Subtract),
            ],
            &[Number(7), Number(8), Number(9), op(Operation::Add)],
            &[Number(4), Number(5), Number(6)],
            &[Number(1), Number(2), Number(3)],
            &[Number(0), Decimal, Equals],
        ];

        let mut placed = Vec::new();
        let mut cols = 0;
        for (row, buttons) in rows.iter().enumerate() {
            let mut col = 0;
            for &button in *buttons {
                placed.push(PlacedButton {
                    row: row as u16,
                    col,
                    button,
                });
                col += button.column_span();
            }
            cols = cols.max(col);
        }

        Self {
            placed,
            rows: rows.len() as u16,
            cols,
            highlighted: None,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.placed.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Returns an iterator over placed buttons in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = &PlacedButton> {
        self.placed.iter()
    }

    /// Buttons of a single row, left to right
    #[must_use]
    pub fn row(&self, row: u16) -> Vec<CalculatorButton> {
        self.placed
            .iter()
            .filter(|p| p.row == row)
            .map(|p| p.button)
            .collect()
    }

    /// Gets the button covering grid cell `(row, col)`
    #[must_use]
    pub fn get_button_at(&self, row: u16, col: u16) -> Option<CalculatorButton> {
        self.placed
            .iter()
            .find(|p| p.row == row && col >= p.col && col < p.col + p.button.column_span())
            .map(|p| p.button)
    }

    /// Finds where a button sits on the grid
    #[must_use]
    pub fn position_of(&self, button: CalculatorButton) -> Option<PlacedButton> {
        self.placed.iter().copied().find(|p| p.button == button)
    }

    /// Marks a button as the last one pressed
    pub fn highlight(&mut self, button: CalculatorButton) {
        self.highlighted = Some(button);
    }

    /// Removes the highlight
    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    /// Returns the highlighted button
    #[must_use]
    pub fn highlighted(&self) -> Option<CalculatorButton> {
        self.highlighted
    }

    /// Screen rectangle of a button inside `area`, clipped to it.
    ///
    /// Returns `None` when the button is entirely outside `area`.
    #[must_use]
    pub fn button_area(
        &self,
        geometry: &KeypadGeometry,
        area: Rect,
        button: CalculatorButton,
    ) -> Option<Rect> {
        let placed = self.position_of(button)?;
        let rect = geometry.button_rect(area, placed.row, placed.col, button.column_span());
        let clipped = rect.intersection(area);
        (clipped.width > 0 && clipped.height > 0).then_some(clipped)
    }

    /// Converts a click position to the button under it
    #[must_use]
    pub fn hit_test(
        &self,
        geometry: &KeypadGeometry,
        area: Rect,
        x: u16,
        y: u16,
    ) -> Option<CalculatorButton> {
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        self.placed
            .iter()
            .find(|p| {
                let rect = geometry.button_rect(area, p.row, p.col, p.button.column_span());
                x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
            })
            .map(|p| p.button)
    }
}
