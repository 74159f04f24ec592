//! View configuration
//!
//! Colors and button sizes, loadable from a JSON file. Every field is
//! optional; missing fields take the defaults below.

use crate::error::{CalcError, CalcResult};
use crate::keypad::{ColorCategory, KeypadGeometry};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Smallest button width that still fits a centered label
pub const MIN_BUTTON_WIDTH: u16 = 3;

/// Largest accepted button width, button height and gap
pub const MAX_CELL_SIZE: u16 = 64;

/// View configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Background of digit and decimal buttons
    pub digit_color: String,
    /// Background of operator buttons
    pub operator_color: String,
    /// Background of the equals button
    pub equals_color: String,
    /// Background of the clear button
    pub clear_color: String,
    /// Button label color
    pub label_color: String,
    /// Display text color
    pub display_fg: String,
    /// Display background
    pub display_bg: String,
    /// Background of the last pressed button
    pub highlight_color: String,
    /// Width of a single-width button in cells
    pub button_width: u16,
    /// Height of every button in cells
    pub button_height: u16,
    /// Cells between buttons
    pub gap: u16,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            digit_color: "blue".to_string(),
            operator_color: "#ff9500".to_string(),
            equals_color: "green".to_string(),
            clear_color: "red".to_string(),
            label_color: "white".to_string(),
            display_fg: "black".to_string(),
            display_bg: "#e6e6e6".to_string(),
            highlight_color: "yellow".to_string(),
            button_width: 7,
            button_height: 3,
            gap: 1,
        }
    }
}

impl ViewConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration and validates it
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file
    pub fn load(path: &Path) -> CalcResult<Self> {
        tracing::debug!(path = %path.display(), "loading view config");
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "view config loaded");
        Ok(config)
    }

    /// Serializes to pretty JSON
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set button width
    #[must_use]
    pub const fn with_button_width(mut self, width: u16) -> Self {
        self.button_width = width;
        self
    }

    /// Set button height
    #[must_use]
    pub const fn with_button_height(mut self, height: u16) -> Self {
        self.button_height = height;
        self
    }

    /// Set gap
    #[must_use]
    pub const fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Set the color for one button category
    #[must_use]
    pub fn with_category_color(mut self, category: ColorCategory, color: impl Into<String>) -> Self {
        let color = color.into();
        match category {
            ColorCategory::Digit => self.digit_color = color,
            ColorCategory::Operator => self.operator_color = color,
            ColorCategory::Equals => self.equals_color = color,
            ColorCategory::Clear => self.clear_color = color,
        }
        self
    }

    /// Checks sizes and colors
    pub fn validate(&self) -> CalcResult<()> {
        if self.button_width < MIN_BUTTON_WIDTH {
            return Err(CalcError::config(format!(
                "button_width must be at least {MIN_BUTTON_WIDTH}, got {}",
                self.button_width
            )));
        }
        if self.button_height == 0 {
            return Err(CalcError::config("button_height must be at least 1"));
        }
        for (field, value) in [
            ("button_width", self.button_width),
            ("button_height", self.button_height),
            ("gap", self.gap),
        ] {
            if value > MAX_CELL_SIZE {
                return Err(CalcError::config(format!(
                    "{field} must be at most {MAX_CELL_SIZE}, got {value}"
                )));
            }
        }
        self.palette().map(|_| ())
    }

    /// Keypad geometry described by this configuration
    #[must_use]
    pub const fn geometry(&self) -> KeypadGeometry {
        KeypadGeometry {
            button_width: self.button_width,
            button_height: self.button_height,
            gap: self.gap,
        }
    }

    /// Resolves the color strings
    pub fn palette(&self) -> CalcResult<Palette> {
        Ok(Palette {
            digit: parse_color("digit_color", &self.digit_color)?,
            operator: parse_color("operator_color", &self.operator_color)?,
            equals: parse_color("equals_color", &self.equals_color)?,
            clear: parse_color("clear_color", &self.clear_color)?,
            label: parse_color("label_color", &self.label_color)?,
            display_fg: parse_color("display_fg", &self.display_fg)?,
            display_bg: parse_color("display_bg", &self.display_bg)?,
            highlight: parse_color("highlight_color", &self.highlight_color)?,
        })
    }
}

fn parse_color(field: &'static str, value: &str) -> CalcResult<Color> {
    Color::from_str(value).map_err(|_| CalcError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

/// Resolved colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Digit and decimal buttons
    pub digit: Color,
    /// Operator buttons
    pub operator: Color,
    /// Equals button
    pub equals: Color,
    /// Clear button
    pub clear: Color,
    /// Button labels
    pub label: Color,
    /// Display text
    pub display_fg: Color,
    /// Display background
    pub display_bg: Color,
    /// Last pressed button
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            digit: Color::Blue,
            operator: Color::Rgb(0xff, 0x95, 0x00),
            equals: Color::Green,
            clear: Color::Red,
            label: Color::White,
            display_fg: Color::Black,
            display_bg: Color::Rgb(0xe6, 0xe6, 0xe6),
            highlight: Color::Yellow,
        }
    }
}

impl Palette {
    /// Background color for a button category
    #[must_use]
    pub const fn for_category(&self, category: ColorCategory) -> Color {
        match category {
            ColorCategory::Digit => self.digit,
            ColorCategory::Operator => self.operator,
            ColorCategory::Equals => self.equals,
            ColorCategory::Clear => self.clear,
        }
    }
}
