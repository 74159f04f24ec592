//! Button descriptors
//!
//! Each button is a tagged value; its label, color category and width are
//! pure functions of the tag.

use crate::core::Operation;
use std::fmt;

/// A keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorButton {
    /// Digit 0-9
    Number(u8),
    /// Binary operator
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Reset the calculator
    Clear,
    /// Decimal point
    Decimal,
}

/// Color group a button is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    /// Digits and the decimal point
    Digit,
    /// `+ - * /`
    Operator,
    /// `=`
    Equals,
    /// `C`
    Clear,
}

impl CalculatorButton {
    /// Every distinct button, digits first
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut buttons: Vec<Self> = (0..=9).map(Self::Number).collect();
        buttons.extend(Operation::ALL.into_iter().map(Self::Operator));
        buttons.extend([Self::Decimal, Self::Equals, Self::Clear]);
        buttons
    }

    /// Label printed on the button
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Number(d) => d.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Decimal => ".".to_string(),
        }
    }

    /// Looks a button up by its label.
    ///
    /// Operators also accept their typographic symbols; `c` is accepted for
    /// Clear.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };

        match ch {
            '0'..='9' => ch.to_digit(10).map(|d| Self::Number(d as u8)),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            _ => Operation::from_symbol(ch).map(Self::Operator),
        }
    }

    /// Color group
    #[must_use]
    pub const fn color_category(self) -> ColorCategory {
        match self {
            Self::Number(_) | Self::Decimal => ColorCategory::Digit,
            Self::Operator(_) => ColorCategory::Operator,
            Self::Equals => ColorCategory::Equals,
            Self::Clear => ColorCategory::Clear,
        }
    }

    /// Number of grid columns the button occupies (`0` is double width)
    #[must_use]
    pub const fn column_span(self) -> u16 {
        match self {
            Self::Number(0) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for CalculatorButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
