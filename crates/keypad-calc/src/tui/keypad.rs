//! Keypad widget
//!
//! Paints each button as a solid block in its category color with the label
//! centered. The last pressed button is painted in the highlight color.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::config::Palette;
use crate::keypad::{Keypad, KeypadGeometry};

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    geometry: KeypadGeometry,
    palette: Palette,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad, geometry: KeypadGeometry, palette: Palette) -> Self {
        Self {
            keypad,
            geometry,
            palette,
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let highlighted = self.keypad.highlighted();

        for placed in self.keypad.buttons() {
            let button = placed.button;
            let full = self
                .geometry
                .button_rect(area, placed.row, placed.col, button.column_span());
            let visible = full.intersection(area);
            if visible.width == 0 || visible.height == 0 {
                continue;
            }

            let (bg, fg) = if highlighted == Some(button) {
                (self.palette.highlight, Color::Black)
            } else {
                (
                    self.palette.for_category(button.color_category()),
                    self.palette.label,
                )
            };
            buf.set_style(visible, Style::default().bg(bg));

            let label = button.label();
            let label_x = full
                .x
                .saturating_add(full.width.saturating_sub(label.len() as u16) / 2);
            let label_y = full.y.saturating_add(full.height / 2);
            if label_x < visible.right() && label_y < visible.bottom() {
                buf.set_string(
                    label_x,
                    label_y,
                    &label,
                    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;
    use crate::keypad::CalculatorButton;

    fn render_keypad(keypad: &Keypad, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(keypad, KeypadGeometry::default(), Palette::default())
            .render(area, &mut buf);
        buf
    }

    fn label_cell(keypad: &Keypad, area: Rect, button: CalculatorButton) -> (u16, u16) {
        let g = KeypadGeometry::default();
        let placed = keypad.position_of(button).unwrap();
        let rect = g.button_rect(area, placed.row, placed.col, button.column_span());
        (rect.x + (rect.width - 1) / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_render_all_labels() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 31, 19);
        let buf = render_keypad(&keypad, area);

        for placed in keypad.buttons() {
            let (x, y) = label_cell(&keypad, area, placed.button);
            assert_eq!(buf[(x, y)].symbol(), placed.button.label(), "{}", placed.button);
        }
    }

    #[test]
    fn test_render_category_colors() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 31, 19);
        let buf = render_keypad(&keypad, area);
        let palette = Palette::default();

        let cases = [
            (CalculatorButton::Number(5), palette.digit),
            (CalculatorButton::Decimal, palette.digit),
            (CalculatorButton::Operator(Operation::Add), palette.operator),
            (CalculatorButton::Equals, palette.equals),
            (CalculatorButton::Clear, palette.clear),
        ];
        for (button, color) in cases {
            let (x, y) = label_cell(&keypad, area, button);
            assert_eq!(buf[(x, y)].bg, color, "{button}");
        }
    }

    #[test]
    fn test_render_zero_fills_double_width() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 31, 19);
        let buf = render_keypad(&keypad, area);
        let digit = Palette::default().digit;
        // Zero covers x 0..15 on the bottom row, including the gap at x=7
        for x in 0..15 {
            assert_eq!(buf[(x, 16)].bg, digit, "x={x}");
        }
        // x=15 is the gap before the decimal button
        assert_eq!(buf[(15, 16)].bg, Color::Reset);
    }

    #[test]
    fn test_render_highlighted_button() {
        let mut keypad = Keypad::new();
        keypad.highlight(CalculatorButton::Number(7));
        let area = Rect::new(0, 0, 31, 19);
        let buf = render_keypad(&keypad, area);

        let (x, y) = label_cell(&keypad, area, CalculatorButton::Number(7));
        assert_eq!(buf[(x, y)].bg, Palette::default().highlight);
        let (x, y) = label_cell(&keypad, area, CalculatorButton::Number(8));
        assert_eq!(buf[(x, y)].bg, Palette::default().digit);
    }

    #[test]
    fn test_render_small_area_does_not_panic() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 5, 2);
        let buf = render_keypad(&keypad, area);
        assert_eq!(buf[(0, 0)].bg, Palette::default().clear);
    }

    #[test]
    fn test_render_with_offset_area() {
        let keypad = Keypad::new();
        let area = Rect::new(4, 6, 31, 19);
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 30));
        KeypadWidget::new(&keypad, KeypadGeometry::default(), Palette::default())
            .render(area, &mut buf);
        // Clear label sits in the middle of the first button
        assert_eq!(buf[(4 + 3, 6 + 1)].symbol(), "C");
        assert_eq!(buf[(0, 0)].bg, Color::Reset);
    }
}
