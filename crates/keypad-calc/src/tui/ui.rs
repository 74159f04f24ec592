//! Screen layout and rendering
//!
//! ```text
//! ┌ keypad-calc ───────────────────┐
//! │┌──────────────────────────────┐│
//! ││                          42.0││
//! │└──────────────────────────────┘│
//! │                                │
//! │ keypad (5 rows)                │
//! │ * | awaiting operand    q quit │
//! └────────────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::keypad::{Keypad, KeypadGeometry};

/// Title of the outer frame
pub const APP_TITLE: &str = " keypad-calc ";

/// Hint shown on the right of the status line
pub const QUIT_HINT: &str = "q quit";

/// Height of the display panel, borders included
const DISPLAY_HEIGHT: u16 = 3;

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Display panel
    pub display: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Status line
    pub status: Rect,
}

/// Splits the screen into display, keypad and status regions.
///
/// The column is as wide as the keypad grid (or the screen, if smaller).
#[must_use]
pub fn layout(screen: Rect, geometry: &KeypadGeometry, keypad: &Keypad) -> UiLayout {
    let inner = Block::default().borders(Borders::ALL).inner(screen);
    let (rows, cols) = keypad.dimensions();
    let (grid_width, grid_height) = geometry.grid_size(rows, cols);
    let column = Rect {
        width: grid_width.min(inner.width),
        ..inner
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT), // Display
            Constraint::Length(1),              // Spacer
            Constraint::Length(grid_height),    // Keypad
            Constraint::Length(1),              // Status
            Constraint::Min(0),
        ])
        .split(column);

    UiLayout {
        display: chunks[0],
        keypad: chunks[2],
        status: chunks[3],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the display panel, text right-aligned
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let palette = self.app.palette();
        let style = Style::default()
            .fg(palette.display_fg)
            .bg(palette.display_bg)
            .add_modifier(Modifier::BOLD);

        Paragraph::new(self.app.display_text())
            .alignment(Alignment::Right)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    /// Renders the keypad grid
    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        KeypadWidget::new(self.app.keypad(), self.app.geometry(), self.app.palette())
            .render(area, buf);
    }

    /// Renders pending operation, phase and the quit hint
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();
        let pending = state
            .pending_operation()
            .map_or_else(|| " ".to_string(), |op| op.symbol().to_string());

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(QUIT_HINT.len() as u16),
            ])
            .split(area);

        let left = Line::from(vec![
            Span::styled(pending, Style::default().fg(Color::Yellow)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled(state.phase().label(), Style::default().fg(Color::Gray)),
        ]);
        Paragraph::new(left).render(chunks[0], buf);

        Paragraph::new(Span::styled(QUIT_HINT, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = layout(area, &self.app.geometry(), self.app.keypad());
        self.render_display(regions.display, buf);
        self.render_keypad(regions.keypad, buf);
        self.render_status(regions.status, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;
    use crate::keypad::CalculatorButton;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(40, 30);
        Terminal::new(backend).unwrap()
    }

    fn buf_to_string(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn draw(app: &CalculatorApp, terminal: &mut Terminal<TestBackend>) -> String {
        terminal.draw(|frame| render(app, frame)).unwrap();
        buf_to_string(terminal.backend().buffer())
    }

    // ===== Layout =====

    #[test]
    fn test_layout_regions_stack() {
        let keypad = Keypad::new();
        let g = KeypadGeometry::default();
        let regions = layout(Rect::new(0, 0, 40, 30), &g, &keypad);

        assert_eq!(regions.display, Rect::new(1, 1, 31, 3));
        assert_eq!(regions.keypad, Rect::new(1, 5, 31, 19));
        assert_eq!(regions.status, Rect::new(1, 24, 31, 1));
    }

    #[test]
    fn test_layout_narrow_screen_clamps_width() {
        let keypad = Keypad::new();
        let g = KeypadGeometry::default();
        let regions = layout(Rect::new(0, 0, 20, 30), &g, &keypad);
        assert_eq!(regions.keypad.width, 18);
    }

    // ===== Rendering =====

    #[test]
    fn test_render_initial_display() {
        let app = CalculatorApp::new();
        let mut terminal = create_test_terminal();
        draw(&app, &mut terminal);

        let buffer = terminal.backend().buffer();
        // "0" is right-aligned inside the display border
        assert_eq!(buffer[(30, 2)].symbol(), "0");
    }

    #[test]
    fn test_render_title() {
        let app = CalculatorApp::new();
        let mut terminal = create_test_terminal();
        let content = draw(&app, &mut terminal);
        assert!(content.contains("keypad-calc"));
    }

    #[test]
    fn test_render_display_after_presses() {
        let mut app = CalculatorApp::new();
        for button in [
            CalculatorButton::Number(7),
            CalculatorButton::Operator(Operation::Multiply),
            CalculatorButton::Number(6),
            CalculatorButton::Equals,
        ] {
            app.press(button);
        }
        let mut terminal = create_test_terminal();
        let content = draw(&app, &mut terminal);
        assert!(content.contains("42.0"));
    }

    #[test]
    fn test_render_display_colors() {
        let app = CalculatorApp::new();
        let mut terminal = create_test_terminal();
        draw(&app, &mut terminal);
        let cell = &terminal.backend().buffer()[(30, 2)];
        assert_eq!(cell.bg, app.palette().display_bg);
        assert_eq!(cell.fg, app.palette().display_fg);
    }

    #[test]
    fn test_render_status_pending_operation() {
        let mut app = CalculatorApp::new();
        app.press(CalculatorButton::Number(9));
        app.press(CalculatorButton::Operator(Operation::Divide));
        let mut terminal = create_test_terminal();
        let content = draw(&app, &mut terminal);
        assert!(content.contains("/ | awaiting operand"));
        assert!(content.contains(QUIT_HINT));
    }

    #[test]
    fn test_render_status_result() {
        let mut app = CalculatorApp::new();
        app.press(CalculatorButton::Equals);
        let mut terminal = create_test_terminal();
        let content = draw(&app, &mut terminal);
        assert!(content.contains("| result"));
    }

    #[test]
    fn test_render_infinity() {
        let mut app = CalculatorApp::new();
        for button in [
            CalculatorButton::Number(5),
            CalculatorButton::Operator(Operation::Divide),
            CalculatorButton::Number(0),
            CalculatorButton::Equals,
        ] {
            app.press(button);
        }
        let mut terminal = create_test_terminal();
        let content = draw(&app, &mut terminal);
        assert!(content.contains("inf"));
    }

    #[test]
    fn test_render_keypad_labels() {
        let app = CalculatorApp::new();
        let mut terminal = create_test_terminal();
        draw(&app, &mut terminal);
        let regions = layout(Rect::new(0, 0, 40, 30), &app.geometry(), app.keypad());
        let buffer = terminal.backend().buffer();
        // First button of the keypad is C
        assert_eq!(
            buffer[(regions.keypad.x + 3, regions.keypad.y + 1)].symbol(),
            "C"
        );
    }

    #[test]
    fn test_render_small_terminal() {
        let app = CalculatorApp::new();
        let backend = TestBackend::new(12, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_render_largest_geometry() {
        use crate::config::{ViewConfig, MAX_CELL_SIZE};

        let config = ViewConfig::new()
            .with_button_width(MAX_CELL_SIZE)
            .with_gap(MAX_CELL_SIZE);
        let app = CalculatorApp::with_config(&config).unwrap();
        let mut terminal = create_test_terminal();
        let content = draw(&app, &mut terminal);
        assert!(content.contains('C'));
    }

    #[test]
    fn test_widget_render_direct() {
        let app = CalculatorApp::new();
        let area = Rect::new(0, 0, 40, 30);
        let mut buf = Buffer::empty(area);
        CalculatorUI::new(&app).render(area, &mut buf);
        assert!(buf_to_string(&buf).contains("keypad-calc"));
    }

    #[test]
    fn test_long_display_text_renders() {
        let mut app = CalculatorApp::new();
        for _ in 0..50 {
            app.press(CalculatorButton::Number(9));
        }
        let mut terminal = create_test_terminal();
        let content = draw(&app, &mut terminal);
        assert!(content.contains("999999"));
    }
}
