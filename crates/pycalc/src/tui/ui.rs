//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use super::window::CalculatorWindow;
use crate::view::{CalculatorView, Focus};

/// Renders the calculator window, centred in the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app.window()), area);
}

/// Calculator window widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    window: &'a CalculatorWindow,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(window: &'a CalculatorWindow) -> Self {
        Self { window }
    }

    /// Renders the read-only display line
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = self.window.display_text();
        let is_error = text == self.window.config().error_marker;

        let text_style = if is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        let border_style = if self.window.focus() == Focus::Display {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let bordered = area.height >= 3;
        let width = if bordered {
            area.width.saturating_sub(2)
        } else {
            area.width
        };

        let mut paragraph = Paragraph::new(Span::styled(
            visible_tail(text, usize::from(width)),
            text_style,
        ))
        .alignment(Alignment::Right);
        if bordered {
            paragraph = paragraph.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        }
        paragraph.render(area, buf);
    }
}

/// The last `width` characters of `text`, so the newest input stays visible
fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    text.char_indices().nth(skip).map_or("", |(i, _)| &text[i..])
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.window.layout(area);
        let config = self.window.config();

        Clear.render(layout.window, buf);
        Block::default()
            .title(format!(" {} ", config.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(layout.window, buf);

        if !layout.display.is_empty() {
            self.render_display(layout.display, buf);
        }

        let focused = match self.window.focus() {
            Focus::Button(action) => Some(action),
            Focus::Display => None,
        };
        KeypadWidget::new(self.window.keypad(), config.button_size)
            .focused(focused)
            .render(layout.keypad, buf);
    }
}
