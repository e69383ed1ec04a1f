//! TUI application state

use ratatui::layout::Rect;
use tracing::{debug, info};

use super::input::InputEvent;
use super::window::CalculatorWindow;
use crate::config::CalcConfig;
use crate::controller::Controller;
use crate::core::evaluator::Evaluator;
use crate::keypad::KeyAction;
use crate::view::{CalculatorView, Focus};

/// Calculator application: the window plus the controller driving it
#[derive(Debug)]
pub struct CalculatorApp {
    window: CalculatorWindow,
    controller: Controller<Evaluator>,
    /// Terminal area of the last frame, for mouse hit testing
    area: Rect,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new(CalcConfig::default())
    }
}

impl CalculatorApp {
    /// Creates the window and wires the controller to it
    #[must_use]
    pub fn new(config: CalcConfig) -> Self {
        let model = Evaluator::with_marker(config.error_marker.clone());
        let window = CalculatorWindow::new(config);
        let controller = Controller::new(model, &window, window.config().error_marker.clone());
        info!(title = %window.config().title, size = %window.config().window_size, "calculator ready");

        let size = window.config().window_size;
        Self {
            window,
            controller,
            area: Rect::new(0, 0, size.width, size.height),
            should_quit: false,
        }
    }

    /// Returns the window
    #[must_use]
    pub fn window(&self) -> &CalculatorWindow {
        &self.window
    }

    /// Returns the controller
    #[must_use]
    pub fn controller(&self) -> &Controller<Evaluator> {
        &self.controller
    }

    /// Current display text
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.window.display_text()
    }

    /// Records the terminal area the next frame is drawn into
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    /// Terminal area of the last frame
    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Returns true once the window has been closed
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Closes the window
    pub fn quit(&mut self) {
        info!("window closed");
        self.should_quit = true;
    }

    /// Presses a keypad button
    pub fn press(&mut self, action: KeyAction) {
        self.window.keypad_mut().highlight(action);
        self.controller.trigger(&mut self.window, action);
    }

    /// Enter: submits the display, or presses the focused button
    pub fn submit(&mut self) {
        match self.window.focus() {
            Focus::Display => self.controller.submit(&mut self.window),
            Focus::Button(action) => self.press(action),
        }
    }

    /// Applies one input event
    pub fn handle(&mut self, event: InputEvent) {
        if event == InputEvent::None {
            return;
        }
        debug!(?event, "input");
        self.window.keypad_mut().release_all();

        match event {
            InputEvent::Key(action) => self.press(action),
            InputEvent::Submit => self.submit(),
            InputEvent::Activate => {
                if let Focus::Button(action) = self.window.focus() {
                    self.press(action);
                }
            }
            InputEvent::FocusNext => self.window.focus_next(),
            InputEvent::FocusPrev => self.window.focus_prev(),
            InputEvent::FocusMove { rows, cols } => self.window.move_focus(rows, cols),
            InputEvent::Click { x, y } => {
                if let Some(action) = self.window.hit_test(self.area, x, y) {
                    self.press(action);
                }
            }
            InputEvent::Quit => self.quit(),
            InputEvent::None => {}
        }
    }
}
