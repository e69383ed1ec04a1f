//! Terminal frontend: a fixed-size calculator window drawn with ratatui

mod app;
mod input;
mod keypad;
mod ui;
mod window;

pub use app::CalculatorApp;
pub use input::{InputEvent, InputHandler};
pub use keypad::{button_style, KeypadWidget};
pub use ui::{render, CalculatorUI};
pub use window::{CalculatorWindow, WindowLayout};
