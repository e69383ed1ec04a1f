//! PyCalc: a keypad calculator
//!
//! Three parts, leaf first:
//!
//! - **Evaluator** ([`core::evaluator`]): expression text in, result text
//!   out. Failures of any kind come back as the error marker.
//! - **View** ([`view::CalculatorView`]): a display buffer plus the fixed
//!   keypad actions. The terminal window lives in `tui`.
//! - **Controller** ([`controller::Controller`]): binds each key action to
//!   append, evaluate or clear.
//!
//! # Example
//!
//! ```rust
//! use pycalc::prelude::*;
//!
//! assert_eq!(evaluate_expression("2+2"), "4");
//! assert_eq!(evaluate_expression("7/2"), "3.5");
//! assert_eq!(evaluate_expression("1/0"), ERROR_MARKER);
//!
//! let mut view = HeadlessView::new();
//! let controller = Controller::new(Evaluator::new(), &view, ERROR_MARKER);
//! for action in [KeyAction::Seven, KeyAction::Add, KeyAction::Three, KeyAction::Equals] {
//!     controller.trigger(&mut view, action);
//! }
//! assert_eq!(view.display_text(), "10");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
pub mod error;
pub mod keypad;
pub mod logging;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalcConfig, ConfigError, Size};
    pub use crate::controller::{BufferState, Controller, Slot};
    pub use crate::core::evaluator::{evaluate_expression, Evaluator, Model};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Number, Operation, ERROR_MARKER};
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};
    pub use crate::error::{AppError, AppResult};
    pub use crate::keypad::{ButtonKind, KeyAction, Keypad, KeypadButton};
    pub use crate::view::{CalculatorView, Focus, HeadlessView};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, CalculatorWindow};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate("2 + 3"), "5");
        assert_eq!(eval.evaluate_str("2 + 3").unwrap(), Number::Int(5));
    }

    #[test]
    fn test_parser_direct() {
        let ast = Parser::parse_str("1 + 2 * 3").unwrap();
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_ast(&ast).unwrap(), Number::Int(7));
    }

    #[test]
    fn test_error_handling() {
        let eval = Evaluator::new();
        assert!(matches!(
            eval.evaluate_str("1 / 0"),
            Err(CalcError::DivisionByZero)
        ));
        assert!(matches!(
            eval.evaluate_str(""),
            Err(CalcError::EmptyExpression)
        ));
        assert!(matches!(
            eval.evaluate_str("1 + * 2"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_headless_round_trip() {
        let mut driver = HeadlessDriver::new();
        driver.type_keys("7+3=");
        assert_eq!(driver.display(), "10");
        driver.clear();
        assert_eq!(driver.display(), "");
    }

    #[test]
    fn test_default_config_matches_marker() {
        assert_eq!(CalcConfig::default().error_marker, ERROR_MARKER);
    }
}
