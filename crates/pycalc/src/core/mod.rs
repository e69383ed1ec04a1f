//! Arithmetic core: tokenizer, parser, numeric tower and evaluator.
//!
//! Nothing in here knows about the display or the keypad. The only way in is
//! expression text, and the only way out is a [`Number`] or a [`CalcError`].

pub mod evaluator;
mod number;
mod operations;
pub mod parser;

pub use number::Number;
pub use operations::Operation;

use thiserror::Error;

/// Text shown in place of a result when evaluation fails.
pub const ERROR_MARKER: &str = "MATH ERROR";

/// Result type for evaluator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Every way an evaluation can fail.
///
/// These never leave the evaluator as errors: at the text boundary they all
/// collapse to the error marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Nothing but whitespace was provided
    #[error("Empty expression")]
    EmptyExpression,
    /// A character outside the arithmetic alphabet
    #[error("Unexpected character: '{0}'")]
    UnexpectedCharacter(char),
    /// A numeric literal that does not parse
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
    /// Tokens that do not form an expression
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Division or floor division by zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Integer result outside the representable range
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// NaN, infinity, or a result with no real value
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

impl CalcError {
    /// Creates a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }

    /// Creates an invalid result error
    #[must_use]
    pub fn invalid_result(message: impl Into<String>) -> Self {
        Self::InvalidResult(message.into())
    }
}
