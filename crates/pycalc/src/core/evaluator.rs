//! AST evaluator and the text-in, text-out evaluation boundary.

use tracing::debug;

use crate::core::operations::negate;
use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcResult, Number, ERROR_MARKER};

/// Anything that can turn expression text into display text.
///
/// The controller only ever talks to this trait. Implementations must not
/// fail: every error becomes display text.
pub trait Model {
    /// Evaluates an expression, returning either the result or an error marker
    fn evaluate(&self, expression: &str) -> String;
}

impl<F> Model for F
where
    F: Fn(&str) -> String,
{
    fn evaluate(&self, expression: &str) -> String {
        self(expression)
    }
}

/// Evaluator for arithmetic expressions
///
/// Holds no state besides the marker text, so it is safe to share between
/// threads and to call repeatedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluator {
    error_marker: String,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator that reports failures as [`ERROR_MARKER`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_marker(ERROR_MARKER)
    }

    /// Creates an evaluator with a custom failure marker
    #[must_use]
    pub fn with_marker(error_marker: impl Into<String>) -> Self {
        Self {
            error_marker: error_marker.into(),
        }
    }

    /// Returns the failure marker
    #[must_use]
    pub fn error_marker(&self) -> &str {
        &self.error_marker
    }

    /// Evaluates an AST node
    pub fn evaluate_ast(&self, node: &AstNode) -> CalcResult<Number> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Negate(inner) => negate(self.evaluate_ast(inner)?),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate_ast(left)?;
                let right_val = self.evaluate_ast(right)?;
                op.apply(left_val, right_val)
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<Number> {
        let ast = Parser::parse_str(input)?;
        self.evaluate_ast(&ast)
    }
}

impl Model for Evaluator {
    fn evaluate(&self, expression: &str) -> String {
        match self.evaluate_str(expression) {
            Ok(value) => {
                debug!(expression, result = %value, "evaluated");
                value.to_string()
            }
            Err(error) => {
                debug!(expression, %error, "evaluation failed");
                self.error_marker.clone()
            }
        }
    }
}

/// Evaluates an expression with the default marker
#[must_use]
pub fn evaluate_expression(expression: &str) -> String {
    Evaluator::new().evaluate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operation};

    // ===== Constructor tests =====

    #[test]
    fn test_evaluator_new_uses_default_marker() {
        assert_eq!(Evaluator::new().error_marker(), "MATH ERROR");
        assert_eq!(Evaluator::default(), Evaluator::new());
    }

    #[test]
    fn test_evaluator_with_marker() {
        let eval = Evaluator::with_marker("ERR");
        assert_eq!(eval.evaluate("1/0"), "ERR");
    }

    // ===== AST evaluation tests =====

    #[test]
    fn test_evaluate_ast_number() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_ast(&AstNode::int(7)), Ok(Number::Int(7)));
    }

    #[test]
    fn test_evaluate_ast_negate() {
        let eval = Evaluator::new();
        let node = AstNode::negate(AstNode::float(2.5));
        assert_eq!(eval.evaluate_ast(&node), Ok(Number::Float(-2.5)));
    }

    #[test]
    fn test_evaluate_ast_binary() {
        let eval = Evaluator::new();
        let node = AstNode::binary(AstNode::int(6), Operation::Multiply, AstNode::int(7));
        assert_eq!(eval.evaluate_ast(&node), Ok(Number::Int(42)));
    }

    // ===== evaluate_str tests =====

    #[test]
    fn test_evaluate_str_errors() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str(""), Err(CalcError::EmptyExpression));
        assert_eq!(eval.evaluate_str("1/0"), Err(CalcError::DivisionByZero));
        assert_eq!(
            eval.evaluate_str("2+x"),
            Err(CalcError::UnexpectedCharacter('x'))
        );
    }

    // ===== Text boundary tests =====

    #[test]
    fn test_evaluate_basic() {
        assert_eq!(evaluate_expression("2+2"), "4");
        assert_eq!(evaluate_expression("10-4"), "6");
        assert_eq!(evaluate_expression("6*7"), "42");
        assert_eq!(evaluate_expression("7+3"), "10");
    }

    #[test]
    fn test_evaluate_float_results() {
        assert_eq!(evaluate_expression("2.5*2"), "5.0");
        assert_eq!(evaluate_expression("7/2"), "3.5");
        assert_eq!(evaluate_expression("4/2"), "2.0");
        assert_eq!(evaluate_expression("0.1+0.2"), "0.30000000000000004");
        assert_eq!(evaluate_expression("1/3"), "0.3333333333333333");
    }

    #[test]
    fn test_evaluate_precedence_and_parentheses() {
        assert_eq!(evaluate_expression("2+3*4"), "14");
        assert_eq!(evaluate_expression("(2+3)*4"), "20");
        assert_eq!(evaluate_expression("42*(3+7)"), "420");
        assert_eq!(evaluate_expression("((2+3)*(4+5))"), "45");
        assert_eq!(evaluate_expression("8-3-2"), "3");
        assert_eq!(evaluate_expression("8/4/2"), "1.0");
    }

    #[test]
    fn test_evaluate_keypad_literals() {
        assert_eq!(evaluate_expression("00+1"), "1");
        assert_eq!(evaluate_expression("100"), "100");
        assert_eq!(evaluate_expression("07"), "MATH ERROR");
        assert_eq!(evaluate_expression(".5+.5"), "1.0");
    }

    #[test]
    fn test_evaluate_doubled_operators() {
        assert_eq!(evaluate_expression("2**3"), "8");
        assert_eq!(evaluate_expression("2**3**2"), "512");
        assert_eq!(evaluate_expression("-2**2"), "-4");
        assert_eq!(evaluate_expression("2**-1"), "0.5");
        assert_eq!(evaluate_expression("7//2"), "3");
        assert_eq!(evaluate_expression("-7//2"), "-4");
        assert_eq!(evaluate_expression("7.5//2"), "3.0");
    }

    #[test]
    fn test_evaluate_unary() {
        assert_eq!(evaluate_expression("-5+10"), "5");
        assert_eq!(evaluate_expression("--3"), "3");
        assert_eq!(evaluate_expression("2--3"), "5");
        assert_eq!(evaluate_expression("-(2.5)"), "-2.5");
    }

    #[test]
    fn test_evaluate_failures_collapse_to_marker() {
        for input in [
            "", "   ", "1/0", "1//0", "0**-1", "2+x", "(2+3", "2+", "2(3)", "1.2.3", "abs(1)",
        ] {
            assert_eq!(evaluate_expression(input), "MATH ERROR", "input {input:?}");
        }
    }

    #[test]
    fn test_evaluate_large_values() {
        assert_eq!(evaluate_expression("10**20"), "100000000000000000000");
        assert_eq!(evaluate_expression("10**40"), "MATH ERROR");
        assert_eq!(evaluate_expression("10000000000000000.0*1"), "1e+16");
    }

    #[test]
    fn test_evaluate_error_marker_is_not_an_expression() {
        assert_eq!(evaluate_expression("MATH ERROR"), "MATH ERROR");
    }

    // ===== Model trait tests =====

    #[test]
    fn test_closure_is_model() {
        let model = |expr: &str| format!("<{expr}>");
        assert_eq!(model.evaluate("1+1"), "<1+1>");
    }

    #[test]
    fn test_evaluator_shared_across_threads() {
        let eval = std::sync::Arc::new(Evaluator::new());
        let handles: Vec<_> = (1..=4)
            .map(|i| {
                let eval = std::sync::Arc::clone(&eval);
                std::thread::spawn(move || eval.evaluate(&format!("{i}*{i}")))
            })
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec!["1", "4", "9", "16"]);
    }
}
