//! Arithmetic-only tokenizer and recursive descent parser.
//!
//! The alphabet is digits, `.`, `+ - * / ( )` and whitespace. Anything else,
//! including identifiers, is rejected before parsing starts, so expression
//! text can never name anything outside the arithmetic it spells out.

use crate::core::{CalcError, CalcResult, Number, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(Number),
    /// Operator (`-` and `+` double as unary signs)
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

impl Token {
    /// Returns true if this token is an operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token is a number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(Number),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates an integer literal node
    #[must_use]
    pub fn int(value: i128) -> Self {
        Self::Number(Number::Int(value))
    }

    /// Creates a float literal node
    #[must_use]
    pub fn float(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the remaining input
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '+' => self.operator(Operation::Add),
            '-' => self.operator(Operation::Subtract),
            '*' => self.doubled('*', Operation::Multiply, Operation::Power),
            '/' => self.doubled('/', Operation::Divide, Operation::FloorDivide),
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            _ => return Err(CalcError::UnexpectedCharacter(ch)),
        };

        Ok(Some(token))
    }

    fn operator(&mut self, op: Operation) -> Token {
        self.advance();
        Token::Operator(op)
    }

    /// `*` vs `**`, `/` vs `//`
    fn doubled(&mut self, ch: char, single: Operation, double: Operation) -> Token {
        self.advance();
        if self.current_char() == Some(ch) {
            self.advance();
            Token::Operator(double)
        } else {
            Token::Operator(single)
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let literal = &self.input[start..self.pos];
        parse_literal(literal, has_dot).map(Token::Number)
    }
}

fn parse_literal(literal: &str, has_dot: bool) -> CalcResult<Number> {
    let invalid = || CalcError::InvalidNumber(literal.to_string());

    if has_dot {
        return literal.parse::<f64>().map(Number::Float).map_err(|_| invalid());
    }

    // "00" is zero, "07" is not a decimal literal
    if literal.len() > 1 && literal.starts_with('0') && literal.bytes().any(|b| b != b'0') {
        return Err(invalid());
    }

    literal
        .parse::<i128>()
        .map(Number::Int)
        .map_err(|_| CalcError::Overflow)
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/' | '//') unary)*
/// unary      ::= ('+' | '-') unary | power
/// power      ::= primary ('**' unary)?    // Right associative
/// primary    ::= NUMBER | '(' expression ')'
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let tokens = Tokenizer::new(trimmed).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression()?;
        if self.pos < self.tokens.len() {
            return Err(CalcError::parse(format!(
                "Unexpected token at position {}",
                self.pos
            )));
        }
        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(Token::Operator(op @ (Operation::Add | Operation::Subtract))) = self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(Token::Operator(
            op @ (Operation::Multiply | Operation::Divide | Operation::FloorDivide),
        )) = self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        match self.current() {
            Some(Token::Operator(Operation::Subtract)) => {
                self.advance();
                Ok(AstNode::negate(self.parse_unary()?))
            }
            Some(Token::Operator(Operation::Add)) => {
                self.advance();
                self.parse_unary()
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> CalcResult<AstNode> {
        let base = self.parse_primary()?;

        if matches!(self.current(), Some(Token::Operator(Operation::Power))) {
            self.advance();
            // Exponent may carry its own sign: 2**-1
            let exponent = self.parse_unary()?;
            return Ok(AstNode::binary(base, Operation::Power, exponent));
        }

        Ok(base)
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        let token = self
            .advance()
            .ok_or_else(|| CalcError::parse("Unexpected end of expression"))?;

        match token {
            Token::Number(n) => Ok(AstNode::Number(*n)),
            Token::LeftParen => {
                let expr = self.parse_expression()?;
                match self.advance() {
                    Some(Token::RightParen) => Ok(expr),
                    Some(t) => Err(CalcError::parse(format!("Expected ')' but found {t:?}"))),
                    None => Err(CalcError::parse("Unclosed parenthesis")),
                }
            }
            _ => Err(CalcError::parse(format!("Unexpected token: {token:?}"))),
        }
    }
}
