//! src/parser.rs

/*******************************************************************************
 *                          RECURSIVE DESCENT PARSER
 *-------------------------------------------------------------------------------
 * Precedence-climbing parser over the token stream from `lexer.rs`, producing
 * a `Node` tree directly rather than a `Result` -- there is no parse-error
 * channel distinct from the tree's own `Error` variant.
 * Grammar, all left-associative:
 *
 *   equals         = additive [ "=" additive ]
 *   additive       = multiplicative { ("+" | "-") multiplicative }
 *   multiplicative = exponentiation { ("*" | "/") exponentiation }
 *   exponentiation = primary { "^" primary }
 *   primary        = number | constant | variable
 *                  | function "(" equals ")"
 *                  | "(" equals ")"
 *                  | "|" equals "|"
 ******************************************************************************/

use crate::node::{Node, OperatorKind};
use crate::registry::Registry;
use crate::tokens::{Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    registry: Registry,
}

impl Parser {
    /// Parses using the process-wide Registry singleton. Matches the
    /// spec's interface for the common case; see `with_registry` for the
    /// dependency-injected form used internally and in tests.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_registry(tokens, &Registry::global())
    }

    pub fn with_registry(tokens: Vec<Token>, registry: &Registry) -> Self {
        Parser {
            tokens,
            current: 0,
            registry: registry.clone(),
        }
    }

    /// Parses the full token stream as a single expression.
    pub fn parse_expression(&mut self) -> Node {
        self.parse_equals()
    }

    fn parse_equals(&mut self) -> Node {
        let left = self.parse_additive();
        if left.is_error() {
            return left;
        }
        if self.check_operator_symbol_is_equals() {
            self.advance();
            let right = self.parse_additive();
            if right.is_error() {
                return right;
            }
            return Node::equals(left, right);
        }
        left
    }

    fn check_operator_symbol_is_equals(&self) -> bool {
        matches!(self.current_token(), Some(t) if t.kind == TokenKind::Equals)
    }

    fn parse_additive(&mut self) -> Node {
        let mut left = self.parse_multiplicative();
        if left.is_error() {
            return left;
        }
        while let Some(op) = self.peek_operator(&["+", "-"]) {
            self.advance();
            let right = self.parse_multiplicative();
            if right.is_error() {
                return right;
            }
            left = Node::op(op, left, right);
        }
        left
    }

    fn parse_multiplicative(&mut self) -> Node {
        let mut left = self.parse_exponentiation();
        if left.is_error() {
            return left;
        }
        while let Some(op) = self.peek_operator(&["*", "/"]) {
            self.advance();
            let right = self.parse_exponentiation();
            if right.is_error() {
                return right;
            }
            left = Node::op(op, left, right);
        }
        left
    }

    fn parse_exponentiation(&mut self) -> Node {
        let mut left = self.parse_primary();
        if left.is_error() {
            return left;
        }
        // Left-associative, departing from the mathematical convention of
        // right-associative exponentiation.
        while let Some(op) = self.peek_operator(&["^"]) {
            self.advance();
            let right = self.parse_primary();
            if right.is_error() {
                return right;
            }
            left = Node::op(op, left, right);
        }
        left
    }

    fn parse_primary(&mut self) -> Node {
        let token = match self.current_token().cloned() {
            Some(t) => t,
            None => return Node::error("Unexpected end of input"),
        };

        match token.kind {
            TokenKind::Number => {
                self.advance();
                match token.text.parse::<f64>() {
                    Ok(value) => Node::number(value),
                    Err(_) => Node::error(format!("Invalid number literal {}", token.text)),
                }
            }
            TokenKind::Constant => {
                self.advance();
                Node::constant(&self.registry, token.text)
            }
            TokenKind::Variable => {
                self.advance();
                Node::variable(token.text)
            }
            TokenKind::Function => {
                self.advance();
                self.parse_function_call(token.text)
            }
            TokenKind::Parenthesis if token.text == "(" => {
                self.advance();
                let inner = self.parse_equals();
                if inner.is_error() {
                    return inner;
                }
                if !self.consume_parenthesis(")") {
                    return Node::error("Expected ')'");
                }
                inner
            }
            TokenKind::ModulusDelimiter => {
                self.advance();
                let inner = self.parse_equals();
                if inner.is_error() {
                    return inner;
                }
                if !self.consume_modulus_delimiter() {
                    return Node::error("Expected closing '|'");
                }
                Node::function(&self.registry, "abs", inner)
            }
            _ => Node::error(format!("Unexpected token {}", token.text)),
        }
    }

    fn parse_function_call(&mut self, id: String) -> Node {
        if !self.consume_parenthesis("(") {
            return Node::error(format!("Expected '(' after function {}", id));
        }
        let arg = self.parse_equals();
        if arg.is_error() {
            return arg;
        }
        if !self.consume_parenthesis(")") {
            return Node::error(format!("Expected ')' after argument to {}", id));
        }
        Node::function(&self.registry, id, arg)
    }

    fn peek_operator(&self, symbols: &[&str]) -> Option<OperatorKind> {
        match self.current_token() {
            Some(t) if t.kind == TokenKind::Operator && symbols.contains(&t.text.as_str()) => {
                OperatorKind::from_symbol(&t.text)
            }
            _ => None,
        }
    }

    fn consume_parenthesis(&mut self, text: &str) -> bool {
        match self.current_token() {
            Some(t) if t.kind == TokenKind::Parenthesis && t.text == text => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn consume_modulus_delimiter(&mut self) -> bool {
        match self.current_token() {
            Some(t) if t.kind == TokenKind::ModulusDelimiter => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) {
        if self.current < self.tokens.len() {
            self.current += 1;
        }
    }
}

/// Parses `text` end to end using the process-wide Registry singleton:
/// tokenize then parse a single expression. A combined `Parse(text)`
/// convenience interface.
pub fn parse(text: &str) -> Node {
    let tokens = crate::lexer::tokenize(text);
    Parser::new(tokens).parse_expression()
}

/// Dependency-injected form of `parse`, used internally and in tests.
pub fn parse_with(text: &str, registry: &Registry) -> Node {
    let tokens = crate::lexer::Lexer::new(text, registry).tokenize();
    Parser::with_registry(tokens, registry).parse_expression()
}
