//! src/tokens.rs

/********************************************************************************
 *                              TOKEN MODULE
 *-------------------------------------------------------------------------------*
 * This module defines the set of tokens recognized by the lexer. Each token
 * carries both a `TokenKind` and its verbatim source text -- the parser
 * consumes the text (e.g. parsing a Number token's text into an `f64`, or a
 * Constant token's text into a Registry lookup) rather than a pre-parsed
 * value.
 ********************************************************************************/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Operator,
    Variable,
    Constant,
    Function,
    Parenthesis,
    ModulusDelimiter,
    Equals,
    /// Defined for completeness of the token kind set, but never produced:
    /// unmatched characters are skipped by the lexer rather than classified
    /// as `Unknown` ("the lexer passes over characters not matched by any
    /// alternative").
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}
