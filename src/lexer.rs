//! src/lexer.rs

/********************************************************************************
 *                            LEXER MODULE
 *-------------------------------------------------------------------------------*
 * Converts raw input text into the tokens defined in `tokens.rs`. The token
 * alphabet is an alternation -- function identifier | constant name | number
 * | operator | identifier | parenthesis | modulus delimiter -- rebuilt from
 * the live Registry each time a `Lexer` is constructed, the way `lang-pt`'s
 * regex-backed tokenizer builds its patterns from the grammar currently in
 * scope. Characters that match no alternative are skipped rather than
 * raising an error; this lexer never fails.
 ********************************************************************************/

use once_cell::sync::Lazy;
use regex::Regex;

use crate::registry::Registry;
use crate::tokens::{Token, TokenKind};

/// Bare digit run, used only when absorbing a leading `-` into a signed
/// number literal (see `Lexer::next_token`).
static NUMBER_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?").unwrap());

fn alternation(ids: &[String]) -> String {
    if ids.is_empty() {
        // Matches nothing: an empty registry should never let the
        // function/constant alternative swallow an identifier.
        "[^\\s\\S]".to_string()
    } else {
        let escaped: Vec<String> = ids.iter().map(|id| regex::escape(id)).collect();
        format!(r"\b(?:{})\b", escaped.join("|"))
    }
}

fn build_master_pattern(registry: &Registry) -> Regex {
    let function_alt = alternation(&registry.function_ids());
    let constant_alt = alternation(&registry.constant_names());
    let pattern = format!(
        r"^(?:(?P<function>{function})|(?P<constant>{constant})|(?P<number>[0-9]+(?:\.[0-9]+)?)|(?P<equals>=)|(?P<operator>[+\-*/^])|(?P<ident>[A-Za-z]+)|(?P<paren>[()])|(?P<modulus>\|))",
        function = function_alt,
        constant = constant_alt,
    );
    Regex::new(&pattern).expect("assembled lexer pattern is always valid")
}

pub struct Lexer<'a> {
    text: &'a str,
    pos: usize,
    inside_modulus: bool,
    last_kind: Option<TokenKind>,
    last_text_was_open_paren: bool,
    master: Regex,
}

impl<'a> Lexer<'a> {
    /// Builds a lexer whose function/constant alternation reflects
    /// `registry`'s contents at construction time. Use `tokenize` (the
    /// free function in this module) for the process-wide-registry,
    /// single-argument `Tokenize(text)` interface.
    pub fn new(text: &'a str, registry: &Registry) -> Self {
        Lexer {
            text,
            pos: 0,
            inside_modulus: false,
            last_kind: None,
            last_text_was_open_paren: false,
            master: build_master_pattern(registry),
        }
    }

    /// Scans the entire input into an ordered token sequence. Never fails:
    /// unrecognized characters are silently skipped.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn absorption_eligible(&self) -> bool {
        match self.last_kind {
            None => true,
            Some(TokenKind::Operator) => true,
            Some(TokenKind::Parenthesis) => self.last_text_was_open_paren,
            Some(TokenKind::ModulusDelimiter) => self.inside_modulus,
            _ => false,
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace();
            if self.pos >= self.text.len() {
                return None;
            }

            if self.at_absorbable_minus() {
                let remainder = &self.text[self.pos + 1..];
                if let Some(m) = NUMBER_ONLY.find(remainder) {
                    let text = format!("-{}", m.as_str());
                    let consumed = 1 + m.end();
                    self.pos += consumed;
                    return Some(self.emit(TokenKind::Number, text));
                }
            }

            let remainder = &self.text[self.pos..];
            if let Some(captures) = self.master.captures(remainder) {
                let (kind, matched) = classify(&captures);
                self.pos += matched.len();
                return Some(self.emit(kind, matched.to_string()));
            }

            // No alternative matched; pass over this character.
            let mut chars = remainder.char_indices();
            chars.next();
            let next_boundary = chars.next().map(|(i, _)| i).unwrap_or(remainder.len());
            self.pos += next_boundary;
        }
    }

    fn at_absorbable_minus(&self) -> bool {
        self.text[self.pos..].starts_with('-') && self.absorption_eligible()
    }

    fn emit(&mut self, kind: TokenKind, text: String) -> Token {
        self.last_text_was_open_paren = kind == TokenKind::Parenthesis && text == "(";
        if kind == TokenKind::ModulusDelimiter {
            self.inside_modulus = !self.inside_modulus;
        }
        self.last_kind = Some(kind);
        Token::new(kind, text)
    }

    fn skip_whitespace(&mut self) {
        let remainder = &self.text[self.pos..];
        let skip = remainder.len() - remainder.trim_start().len();
        self.pos += skip;
    }
}

fn classify(captures: &regex::Captures<'_>) -> (TokenKind, &str) {
    if let Some(m) = captures.name("function") {
        (TokenKind::Function, m.as_str())
    } else if let Some(m) = captures.name("constant") {
        (TokenKind::Constant, m.as_str())
    } else if let Some(m) = captures.name("number") {
        (TokenKind::Number, m.as_str())
    } else if let Some(m) = captures.name("equals") {
        (TokenKind::Equals, m.as_str())
    } else if let Some(m) = captures.name("operator") {
        (TokenKind::Operator, m.as_str())
    } else if let Some(m) = captures.name("ident") {
        (TokenKind::Variable, m.as_str())
    } else if let Some(m) = captures.name("paren") {
        (TokenKind::Parenthesis, m.as_str())
    } else if let Some(m) = captures.name("modulus") {
        (TokenKind::ModulusDelimiter, m.as_str())
    } else {
        unreachable!("master pattern always matches exactly one named group")
    }
}

/// Tokenizes `text` using the process-wide Registry singleton. Matches the
/// single-argument `Tokenize(text)` interface; see `Lexer::new` for the
/// dependency-injected form used internally and in tests.
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::new(text, &Registry::global()).tokenize()
}
