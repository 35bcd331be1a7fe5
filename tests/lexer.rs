//! tests/lexer.rs

use symexpr::{tokenize, Registry, Token, TokenKind};

#[test]
fn lexes_a_simple_arithmetic_expression() {
    // Arrange
    let input = "3 + x * 2";

    // Act
    let tokens = tokenize(input);

    // Assert
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Number, "3"),
            Token::new(TokenKind::Operator, "+"),
            Token::new(TokenKind::Variable, "x"),
            Token::new(TokenKind::Operator, "*"),
            Token::new(TokenKind::Number, "2"),
        ]
    );
}

#[test]
fn lexes_known_function_identifiers_as_function_tokens() {
    // Arrange
    let input = "sin(x)";

    // Act
    let tokens = tokenize(input);

    // Assert
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Function, "sin"),
            Token::new(TokenKind::Parenthesis, "("),
            Token::new(TokenKind::Variable, "x"),
            Token::new(TokenKind::Parenthesis, ")"),
        ]
    );
}

#[test]
fn a_function_name_prefixing_a_longer_identifier_lexes_as_a_variable() {
    // Arrange
    let input = "sinx";

    // Act
    let tokens = tokenize(input);

    // Assert: word-boundary matching means "sin" does not shadow "sinx".
    assert_eq!(tokens, vec![Token::new(TokenKind::Variable, "sinx")]);
}

#[test]
fn known_constants_lex_as_constant_tokens() {
    // Arrange
    let input = "pi + e";

    // Act
    let tokens = tokenize(input);

    // Assert
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Constant, "pi"),
            Token::new(TokenKind::Operator, "+"),
            Token::new(TokenKind::Constant, "e"),
        ]
    );
}

#[test]
fn equals_lexes_as_its_own_token_kind() {
    // Arrange
    let input = "y = x";

    // Act
    let tokens = tokenize(input);

    // Assert
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Variable, "y"),
            Token::new(TokenKind::Equals, "="),
            Token::new(TokenKind::Variable, "x"),
        ]
    );
}

#[test]
fn modulus_delimiters_lex_distinctly_from_operators() {
    // Arrange
    let input = "|x|";

    // Act
    let tokens = tokenize(input);

    // Assert
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::ModulusDelimiter, "|"),
            Token::new(TokenKind::Variable, "x"),
            Token::new(TokenKind::ModulusDelimiter, "|"),
        ]
    );
}

#[test]
fn a_leading_minus_is_absorbed_into_a_signed_number_literal() {
    // Arrange
    let input = "3 * -2";

    // Act
    let tokens = tokenize(input);

    // Assert
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Number, "3"),
            Token::new(TokenKind::Operator, "*"),
            Token::new(TokenKind::Number, "-2"),
        ]
    );
}

#[test]
fn a_minus_after_a_variable_is_a_plain_binary_operator() {
    // Arrange
    let input = "x - 2";

    // Act
    let tokens = tokenize(input);

    // Assert: the preceding token is a Variable, not an Operator or `(`,
    // so absorption does not apply.
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Variable, "x"),
            Token::new(TokenKind::Operator, "-"),
            Token::new(TokenKind::Number, "2"),
        ]
    );
}

#[test]
fn a_minus_after_an_opening_parenthesis_absorbs_into_a_number() {
    // Arrange
    let input = "(-5)";

    // Act
    let tokens = tokenize(input);

    // Assert
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Parenthesis, "("),
            Token::new(TokenKind::Number, "-5"),
            Token::new(TokenKind::Parenthesis, ")"),
        ]
    );
}

#[test]
fn whitespace_and_unrecognized_characters_are_skipped() {
    // Arrange
    let input = "3  +   @  x";

    // Act
    let tokens = tokenize(input);

    // Assert
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Number, "3"),
            Token::new(TokenKind::Operator, "+"),
            Token::new(TokenKind::Variable, "x"),
        ]
    );
}

#[test]
fn a_user_registered_function_id_lexes_as_a_function_token() {
    // Arrange
    let registry = Registry::standard();
    registry.add_function(symexpr::FunctionEntry::new(
        "double",
        |x| x * 2.0,
        |respect_to, argument, registry| argument.differentiate_with(respect_to, registry),
        |argument, registry| argument.simplify_with(registry),
    ));
    let lexer_text = "double(x)";

    // Act
    let tokens = symexpr::Lexer::new(lexer_text, &registry).tokenize();

    // Assert
    assert_eq!(tokens[0], Token::new(TokenKind::Function, "double"));
}
