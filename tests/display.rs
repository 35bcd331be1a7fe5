//! tests/display.rs

use symexpr::{Node, OperatorKind};

#[test]
fn two_atomic_factors_render_as_bare_juxtaposition() {
    // Arrange
    let node = Node::op(OperatorKind::Mul, Node::number(2.0), Node::variable("x"));

    // Act
    let rendered = node.to_string();

    // Assert
    assert_eq!(rendered, "2x");
}

#[test]
fn an_atomic_factor_and_an_operator_factor_parenthesize_the_composite() {
    // Arrange
    let composite = Node::op(OperatorKind::Add, Node::variable("x"), Node::number(1.0));
    let node = Node::op(OperatorKind::Mul, composite, Node::number(2.0));

    // Act
    let rendered = node.to_string();

    // Assert: the atomic factor renders on the left of the parenthesized
    // composite regardless of which side it appeared on in the tree.
    assert_eq!(rendered, "2(x + 1)");
}

#[test]
fn two_operator_factors_both_get_parenthesized() {
    // Arrange
    let left = Node::op(OperatorKind::Add, Node::variable("x"), Node::number(1.0));
    let right = Node::op(OperatorKind::Sub, Node::variable("x"), Node::number(1.0));
    let node = Node::op(OperatorKind::Mul, left, right);

    // Act
    let rendered = node.to_string();

    // Assert
    assert_eq!(rendered, "(x + 1)(x - 1)");
}

#[test]
fn division_always_parenthesizes() {
    // Arrange
    let node = Node::op(OperatorKind::Div, Node::variable("x"), Node::number(2.0));

    // Act
    let rendered = node.to_string();

    // Assert
    assert_eq!(rendered, "(x / 2)");
}

#[test]
fn a_function_call_renders_with_parentheses() {
    // Arrange
    let node = symexpr::parse("sin(x)");

    // Act
    let rendered = node.to_string();

    // Assert
    assert_eq!(rendered, "sin(x)");
}

#[test]
fn a_first_order_differential_renders_as_dy_dx() {
    // Arrange
    let node = Node::differential("y", "x", 1);

    // Act
    let rendered = node.to_string();

    // Assert
    assert_eq!(rendered, "dy/dx");
}

#[test]
fn a_higher_order_differential_renders_with_exponents() {
    // Arrange
    let node = Node::differential("y", "x", 2);

    // Act
    let rendered = node.to_string();

    // Assert
    assert_eq!(rendered, "d^2y/dx^2");
}

#[test]
fn an_error_node_renders_its_message_verbatim() {
    // Arrange
    let node = Node::error("Could not find function zzz");

    // Act
    let rendered = node.to_string();

    // Assert
    assert_eq!(rendered, "Could not find function zzz");
}
