//! src/differentiate.rs

/********************************************************************************
 *                           DIFFERENTIATION MODULE
 *-------------------------------------------------------------------------------*
 * Operator-node derivative rules: sum, product, quotient, power, and the
 * chain rule through Function nodes (delegated to the dispatch entries in
 * `functions.rs`).
 ********************************************************************************/

use crate::node::{Node, OperatorKind};
use crate::registry::Registry;

fn mul(a: Node, b: Node) -> Node {
    Node::op(OperatorKind::Mul, a, b)
}

fn neg(a: Node) -> Node {
    mul(Node::number(-1.0), a)
}

fn div(a: Node, b: Node) -> Node {
    Node::op(OperatorKind::Div, a, b)
}

fn pow(a: Node, b: Node) -> Node {
    Node::op(OperatorKind::Pow, a, b)
}

fn sub(a: Node, b: Node) -> Node {
    Node::op(OperatorKind::Sub, a, b)
}

pub fn differentiate(node: &Node, respect_to: &str, registry: &Registry) -> Node {
    match node {
        Node::Number(_) => Node::number(0.0),
        Node::Constant { .. } => Node::number(0.0),
        Node::Variable(name) => {
            if name == respect_to {
                Node::number(1.0)
            } else {
                Node::differential(name.clone(), respect_to.to_string(), 1)
            }
        }
        Node::Operator { op, left, right } => differentiate_operator(*op, left, right, respect_to, registry),
        Node::Function { id, arg } => differentiate_function(id, arg, respect_to, registry),
        Node::Equals { left, right } => Node::equals(
            left.differentiate_with(respect_to, registry),
            right.differentiate_with(respect_to, registry),
        ),
        Node::Differential {
            variable,
            respect_to: existing_respect_to,
            order,
        } => {
            if respect_to == existing_respect_to {
                Node::differential(variable.clone(), existing_respect_to.clone(), order + 1)
            } else {
                Node::number(0.0)
            }
        }
        Node::Error(message) => Node::error(message.clone()),
    }
}

fn differentiate_function(id: &str, arg: &Node, respect_to: &str, registry: &Registry) -> Node {
    if arg.is_error() {
        return (*arg).clone();
    }
    match registry.get_function(id) {
        Some(entry) => entry.differentiate(respect_to, arg, registry),
        None => Node::error(format!("Could not find function {}", id)),
    }
}

fn differentiate_operator(
    op: OperatorKind,
    left: &Node,
    right: &Node,
    respect_to: &str,
    registry: &Registry,
) -> Node {
    let left_prime = left.differentiate_with(respect_to, registry);
    if left_prime.is_error() {
        return left_prime;
    }
    let right_prime = right.differentiate_with(respect_to, registry);
    if right_prime.is_error() {
        return right_prime;
    }

    match op {
        OperatorKind::Add | OperatorKind::Sub => Node::op(op, left_prime, right_prime),
        OperatorKind::Mul => {
            // L'*R + L*R'
            Node::op(
                OperatorKind::Add,
                mul(left_prime, (*right).clone()),
                mul((*left).clone(), right_prime),
            )
        }
        OperatorKind::Div => differentiate_div(left, right, left_prime, right_prime),
        OperatorKind::Pow => differentiate_pow(left, right, left_prime, right_prime, registry),
    }
}

fn differentiate_div(left: &Node, right: &Node, left_prime: Node, right_prime: Node) -> Node {
    if left.is_numeric_or_constant() {
        // -L*R' / R^2
        div(
            neg(mul((*left).clone(), right_prime)),
            pow((*right).clone(), Node::number(2.0)),
        )
    } else if right.is_numeric_or_constant() {
        // L' / R
        div(left_prime, (*right).clone())
    } else {
        // (R*L' - L*R') / R^2
        div(
            sub(mul((*right).clone(), left_prime), mul((*left).clone(), right_prime)),
            pow((*right).clone(), Node::number(2.0)),
        )
    }
}

fn differentiate_pow(
    left: &Node,
    right: &Node,
    left_prime: Node,
    right_prime: Node,
    registry: &Registry,
) -> Node {
    match (left, right) {
        (Node::Variable(_), Node::Number(n)) => {
            // Power rule shortcut. n=1 yields Number(1) rather than L',
            // reflecting "only variable-in-base matters" -- n=0 yields
            // Number(0) for the same reason.
            if *n == 1.0 {
                Node::number(1.0)
            } else if *n == 0.0 {
                Node::number(0.0)
            } else {
                mul(Node::number(*n), pow((*left).clone(), Node::number(n - 1.0)))
            }
        }
        (Node::Variable(_), Node::Constant { value, .. }) => {
            mul(Node::number(*value), pow((*left).clone(), Node::number(value - 1.0)))
        }
        (base, _) if base.is_numeric_or_constant() => {
            // ln(L)*L^R*R'
            mul(
                mul(
                    Node::function(registry, "ln", (*left).clone()),
                    pow((*left).clone(), (*right).clone()),
                ),
                right_prime,
            )
        }
        _ => {
            // L^R * (R*L'/L + ln(L)*R')
            mul(
                pow((*left).clone(), (*right).clone()),
                Node::op(
                    OperatorKind::Add,
                    div(mul((*right).clone(), left_prime), (*left).clone()),
                    mul(Node::function(registry, "ln", (*left).clone()), right_prime),
                ),
            )
        }
    }
}
