//! src/display.rs

/********************************************************************************
 *                              PRETTY-PRINTER MODULE
 *-------------------------------------------------------------------------------*
 * Recovers a human-readable form from an expression tree, rendering
 * multiplication with implicit-juxtaposition style rather than an infix `*`.
 ********************************************************************************/

use std::fmt;

use crate::node::{Node, OperatorKind};

pub fn write_node(node: &Node, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match node {
        Node::Number(value) => write!(f, "{}", value),
        Node::Variable(name) => write!(f, "{}", name),
        Node::Constant { name, .. } => write!(f, "{}", name),
        Node::Operator { op, left, right } => write_operator(*op, left, right, f),
        Node::Function { id, arg } => write!(f, "{}({})", id, arg),
        Node::Equals { left, right } => write!(f, "{} = {}", left, right),
        Node::Differential {
            variable,
            respect_to,
            order,
        } => {
            if *order <= 1 {
                write!(f, "d{}/d{}", variable, respect_to)
            } else {
                write!(f, "d^{}{}/d{}^{}", order, variable, respect_to, order)
            }
        }
        // Error messages print verbatim, suppressing the surrounding
        // structure entirely -- in practice this only matters at the tree
        // root, since error absorption already replaces every ancestor
        // with the Error before printing.
        Node::Error(message) => write!(f, "{}", message),
    }
}

fn write_operator(op: OperatorKind, left: &Node, right: &Node, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match op {
        OperatorKind::Add => write!(f, "{} + {}", left, right),
        OperatorKind::Sub => write!(f, "{} - {}", left, right),
        OperatorKind::Mul => write_product(left, right, f),
        OperatorKind::Div => write!(f, "({} / {})", left, right),
        OperatorKind::Pow => write!(f, "{}^{}", left, right),
    }
}

fn write_product(left: &Node, right: &Node, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match (left.is_atomic(), right.is_atomic()) {
        (false, false) => write!(f, "({})({})", left, right),
        // the atomic factor is written on the left of the parenthesized
        // composite, regardless of source order.
        (false, true) => write!(f, "{}({})", right, left),
        (true, false) => write!(f, "{}({})", left, right),
        (true, true) => write!(f, "{}{}", left, right),
    }
}
