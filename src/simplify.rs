//! src/simplify.rs

/********************************************************************************
 *                             SIMPLIFICATION MODULE
 *-------------------------------------------------------------------------------*
 * Operator-node rewrite rules: identities, constant folding, squaring, and
 * limited distributive expansion. A single bottom-up pass -- it does not
 * iterate to a fixed point, so running `simplify()` again on its own output
 * may reduce further.
 ********************************************************************************/

use crate::node::{Node, OperatorKind};
use crate::registry::Registry;

fn mul(a: Node, b: Node) -> Node {
    Node::op(OperatorKind::Mul, a, b)
}

pub fn simplify(node: &Node, registry: &Registry) -> Node {
    match node {
        Node::Number(_) | Node::Variable(_) | Node::Constant { .. } | Node::Differential { .. } => {
            node.clone()
        }
        Node::Error(message) => Node::error(message.clone()),
        Node::Function { id, arg } => {
            if arg.is_error() {
                return (**arg).clone();
            }
            match registry.get_function(id) {
                Some(entry) => entry.simplify(arg, registry),
                None => Node::error(format!("Could not find function {}", id)),
            }
        }
        Node::Equals { left, right } => {
            let left = left.simplify_with(registry);
            if left.is_error() {
                return left;
            }
            let right = right.simplify_with(registry);
            if right.is_error() {
                return right;
            }
            Node::equals(left, right)
        }
        Node::Operator { op, left, right } => simplify_operator(*op, left, right, registry),
    }
}

fn simplify_operator(op: OperatorKind, left: &Node, right: &Node, registry: &Registry) -> Node {
    let left = left.simplify_with(registry);
    if left.is_error() {
        return left;
    }
    let right = right.simplify_with(registry);
    if right.is_error() {
        return right;
    }

    if let Some(result) = identity_reduction(op, &left, &right) {
        return result;
    }
    if let Some(result) = squaring_fold(op, &left, &right) {
        return result;
    }
    if let Some(result) = distribute(op, &left, &right) {
        return result;
    }
    Node::op(op, left, right)
}

fn identity_reduction(op: OperatorKind, left: &Node, right: &Node) -> Option<Node> {
    match op {
        OperatorKind::Add => match (left.as_number(), right.as_number()) {
            (Some(0.0), _) => Some(right.clone()),
            (_, Some(0.0)) => Some(left.clone()),
            (Some(l), Some(r)) => Some(Node::number(l + r)),
            _ => None,
        },
        OperatorKind::Sub => match (left.as_number(), right.as_number()) {
            (Some(0.0), _) => Some(mul(Node::number(-1.0), right.clone())),
            (_, Some(0.0)) => Some(left.clone()),
            (Some(l), Some(r)) => Some(Node::number(l - r)),
            _ => None,
        },
        OperatorKind::Mul => {
            if left.is_number(0.0) || right.is_number(0.0) {
                Some(Node::number(0.0))
            } else if left.is_number(1.0) {
                Some(right.clone())
            } else if right.is_number(1.0) {
                Some(left.clone())
            } else {
                None
            }
        }
        OperatorKind::Div => {
            if right.is_number(1.0) {
                Some(left.clone())
            } else if left.is_number(0.0) {
                Some(Node::number(0.0))
            } else {
                None
            }
        }
        OperatorKind::Pow => {
            if left.is_number(0.0) && right.is_number(0.0) {
                // 0^0 is left as-is.
                None
            } else if left.is_number(0.0) {
                Some(Node::number(0.0))
            } else if left.is_number(1.0) {
                Some(Node::number(1.0))
            } else if right.is_number(1.0) {
                Some(left.clone())
            } else if right.is_number(0.0) {
                Some(Node::number(1.0))
            } else {
                None
            }
        }
    }
}

/// `*` with two syntactically equal Variable nodes or two syntactically
/// equal Constant nodes folds to `L^2`.
fn squaring_fold(op: OperatorKind, left: &Node, right: &Node) -> Option<Node> {
    if op != OperatorKind::Mul {
        return None;
    }
    let both_same_variable = matches!((left, right), (Node::Variable(a), Node::Variable(b)) if a == b);
    let both_same_constant = matches!(
        (left, right),
        (Node::Constant { name: a, .. }, Node::Constant { name: b, .. }) if a == b
    );
    if both_same_variable || both_same_constant {
        Some(Node::op(OperatorKind::Pow, left.clone(), Node::number(2.0)))
    } else {
        None
    }
}

fn is_additive(node: &Node) -> Option<(OperatorKind, &Node, &Node)> {
    match node {
        Node::Operator {
            op: op @ (OperatorKind::Add | OperatorKind::Sub),
            left,
            right,
        } => Some((*op, left, right)),
        _ => None,
    }
}

/// Limited distributive expansion under `*`, covering `(A +/- B) * (C +/-
/// D)`, `k * (A +/- B)`, and `(A +/- B) * k` where `k` is a Number,
/// Constant, or Function.
fn distribute(op: OperatorKind, left: &Node, right: &Node) -> Option<Node> {
    if op != OperatorKind::Mul {
        return None;
    }

    let left_sum = is_additive(left);
    let right_sum = is_additive(right);

    match (left_sum, right_sum) {
        (Some((left_op, a, b)), Some((right_op, c, d))) => {
            let ac = mul((*a).clone(), (*c).clone());
            let ad = mul((*a).clone(), (*d).clone());
            let bc = mul((*b).clone(), (*c).clone());
            let bd = mul((*b).clone(), (*d).clone());
            let first_group = Node::op(right_op, ac, ad);
            let second_group = Node::op(right_op, bc, bd);
            Some(Node::op(left_op, first_group, second_group))
        }
        (Some((op, a, b)), None) if is_scalar_factor(right) => {
            // (A +/- B) * k -> k*A +/- k*B, k placed on the left in both
            // terms -- intentional normalization for the pretty-printer.
            Some(Node::op(
                op,
                mul(right.clone(), (*a).clone()),
                mul(right.clone(), (*b).clone()),
            ))
        }
        (None, Some((op, a, b))) if is_scalar_factor(left) => {
            // k * (A +/- B) -> k*A +/- k*B
            Some(Node::op(
                op,
                mul(left.clone(), (*a).clone()),
                mul(left.clone(), (*b).clone()),
            ))
        }
        _ => None,
    }
}

fn is_scalar_factor(node: &Node) -> bool {
    matches!(node, Node::Number(_) | Node::Constant { .. } | Node::Function { .. })
}
