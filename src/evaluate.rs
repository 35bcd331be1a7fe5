//! src/evaluate.rs

/********************************************************************************
 *                              EVALUATION MODULE
 *-------------------------------------------------------------------------------*
 * Numeric evaluation of an expression tree given a mapping from variable
 * names to real values. No exception is ever raised: undefined variables,
 * unknown operators, and out-of-domain function calls all surface as a
 * quiet IEEE-754 NaN.
 ********************************************************************************/

use std::collections::HashMap;

use crate::node::{Node, OperatorKind};
use crate::registry::Registry;

/// A binding from variable name to real value.
pub type Environment = HashMap<String, f64>;

pub fn evaluate(node: &Node, env: &Environment, registry: &Registry) -> f64 {
    match node {
        Node::Number(value) => *value,
        Node::Constant { value, .. } => *value,
        Node::Variable(name) => env.get(name).copied().unwrap_or(f64::NAN),
        Node::Operator { op, left, right } => {
            let l = left.evaluate_with(env, registry);
            let r = right.evaluate_with(env, registry);
            match op {
                OperatorKind::Add => l + r,
                OperatorKind::Sub => l - r,
                OperatorKind::Mul => l * r,
                OperatorKind::Div => l / r,
                OperatorKind::Pow => l.powf(r),
            }
        }
        Node::Function { id, arg } => match registry.get_function(id) {
            Some(entry) => entry.exec(arg.evaluate_with(env, registry)),
            None => f64::NAN,
        },
        Node::Equals { .. } | Node::Differential { .. } | Node::Error(_) => f64::NAN,
    }
}
