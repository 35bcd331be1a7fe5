//! src/node.rs

/********************************************************************************
 *                               NODE MODULE
 *-------------------------------------------------------------------------------*
 * The expression tree. Every variant below exposes the same capability set:
 * `differentiate`, `simplify`, `evaluate`, and `Display` (for `to_string`).
 * Nodes are immutable after construction; every symbolic operation builds and
 * returns a fresh tree rather than mutating its receiver, so a subtree may
 * safely be shared across multiple parent trees.
 ********************************************************************************/

use crate::differentiate;
use crate::evaluate::Environment;
use crate::functions::FunctionEntry;
use crate::registry::Registry;
use crate::simplify;

/// The five binary operator symbols recognized by the grammar. `-` is
/// always binary: unary negation is absorbed into a signed number literal
/// by the lexer, never represented as an operator node with one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl OperatorKind {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(OperatorKind::Add),
            "-" => Some(OperatorKind::Sub),
            "*" => Some(OperatorKind::Mul),
            "/" => Some(OperatorKind::Div),
            "^" => Some(OperatorKind::Pow),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Sub => "-",
            OperatorKind::Mul => "*",
            OperatorKind::Div => "/",
            OperatorKind::Pow => "^",
        }
    }
}

/// An expression tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A real scalar literal.
    Number(f64),
    /// A free variable, referenced by name.
    Variable(String),
    /// A named constant; its value is resolved from the Registry at
    /// construction.
    Constant { name: String, value: f64 },
    /// A binary operator application.
    Operator {
        op: OperatorKind,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// A unary function application, dispatch-resolved at construction.
    /// An unknown identifier poisons the argument slot with an `Error`
    /// node while leaving the `Function` shell intact -- an intentional
    /// quirk preserved from the source system.
    Function { id: String, arg: Box<Node> },
    /// An equation `left = right`.
    Equals { left: Box<Node>, right: Box<Node> },
    /// A symbolic stand-in for d(variable)/d(respect_to) of unspecified
    /// form, produced when differentiating a Variable with respect to a
    /// different variable.
    Differential {
        variable: String,
        respect_to: String,
        order: u32,
    },
    /// A human-readable diagnostic. Propagates to the result of every
    /// symbolic operation performed on an ancestor (error absorption).
    Error(String),
}

impl Node {
    pub fn number(value: f64) -> Node {
        Node::Number(value)
    }

    pub fn variable(name: impl Into<String>) -> Node {
        Node::Variable(name.into())
    }

    /// Resolves `name` against `registry` at construction time. An unknown
    /// name yields a quiet NaN value rather than a construction failure --
    /// there's no dedicated Error path for constants, only for functions.
    pub fn constant(registry: &Registry, name: impl Into<String>) -> Node {
        let name = name.into();
        let value = registry.get_constant_value(&name);
        Node::Constant { name, value }
    }

    pub fn op(op: OperatorKind, left: Node, right: Node) -> Node {
        Node::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Resolves `id` against `registry` at construction time. An unknown
    /// identifier transforms the Function node into one whose argument is
    /// an Error node carrying `"Could not find function <id>"`; the
    /// Function shell remains, so `ToString` on the result prints the
    /// diagnostic and discards the function name.
    pub fn function(registry: &Registry, id: impl Into<String>, arg: Node) -> Node {
        let id = id.into();
        if registry.get_function(&id).is_some() {
            Node::Function {
                id,
                arg: Box::new(arg),
            }
        } else {
            let message = format!("Could not find function {}", id);
            Node::Function {
                id,
                arg: Box::new(Node::Error(message)),
            }
        }
    }

    pub fn equals(left: Node, right: Node) -> Node {
        Node::Equals {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn differential(variable: impl Into<String>, respect_to: impl Into<String>, order: u32) -> Node {
        Node::Differential {
            variable: variable.into(),
            respect_to: respect_to.into(),
            order,
        }
    }

    pub fn error(message: impl Into<String>) -> Node {
        Node::Error(message.into())
    }

    /// True for the leaf-shaped variants the simplifier's distributive and
    /// squaring rules treat as atomic factors: everything except a binary
    /// Operator application.
    pub fn is_atomic(&self) -> bool {
        !matches!(self, Node::Operator { .. })
    }

    pub fn is_number(&self, value: f64) -> bool {
        matches!(self, Node::Number(v) if (*v - value).abs() < f64::EPSILON * 4.0)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Node::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// "Numeric or named constant" per the quotient/power differentiation
    /// rules: a literal number or a resolved Constant node.
    pub fn is_numeric_or_constant(&self) -> bool {
        matches!(self, Node::Number(_) | Node::Constant { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Node::Error(_))
    }

    /// Differentiates with respect to `respect_to`, consulting `registry`
    /// for the dispatch entries needed to build per-function derivative
    /// trees and to resolve any new Function/Constant nodes along the way.
    pub fn differentiate_with(&self, respect_to: &str, registry: &Registry) -> Node {
        differentiate::differentiate(self, respect_to, registry)
    }

    /// Differentiates using the process-wide Registry singleton. Matches
    /// the single-argument `Differentiate(respectTo)` interface; see
    /// `differentiate_with` for the dependency-injected form used
    /// internally and in tests.
    pub fn differentiate(&self, respect_to: &str) -> Node {
        self.differentiate_with(respect_to, &Registry::global())
    }

    /// Simplifies using `registry`'s function dispatch table.
    pub fn simplify_with(&self, registry: &Registry) -> Node {
        simplify::simplify(self, registry)
    }

    /// Simplifies using the process-wide Registry singleton.
    pub fn simplify(&self) -> Node {
        self.simplify_with(&Registry::global())
    }

    /// Evaluates using `registry`'s function dispatch table.
    pub fn evaluate_with(&self, env: &Environment, registry: &Registry) -> f64 {
        crate::evaluate::evaluate(self, env, registry)
    }

    /// Evaluates using the process-wide Registry singleton.
    pub fn evaluate(&self, env: &Environment) -> f64 {
        self.evaluate_with(env, &Registry::global())
    }

    /// The dispatch entry a Function node was resolved to at construction,
    /// if any (`None` for a poisoned Function whose argument slot already
    /// carries the "Could not find function" Error).
    pub fn function_entry(&self, registry: &Registry) -> Option<FunctionEntry> {
        match self {
            Node::Function { id, .. } => registry.get_function(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::display::write_node(self, f)
    }
}
