//! src/functions.rs

/********************************************************************************
 *                            FUNCTION DISPATCH MODULE
 *-------------------------------------------------------------------------------*
 * Per-function derivative and simplification rules, keyed by function
 * identifier. The rule set is closed: a table of entries exposing `Exec`,
 * `Differentiate`, and `Simplify` is sufficient, and extension
 * (`AddFunction`) is a registry-level concern, not a trait-object hierarchy.
 ********************************************************************************/

use std::sync::Arc;

use crate::node::{Node, OperatorKind};
use crate::registry::Registry;

type ExecFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;
type DifferentiateFn = Arc<dyn Fn(&str, &Node, &Registry) -> Node + Send + Sync>;
type SimplifyFn = Arc<dyn Fn(&Node, &Registry) -> Node + Send + Sync>;

/// A dispatch entry for one standard or user-added unary function.
#[derive(Clone)]
pub struct FunctionEntry {
    pub id: String,
    exec: ExecFn,
    differentiate: DifferentiateFn,
    simplify: SimplifyFn,
}

impl FunctionEntry {
    pub fn new(
        id: impl Into<String>,
        exec: impl Fn(f64) -> f64 + Send + Sync + 'static,
        differentiate: impl Fn(&str, &Node, &Registry) -> Node + Send + Sync + 'static,
        simplify: impl Fn(&Node, &Registry) -> Node + Send + Sync + 'static,
    ) -> Self {
        FunctionEntry {
            id: id.into(),
            exec: Arc::new(exec),
            differentiate: Arc::new(differentiate),
            simplify: Arc::new(simplify),
        }
    }

    pub fn exec(&self, x: f64) -> f64 {
        (self.exec)(x)
    }

    pub fn differentiate(&self, respect_to: &str, argument: &Node, registry: &Registry) -> Node {
        (self.differentiate)(respect_to, argument, registry)
    }

    pub fn simplify(&self, argument: &Node, registry: &Registry) -> Node {
        (self.simplify)(argument, registry)
    }
}

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

fn call(registry: &Registry, id: &str, arg: Node) -> Node {
    Node::function(registry, id, arg)
}

/// How a standard function's chain-rule kernel combines with `u'`. Most
/// functions multiply (`u' * kernel(u)`, optionally negated); `log`, `ln`,
/// and `sqrt` divide instead (`u' / kernel(u)`).
#[derive(Clone, Copy)]
enum Combine {
    Multiply,
    MultiplyNegated,
    Divide,
}

/// Builds `kernel(u) combine u'`, where `u'` is computed once by
/// recursively differentiating the argument.
fn chain(argument: &Node, respect_to: &str, registry: &Registry, kernel: Node, combine: Combine) -> Node {
    let u_prime = argument.differentiate_with(respect_to, registry);
    match combine {
        Combine::Multiply => mul(u_prime, kernel),
        Combine::MultiplyNegated => neg(mul(u_prime, kernel)),
        Combine::Divide => div(u_prime, kernel),
    }
}

/// Implements the narrow zero/one/ten special-value reduction table.
/// Returns `None` when no rule fires, meaning the caller should fall back
/// to reconstructing `id(simplified_argument)`.
fn standard_simplify(id: &str, simplified_arg: &Node, registry: &Registry) -> Option<Node> {
    const EPSILON: f64 = 1e-9;
    let arg_value = simplified_arg.as_number();
    let is_e = |node: &Node| match node {
        Node::Constant { name, .. } if name == "e" => true,
        Node::Number(v) => (*v - std::f64::consts::E).abs() < EPSILON,
        _ => false,
    };

    match id {
        "sin" | "tan" | "sinh" | "tanh" if arg_value == Some(0.0) => Some(Node::number(0.0)),
        "cos" | "cosh" | "sec" | "sech" if arg_value == Some(0.0) => Some(Node::number(1.0)),
        "log" if arg_value == Some(1.0) => Some(Node::number(0.0)),
        "log" if arg_value == Some(10.0) => Some(Node::number(1.0)),
        "ln" if arg_value == Some(1.0) => Some(Node::number(0.0)),
        "ln" if is_e(simplified_arg) => Some(Node::number(1.0)),
        "exp" if arg_value == Some(0.0) => Some(Node::number(1.0)),
        "exp" if arg_value == Some(1.0) => Some(Node::constant(registry, "e")),
        "sqrt" => arg_value.and_then(|n| {
            if n < 0.0 {
                return None;
            }
            let root = n.sqrt();
            if (root - root.round()).abs() < EPSILON {
                Some(Node::number(root.round()))
            } else {
                None
            }
        }),
        "abs" => arg_value.map(|v| Node::number(v.abs())),
        _ => None,
    }
}

fn standard_entry(
    id: &'static str,
    exec: impl Fn(f64) -> f64 + Send + Sync + 'static,
    kernel: impl Fn(&Node, &Registry) -> Node + Send + Sync + 'static,
    combine: Combine,
) -> FunctionEntry {
    FunctionEntry::new(
        id,
        exec,
        move |respect_to, argument, registry| {
            chain(argument, respect_to, registry, kernel(argument, registry), combine)
        },
        move |argument, registry| {
            let simplified = argument.simplify_with(registry);
            match standard_simplify(id, &simplified, registry) {
                Some(result) => result,
                None => Node::function(registry, id, simplified),
            }
        },
    )
}

/// The standard unary function catalog: `{sin, cos, tan, cot, sec, csc,
/// sinh, cosh, tanh, coth, sech, csch, log, ln, exp, sqrt, abs}` with their
/// `Exec`/`Differentiate` rules.
pub fn standard_functions() -> Vec<FunctionEntry> {
    vec![
        standard_entry("sin", f64::sin, |u, r| call(r, "cos", (*u).clone()), Combine::Multiply),
        standard_entry("cos", f64::cos, |u, r| call(r, "sin", (*u).clone()), Combine::MultiplyNegated),
        standard_entry(
            "tan",
            f64::tan,
            |u, r| pow(call(r, "sec", (*u).clone()), Node::number(2.0)),
            Combine::Multiply,
        ),
        standard_entry(
            "cot",
            |x| f64::cos(x) / f64::sin(x),
            |u, r| pow(call(r, "csc", (*u).clone()), Node::number(2.0)),
            Combine::MultiplyNegated,
        ),
        standard_entry(
            "sec",
            |x| 1.0 / f64::cos(x),
            |u, r| mul(call(r, "tan", (*u).clone()), call(r, "sec", (*u).clone())),
            Combine::Multiply,
        ),
        standard_entry(
            "csc",
            |x| 1.0 / f64::sin(x),
            |u, r| mul(call(r, "cot", (*u).clone()), call(r, "csc", (*u).clone())),
            Combine::MultiplyNegated,
        ),
        standard_entry("sinh", f64::sinh, |u, r| call(r, "cosh", (*u).clone()), Combine::Multiply),
        standard_entry("cosh", f64::cosh, |u, r| call(r, "sinh", (*u).clone()), Combine::Multiply),
        standard_entry(
            "tanh",
            f64::tanh,
            |u, r| pow(call(r, "sech", (*u).clone()), Node::number(2.0)),
            Combine::Multiply,
        ),
        standard_entry(
            "coth",
            |x| f64::cosh(x) / f64::sinh(x),
            |u, r| pow(call(r, "csch", (*u).clone()), Node::number(2.0)),
            Combine::MultiplyNegated,
        ),
        standard_entry(
            "sech",
            |x| 1.0 / f64::cosh(x),
            |u, r| mul(call(r, "tanh", (*u).clone()), call(r, "sech", (*u).clone())),
            Combine::MultiplyNegated,
        ),
        standard_entry(
            "csch",
            |x| 1.0 / f64::sinh(x),
            |u, r| mul(call(r, "coth", (*u).clone()), call(r, "csch", (*u).clone())),
            Combine::MultiplyNegated,
        ),
        standard_entry(
            "log",
            f64::log10,
            |u, _| mul(Node::number(std::f64::consts::LN_10), (*u).clone()),
            Combine::Divide,
        ),
        standard_entry("ln", f64::ln, |u, _| (*u).clone(), Combine::Divide),
        standard_entry("exp", f64::exp, |u, r| call(r, "exp", (*u).clone()), Combine::Multiply),
        standard_entry(
            "sqrt",
            f64::sqrt,
            |u, r| mul(Node::number(2.0), call(r, "sqrt", (*u).clone())),
            Combine::Divide,
        ),
        abs_entry(),
    ]
}

/// `abs`'s derivative (`u * u' / abs(u)`) doesn't fit the `kernel combine
/// u'` shape the other standard functions share, so it gets its own entry.
fn abs_entry() -> FunctionEntry {
    FunctionEntry::new(
        "abs",
        f64::abs,
        |respect_to, argument, registry| {
            let u_prime = argument.differentiate_with(respect_to, registry);
            div(
                mul((*argument).clone(), u_prime),
                call(registry, "abs", (*argument).clone()),
            )
        },
        |argument, registry| {
            let simplified = argument.simplify_with(registry);
            match standard_simplify("abs", &simplified, registry) {
                Some(result) => result,
                None => Node::function(registry, "abs", simplified),
            }
        },
    )
}
