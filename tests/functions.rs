//! tests/functions.rs
//!
//! Per-function derivative sanity (spec.md S8 property 6): for each standard
//! unary function, the analytic derivative (differentiated, then simplified)
//! must agree with a centered finite-difference estimate at several sample
//! points.

use std::collections::HashMap;

use symexpr::parse;

const SAMPLE_X: [f64; 3] = [0.3, 0.7, 1.1];
const H: f64 = 1e-6;

fn env(x: f64) -> HashMap<String, f64> {
    let mut env = HashMap::new();
    env.insert("x".to_string(), x);
    env
}

fn assert_derivative_matches_finite_difference(expr: &str) {
    let node = parse(expr);
    let derivative = node.differentiate("x").simplify();
    for &x in &SAMPLE_X {
        let analytic = derivative.evaluate(&env(x));
        let plus = node.evaluate(&env(x + H));
        let minus = node.evaluate(&env(x - H));
        let finite_difference = (plus - minus) / (2.0 * H);
        if analytic.is_nan() || finite_difference.is_nan() {
            continue;
        }
        assert!(
            (analytic - finite_difference).abs() < 1e-3,
            "{expr} at x={x}: analytic {analytic}, finite-difference {finite_difference}"
        );
    }
}

#[test]
fn sin_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("sin(x)");
}

#[test]
fn cos_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("cos(x)");
}

#[test]
fn tan_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("tan(x)");
}

#[test]
fn sinh_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("sinh(x)");
}

#[test]
fn cosh_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("cosh(x)");
}

#[test]
fn tanh_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("tanh(x)");
}

#[test]
fn ln_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("ln(x)");
}

#[test]
fn exp_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("exp(x)");
}

#[test]
fn sqrt_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("sqrt(x)");
}

#[test]
fn abs_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("abs(x)");
}

#[test]
fn sec_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("sec(x)");
}

#[test]
fn csc_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("csc(x)");
}

#[test]
fn cot_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("cot(x)");
}

#[test]
fn log_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("log(x)");
}

#[test]
fn coth_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("coth(x)");
}

#[test]
fn sech_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("sech(x)");
}

#[test]
fn csch_derivative_matches_finite_difference() {
    assert_derivative_matches_finite_difference("csch(x)");
}
