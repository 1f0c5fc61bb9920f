//! End-to-end root isolation on reference curves.
//!
//! Reference roots carry about 1e-8 of error, so positions are compared at
//! 1e-7; the residual check is the tight one.

use approx::assert_abs_diff_eq;
use expsum_core::curve::{Curve, Term};
use expsum_core::isolation::{
    find_all_roots, find_all_roots_with, IsolationConfig, RootList, RootMethod,
};

fn curve(terms: &[(f64, f64)]) -> Curve {
    Curve::new(terms.iter().map(|&t| Term::from(t)).collect::<Vec<_>>()).unwrap()
}

fn six_term(constant: f64) -> Curve {
    curve(&[
        (5.0, -1.0 / 1.5),
        (-40.0, -1.0 / 1.3),
        (1000.0, -1.0 / 1.2),
        (constant, 0.0),
        (-1.0, 1.0 / 10.0),
        (0.01, 1.0 / 5.0),
    ])
}

/// Roots match `expected`, vanish on `c`, and are strictly ascending.
fn assert_roots(c: &Curve, found: &RootList, expected: &[f64]) {
    assert_eq!(
        found.len(),
        expected.len(),
        "roots {:?}, expected {:?}",
        found.roots,
        expected
    );
    for (&root, &want) in found.iter().zip(expected) {
        assert_abs_diff_eq!(root, want, epsilon = 1e-7);
        assert!(
            c.evaluate(root).abs() < 1e-11,
            "f({}) = {}",
            root,
            c.evaluate(root)
        );
    }
    assert!(found.roots.windows(2).all(|w| w[0] < w[1]));
    assert!(found.is_complete(), "diagnostics: {:?}", found.diagnostics);
}

// ========================================
// Two-term curves
// ========================================

#[test]
fn test_exp_minus_fourteen() {
    let c = curve(&[(1.0, 1.0), (-14.0, 0.0)]);
    let found = find_all_roots(0.0, 4.0, &c).unwrap();
    assert_roots(&c, &found, &[14.0_f64.ln()]);
    assert_abs_diff_eq!(found.roots[0], 14.0_f64.ln(), epsilon = 1e-9);
}

#[test]
fn test_decaying_exponential() {
    let c = curve(&[(5.0, -1.0 / 1.5), (-2.0, 0.0)]);
    let found = find_all_roots(0.0, 100.0, &c).unwrap();
    assert_roots(&c, &found, &[1.3744360978112327]);
}

// ========================================
// Multi-term curves
// ========================================

#[test]
fn test_six_term_curve() {
    let c = six_term(-2.0);
    let found = find_all_roots(0.0, 100.0, &c).unwrap();
    assert_roots(&c, &found, &[6.600359570724455, 46.245955278726214]);
}

#[test]
fn test_six_term_curve_just_above_axis() {
    let found = find_all_roots(0.0, 100.0, &six_term(25.0)).unwrap();
    assert!(found.is_empty(), "unexpected roots {:?}", found.roots);
}

#[test]
fn test_six_term_curve_grazing_axis() {
    let c = six_term(24.9999999);
    let found = find_all_roots(0.0, 100.0, &c).unwrap();
    assert_roots(&c, &found, &[39.11959766395918, 39.120862404941654]);
}

#[test]
fn test_three_close_roots() {
    let c = curve(&[(0.1, 1.0 / 8.0), (-0.01, 1.0 / 4.0), (1e-6, 1.0 / 2.0), (-0.250631, 0.0)]);
    let found = find_all_roots(0.0, 100.0, &c).unwrap();
    assert_roots(
        &c,
        &found,
        &[12.90657838400523, 12.925436307025436, 36.407549397097796],
    );
}

#[test]
fn test_hard_case() {
    let c = curve(&[
        (5.0, -1.0 / 1.5),
        (-40.0, -1.0 / 1.3),
        (0.1, 1.0 / 8.0),
        (-0.01, 1.0 / 4.0),
        (1e-6, 1.0 / 2.0),
        (-0.20, 0.0),
    ]);
    let found = find_all_roots(0.0, 100.0, &c).unwrap();
    assert_roots(
        &c,
        &found,
        &[9.413167505555736, 15.899768485242085, 36.40488240010849],
    );
}

#[test]
fn test_two_decays_and_constant() {
    let c = curve(&[(5.0, -1.0 / 1.5), (-40.0, -1.0 / 1.3), (2.0, 0.0)]);
    let found = find_all_roots(0.0, 100.0, &c).unwrap();
    assert_roots(&c, &found, &[3.6341457558955765]);
}

#[test]
fn test_three_decays_and_constant() {
    let c = curve(&[
        (5.0, -1.0 / 1.5),
        (-40.0, -1.0 / 1.3),
        (1000.0, -1.0 / 1.2),
        (-2.0, 0.0),
    ]);
    let found = find_all_roots(0.0, 100.0, &c).unwrap();
    assert_roots(&c, &found, &[7.399615694362909]);
}

#[test]
fn test_three_decays_two_roots() {
    let c = curve(&[(0.01, -0.125), (-0.1, -0.25), (1.0, -0.7)]);
    let found = find_all_roots(0.0, 100.0, &c).unwrap();
    assert_eq!(found.len(), 2);
    for &root in &found {
        assert!(c.evaluate(root).abs() < 1e-11);
    }
    assert!(found.roots[0] < found.roots[1]);
}

// ========================================
// Invariance
// ========================================

#[test]
fn test_term_order_does_not_change_roots() {
    let forward = six_term(-2.0);
    let mut reversed_terms = forward.terms().to_vec();
    reversed_terms.reverse();
    let reversed = Curve::new(reversed_terms).unwrap();

    let a = find_all_roots(0.0, 100.0, &forward).unwrap();
    let b = find_all_roots(0.0, 100.0, &reversed).unwrap();
    assert_eq!(a.roots, b.roots);
}

#[test]
fn test_zero_coefficient_term_is_ignored() {
    let plain = curve(&[(5.0, -1.0 / 1.5), (-40.0, -1.0 / 1.3), (2.0, 0.0)]);
    let padded = curve(&[
        (5.0, -1.0 / 1.5),
        (-40.0, -1.0 / 1.3),
        (2.0, 0.0),
        (0.0, 3.0),
    ]);
    let a = find_all_roots(0.0, 100.0, &plain).unwrap();
    let b = find_all_roots(0.0, 100.0, &padded).unwrap();
    assert_eq!(a.roots, b.roots);
}

#[test]
fn test_narrow_request_keeps_only_inner_root() {
    let c = six_term(-2.0);
    let found = find_all_roots(10.0, 100.0, &c).unwrap();
    assert_roots(&c, &found, &[46.245955278726214]);
    assert_eq!(found.searched.min, 10.0);
}

#[test]
fn test_bisection_finds_same_roots() {
    let c = curve(&[
        (5.0, -1.0 / 1.5),
        (-40.0, -1.0 / 1.3),
        (0.1, 1.0 / 8.0),
        (-0.01, 1.0 / 4.0),
        (1e-6, 1.0 / 2.0),
        (-0.20, 0.0),
    ]);
    let config = IsolationConfig::default()
        .with_method(RootMethod::Bisection)
        .with_max_root_iterations(200);
    let found = find_all_roots_with(0.0, 100.0, &c, &config).unwrap();
    assert_roots(
        &c,
        &found,
        &[9.413167505555736, 15.899768485242085, 36.40488240010849],
    );
}
