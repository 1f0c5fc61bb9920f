//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that curve types are accessible via absolute path.
#[test]
fn test_curve_module_exports() {
    use expsum_core::curve::Curve;
    use expsum_core::curve::Term;

    let curve = Curve::new(vec![Term::new(1.0, 1.0), Term::new(-14.0, 0.0)]).unwrap();
    assert_eq!(curve.len(), 2);
    assert_eq!(curve.evaluate(0.0), -13.0);
    assert_eq!(curve.derivative(1).len(), 1);
}

/// Test that the isolation API is accessible via absolute path.
#[test]
fn test_isolation_module_exports() {
    use expsum_core::curve::{Curve, Term};
    use expsum_core::isolation::bound_range;
    use expsum_core::isolation::find_all_roots;
    use expsum_core::isolation::find_all_roots_with;
    use expsum_core::isolation::Diagnostic;
    use expsum_core::isolation::Interval;
    use expsum_core::isolation::IsolationConfig;
    use expsum_core::isolation::RootList;
    use expsum_core::isolation::RootMethod;
    use expsum_core::isolation::DEFAULT_MAX_DERIVATIVE_ORDER;

    let curve = Curve::new(vec![Term::new(1.0, 1.0), Term::new(-14.0, 0.0)]).unwrap();
    let bound: Interval = bound_range(&curve);
    assert!(!bound.is_empty());

    let found: RootList = find_all_roots(0.0, 4.0, &curve).unwrap();
    assert_eq!(found.len(), 1);

    let config = IsolationConfig::default().with_method(RootMethod::Bisection);
    assert_eq!(config.max_derivative_order, DEFAULT_MAX_DERIVATIVE_ORDER);
    let again = find_all_roots_with(0.0, 4.0, &curve, &config).unwrap();
    assert_eq!(again.len(), 1);

    let diagnostic = Diagnostic::DegenerateBound { x: 1.0 };
    assert!(!diagnostic.to_string().is_empty());
}

/// Test that solvers are accessible via absolute path.
#[test]
fn test_solvers_module_exports() {
    use expsum_core::math::solvers::bisection;
    use expsum_core::math::solvers::BrentSolver;
    use expsum_core::math::solvers::Phase;
    use expsum_core::math::solvers::RootEstimate;
    use expsum_core::math::solvers::SolverConfig;
    use expsum_core::math::solvers::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

    let config: SolverConfig<f64> = SolverConfig::default();
    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);

    let solver = BrentSolver::setup(0.0, -1.0, 2.0, 3.0).unwrap();
    assert_eq!(solver.phase(), Phase::AwaitingX);

    let estimate: RootEstimate<f64> =
        bisection::find_root(|x: f64| x - 1.5, 0.0, 3.0, &config).unwrap();
    assert!(estimate.converged);
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_error_types_exports() {
    use expsum_core::types::error::CurveError;
    use expsum_core::types::error::IsolationError;
    use expsum_core::types::error::SolverError;

    // Also re-exported at the types level
    use expsum_core::types::{
        CurveError as CurveError2, IsolationError as IsolationError2,
        SolverError as SolverError2,
    };

    let curve_err: CurveError2 = CurveError::NonFiniteTerm { index: 0 };
    let solver_err: SolverError2 = SolverError::NoBracket { a: 0.0, b: 1.0 };
    let isolation_err: IsolationError2 = IsolationError::NonFiniteRange {
        x_min: f64::NAN,
        x_max: 1.0,
    };

    assert!(!curve_err.to_string().is_empty());
    assert!(!solver_err.to_string().is_empty());
    assert!(!isolation_err.to_string().is_empty());
}
