use fnplot::PlotError;
use fnplot::core::{Function, FunctionId, MAX_SLICES, PlotFunction, Sample, sample};

fn square() -> Function<impl Fn(f64) -> f64 + Sync> {
    Function::new("x*x", |x| x * x)
}

#[test]
fn square_over_unit_steps_matches_expected_series() {
    let series = sample(&square(), 0.0, 2.0, 2).expect("sample");
    assert_eq!(
        series.samples(),
        &[
            Sample::new(0.0, 0.0),
            Sample::new(1.0, 1.0),
            Sample::new(2.0, 4.0)
        ]
    );
}

#[test]
fn swapped_bounds_produce_identical_series() {
    let forward = sample(&square(), -3.5, 7.25, 9).expect("forward");
    let backward = sample(&square(), 7.25, -3.5, 9).expect("backward");
    assert_eq!(forward, backward);
    assert_eq!(forward.first().expect("first").x, -3.5);
    assert_eq!(forward.last().expect("last").x, 7.25);
}

#[test]
fn single_slice_yields_both_endpoints() {
    let series = sample(&square(), 3.0, -1.0, 1).expect("sample");
    assert_eq!(
        series.samples(),
        &[Sample::new(-1.0, 1.0), Sample::new(3.0, 9.0)]
    );
}

#[test]
fn last_sample_is_pinned_to_upper_bound() {
    let series = sample(&square(), 0.0, 1.0, 3).expect("sample");
    assert_eq!(series.len(), 4);
    assert_eq!(series.last().expect("last").x, 1.0);

    let series = sample(&square(), 0.1, 0.7, 7).expect("sample");
    assert_eq!(series.len(), 8);
    assert_eq!(series.last().expect("last").x, 0.7);
}

#[test]
fn degenerate_interval_repeats_the_bound() {
    let series = sample(&square(), 2.0, 2.0, 3).expect("sample");
    assert_eq!(series.len(), 4);
    assert!(series.iter().all(|point| point.x == 2.0 && point.y == 4.0));
}

#[test]
fn non_positive_slice_count_is_rejected() {
    for slices in [0, -1, -20] {
        let err = sample(&square(), 0.0, 1.0, slices).expect_err("must fail");
        assert!(matches!(err, PlotError::InvalidArgument(_)));
    }
}

#[test]
fn oversized_slice_count_is_rejected_without_allocating() {
    for slices in [i64::MAX, MAX_SLICES + 1] {
        let err = sample(&square(), 0.0, 1.0, slices).expect_err("must fail");
        assert!(matches!(err, PlotError::InvalidArgument(_)));
    }
}

#[test]
fn non_finite_bounds_are_rejected() {
    let err = sample(&square(), f64::NAN, 1.0, 4).expect_err("nan start");
    assert!(matches!(err, PlotError::InvalidArgument(_)));

    let err = sample(&square(), 0.0, f64::INFINITY, 4).expect_err("infinite end");
    assert!(matches!(err, PlotError::InvalidArgument(_)));
}

#[test]
fn division_by_zero_fails_the_whole_call() {
    let reciprocal = Function::new("1/x", |x| 1.0 / x);
    let err = sample(&reciprocal, -1.0, 1.0, 2).expect_err("must fail at zero");
    match err {
        PlotError::Evaluation { x, .. } => assert_eq!(x, 0.0),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn nan_producing_domain_error_is_an_evaluation_error() {
    let root = Function::new("sqrt(x)", f64::sqrt);
    let err = sample(&root, -4.0, 4.0, 8).expect_err("negative sqrt");
    assert!(matches!(err, PlotError::Evaluation { x, .. } if x == -4.0));
}

#[test]
fn registry_functions_evaluate_known_points() {
    assert_eq!(FunctionId::PowerDifference.evaluate(0.0).expect("eval"), 0.0);
    assert_eq!(FunctionId::SineExp.evaluate(0.0).expect("eval"), 1.0);

    let tangent = FunctionId::TangentSum.evaluate(1.0).expect("eval");
    let expected = (3.0f64 - 156.0).tan() + 1.0f64.tan() - 4.0 * 1.0f64.sin();
    assert_eq!(tangent, expected);
}

#[test]
fn overflowing_registry_function_fails_sampling() {
    let err = sample(&FunctionId::PowerDifference, 0.0, 30.0, 3).expect_err("overflow");
    assert!(matches!(err, PlotError::Evaluation { .. }));
}

#[test]
fn labels_carry_formula_prefix() {
    assert_eq!(FunctionId::SineExp.label(), "f(x) = sin(x) + exp(x/9)");
    assert_eq!(square().label(), "f(x) = x*x");
    assert_eq!(square().describe(3.0).expect("describe"), "f(3) = 9");
}
