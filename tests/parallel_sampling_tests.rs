#![cfg(feature = "parallel-sampling")]

use fnplot::PlotError;
use fnplot::core::{Function, FunctionId, PlotFunction, Sample, sample};

#[test]
fn parallel_sampling_keeps_grid_order_and_values() {
    let (lower, upper, slices) = (-40.0, 40.0, 10_000_usize);
    let series = sample(&FunctionId::SineExp, upper, lower, slices as i64).expect("sample");

    let step = (upper - lower) / slices as f64;
    let expected: Vec<Sample> = (0..slices)
        .map(|i| lower + i as f64 * step)
        .chain(std::iter::once(upper))
        .map(|x| Sample::new(x, FunctionId::SineExp.apply(x)))
        .collect();
    assert_eq!(series.samples(), expected.as_slice());
}

#[test]
fn parallel_sampling_fails_whole_call_on_any_evaluation_error() {
    let reciprocal = Function::new("1/x", |x| 1.0 / x);
    let err = sample(&reciprocal, -1.0, 1.0, 8).expect_err("x = 0 is sampled");
    assert!(matches!(err, PlotError::Evaluation { x, .. } if x == 0.0));
}
