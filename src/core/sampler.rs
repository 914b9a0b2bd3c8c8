use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[cfg(feature = "parallel-sampling")]
use rayon::prelude::*;

use crate::core::{PlotFunction, Sample};
use crate::error::{PlotError, PlotResult};

/// Largest slice count [`sample`] accepts.
pub const MAX_SLICES: i64 = 50_000_000;

/// Ordered samples of one function over one interval.
///
/// Series produced by [`sample`] hold `slices + 1` points in ascending `x`
/// order with the last point pinned exactly to the upper bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Wraps already evaluated samples without re-checking ordering.
    #[must_use]
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<Sample> {
        self.samples.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Sample> {
        self.samples.last().copied()
    }

    /// Distance between the first and last `x`, zero for short series.
    #[must_use]
    pub fn span(&self) -> f64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => last.x - first.x,
            _ => 0.0,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Samples `function` uniformly over `[min(start, end), max(start, end)]`.
///
/// Produces `slices + 1` points. Point `i` sits at `a + i * step`, the final
/// point is exactly the upper bound. A single failed evaluation fails the
/// whole call and no partial series is returned. Slice counts above
/// [`MAX_SLICES`] are rejected before anything is allocated.
pub fn sample<F>(function: &F, start: f64, end: f64, slices: i64) -> PlotResult<Series>
where
    F: PlotFunction + ?Sized,
{
    if slices <= 0 {
        return Err(PlotError::InvalidArgument(format!(
            "slice count must be >= 1, got {slices}"
        )));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(PlotError::InvalidArgument(
            "interval bounds must be finite".to_owned(),
        ));
    }
    if slices > MAX_SLICES {
        return Err(too_many_slices(slices));
    }
    let count = usize::try_from(slices)
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| too_many_slices(slices))?;
    let slices = count - 1;

    let lower = start.min(end);
    let upper = start.max(end);
    let step = (upper - lower) / slices as f64;

    let mut xs = reserve(count)?;
    xs.extend((0..slices).map(|i| lower + i as f64 * step));
    xs.push(upper);

    let samples = evaluate_all(function, &xs)?;
    debug!(
        function = function.text(),
        lower,
        upper,
        slices,
        "sampled function"
    );
    Ok(Series::from_samples(samples))
}

fn too_many_slices(slices: i64) -> PlotError {
    PlotError::InvalidArgument(format!(
        "slice count must be <= {MAX_SLICES}, got {slices}"
    ))
}

fn reserve<T>(len: usize) -> PlotResult<Vec<T>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|_| {
        PlotError::InvalidArgument(format!("cannot allocate storage for {len} samples"))
    })?;
    Ok(out)
}

fn evaluate_all<F>(function: &F, xs: &[f64]) -> PlotResult<Vec<Sample>>
where
    F: PlotFunction + ?Sized,
{
    #[cfg(feature = "parallel-sampling")]
    {
        evaluate_parallel(function, xs)
    }

    #[cfg(not(feature = "parallel-sampling"))]
    {
        evaluate_sequential(function, xs)
    }
}

#[cfg_attr(feature = "parallel-sampling", allow(dead_code))]
fn evaluate_sequential<F>(function: &F, xs: &[f64]) -> PlotResult<Vec<Sample>>
where
    F: PlotFunction + ?Sized,
{
    let mut out = reserve(xs.len())?;
    for &x in xs {
        out.push(evaluate_one(function, x)?);
    }
    Ok(out)
}

#[cfg(feature = "parallel-sampling")]
fn evaluate_parallel<F>(function: &F, xs: &[f64]) -> PlotResult<Vec<Sample>>
where
    F: PlotFunction + ?Sized,
{
    let mut evaluated: Vec<PlotResult<Sample>> = reserve(xs.len())?;
    xs.par_iter()
        .map(|&x| evaluate_one(function, x))
        .collect_into_vec(&mut evaluated);

    let mut out = reserve(xs.len())?;
    for result in evaluated {
        out.push(result?);
    }
    Ok(out)
}

fn evaluate_one<F>(function: &F, x: f64) -> PlotResult<Sample>
where
    F: PlotFunction + ?Sized,
{
    function
        .evaluate(x)
        .map(|y| Sample::new(x, y))
        .inspect_err(|err| trace!(x, error = %err, "sample evaluation failed"))
}

#[cfg(all(test, feature = "parallel-sampling"))]
mod tests {
    use super::{evaluate_parallel, evaluate_sequential};
    use crate::core::{Function, FunctionId};
    use crate::error::PlotError;

    fn grid(lower: f64, upper: f64, slices: usize) -> Vec<f64> {
        let step = (upper - lower) / slices as f64;
        let mut xs: Vec<f64> = (0..slices).map(|i| lower + i as f64 * step).collect();
        xs.push(upper);
        xs
    }

    #[test]
    fn parallel_evaluation_matches_sequential_order_and_values() {
        let cases = [
            (FunctionId::PowerDifference, grid(-3.0, 3.0, 4_096)),
            (FunctionId::SineExp, grid(-50.0, 50.0, 4_096)),
        ];
        for (id, xs) in cases {
            let parallel = evaluate_parallel(&id, &xs).expect("parallel evaluation");
            let sequential = evaluate_sequential(&id, &xs).expect("sequential evaluation");
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn parallel_evaluation_reports_first_failure_in_x_order() {
        let function = Function::new("1/(x*(x-1))", |x| 1.0 / (x * (x - 1.0)));
        let xs = grid(-1.0, 2.0, 6);

        let parallel = evaluate_parallel(&function, &xs).expect_err("x = 0 and x = 1 must fail");
        let sequential = evaluate_sequential(&function, &xs).expect_err("sequential must fail too");
        assert!(matches!(parallel, PlotError::Evaluation { x, .. } if x == 0.0));
        assert!(matches!(sequential, PlotError::Evaluation { x, .. } if x == 0.0));
    }
}
