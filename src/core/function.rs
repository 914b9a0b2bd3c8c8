use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// A scalar function `f: f64 -> f64` with a human-readable formula.
///
/// `apply` is the raw evaluator. `evaluate` is the checked entry point used by
/// sampling: any non-finite result (division by zero, overflow, a domain
/// error producing NaN) is reported as `PlotError::Evaluation`.
pub trait PlotFunction: Sync {
    /// Formula text without the `f(x) = ` prefix.
    fn text(&self) -> &str;

    fn apply(&self, x: f64) -> f64;

    /// Display label used by selectors and plot captions.
    fn label(&self) -> String {
        format!("f(x) = {}", self.text())
    }

    fn evaluate(&self, x: f64) -> PlotResult<f64> {
        let y = self.apply(x);
        if y.is_nan() {
            return Err(PlotError::Evaluation {
                x,
                reason: "result is not a number".to_owned(),
            });
        }
        if y.is_infinite() {
            return Err(PlotError::Evaluation {
                x,
                reason: "result is infinite".to_owned(),
            });
        }
        Ok(y)
    }

    /// Single-point description in the form `f(<x>) = <y>`.
    fn describe(&self, x: f64) -> PlotResult<String> {
        let y = self.evaluate(x)?;
        Ok(format!("f({x}) = {y}"))
    }
}

/// Hard-coded functions offered by the viewer, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionId {
    /// `10^(1+x^2) - 10^(1-x^2)`
    PowerDifference,
    /// `tg(3x-156) + tg(x) - 4sin(x)`
    TangentSum,
    /// `sin(x) + exp(x/9)`
    SineExp,
}

impl FunctionId {
    pub const ALL: [FunctionId; 3] = [
        FunctionId::PowerDifference,
        FunctionId::TangentSum,
        FunctionId::SineExp,
    ];
}

impl PlotFunction for FunctionId {
    fn text(&self) -> &str {
        match self {
            Self::PowerDifference => "10^(1+x^2) - 10^(1-x^2)",
            Self::TangentSum => "tg(3x-156) + tg(x) - 4sin(x)",
            Self::SineExp => "sin(x) + exp(x/9)",
        }
    }

    fn apply(&self, x: f64) -> f64 {
        match self {
            Self::PowerDifference => 10f64.powf(1.0 + x * x) - 10f64.powf(1.0 - x * x),
            Self::TangentSum => (3.0 * x - 156.0).tan() + x.tan() - 4.0 * x.sin(),
            Self::SineExp => x.sin() + (x / 9.0).exp(),
        }
    }
}

/// Closure-backed function for callers that bring their own evaluator.
pub struct Function<F> {
    text: String,
    func: F,
}

impl<F> Function<F>
where
    F: Fn(f64) -> f64 + Sync,
{
    pub fn new(text: impl Into<String>, func: F) -> Self {
        Self {
            text: text.into(),
            func,
        }
    }
}

impl<F> PlotFunction for Function<F>
where
    F: Fn(f64) -> f64 + Sync,
{
    fn text(&self) -> &str {
        &self.text
    }

    fn apply(&self, x: f64) -> f64 {
        (self.func)(x)
    }
}

impl<F> std::fmt::Debug for Function<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function").field("text", &self.text).finish()
    }
}

/// Ordered, immutable table of functions selected by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionRegistry {
    functions: &'static [FunctionId],
}

impl FunctionRegistry {
    #[must_use]
    pub const fn new(functions: &'static [FunctionId]) -> Self {
        Self { functions }
    }

    /// Registry used by the interval viewers.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(&FunctionId::ALL)
    }

    /// Two-function registry used by the single-point evaluator.
    #[must_use]
    pub const fn single_point() -> Self {
        const FUNCTIONS: [FunctionId; 2] = [FunctionId::PowerDifference, FunctionId::TangentSum];
        Self::new(&FUNCTIONS)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<FunctionId> {
        self.functions.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.functions.iter().map(|function| function.label()).collect()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
