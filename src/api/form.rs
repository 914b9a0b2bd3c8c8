use tracing::{debug, warn};

use crate::core::{FunctionId, FunctionRegistry, PlotFunction, Series, sample};
use crate::error::{PlotError, PlotResult};
use crate::render::DEFAULT_LINE_COLOR_HEX;

use super::SessionRecord;

/// Raw contents of the function input panel.
///
/// Fields hold the text exactly as typed. Parsing happens in `submit`, which
/// reports the first problem found: no selection, then unparsable numbers,
/// then evaluation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionForm {
    pub selection: Option<usize>,
    pub start: String,
    pub end: String,
    pub slices: String,
    pub color: String,
}

impl Default for FunctionForm {
    fn default() -> Self {
        Self {
            selection: None,
            start: String::new(),
            end: String::new(),
            slices: String::new(),
            color: DEFAULT_LINE_COLOR_HEX.to_owned(),
        }
    }
}

/// Result of a successful form submission, ready for table and plot views.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub series: Series,
    pub description: String,
    pub color: String,
}

impl FunctionForm {
    #[must_use]
    pub fn new(
        selection: Option<usize>,
        start: impl Into<String>,
        end: impl Into<String>,
        slices: impl Into<String>,
    ) -> Self {
        Self {
            selection,
            start: start.into(),
            end: end.into(),
            slices: slices.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn selected_function(&self, registry: &FunctionRegistry) -> PlotResult<FunctionId> {
        self.selection
            .and_then(|index| registry.get(index))
            .ok_or(PlotError::NoSelection)
    }

    pub fn submit(&self, registry: &FunctionRegistry) -> PlotResult<Submission> {
        let function = self.selected_function(registry)?;
        let start = parse_real("start", &self.start)?;
        let end = parse_real("end", &self.end)?;
        let slices = parse_count("slices", &self.slices)?;

        let series = sample(&function, start, end, slices).inspect_err(|err| {
            warn!(function = function.text(), error = %err, "form submission failed");
        })?;
        debug!(function = function.text(), samples = series.len(), "form submitted");

        Ok(Submission {
            series,
            description: function.label(),
            color: self.color.clone(),
        })
    }

    /// Evaluates the selected function at a single argument and returns
    /// `"<label>, f(<x>) = <y>"`.
    pub fn evaluate_point(&self, registry: &FunctionRegistry, arg: &str) -> PlotResult<String> {
        let function = self.selected_function(registry)?;
        let x = parse_real("argument", arg)?;
        Ok(format!("{}, {}", function.label(), function.describe(x)?))
    }

    #[must_use]
    pub fn to_session_record(&self) -> SessionRecord {
        SessionRecord {
            choice_index: self
                .selection
                .and_then(|index| i64::try_from(index).ok())
                .unwrap_or(-1),
            start: self.start.clone(),
            end: self.end.clone(),
            slices: self.slices.clone(),
            color: self.color.clone(),
        }
    }

    #[must_use]
    pub fn from_session_record(record: &SessionRecord) -> Self {
        Self {
            selection: usize::try_from(record.choice_index).ok(),
            start: record.start.clone(),
            end: record.end.clone(),
            slices: record.slices.clone(),
            color: record.color.clone(),
        }
    }
}

/// Numbered output log of single-point evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationLog {
    counter: usize,
    text: String,
}

impl EvaluationLog {
    /// Evaluates and appends `"[n]: <label>, f(x) = y"` on success. Failed
    /// evaluations leave the log and its counter untouched.
    pub fn record(
        &mut self,
        form: &FunctionForm,
        registry: &FunctionRegistry,
        arg: &str,
    ) -> PlotResult<&str> {
        let line = form.evaluate_point(registry, arg)?;
        self.counter += 1;
        let start = self.text.len();
        self.text.push_str(&format!("[{}]: {line}\n", self.counter));
        Ok(&self.text[start..])
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.counter
    }
}

fn parse_real(field: &str, raw: &str) -> PlotResult<f64> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(PlotError::InvalidArgument(format!("`{field}` is missing")));
    }
    value.parse::<f64>().map_err(|_| {
        PlotError::InvalidArgument(format!("`{field}` is not a number: `{value}`"))
    })
}

fn parse_count(field: &str, raw: &str) -> PlotResult<i64> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(PlotError::InvalidArgument(format!("`{field}` is missing")));
    }
    value.parse::<i64>().map_err(|_| {
        PlotError::InvalidArgument(format!("`{field}` is not an integer: `{value}`"))
    })
}
