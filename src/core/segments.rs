use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, Series, Viewport, validate_zoom};
use crate::error::{PlotError, PlotResult};

/// Smallest plot edge, in data units, regardless of the sampled span.
pub const MIN_PLOT_SIZE: u32 = 10;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub fn new(from: PixelPoint, to: PixelPoint) -> Self {
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        }
    }
}

/// Walks consecutive pixel points and keeps the visible segments.
///
/// Every point is paired with its successor; the last point is paired with
/// itself so it still closes a zero-length segment. A segment is kept when at
/// least one endpoint lies strictly inside the viewport. Segments crossing
/// the viewport with both endpoints outside are dropped, as are segments with
/// an endpoint whose pixel coordinate overflowed to a non-finite value.
#[must_use]
pub fn render_segments(points: &[PixelPoint], viewport: Viewport) -> Vec<LineSegment> {
    let Some(&last) = points.last() else {
        return Vec::new();
    };

    points
        .iter()
        .zip(points.iter().skip(1).chain(std::iter::once(&last)))
        .filter(|(from, to)| is_finite(from) && is_finite(to))
        .filter(|(from, to)| viewport.contains_strict(**from) || viewport.contains_strict(**to))
        .map(|(from, to)| LineSegment::new(*from, *to))
        .collect()
}

fn is_finite(point: &PixelPoint) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

/// Square plot size for `series`: the rounded span in units, at least
/// `min_plot_size`, multiplied by `zoom`. Zooms below
/// [`MIN_ZOOM`](crate::core::MIN_ZOOM) are rejected.
pub fn plot_size(series: &Series, zoom: f64, min_plot_size: u32) -> PlotResult<Viewport> {
    validate_zoom(zoom)?;

    let units = series.span().round().abs().max(f64::from(min_plot_size));
    let edge = (units * zoom).round();
    if edge < 1.0 || edge > f64::from(u32::MAX) {
        return Err(PlotError::InvalidArgument(format!(
            "plot size {edge}px is out of range"
        )));
    }
    Ok(Viewport::square(edge as u32))
}
