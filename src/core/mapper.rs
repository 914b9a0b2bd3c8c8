use crate::core::{PixelPoint, Sample, Series, Viewport};
use crate::error::{PlotError, PlotResult};

/// Affine data-to-pixel transform around a pixel-space origin.
///
/// The y-axis is inverted: positive data `y` maps to smaller pixel `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelTransform {
    origin: PixelPoint,
    zoom: f64,
}

impl PixelTransform {
    pub fn new(origin: PixelPoint, zoom: f64) -> PlotResult<Self> {
        validate_zoom(zoom)?;
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(PlotError::InvalidData("origin must be finite".to_owned()));
        }
        Ok(Self { origin, zoom })
    }

    /// Builds the transform for `series` drawn into `viewport`.
    ///
    /// Only the horizontal axis is centered on the data span; the origin's
    /// vertical position is always the viewport middle.
    pub fn for_series(series: &Series, viewport: Viewport, zoom: f64) -> PlotResult<Self> {
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        validate_zoom(zoom)?;

        let center_x = f64::from(viewport.width / 2);
        let center_y = f64::from(viewport.height / 2);
        let origin_x = match (series.first(), series.last()) {
            (Some(first), Some(last)) => center_x - ((first.x + last.x) / 2.0).floor() * zoom,
            _ => center_x,
        };
        Self::new(PixelPoint::new(origin_x, center_y), zoom)
    }

    #[must_use]
    pub fn origin(self) -> PixelPoint {
        self.origin
    }

    #[must_use]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn data_to_pixel(self, sample: Sample) -> PixelPoint {
        PixelPoint::new(
            self.origin.x + sample.x * self.zoom,
            self.origin.y - sample.y * self.zoom,
        )
    }

    #[must_use]
    pub fn pixel_to_data(self, pixel: PixelPoint) -> Sample {
        Sample::new(
            (pixel.x - self.origin.x) / self.zoom,
            (self.origin.y - pixel.y) / self.zoom,
        )
    }
}

/// Origin plus per-sample pixel positions for one draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelMapping {
    pub origin: PixelPoint,
    pub points: Vec<PixelPoint>,
}

/// Maps every sample of `series` into pixel space.
///
/// Series with fewer than two samples have nothing to draw and yield an empty
/// point list. This is not an error.
pub fn map_to_pixels(series: &Series, viewport: Viewport, zoom: f64) -> PlotResult<PixelMapping> {
    let transform = PixelTransform::for_series(series, viewport, zoom)?;
    let points = if series.len() < 2 {
        Vec::new()
    } else {
        series
            .iter()
            .map(|sample| transform.data_to_pixel(*sample))
            .collect()
    };

    Ok(PixelMapping {
        origin: transform.origin(),
        points,
    })
}

/// Smallest accepted zoom, in pixels per data unit.
pub const MIN_ZOOM: f64 = 1.0;

/// Rejects non-finite zoom factors and zooms below [`MIN_ZOOM`].
pub fn validate_zoom(zoom: f64) -> PlotResult<()> {
    if !zoom.is_finite() || zoom < MIN_ZOOM {
        return Err(PlotError::InvalidArgument(format!(
            "zoom must be finite and >= {MIN_ZOOM}, got {zoom}"
        )));
    }
    Ok(())
}
