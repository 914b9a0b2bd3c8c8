use tracing::{debug, trace};

use crate::core::{Series, Viewport, plot_size};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, PlotStyle, RenderFrame, Renderer, build_plot_frame};

use super::PlotViewConfig;

/// State owned by one plot window.
///
/// The current series, description and line color change only through
/// `set_data`, `set_line_color` and `set_viewport`; `build_frame` and
/// `render` read them. Every redraw recomputes the origin from the current
/// series and viewport, so repeated renders emit identical frames.
pub struct PlotView<R: Renderer> {
    renderer: R,
    zoom: f64,
    min_plot_size: u32,
    style: PlotStyle,
    series: Series,
    description: String,
    viewport: Viewport,
}

impl<R: Renderer> PlotView<R> {
    pub fn new(renderer: R, config: &PlotViewConfig) -> PlotResult<Self> {
        config.validate()?;
        let series = Series::default();
        let viewport = plot_size(&series, config.zoom, config.min_plot_size)?;

        Ok(Self {
            renderer,
            zoom: config.zoom,
            min_plot_size: config.min_plot_size,
            style: config.style()?,
            series,
            description: String::new(),
            viewport,
        })
    }

    /// Replaces the plotted series and resizes the plot area to the square
    /// size derived from the series span.
    pub fn set_data(&mut self, series: Series, description: impl Into<String>) -> PlotResult<()> {
        let viewport = plot_size(&series, self.zoom, self.min_plot_size)?;
        self.description = description.into();
        debug!(
            samples = series.len(),
            width = viewport.width,
            height = viewport.height,
            "set plot data"
        );
        self.series = series;
        self.viewport = viewport;
        Ok(())
    }

    /// Applies a `#rrggbb` line color. Invalid input keeps the previous
    /// color; the return value tells whether the color was accepted.
    pub fn set_line_color(&mut self, hex: &str) -> bool {
        self.style.set_line_color_hex(hex)
    }

    /// Overrides the drawing surface size, e.g. after a layout pass gave the
    /// plot more room than requested.
    pub fn set_viewport(&mut self, viewport: Viewport) -> PlotResult<()> {
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn line_color(&self) -> Color {
        self.style.line_color
    }

    #[must_use]
    pub fn style(&self) -> PlotStyle {
        self.style
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn build_frame(&self) -> PlotResult<RenderFrame> {
        build_plot_frame(&self.series, self.viewport, self.zoom, self.style)
    }

    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_frame()?;
        trace!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "render plot frame"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
