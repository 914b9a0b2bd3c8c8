mod frame;
mod null_renderer;
mod primitives;
mod scene;
mod style;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, TextHAlign, TextPrimitive};
pub use scene::build_plot_frame;
pub use style::{
    DEFAULT_AXIS_COLOR_HEX, DEFAULT_BACKGROUND_COLOR_HEX, DEFAULT_GRID_COLOR_HEX,
    DEFAULT_LINE_COLOR_HEX, PlotStyle,
};

use crate::error::PlotResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from sampling and view state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
