pub mod function;
pub mod mapper;
pub mod sampler;
pub mod segments;
pub mod types;

pub use function::{Function, FunctionId, FunctionRegistry, PlotFunction};
pub use mapper::{MIN_ZOOM, PixelMapping, PixelTransform, map_to_pixels, validate_zoom};
pub use sampler::{MAX_SLICES, Series, sample};
pub use segments::{LineSegment, MIN_PLOT_SIZE, plot_size, render_segments};
pub use types::{PixelPoint, Sample, Viewport};
