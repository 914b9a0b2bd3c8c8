//! fnplot: headless core for small function-viewer applications.
//!
//! Samples hard-coded scalar functions over an interval, maps the samples
//! into pixel space and turns them into backend-agnostic draw commands,
//! text tables and export documents. Windowing and widgets stay with the
//! host application.

pub mod api;
pub mod core;
pub mod error;
pub mod notify;
pub mod render;
pub mod telemetry;

pub use api::{PlotView, PlotViewConfig};
pub use error::{PlotError, PlotResult};
