mod config;
mod export;
mod form;
mod plot_view;
mod session;
mod table;

pub use config::{COMPACT_ZOOM, DEFAULT_ZOOM, PlotViewConfig};
pub use export::{DocumentBackend, ExportDocument, ExportRow, HtmlFileBackend};
pub use form::{EvaluationLog, FunctionForm, Submission};
pub use plot_view::PlotView;
pub use session::SessionRecord;
pub use table::{TABLE_HEADER, format_general, format_table, format_table_row};
