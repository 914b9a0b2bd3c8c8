use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("function evaluation failed at x={x}: {reason}")]
    Evaluation { x: f64, reason: String },

    #[error("no function selected")]
    NoSelection,

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("persistence failure: {0}")]
    Persistence(String),
}
