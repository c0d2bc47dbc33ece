use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("render target `{target_id}` not found")]
    TargetNotFound { target_id: String },

    #[error("series length mismatch: {labels} labels, {values} values")]
    SeriesMismatch { labels: usize, values: usize },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("chart backend failure: {0}")]
    Backend(String),
}
