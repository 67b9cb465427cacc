use thiserror::Error;

pub type ViewportResult<T> = Result<T, ViewportError>;

#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("invalid viewport width: width={width}")]
    InvalidViewport { width: u32 },

    #[error("invalid view span: {0} seconds")]
    InvalidSpan(f64),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
