use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("no bars visible in window: start_index={start_index}, window_size={window_size}")]
    InsufficientData {
        start_index: usize,
        window_size: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
