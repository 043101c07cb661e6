use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("insufficient data: statistics need at least 2 candles, got {count}")]
    InsufficientData { count: usize },

    #[error("degenerate price range: no candle survives outlier filtering")]
    DegenerateRange,
}
