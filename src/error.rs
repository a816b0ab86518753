use thiserror::Error;

use crate::core::SlotId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Tunables or alignment values the layout cannot work with.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("no slot with id={id}")]
    NotFound { id: SlotId },

    #[error("fraction must be within [0, 1], got {value}")]
    OutOfRange { value: f64 },

    #[error("duplicate slot id={id} within one axis")]
    DuplicateSlotId { id: SlotId },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
