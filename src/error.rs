use thiserror::Error;

use crate::core::RecordId;

pub type ViewResult<T> = Result<T, ViewError>;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("top-n selector requires n > 0, got {n}")]
    InvalidTopN { n: usize },

    #[error("series `{series}` has {actual} points, expected {expected}")]
    SeriesLengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("row index {index} is out of range for {len} rendered rows")]
    RowOutOfRange { index: usize, len: usize },

    #[error("record {id} is not part of the dataset snapshot")]
    UnknownRecord { id: RecordId },
}
