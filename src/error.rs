use crate::frames::{FrameField, ValidationError};
use crate::timevals::PeriodError;
use thiserror::Error;

/// Errors that can occur while loading frames and building a day plot
#[derive(Debug, Error)]
pub enum DayPlotError {
    /// A frame record broke an input constraint
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An integer column held text that is not a number
    #[error("Invalid frame {index}: {field} = '{text}' is not a number")]
    NotNumeric {
        field: FrameField,
        index: usize,
        text: String,
    },

    /// Invalid day period
    #[error(transparent)]
    Period(#[from] PeriodError),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV (missing columns, non-numeric cells, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// DataFrame construction or access error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// DataFrame with missing or null quad values
    #[error("Invalid quad table: {0}")]
    InvalidTable(String),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error (invalid values, unreadable config file)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Results using DayPlotError
pub type Result<T> = std::result::Result<T, DayPlotError>;
