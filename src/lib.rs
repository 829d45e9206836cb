//! Day Plot Library
//!
//! Turns detector readout frames into rectangles for a time-of-day quad plot:
//! each frame is drawn from its start (as seconds since midnight) for its
//! acquisition time, with the pixel rate as height, so area is pixel count.
//!
//! Module organization:
//! - `frames`: frame records, validation, CSV loading and the normalizer
//! - `timevals`: time constants and the day period
//! - `figure`: figure description consumed by a renderer
//! - `table`: Polars DataFrame view of the rectangles
//! - `config`, `pipeline`, `logging`: ambient plumbing for the binary

pub mod config;
pub mod error;
pub mod figure;
pub mod frames;
pub mod logging;
pub mod pipeline;
pub mod table;
pub mod timevals;

pub use error::{DayPlotError, Result};
pub use frames::{normalize, FrameRecord, RectangleCoordinates, ValidationError};
pub use timevals::DayPeriod;
