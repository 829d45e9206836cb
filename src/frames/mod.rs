//! Detector frame records and their rectangle coordinates
//!
//! Structure:
//! - `error.rs`: `ValidationError` raised for malformed frame records
//! - `normalize.rs`: frame → rectangle transform with time-of-day wrapping
//! - `loader.rs`: CSV ingestion of frame records

pub mod error;
pub mod loader;
pub mod normalize;

use serde::Serialize;

pub use error::{FrameField, ValidationError, Violation};
pub use loader::{load_frames, load_frames_from_path};
pub use normalize::{normalize, normalize_with, NormalizeOptions, RatePolicy};

/// One detector readout frame (one CSV row)
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    /// Frame start, seconds since the Unix epoch
    pub start_time_s: i64,
    /// Time spent acquiring, seconds
    pub acq_time_s: f64,
    pub n_pixels: i64,
    /// Precomputed `n_pixels / acq_time_s`
    pub pixels_per_second: f64,
}

impl FrameRecord {
    /// Check the field constraints, reporting `index` on failure
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        if self.start_time_s < 0 {
            return Err(ValidationError::new(
                FrameField::StartTime,
                index,
                self.start_time_s as f64,
                Violation::Negative,
            ));
        }
        check_non_negative(FrameField::AcqTime, index, self.acq_time_s)?;
        if self.n_pixels < 0 {
            return Err(ValidationError::new(
                FrameField::NPixels,
                index,
                self.n_pixels as f64,
                Violation::Negative,
            ));
        }
        check_non_negative(FrameField::PixelsPerSecond, index, self.pixels_per_second)?;
        Ok(())
    }

    /// Rate recomputed from the raw count, if the frame acquired for any time
    pub fn derived_rate(&self) -> Option<f64> {
        (self.acq_time_s > 0.0).then(|| self.n_pixels as f64 / self.acq_time_s)
    }
}

fn check_non_negative(field: FrameField, index: usize, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, index, value, Violation::NotFinite));
    }
    if value < 0.0 {
        return Err(ValidationError::new(field, index, value, Violation::Negative));
    }
    Ok(())
}

/// Corners of the rectangle drawn for one frame
///
/// Width is the acquisition time and height the pixel rate, so the area is
/// the frame's pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectangleCoordinates {
    /// Start as seconds since midnight, in `[0, period)`
    pub left: f64,
    /// `left + acq_time_s`, may run past the end of the day
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}
