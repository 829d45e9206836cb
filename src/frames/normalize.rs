//! Frame → rectangle coordinate transform
//!
//! Each frame becomes one rectangle for a quad plot:
//! - left: frame start reduced to seconds since midnight
//! - right: left + acquisition time (never wrapped or split at midnight)
//! - top: pixel rate
//! - bottom: 0
//!
//! Records are independent of each other. The whole input is validated before
//! any rectangle is built, so a failure never yields partial output.

use super::error::{FrameField, ValidationError, Violation};
use super::{FrameRecord, RectangleCoordinates};
use crate::timevals::DayPeriod;

/// How the supplied `pixels_per_second` column is treated
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RatePolicy {
    /// Use the supplied rate as is
    #[default]
    Trust,
    /// Recompute `n_pixels / acq_time_s` and reject rates further off than `tolerance`
    Verify { tolerance: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizeOptions {
    pub period: DayPeriod,
    pub rate_policy: RatePolicy,
}

/// Convert frames to rectangle coordinates, trusting the supplied rates
pub fn normalize(
    frames: &[FrameRecord],
    period: DayPeriod,
) -> Result<Vec<RectangleCoordinates>, ValidationError> {
    normalize_with(
        frames,
        &NormalizeOptions {
            period,
            rate_policy: RatePolicy::Trust,
        },
    )
}

/// Convert frames to rectangle coordinates with explicit options
pub fn normalize_with(
    frames: &[FrameRecord],
    options: &NormalizeOptions,
) -> Result<Vec<RectangleCoordinates>, ValidationError> {
    for (index, frame) in frames.iter().enumerate() {
        frame.validate(index)?;
        if let RatePolicy::Verify { tolerance } = options.rate_policy {
            check_rate(frame, index, tolerance)?;
        }
    }

    Ok(frames
        .iter()
        .map(|frame| to_rectangle(frame, options.period))
        .collect())
}

fn to_rectangle(frame: &FrameRecord, period: DayPeriod) -> RectangleCoordinates {
    let left = period.time_of_day(frame.start_time_s) as f64;
    RectangleCoordinates {
        left,
        right: left + frame.acq_time_s,
        top: frame.pixels_per_second,
        bottom: 0.0,
    }
}

fn check_rate(frame: &FrameRecord, index: usize, tolerance: f64) -> Result<(), ValidationError> {
    let Some(expected) = frame.derived_rate() else {
        return Ok(());
    };
    // A NaN tolerance compares false, so it must fall into the reject branch
    if !((expected - frame.pixels_per_second).abs() <= tolerance) {
        return Err(ValidationError::new(
            FrameField::PixelsPerSecond,
            index,
            frame.pixels_per_second,
            Violation::RateMismatch { expected },
        ));
    }
    Ok(())
}
