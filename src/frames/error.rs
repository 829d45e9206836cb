use std::fmt;
use thiserror::Error;

/// Columns of a frame record, named as they appear in the CSV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameField {
    StartTime,
    AcqTime,
    NPixels,
    PixelsPerSecond,
}

impl FrameField {
    pub fn column_name(&self) -> &'static str {
        match self {
            FrameField::StartTime => "start_time_s",
            FrameField::AcqTime => "acq_time_s",
            FrameField::NPixels => "n_pixels",
            FrameField::PixelsPerSecond => "pixels_per_second",
        }
    }
}

impl fmt::Display for FrameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// What was wrong with a field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    Negative,
    NotInteger,
    NotFinite,
    /// Integral, but too large to be read back exactly
    OutOfRange,
    /// Supplied rate disagrees with `n_pixels / acq_time_s`
    RateMismatch { expected: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Negative => f.write_str("must not be negative"),
            Violation::NotInteger => f.write_str("must be an integer"),
            Violation::NotFinite => f.write_str("must be finite"),
            Violation::OutOfRange => f.write_str("is out of the exact integer range"),
            Violation::RateMismatch { expected } => {
                write!(f, "does not match n_pixels / acq_time_s = {}", expected)
            }
        }
    }
}

/// A frame record that breaks one of the input constraints
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid frame {index}: {field} = {value} {violation}")]
pub struct ValidationError {
    pub field: FrameField,
    /// 0-based index of the offending record
    pub index: usize,
    pub value: f64,
    pub violation: Violation,
}

impl ValidationError {
    pub fn new(field: FrameField, index: usize, value: f64, violation: Violation) -> Self {
        Self {
            field,
            index,
            value,
            violation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_column_and_index() {
        let err = ValidationError::new(FrameField::AcqTime, 3, -5.0, Violation::Negative);
        assert_eq!(
            err.to_string(),
            "Invalid frame 3: acq_time_s = -5 must not be negative"
        );

        let err = ValidationError::new(FrameField::NPixels, 0, 1e30, Violation::OutOfRange);
        assert!(err.to_string().starts_with("Invalid frame 0: n_pixels = "));
    }
}
