//! CSV ingestion of frame records
//!
//! Expected header: `start_time_s, acq_time_s, n_pixels, pixels_per_second`.
//! Column order is free and extra columns are ignored.

use super::error::{FrameField, ValidationError, Violation};
use super::FrameRecord;
use crate::error::{DayPlotError, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Largest magnitude at which every integer is exactly representable as f64
const MAX_EXACT_FLOAT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A CSV row before integer columns are checked
///
/// Integer columns are kept as text so that `12.5` becomes a validation
/// error with a row index instead of an opaque parse failure, and large
/// integers are parsed exactly.
#[derive(Debug, Deserialize)]
struct RawFrameRow {
    start_time_s: String,
    acq_time_s: f64,
    n_pixels: String,
    pixels_per_second: f64,
}

impl RawFrameRow {
    fn into_record(self, index: usize) -> Result<FrameRecord> {
        Ok(FrameRecord {
            start_time_s: parse_integer(FrameField::StartTime, index, &self.start_time_s)?,
            acq_time_s: self.acq_time_s,
            n_pixels: parse_integer(FrameField::NPixels, index, &self.n_pixels)?,
            pixels_per_second: self.pixels_per_second,
        })
    }
}

/// Parse an integer cell without rounding or saturating
///
/// Decimal integers are parsed directly. Float notation (`60.0`, `1e3`) is
/// accepted only while it is integral and exactly representable.
fn parse_integer(field: FrameField, index: usize, text: &str) -> Result<i64> {
    if let Ok(value) = text.parse::<i64>() {
        return Ok(value);
    }

    let value: f64 = text.parse().map_err(|_| DayPlotError::NotNumeric {
        field,
        index,
        text: text.to_string(),
    })?;

    let violation = if !value.is_finite() {
        Violation::NotFinite
    } else if value.fract() != 0.0 {
        Violation::NotInteger
    } else if value.abs() > MAX_EXACT_FLOAT_INTEGER {
        Violation::OutOfRange
    } else {
        return Ok(value as i64);
    };
    Err(ValidationError::new(field, index, value, violation).into())
}

/// Read frame records from CSV data
///
/// Only the integer columns are checked here; the remaining constraints are
/// enforced by the normalizer.
pub fn load_frames<R: Read>(reader: R) -> Result<Vec<FrameRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut frames = Vec::new();
    for (index, result) in reader.deserialize::<RawFrameRow>().enumerate() {
        let row = result?;
        frames.push(row.into_record(index)?);
    }

    log::debug!("Loaded {} frame(s) from CSV", frames.len());
    Ok(frames)
}

/// Read frame records from a CSV file
pub fn load_frames_from_path(path: impl AsRef<Path>) -> Result<Vec<FrameRecord>> {
    let path = path.as_ref();
    log::info!("Reading frames from {}", path.display());
    let file = File::open(path)?;
    load_frames(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_frames() {
        let csv = "start_time_s,acq_time_s,n_pixels,pixels_per_second\n\
                   1396447375,60.0,57,0.95\n\
                   1396447435,60,12,0.2\n";
        let frames = load_frames(csv.as_bytes()).unwrap();

        assert_eq!(frames.len(), 2);
        assert_eq!(
            frames[0],
            FrameRecord {
                start_time_s: 1_396_447_375,
                acq_time_s: 60.0,
                n_pixels: 57,
                pixels_per_second: 0.95,
            }
        );
        assert_eq!(frames[1].n_pixels, 12);
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let csv = "pixels_per_second,label,n_pixels,acq_time_s,start_time_s\n\
                   0.5, a, 30, 60.0, 100\n";
        let frames = load_frames(csv.as_bytes()).unwrap();
        assert_eq!(frames[0].start_time_s, 100);
        assert_eq!(frames[0].pixels_per_second, 0.5);
    }

    #[test]
    fn test_header_only() {
        let csv = "start_time_s,acq_time_s,n_pixels,pixels_per_second\n";
        assert!(load_frames(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_fractional_start_time_rejected() {
        let csv = "start_time_s,acq_time_s,n_pixels,pixels_per_second\n\
                   100,60.0,57,0.95\n\
                   100.5,60.0,57,0.95\n";
        match load_frames(csv.as_bytes()) {
            Err(DayPlotError::Validation(err)) => {
                assert_eq!(err.field, FrameField::StartTime);
                assert_eq!(err.index, 1);
                assert_eq!(err.violation, Violation::NotInteger);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let csv = "start_time_s,acq_time_s,n_pixels\n100,60.0,57\n";
        assert!(matches!(
            load_frames(csv.as_bytes()),
            Err(DayPlotError::Csv(_))
        ));
    }

    #[test]
    fn test_large_start_time_is_exact() {
        let csv = "start_time_s,acq_time_s,n_pixels,pixels_per_second\n\
                   9007199254740993,1,1,1\n";
        let frames = load_frames(csv.as_bytes()).unwrap();
        assert_eq!(frames[0].start_time_s, 9_007_199_254_740_993);
    }

    #[test]
    fn test_float_notation_integers() {
        let csv = "start_time_s,acq_time_s,n_pixels,pixels_per_second\n\
                   100.0,60.0,5.7e1,0.95\n";
        let frames = load_frames(csv.as_bytes()).unwrap();
        assert_eq!(frames[0].start_time_s, 100);
        assert_eq!(frames[0].n_pixels, 57);
    }

    #[test]
    fn test_out_of_range_start_time_rejected() {
        let csv = "start_time_s,acq_time_s,n_pixels,pixels_per_second\n\
                   100000000000000000000,1,1,1\n";
        match load_frames(csv.as_bytes()) {
            Err(DayPlotError::Validation(err)) => {
                assert_eq!(err.field, FrameField::StartTime);
                assert_eq!(err.index, 0);
                assert_eq!(err.violation, Violation::OutOfRange);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_pixel_count_rejected() {
        let csv = "start_time_s,acq_time_s,n_pixels,pixels_per_second\n\
                   100,1,1e30,1\n";
        match load_frames(csv.as_bytes()) {
            Err(DayPlotError::Validation(err)) => {
                assert_eq!(err.field, FrameField::NPixels);
                assert_eq!(err.violation, Violation::OutOfRange);
                assert_eq!(err.value, 1e30);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_fractional_pixel_count_rejected() {
        let csv = "start_time_s,acq_time_s,n_pixels,pixels_per_second\n\
                   100,60.0,57,0.95\n\
                   200,60.0,57,0.95\n\
                   300,60.0,12.5,0.2\n";
        match load_frames(csv.as_bytes()) {
            Err(DayPlotError::Validation(err)) => {
                assert_eq!(err.field, FrameField::NPixels);
                assert_eq!(err.index, 2);
                assert_eq!(err.value, 12.5);
                assert_eq!(err.violation, Violation::NotInteger);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_integer_rejected() {
        let csv = "start_time_s,acq_time_s,n_pixels,pixels_per_second\n\
                   inf,60.0,57,0.95\n";
        match load_frames(csv.as_bytes()) {
            Err(DayPlotError::Validation(err)) => {
                assert_eq!(err.violation, Violation::NotFinite);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_integer_cell() {
        let csv = "start_time_s,acq_time_s,n_pixels,pixels_per_second\n\
                   noon,60.0,57,0.95\n";
        match load_frames(csv.as_bytes()) {
            Err(DayPlotError::NotNumeric { field, index, text }) => {
                assert_eq!(field, FrameField::StartTime);
                assert_eq!(index, 0);
                assert_eq!(text, "noon");
            }
            other => panic!("expected non-numeric error, got {:?}", other),
        }
    }
}
