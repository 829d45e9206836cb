//! Rectangle coordinates ↔ Polars DataFrame conversion
//!
//! Renderers that consume column tables get one Float64 column per corner
//! coordinate: `left`, `right`, `top`, `bottom`, one row per rectangle.

use crate::error::{DayPlotError, Result};
use crate::frames::RectangleCoordinates;
use polars::prelude::*;

pub const QUAD_COLUMNS: [&str; 4] = ["left", "right", "top", "bottom"];

/// Convert rectangles to a DataFrame, preserving their order
pub fn quads_to_dataframe(quads: &[RectangleCoordinates]) -> Result<DataFrame> {
    let left: Vec<f64> = quads.iter().map(|q| q.left).collect();
    let right: Vec<f64> = quads.iter().map(|q| q.right).collect();
    let top: Vec<f64> = quads.iter().map(|q| q.top).collect();
    let bottom: Vec<f64> = quads.iter().map(|q| q.bottom).collect();

    let df = df! {
        "left" => left,
        "right" => right,
        "top" => top,
        "bottom" => bottom,
    }?;
    Ok(df)
}

/// Read rectangles back from a DataFrame with the four quad columns
pub fn quads_from_dataframe(df: &DataFrame) -> Result<Vec<RectangleCoordinates>> {
    let left = float_column(df, "left")?;
    let right = float_column(df, "right")?;
    let top = float_column(df, "top")?;
    let bottom = float_column(df, "bottom")?;

    Ok((0..df.height())
        .map(|i| RectangleCoordinates {
            left: left[i],
            right: right[i],
            top: top[i],
            bottom: bottom[i],
        })
        .collect())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df.column(name)?.as_materialized_series();
    let values = series.cast(&DataType::Float64)?;
    let floats: Result<Vec<f64>> = values
        .f64()?
        .into_iter()
        .map(|opt| {
            opt.ok_or_else(|| {
                DayPlotError::InvalidTable(format!("Null value in quad column '{}'", name))
            })
        })
        .collect();
    floats
}
