//! Day plot figure description
//!
//! Describes a blank chart with a 24-hour x axis in seconds plus the
//! rectangles to draw on it. Rendering is left to whatever consumes the JSON.

use crate::frames::RectangleCoordinates;
use crate::timevals::{format_time_of_day, DayPeriod};
use serde::Serialize;
use std::f64::consts::PI;

/// Numeral format that renders second values as clock time
pub const TIME_TICK_FORMAT: &str = "00:00:00";

/// Closed axis range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub range: Range,
    /// Explicit tick positions; empty means the renderer picks them
    pub ticks: Vec<Tick>,
    pub tick_format: Option<String>,
    /// Tick label rotation in radians
    pub label_orientation: f64,
    pub grid: bool,
}

/// Chart layout for a one-day time axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlotFigure {
    pub width: u32,
    pub height: u32,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl DayPlotFigure {
    /// Blank figure with hourly ticks over `period` and a y axis up to `max_y`
    pub fn new(period: DayPeriod, max_y: f64) -> Self {
        let ticks = period
            .hour_tickmarks()
            .into_iter()
            .map(|value| Tick {
                value,
                label: format_time_of_day(value as f64),
            })
            .collect();

        Self {
            width: 800,
            height: 300,
            x_axis: Axis {
                label: "Time".to_string(),
                range: Range {
                    start: 0.0,
                    end: period.seconds() as f64,
                },
                ticks,
                tick_format: Some(TIME_TICK_FORMAT.to_string()),
                // Tilted to keep hour labels from overlapping
                label_orientation: PI / 4.0,
                // Round-number grid lines do not line up with hour ticks
                grid: false,
            },
            y_axis: Axis {
                label: "Pixels / s".to_string(),
                range: Range {
                    start: 0.0,
                    end: max_y,
                },
                ticks: Vec::new(),
                tick_format: None,
                label_orientation: 0.0,
                grid: true,
            },
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_axis.label = x_label.into();
        self.y_axis.label = y_label.into();
        self
    }
}

/// Largest rectangle height, or None for no rectangles
pub fn max_top(quads: &[RectangleCoordinates]) -> Option<f64> {
    quads.iter().map(|q| q.top).reduce(f64::max)
}

/// Vertical extent for the y axis; falls back to 1.0 when nothing is above zero
pub fn y_extent(quads: &[RectangleCoordinates]) -> f64 {
    match max_top(quads) {
        Some(max) if max > 0.0 => max,
        _ => 1.0,
    }
}

/// A figure together with the rectangles to draw on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlot {
    pub figure: DayPlotFigure,
    pub quads: Vec<RectangleCoordinates>,
}

impl DayPlot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
