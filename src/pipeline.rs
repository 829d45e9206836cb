//! Shared day plot pipeline
//!
//! The pipeline:
//! 1. Loads frame records from CSV
//! 2. Normalizes them into rectangle coordinates
//! 3. Derives the y extent from the tallest rectangle
//! 4. Builds the figure description

use crate::config::PlotConfig;
use crate::error::Result;
use crate::figure::{max_top, y_extent, DayPlot, DayPlotFigure};
use crate::frames::{load_frames_from_path, normalize_with, FrameRecord};
use std::path::Path;

/// Build a day plot from already loaded frames
pub fn build_day_plot(frames: &[FrameRecord], config: &PlotConfig) -> Result<DayPlot> {
    config.validate()?;
    let options = config.normalize_options()?;

    let quads = normalize_with(frames, &options)?;
    log::info!(
        "Normalized {} frame(s) over a {} s period",
        quads.len(),
        options.period.seconds()
    );

    match max_top(&quads) {
        Some(max) => log::info!("Max pixel rate: {:.3} pixels/s", max),
        None => log::warn!("No frames to plot"),
    }

    let figure = DayPlotFigure::new(options.period, y_extent(&quads))
        .with_size(config.width, config.height)
        .with_labels(config.x_axis_label.as_str(), config.y_axis_label.as_str());

    Ok(DayPlot { figure, quads })
}

/// Load frames from a CSV file and build a day plot
pub fn run(input: impl AsRef<Path>, config: &PlotConfig) -> Result<DayPlot> {
    let frames = load_frames_from_path(input)?;
    build_day_plot(&frames, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DayPlotError;

    fn frame(start: i64, acq: f64, n: i64, rate: f64) -> FrameRecord {
        FrameRecord {
            start_time_s: start,
            acq_time_s: acq,
            n_pixels: n,
            pixels_per_second: rate,
        }
    }

    #[test]
    fn test_build_day_plot() {
        let frames = vec![
            frame(1_396_447_375, 60.0, 57, 0.95),
            frame(1_396_447_435, 60.0, 180, 3.0),
        ];
        let plot = build_day_plot(&frames, &PlotConfig::default()).unwrap();

        assert_eq!(plot.quads.len(), 2);
        assert_eq!(plot.quads[0].left, 50_575.0);
        assert_eq!(plot.figure.y_axis.range.end, 3.0);
        assert_eq!(plot.figure.x_axis.range.end, 86_400.0);
    }

    #[test]
    fn test_empty_frames() {
        let plot = build_day_plot(&[], &PlotConfig::default()).unwrap();
        assert!(plot.quads.is_empty());
        assert_eq!(plot.figure.y_axis.range.end, 1.0);
    }

    #[test]
    fn test_config_is_applied() {
        let config = PlotConfig {
            seconds_per_day: 7200,
            width: 1000,
            y_axis_label: "Rate".to_string(),
            ..Default::default()
        };
        let plot = build_day_plot(&[frame(7300, 10.0, 5, 0.5)], &config).unwrap();

        assert_eq!(plot.quads[0].left, 100.0);
        assert_eq!(plot.figure.width, 1000);
        assert_eq!(plot.figure.y_axis.label, "Rate");
        assert_eq!(plot.figure.x_axis.ticks.len(), 3);
    }

    #[test]
    fn test_invalid_frame_yields_no_plot() {
        let frames = vec![frame(0, 1.0, 1, 1.0), frame(0, -5.0, 1, 1.0)];
        match build_day_plot(&frames, &PlotConfig::default()) {
            Err(DayPlotError::Validation(err)) => assert_eq!(err.index, 1),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_period_is_an_error() {
        let config = PlotConfig {
            seconds_per_day: 36_000_000_000_000,
            ..Default::default()
        };
        assert!(matches!(
            build_day_plot(&[], &config),
            Err(DayPlotError::Period(_))
        ));
    }
}
