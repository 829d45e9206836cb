//! Plot configuration
//!
//! Configuration is read from an optional JSON file (`dayplot_config.json` by
//! default). Every field has a default, so a missing file or a partial file is
//! fine; values that cannot be used are rejected rather than silently replaced.

use crate::error::{DayPlotError, Result};
use crate::frames::{NormalizeOptions, RatePolicy};
use crate::timevals::{DayPeriod, SECONDS_IN_A_DAY};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "dayplot_config.json";

/// Whether supplied pixel rates are trusted or recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateCheck {
    #[default]
    Trust,
    Verify,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Length of the time-of-day period in seconds
    pub seconds_per_day: i64,

    /// Figure width in pixels
    pub width: u32,

    /// Figure height in pixels
    pub height: u32,

    pub x_axis_label: String,

    pub y_axis_label: String,

    /// "trust" passes pixels_per_second through, "verify" recomputes it
    pub rate_check: RateCheck,

    /// Allowed |n_pixels / acq_time_s - pixels_per_second| when verifying
    pub rate_tolerance: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            seconds_per_day: SECONDS_IN_A_DAY,
            width: 800,
            height: 300,
            x_axis_label: "Time".to_string(),
            y_axis_label: "Pixels / s".to_string(),
            rate_check: RateCheck::Trust,
            rate_tolerance: 0.01,
        }
    }
}

impl PlotConfig {
    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlotConfig = serde_json::from_str(json)
            .map_err(|e| DayPlotError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file, using defaults if it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No {} found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(DayPlotError::Config(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.period()?;
        if self.width == 0 || self.height == 0 {
            return Err(DayPlotError::Config(format!(
                "Figure size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.rate_tolerance.is_finite() || self.rate_tolerance < 0.0 {
            return Err(DayPlotError::Config(format!(
                "rate_tolerance must be a non-negative number, got {}",
                self.rate_tolerance
            )));
        }
        Ok(())
    }

    pub fn period(&self) -> Result<DayPeriod> {
        Ok(DayPeriod::new(self.seconds_per_day)?)
    }

    pub fn normalize_options(&self) -> Result<NormalizeOptions> {
        let rate_policy = match self.rate_check {
            RateCheck::Trust => RatePolicy::Trust,
            RateCheck::Verify => RatePolicy::Verify {
                tolerance: self.rate_tolerance,
            },
        };
        Ok(NormalizeOptions {
            period: self.period()?,
            rate_policy,
        })
    }
}
