//! Time constants and the day period used for time-of-day normalization

use thiserror::Error;

pub const SECONDS_IN_A_MINUTE: i64 = 60;

pub const MINUTES_IN_AN_HOUR: i64 = 60;

pub const SECONDS_IN_AN_HOUR: i64 = SECONDS_IN_A_MINUTE * MINUTES_IN_AN_HOUR;

pub const HOURS_IN_A_DAY: i64 = 24;

pub const SECONDS_IN_A_DAY: i64 = HOURS_IN_A_DAY * MINUTES_IN_AN_HOUR * SECONDS_IN_A_MINUTE;

/// Longest accepted period: one week, i.e. at most 169 hourly ticks
pub const MAX_PERIOD_SECONDS: i64 = 7 * SECONDS_IN_A_DAY;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("Day period must be a positive number of seconds, got {0}")]
    NotPositive(i64),

    #[error("Day period must be at most {max} seconds, got {seconds}")]
    TooLong { seconds: i64, max: i64 },
}

/// Length of the period absolute timestamps are reduced into
///
/// Defaults to [`SECONDS_IN_A_DAY`]. Smaller periods are mostly useful in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPeriod(i64);

impl DayPeriod {
    pub fn new(seconds: i64) -> Result<Self, PeriodError> {
        if seconds <= 0 {
            Err(PeriodError::NotPositive(seconds))
        } else if seconds > MAX_PERIOD_SECONDS {
            Err(PeriodError::TooLong {
                seconds,
                max: MAX_PERIOD_SECONDS,
            })
        } else {
            Ok(Self(seconds))
        }
    }

    pub fn seconds(&self) -> i64 {
        self.0
    }

    /// Reduce an absolute timestamp to an offset in `[0, period)`
    ///
    /// Uses Euclidean remainder so negative timestamps still land inside the period.
    pub fn time_of_day(&self, timestamp: i64) -> i64 {
        timestamp.rem_euclid(self.0)
    }

    /// One tick per hour from 0 up to and including the end of the period
    pub fn hour_tickmarks(&self) -> Vec<i64> {
        (0..=self.0)
            .step_by(SECONDS_IN_AN_HOUR as usize)
            .collect()
    }
}

impl Default for DayPeriod {
    fn default() -> Self {
        Self(SECONDS_IN_A_DAY)
    }
}

/// Render seconds since midnight as `HH:MM:SS`
///
/// Fractional seconds are floored. Hours are not wrapped, so the end of the
/// day renders as `24:00:00` like the axis label does.
pub fn format_time_of_day(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as i64;
    let hours = total / SECONDS_IN_AN_HOUR;
    let minutes = (total % SECONDS_IN_AN_HOUR) / SECONDS_IN_A_MINUTE;
    let secs = total % SECONDS_IN_A_MINUTE;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
