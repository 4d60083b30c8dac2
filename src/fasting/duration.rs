//! Elapsed-time computation for a fasting window.
//!
//! Both endpoints are plain wall-clock values with no timezone. A break-fast
//! that falls before the last meal is read as "the next day", so an evening
//! meal followed by a morning break-fast yields the overnight duration.

use crate::error::{FastingError, Result};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Length of the reference window used by progress indicators and the gauge.
pub const REFERENCE_WINDOW_HOURS: f64 = 24.0;

const SECONDS_PER_DAY: i64 = 86_400;

pub const DEFAULT_LAST_MEAL: &str = "20:00";
pub const DEFAULT_BREAK_FAST: &str = "10:00";

/// How two times of day are placed on the calendar before subtracting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayAnchor {
    /// Both times on the anchor date; the calculator wraps overnight fasts.
    #[default]
    SameDay,
    /// Last meal on the day before the anchor date, break-fast on the anchor date.
    PreviousDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FastingWindow {
    pub last_meal: NaiveDateTime,
    pub break_fast: NaiveDateTime,
}

impl FastingWindow {
    pub fn new(last_meal: NaiveDateTime, break_fast: NaiveDateTime) -> Self {
        Self {
            last_meal,
            break_fast,
        }
    }

    /// Combine two times of day with an anchor date.
    pub fn from_times(
        last_meal: NaiveTime,
        break_fast: NaiveTime,
        date: NaiveDate,
        anchor: DayAnchor,
    ) -> Result<Self> {
        let last_meal_date = match anchor {
            DayAnchor::SameDay => date,
            DayAnchor::PreviousDay => date
                .checked_sub_days(Days::new(1))
                .ok_or_else(|| FastingError::InvalidDate(date.to_string()))?,
        };

        Ok(Self::new(
            last_meal_date.and_time(last_meal),
            date.and_time(break_fast),
        ))
    }

    pub fn hours(&self) -> f64 {
        calculate_fasting_hours(self.last_meal, self.break_fast)
    }
}

/// Hours between the last meal and breaking the fast.
///
/// If `break_fast` is strictly earlier than `last_meal` one day is added to
/// the difference. Equal timestamps give `0.0`.
pub fn calculate_fasting_hours(last_meal: NaiveDateTime, break_fast: NaiveDateTime) -> f64 {
    let mut secs = (break_fast - last_meal).num_seconds();
    if break_fast < last_meal {
        secs += SECONDS_PER_DAY;
    }

    secs as f64 / 3600.0
}

pub fn parse_time_of_day(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| FastingError::InvalidTime(input.to_string()))
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| FastingError::InvalidDate(input.to_string()))
}

/// Reject values no fasting window can produce.
pub fn validate_hours(hours: f64) -> Result<f64> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(FastingError::InvalidHours(hours));
    }
    Ok(hours)
}

/// Share of the 24-hour reference window, clamped to `1.0`.
pub fn progress_fraction(hours: f64) -> f64 {
    (hours / REFERENCE_WINDOW_HOURS).clamp(0.0, 1.0)
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn format_hours_minutes(hours: f64) -> String {
    let total_mins = (hours * 60.0).round() as i64;
    let h = total_mins / 60;
    let m = total_mins % 60;
    if h > 0 {
        format!("{}h {}m", h, m)
    } else {
        format!("{}m", m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        parse_date(date)
            .unwrap()
            .and_time(parse_time_of_day(time).unwrap())
    }

    #[test]
    fn test_overnight_fast_wraps_one_day() {
        let hours = calculate_fasting_hours(at("2026-03-01", "20:00"), at("2026-03-01", "10:00"));
        assert_eq!(hours, 14.0);
    }

    #[test]
    fn test_same_day_fast_has_no_adjustment() {
        let hours = calculate_fasting_hours(at("2026-03-01", "08:00"), at("2026-03-01", "14:30"));
        assert_eq!(hours, 6.5);
    }

    #[test]
    fn test_identical_timestamps_yield_zero() {
        let hours = calculate_fasting_hours(at("2026-03-01", "08:00"), at("2026-03-01", "08:00"));
        assert_eq!(hours, 0.0);
    }

    #[test]
    fn test_overnight_wrap_at_last_representable_date() {
        let last_meal = NaiveDate::MAX.and_time(parse_time_of_day("20:00").unwrap());
        let break_fast = NaiveDate::MAX.and_time(parse_time_of_day("10:00").unwrap());
        assert_eq!(calculate_fasting_hours(last_meal, break_fast), 14.0);
    }

    #[test]
    fn test_previous_day_anchor_can_exceed_a_day() {
        let date = parse_date("2026-03-02").unwrap();
        let window = FastingWindow::from_times(
            parse_time_of_day("08:00").unwrap(),
            parse_time_of_day("10:00").unwrap(),
            date,
            DayAnchor::PreviousDay,
        )
        .unwrap();
        assert_eq!(window.hours(), 26.0);
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert_eq!(
            parse_time_of_day("8pm"),
            Err(FastingError::InvalidTime("8pm".to_string()))
        );
        assert!(parse_time_of_day("24:00").is_err());
    }

    #[test]
    fn test_validate_hours() {
        assert_eq!(validate_hours(0.0), Ok(0.0));
        assert!(validate_hours(-0.5).is_err());
        assert!(validate_hours(f64::NAN).is_err());
        assert!(validate_hours(f64::INFINITY).is_err());
    }

    #[test]
    fn test_progress_fraction_is_clamped() {
        assert_eq!(progress_fraction(12.0), 0.5);
        assert_eq!(progress_fraction(30.0), 1.0);
    }

    #[test]
    fn test_format_hours_minutes() {
        assert_eq!(format_hours_minutes(14.0), "14h 0m");
        assert_eq!(format_hours_minutes(0.75), "45m");
        assert_eq!(format_hours(9.75), "9.75");
    }
}
