//! Label strings for event cells.
//!
//! Cells show either a single start label ("10:00") or a start-end range
//! ("10:00 - 11:30"), depending on how much room the cell has. All-day events
//! collapse to a fixed label in either case.

use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::EventTime;

/// Label used for all-day events in place of a time.
pub const ALL_DAY_LABEL: &str = "All day";

/// Time format preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// 24-hour format (e.g., "14:30").
    #[default]
    H24,
    /// 12-hour format with AM/PM (e.g., "2:30 PM").
    H12,
}

/// Configuration options for label formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelOptions {
    /// Time format preference ("24h" or "12h").
    pub time_format: TimeFormat,
    /// Hour separator character (e.g., ":", "h", "H").
    pub hour_separator: String,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::H24,
            hour_separator: ":".to_string(),
        }
    }
}

impl LabelOptions {
    /// Sets the time format.
    #[must_use]
    pub fn with_time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    /// Sets the hour separator.
    #[must_use]
    pub fn with_hour_separator(mut self, separator: impl Into<String>) -> Self {
        self.hour_separator = separator.into();
        self
    }
}

/// Formats a single event time as a label in the given display timezone.
///
/// All-day times render as [`ALL_DAY_LABEL`].
pub fn time_label_in<Tz>(time: &EventTime, tz: &Tz, options: &LabelOptions) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match time {
        EventTime::AllDay(_) => ALL_DAY_LABEL.to_string(),
        EventTime::DateTime(dt) => {
            let local = dt.with_timezone(tz);
            let sep = &options.hour_separator;
            match options.time_format {
                TimeFormat::H24 => local.format(&format!("%H{}%M", sep)).to_string(),
                TimeFormat::H12 => local.format(&format!("%I{}%M %p", sep)).to_string(),
            }
        }
    }
}

/// Formats a start-end range label in the given display timezone.
///
/// If either side is all-day, the whole label collapses to [`ALL_DAY_LABEL`].
pub fn range_label_in<Tz>(
    start: &EventTime,
    end: &EventTime,
    tz: &Tz,
    options: &LabelOptions,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if start.is_all_day() || end.is_all_day() {
        return ALL_DAY_LABEL.to_string();
    }
    format!(
        "{} - {}",
        time_label_in(start, tz, options),
        time_label_in(end, tz, options)
    )
}
