//! Time types for calendar events and grid cells.
//!
//! This module provides [`EventTime`] for representing event start/end times
//! (which may be either a specific datetime or an all-day date),
//! [`TimeWindow`] for half-open time ranges, and [`CalendarDay`] for a single
//! rendered day cell in a grid view.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Represents the time of a calendar event.
///
/// Calendar events can have two types of times:
/// - **DateTime**: A specific point in time (with timezone, stored as UTC)
/// - **AllDay**: A date without a specific time (all-day events)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum EventTime {
    /// A specific datetime, stored in UTC.
    DateTime(DateTime<Utc>),
    /// An all-day event date (no specific time).
    AllDay(NaiveDate),
}

impl EventTime {
    /// Creates a new `EventTime::DateTime` from a UTC datetime.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }

    /// Creates a new `EventTime::DateTime` from a datetime in any timezone.
    pub fn from_local<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self::DateTime(dt.with_timezone(&Utc))
    }

    /// Creates a new `EventTime::AllDay` from a date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::AllDay(date)
    }

    /// Returns `true` if this is an all-day event time.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay(_))
    }

    /// Converts to a UTC datetime for comparison and geometry purposes.
    ///
    /// For all-day events, returns midnight UTC on that date.
    pub fn to_utc_datetime(&self) -> DateTime<Utc> {
        match self {
            Self::DateTime(dt) => *dt,
            Self::AllDay(date) => date.and_hms_opt(0, 0, 0).expect("valid time").and_utc(),
        }
    }

    /// Returns the date portion of this event time.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::DateTime(dt) => dt.date_naive(),
            Self::AllDay(date) => *date,
        }
    }
}

impl PartialOrd for EventTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_utc_datetime().cmp(&other.to_utc_datetime())
    }
}

/// A half-open time range `[start, end)` in UTC.
///
/// Used both for day cells (one day's extent) and for the overall extent of
/// a rendered week row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Start of the window (inclusive).
    pub start: DateTime<Utc>,
    /// End of the window (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// # Panics
    ///
    /// Panics if `start` is after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        assert!(start <= end, "TimeWindow start must be <= end");
        Self { start, end }
    }

    /// Creates a time window for a single day in the given timezone.
    pub fn for_date<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Self {
        let start = tz
            .from_local_datetime(&date.and_hms_opt(0, 0, 0).expect("valid time"))
            .single()
            .expect("unambiguous local time")
            .with_timezone(&Utc);
        let end = tz
            .from_local_datetime(
                &date
                    .succ_opt()
                    .expect("valid successor date")
                    .and_hms_opt(0, 0, 0)
                    .expect("valid time"),
            )
            .single()
            .expect("unambiguous local time")
            .with_timezone(&Utc);
        Self { start, end }
    }

    /// Returns the duration of this time window.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Checks if a datetime falls within this window.
    ///
    /// Uses half-open interval semantics: `[start, end)`.
    pub fn contains(&self, dt: DateTime<Utc>) -> bool {
        self.start <= dt && dt < self.end
    }

    /// Checks if an event time falls within this window.
    ///
    /// For all-day events, checks if midnight UTC falls within the window.
    pub fn contains_event_time(&self, et: &EventTime) -> bool {
        self.contains(et.to_utc_datetime())
    }

    /// Checks if an event with given start and end times overlaps this window.
    ///
    /// An event overlaps if it starts before the window ends AND ends after
    /// the window starts.
    pub fn overlaps_event(&self, event_start: &EventTime, event_end: &EventTime) -> bool {
        let start = event_start.to_utc_datetime();
        let end = event_end.to_utc_datetime();
        start < self.end && end > self.start
    }

    /// Returns the signed offset of `dt` from the window start, in fractional
    /// hours.
    ///
    /// Negative when `dt` precedes the window. Sub-second precision is not
    /// kept; grid geometry never needs it.
    pub fn hours_from_start(&self, dt: DateTime<Utc>) -> f64 {
        (dt - self.start).num_seconds() as f64 / 3600.0
    }
}

/// A single day cell supplied by the calendar grid.
///
/// Carries the calendar date together with the concrete UTC window the cell
/// covers in the grid's display timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The calendar date of the cell.
    pub date: NaiveDate,
    /// The day's extent as a half-open UTC window.
    pub window: TimeWindow,
}

impl CalendarDay {
    /// Creates a day cell for `date` in the given display timezone.
    pub fn new<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Self {
        Self {
            date,
            window: TimeWindow::for_date(date, tz),
        }
    }

    /// Checks if a UTC instant falls within this day.
    pub fn contains(&self, dt: DateTime<Utc>) -> bool {
        self.window.contains(dt)
    }

    /// Checks if an event time falls within this day.
    pub fn contains_event_time(&self, et: &EventTime) -> bool {
        self.window.contains_event_time(et)
    }
}

/// Returns the overall window of a rendered week row: from the first day's
/// start to the last day's end.
///
/// The day list is assumed ordered; an empty list yields `None`.
pub fn week_window(days: &[CalendarDay]) -> Option<TimeWindow> {
    let first = days.first()?;
    let last = days.last()?;
    Some(TimeWindow {
        start: first.window.start,
        end: last.window.end,
    })
}
