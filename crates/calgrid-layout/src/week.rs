//! Week/month-row geometry for event cells.
//!
//! Computes the grid column span of an event across a row of day cells, and
//! suppresses the fill of non-weekly events in the month grid so a single
//! title does not read as a multi-day bar.

use calgrid_core::{CalendarEvent, Rgb, week_window};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::cell::{CellFlags, DEFAULT_FILL, Resizability, date_label};
use crate::context::WeekContext;
use crate::size::SizeBucket;

/// A 1-based CSS grid column span across a row of day cells.
///
/// `start` and `end` are grid track lines: a span of `3 / 5` covers the
/// third and fourth day columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpan {
    /// First grid line (1-based).
    pub start: usize,
    /// One past the last covered grid line.
    pub end: usize,
}

impl GridSpan {
    /// The full-width span over `days` day columns.
    pub fn full(days: usize) -> Self {
        Self {
            start: 1,
            end: days + 1,
        }
    }
}

impl fmt::Display for GridSpan {
    /// Renders as a `grid-column` value, e.g. `"1 / 8"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.start, self.end)
    }
}

/// Presentation of one event in a week or month row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCell {
    /// Grid column span; `None` when the event misses the row entirely.
    pub span: Option<GridSpan>,
    /// Fill color; `None` renders transparent.
    pub fill: Option<Rgb>,
    /// The cell's date label.
    pub label: String,
    /// Resize affordances.
    pub resize: Resizability,
    /// Display flags copied from the event.
    pub flags: CellFlags,
}

impl WeekCell {
    /// Derives the week/month-row presentation of an event.
    pub fn derive(event: &CalendarEvent, ctx: &WeekContext<'_>) -> Self {
        Self {
            span: Self::grid_span(event, ctx),
            fill: Self::fill(event, ctx),
            // Row cells have no measured height; labels always get the
            // full-range form.
            label: date_label(event, SizeBucket::Md),
            resize: Resizability::derive(event, ctx.mode),
            flags: CellFlags::derive(event),
        }
    }

    /// Computes the event's grid column span within the row.
    ///
    /// Defaults to the full row width, then narrows each side to the day
    /// cell containing the corresponding endpoint. Events that do not
    /// intersect the row's overall window produce no span at all.
    fn grid_span(event: &CalendarEvent, ctx: &WeekContext<'_>) -> Option<GridSpan> {
        let week = week_window(ctx.days)?;
        if !week.overlaps_event(&event.start, &event.end) {
            trace!(event = %event.id, "event outside week row, no span");
            return None;
        }

        let start_utc = event.start.to_utc_datetime();
        let end_utc = event.end.to_utc_datetime();

        let mut span = GridSpan::full(ctx.days.len());
        if let Some(i) = ctx.days.iter().position(|day| day.contains(start_utc)) {
            span.start = i + 1;
        }
        if let Some(i) = ctx.days.iter().position(|day| day.contains(end_utc)) {
            span.end = i + 2;
        }
        Some(span)
    }

    /// Picks the fill color, suppressing it for non-weekly events in the
    /// month grid.
    fn fill(event: &CalendarEvent, ctx: &WeekContext<'_>) -> Option<Rgb> {
        if ctx.mode.is_monthly() && !event.weekly {
            return None;
        }
        Some(event.color.unwrap_or(DEFAULT_FILL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::{CalendarDay, EventTime};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use crate::context::ViewMode;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Mon Jun 2 through Sun Jun 8, 2025.
    fn week_days() -> Vec<CalendarDay> {
        (2..=8)
            .map(|d| CalendarDay::new(date(2025, 6, d), &Utc))
            .collect()
    }

    fn timed_event(start: DateTime<Utc>, end: DateTime<Utc>) -> CalendarEvent {
        CalendarEvent::new("evt-1", "Sync", EventTime::from_utc(start), EventTime::from_utc(end))
    }

    fn derive_in(event: &CalendarEvent, mode: ViewMode) -> WeekCell {
        let days = week_days();
        WeekCell::derive(event, &WeekContext::new(&days, mode))
    }

    mod spans {
        use super::*;

        #[test]
        fn full_week_event_spans_all_columns() {
            let event = CalendarEvent::new(
                "evt-w",
                "Sprint",
                EventTime::from_date(date(2025, 6, 2)),
                EventTime::from_date(date(2025, 6, 9)),
            )
            .with_weekly(true);
            let cell = derive_in(&event, ViewMode::Week);
            assert_eq!(cell.span, Some(GridSpan { start: 1, end: 8 }));
        }

        #[test]
        fn single_day_event_narrows_both_sides() {
            // Wednesday is the third day cell.
            let event = timed_event(utc(2025, 6, 4, 10, 0, 0), utc(2025, 6, 4, 11, 0, 0));
            let cell = derive_in(&event, ViewMode::Week);
            assert_eq!(cell.span, Some(GridSpan { start: 3, end: 4 }));
        }

        #[test]
        fn multi_day_event_spans_its_days() {
            // Tuesday 10:00 through Thursday 15:00.
            let event = timed_event(utc(2025, 6, 3, 10, 0, 0), utc(2025, 6, 5, 15, 0, 0));
            let cell = derive_in(&event, ViewMode::Week);
            assert_eq!(cell.span, Some(GridSpan { start: 2, end: 5 }));
        }

        #[test]
        fn event_entering_from_previous_week_keeps_default_start() {
            let event = timed_event(utc(2025, 5, 28, 9, 0, 0), utc(2025, 6, 4, 12, 0, 0));
            let cell = derive_in(&event, ViewMode::Week);
            assert_eq!(cell.span, Some(GridSpan { start: 1, end: 4 }));
        }

        #[test]
        fn event_leaving_into_next_week_keeps_default_end() {
            let event = timed_event(utc(2025, 6, 6, 10, 0, 0), utc(2025, 6, 12, 10, 0, 0));
            let cell = derive_in(&event, ViewMode::Week);
            assert_eq!(cell.span, Some(GridSpan { start: 5, end: 8 }));
        }

        #[test]
        fn event_outside_the_week_has_no_span() {
            let event = timed_event(utc(2025, 6, 20, 10, 0, 0), utc(2025, 6, 20, 11, 0, 0));
            let cell = derive_in(&event, ViewMode::Week);
            assert_eq!(cell.span, None);

            let before = timed_event(utc(2025, 5, 1, 10, 0, 0), utc(2025, 5, 1, 11, 0, 0));
            let cell = derive_in(&before, ViewMode::Month);
            assert_eq!(cell.span, None);
        }

        #[test]
        fn empty_row_has_no_span() {
            let event = timed_event(utc(2025, 6, 4, 10, 0, 0), utc(2025, 6, 4, 11, 0, 0));
            let cell = WeekCell::derive(&event, &WeekContext::new(&[], ViewMode::Week));
            assert_eq!(cell.span, None);
        }

        #[test]
        fn display_renders_grid_column_value() {
            assert_eq!(GridSpan { start: 3, end: 5 }.to_string(), "3 / 5");
            assert_eq!(GridSpan::full(7).to_string(), "1 / 8");
        }
    }

    mod fills {
        use super::*;
        use calgrid_core::Rgb;

        #[test]
        fn month_view_suppresses_non_weekly_fill() {
            let event = timed_event(utc(2025, 6, 4, 10, 0, 0), utc(2025, 6, 4, 11, 0, 0))
                .with_color(Rgb::new(255, 0, 171));
            let cell = derive_in(&event, ViewMode::Month);
            assert_eq!(cell.fill, None);
        }

        #[test]
        fn month_view_keeps_weekly_fill() {
            let event = timed_event(utc(2025, 6, 4, 10, 0, 0), utc(2025, 6, 4, 11, 0, 0))
                .with_color(Rgb::new(255, 0, 171))
                .with_weekly(true);
            let cell = derive_in(&event, ViewMode::Month);
            assert_eq!(cell.fill, Some(Rgb::new(255, 0, 171)));
        }

        #[test]
        fn week_view_never_suppresses() {
            let event = timed_event(utc(2025, 6, 4, 10, 0, 0), utc(2025, 6, 4, 11, 0, 0));
            let cell = derive_in(&event, ViewMode::Week);
            assert_eq!(cell.fill, Some(DEFAULT_FILL));
        }
    }

    #[test]
    fn row_cells_use_the_range_label() {
        let event = timed_event(utc(2025, 6, 4, 10, 0, 0), utc(2025, 6, 4, 11, 0, 0));
        let cell = derive_in(&event, ViewMode::Week);
        assert_eq!(cell.label, "10:00 - 11:00");
    }

    #[test]
    fn month_cells_resize_horizontally_only() {
        let event = timed_event(utc(2025, 6, 4, 10, 0, 0), utc(2025, 6, 4, 11, 0, 0))
            .with_resizable(true);
        let cell = derive_in(&event, ViewMode::Month);
        assert!(cell.resize.horizontal);
        assert!(!cell.resize.vertical);
    }

    #[test]
    fn serde_roundtrip() {
        let event = timed_event(utc(2025, 6, 4, 10, 0, 0), utc(2025, 6, 4, 11, 0, 0));
        let cell = derive_in(&event, ViewMode::Week);
        let json = serde_json::to_string(&cell).unwrap();
        let parsed: WeekCell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, parsed);
    }
}
