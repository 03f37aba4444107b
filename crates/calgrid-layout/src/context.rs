//! Rendering contexts consumed by cell derivations.
//!
//! A context bundles what the grid currently shows: the view mode, the
//! pixel scale for day columns, and the day cells of a week/month row.
//! Contexts borrow from the grid; cells are derived per event per context
//! and discarded when the context is no longer rendered.

use calgrid_core::CalendarDay;
use serde::{Deserialize, Serialize};

/// The grid view an event cell is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Single-day column view.
    Day,
    /// Week row view.
    Week,
    /// Month grid view.
    Month,
}

impl ViewMode {
    /// Returns true for the single-day column view.
    pub fn is_daily(self) -> bool {
        matches!(self, Self::Day)
    }

    /// Returns true for the month grid view.
    pub fn is_monthly(self) -> bool {
        matches!(self, Self::Month)
    }
}

/// Pixel scaling for day columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Vertical pixels per hour of event time.
    pub pixels_per_hour: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            pixels_per_hour: 48.0,
        }
    }
}

impl GridMetrics {
    /// Creates metrics with the given pixel-per-hour scale.
    pub fn new(pixels_per_hour: f32) -> Self {
        Self { pixels_per_hour }
    }

    /// Total pixel height of a 24-hour day column.
    pub fn day_height(&self) -> f32 {
        24.0 * self.pixels_per_hour
    }
}

/// Rendering context for a day column.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    /// The day the column displays.
    pub day: &'a CalendarDay,
    /// Pixel scaling for the column.
    pub metrics: GridMetrics,
}

impl<'a> DayContext<'a> {
    /// Creates a day-column context.
    pub fn new(day: &'a CalendarDay, metrics: GridMetrics) -> Self {
        Self { day, metrics }
    }
}

/// Rendering context for a week or month row.
///
/// `mode` distinguishes the week view from the month grid; the day list is
/// the row's visible day cells, in order.
#[derive(Debug, Clone, Copy)]
pub struct WeekContext<'a> {
    /// The row's day cells, in display order.
    pub days: &'a [CalendarDay],
    /// Week or month view.
    pub mode: ViewMode,
}

impl<'a> WeekContext<'a> {
    /// Creates a week/month-row context.
    pub fn new(days: &'a [CalendarDay], mode: ViewMode) -> Self {
        Self { days, mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_queries() {
        assert!(ViewMode::Day.is_daily());
        assert!(!ViewMode::Day.is_monthly());
        assert!(!ViewMode::Week.is_daily());
        assert!(!ViewMode::Week.is_monthly());
        assert!(ViewMode::Month.is_monthly());
        assert!(!ViewMode::Month.is_daily());
    }

    #[test]
    fn view_mode_serde_names() {
        assert_eq!(serde_json::to_string(&ViewMode::Month).unwrap(), "\"month\"");
        let parsed: ViewMode = serde_json::from_str("\"week\"").unwrap();
        assert_eq!(parsed, ViewMode::Week);
    }

    #[test]
    fn default_metrics() {
        let metrics = GridMetrics::default();
        assert_eq!(metrics.pixels_per_hour, 48.0);
        assert_eq!(metrics.day_height(), 1152.0);
    }

    #[test]
    fn day_height_scales_with_pph() {
        assert_eq!(GridMetrics::new(10.0).day_height(), 240.0);
    }
}
