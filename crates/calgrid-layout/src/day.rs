//! Day-view geometry for event cells.
//!
//! Translates an event's time range into bounded pixel geometry inside a
//! 24-hour day column. Positions and heights are rounded to one decimal and
//! clamped so a cell can never overflow the column.

use calgrid_core::{CalendarEvent, Rgb};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cell::{CellFlags, DEFAULT_FILL, Resizability, date_label};
use crate::context::{DayContext, ViewMode};
use crate::size::SizeBucket;

/// Rounds to one decimal place, the precision the renderer works at.
fn round1(px: f32) -> f32 {
    (px * 10.0).round() / 10.0
}

/// Presentation of one event in a day column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    /// Pixel offset from the top of the day column.
    pub position: f32,
    /// Pixel height of the cell.
    pub height: f32,
    /// Responsive size bucket derived from the height.
    pub size: SizeBucket,
    /// The cell's date label.
    pub label: String,
    /// Fill color for the cell body.
    pub fill: Rgb,
    /// Resize affordances.
    pub resize: Resizability,
    /// Display flags copied from the event.
    pub flags: CellFlags,
}

impl DayCell {
    /// Derives the day-column presentation of an event.
    ///
    /// The position is the event's offset from the day start in hours, scaled
    /// to pixels and clamped at zero. The height is the event duration scaled
    /// to pixels, clamped to the space remaining below the position.
    pub fn derive(event: &CalendarEvent, ctx: &DayContext<'_>) -> Self {
        let metrics = ctx.metrics;

        let start_hours = ctx.day.window.hours_from_start(event.start.to_utc_datetime()) as f32;
        let position = round1(start_hours * metrics.pixels_per_hour).max(0.0);

        let duration_seconds =
            (event.end.to_utc_datetime() - event.start.to_utc_datetime()).num_seconds();
        let duration_hours = duration_seconds as f32 / 3600.0;
        let max_height = (metrics.day_height() - position).max(0.0);
        let height = round1(duration_hours * metrics.pixels_per_hour).clamp(0.0, max_height);

        let size = SizeBucket::from_height(height);
        trace!(event = %event.id, position, height, size = size.as_str(), "derived day cell");

        Self {
            position,
            height,
            size,
            label: date_label(event, size),
            fill: event.color.unwrap_or(DEFAULT_FILL),
            resize: Resizability::derive(event, ViewMode::Day),
            flags: CellFlags::derive(event),
        }
    }
}
