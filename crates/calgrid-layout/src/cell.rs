//! Derivations shared by day and week/month cells.
//!
//! Both cell kinds copy the event's display flags, gate resize affordances
//! by axis and view mode, and pick between the start label and the full
//! range label based on the cell's size bucket.

use calgrid_core::{CalendarEvent, Rgb};
use serde::{Deserialize, Serialize};

use crate::context::ViewMode;
use crate::size::SizeBucket;

/// Fill used for events without a stored color.
pub const DEFAULT_FILL: Rgb = Rgb::new(100, 150, 200);

/// Axis-specific resize affordances for a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resizability {
    /// Whether the cell exposes horizontal (date-span) resize handles.
    pub horizontal: bool,
    /// Whether the cell exposes vertical (time-span) resize handles.
    pub vertical: bool,
}

impl Resizability {
    /// Derives the resize affordances for an event in a view mode.
    ///
    /// Horizontal resize is disabled in the day view, always available in
    /// the month view, and available in the week view only for events that
    /// span the full week row. Vertical resize is the converse: disabled in
    /// the month view and for week-spanning events. Both axes require the
    /// event itself to be resizable.
    pub fn derive(event: &CalendarEvent, mode: ViewMode) -> Self {
        if !event.resizable {
            return Self::default();
        }

        let horizontal = match mode {
            ViewMode::Day => false,
            ViewMode::Month => true,
            ViewMode::Week => event.weekly,
        };
        let vertical = !mode.is_monthly() && !event.weekly;

        Self {
            horizontal,
            vertical,
        }
    }
}

/// Copies of the event's display flags carried on every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellFlags {
    /// The event is an all-day event.
    pub all_day: bool,
    /// The event covers more than one calendar date.
    pub multi_day: bool,
    /// The event spans a full week row.
    pub weekly: bool,
    /// The event is selected.
    pub selected: bool,
    /// A resize gesture is in progress.
    pub resizing: bool,
    /// A drag gesture is in progress.
    pub dragging: bool,
}

impl CellFlags {
    /// Copies the display flags off an event.
    pub fn derive(event: &CalendarEvent) -> Self {
        Self {
            all_day: event.is_all_day(),
            multi_day: event.is_multi_day(),
            weekly: event.weekly,
            selected: event.selected,
            resizing: event.resizing,
            dragging: event.dragging,
        }
    }
}

/// Picks the cell's date label from the event's precomputed labels.
///
/// The smallest bucket only has room for the start label; larger buckets
/// show the full range. All-day events always collapse to the start label.
pub fn date_label(event: &CalendarEvent, size: SizeBucket) -> String {
    if size.is_2xs() || event.is_all_day() {
        event.start_label.clone()
    } else {
        format!("{} - {}", event.start_label, event.end_label)
    }
}
