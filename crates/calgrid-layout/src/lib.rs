//! Presentation-layer cell derivation for calendar day and week/month grids.
//!
//! Sits between a calendar's event store and its rendering templates: given
//! a [`CalendarEvent`](calgrid_core::CalendarEvent) and a rendering context,
//! derives the [`DayCell`] or [`WeekCell`] the template draws. Derivations
//! are pure; the rendering layer re-derives whenever an input changes.

pub mod cell;
pub mod context;
pub mod day;
pub mod size;
pub mod week;

pub use cell::{CellFlags, DEFAULT_FILL, Resizability, date_label};
pub use context::{DayContext, GridMetrics, ViewMode, WeekContext};
pub use day::DayCell;
pub use size::SizeBucket;
pub use week::{GridSpan, WeekCell};
