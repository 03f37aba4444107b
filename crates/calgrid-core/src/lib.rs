//! Core calendar model: times, days, events, colors, labels

pub mod color;
pub mod event;
pub mod label;
pub mod time;
pub mod tracing;

pub use color::{ColorError, Rgb};
pub use event::CalendarEvent;
pub use label::{ALL_DAY_LABEL, LabelOptions, TimeFormat, range_label_in, time_label_in};
pub use time::{CalendarDay, EventTime, TimeWindow, week_window};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
