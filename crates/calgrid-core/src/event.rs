//! Event types for calendar grids.
//!
//! This module provides [`CalendarEvent`], the read-only calendar entry the
//! presentation layer consumes: a time range, display color, interaction
//! flags, and precomputed label strings.

use chrono::{Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Rgb;
use crate::label::{LabelOptions, time_label_in};
use crate::time::EventTime;

/// A calendar entry with a time range and display metadata.
///
/// Owned by the calendar's event store; the presentation layer only reads it.
/// Labels are precomputed so cells never re-derive strings per frame;
/// [`CalendarEvent::new`] fills them in UTC with default options, and
/// [`CalendarEvent::label_in`] re-derives them for a display timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique identifier for the event.
    pub id: String,
    /// The event title.
    pub title: String,
    /// When the event starts.
    pub start: EventTime,
    /// When the event ends (exclusive).
    pub end: EventTime,
    /// Display color; `None` falls back to the renderer's default fill.
    pub color: Option<Rgb>,
    /// Whether the user may resize this event at all.
    pub resizable: bool,
    /// Whether the event spans a full week row.
    pub weekly: bool,
    /// Whether the event is currently selected.
    pub selected: bool,
    /// Whether a resize gesture is in progress on this event.
    pub resizing: bool,
    /// Whether a drag gesture is in progress on this event.
    pub dragging: bool,
    /// Precomputed label for the event start.
    pub start_label: String,
    /// Precomputed label for the event end.
    pub end_label: String,
}

impl CalendarEvent {
    /// Creates a new event with required fields.
    ///
    /// Labels are precomputed in UTC with default [`LabelOptions`]; use
    /// [`CalendarEvent::label_in`] or [`CalendarEvent::with_labels`] to
    /// override.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: EventTime,
        end: EventTime,
    ) -> Self {
        let options = LabelOptions::default();
        let start_label = time_label_in(&start, &Utc, &options);
        let end_label = time_label_in(&end, &Utc, &options);
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            color: None,
            resizable: false,
            weekly: false,
            selected: false,
            resizing: false,
            dragging: false,
            start_label,
            end_label,
        }
    }

    /// Returns true if this is an all-day event.
    pub fn is_all_day(&self) -> bool {
        self.start.is_all_day()
    }

    /// Returns true if the event covers more than one calendar date.
    ///
    /// The end is exclusive, so an event ending exactly at midnight still
    /// belongs to the preceding day.
    pub fn is_multi_day(&self) -> bool {
        let start = self.start.to_utc_datetime();
        let end = self.end.to_utc_datetime();
        if end <= start {
            return false;
        }
        (end - Duration::seconds(1)).date_naive() != start.date_naive()
    }

    /// Returns the duration of the event in minutes.
    pub fn duration_minutes(&self) -> i64 {
        let duration = self.end.to_utc_datetime() - self.start.to_utc_datetime();
        duration.num_minutes()
    }

    /// Builder method to set the display color.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder method to mark the event resizable.
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Builder method to mark the event as spanning a full week row.
    pub fn with_weekly(mut self, weekly: bool) -> Self {
        self.weekly = weekly;
        self
    }

    /// Builder method to mark the event selected.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Builder method to mark a resize gesture in progress.
    pub fn with_resizing(mut self, resizing: bool) -> Self {
        self.resizing = resizing;
        self
    }

    /// Builder method to mark a drag gesture in progress.
    pub fn with_dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    /// Builder method to set both labels explicitly.
    pub fn with_labels(mut self, start_label: impl Into<String>, end_label: impl Into<String>) -> Self {
        self.start_label = start_label.into();
        self.end_label = end_label.into();
        self
    }

    /// Builder method to recompute both labels for a display timezone.
    pub fn label_in<Tz>(mut self, tz: &Tz, options: &LabelOptions) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.start_label = time_label_in(&self.start, tz, options);
        self.end_label = time_label_in(&self.end, tz, options);
        self
    }
}
