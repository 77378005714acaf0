//! Event form input.
//!
//! An [`EventDraft`] holds what the user typed into the create/edit dialog.
//! Only a draft that passes [`EventDraft::validate`] becomes a [`NewEvent`]
//! the store will accept.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::event::{format_time, parse_time, Event, EventId, NewEvent, Urgency};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub id: Option<EventId>,
    pub title: String,
    pub description: String,
    /// Raw "HH:MM" input, empty for no time
    pub time: String,
    pub urgency: Option<Urgency>,
    pub date: Option<NaiveDate>,
}

impl EventDraft {
    /// A blank draft for a new event on the clicked day.
    pub fn for_day(date: NaiveDate) -> Self {
        EventDraft {
            date: Some(date),
            ..Default::default()
        }
    }

    /// A draft pre-filled from an existing event, for editing.
    pub fn from_event(event: &Event) -> Self {
        EventDraft {
            id: Some(event.id.clone()),
            title: event.title.clone(),
            description: event.description.clone(),
            time: format_time(event.time),
            urgency: Some(event.urgency),
            date: Some(event.date),
        }
    }

    /// Check the form and build the create/edit result.
    ///
    /// Missing urgency falls back to `Medium` and a missing date to `today`.
    pub fn validate(self, today: NaiveDate) -> Result<NewEvent, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let raw_time = self.time.trim();
        let time = if raw_time.is_empty() {
            None
        } else {
            Some(parse_time(raw_time).ok_or_else(|| ValidationError::InvalidTime(raw_time.to_string()))?)
        };

        Ok(NewEvent {
            id: self.id,
            title: title.to_string(),
            description: self.description,
            time,
            urgency: self.urgency.unwrap_or_default(),
            date: self.date.unwrap_or(today),
        })
    }
}
