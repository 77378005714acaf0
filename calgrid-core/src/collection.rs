//! Ordered, immutable event collections.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::event::{Event, EventId};

/// One version of the full event list.
///
/// Order matters: it is the display order for events sharing a day and is
/// what drag-reordering rearranges. Collections are never changed in place;
/// the store builds a new one for every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCollection {
    events: Vec<Event>,
}

impl EventCollection {
    pub fn new(events: Vec<Event>) -> Self {
        EventCollection { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> HashSet<&EventId> {
        self.events.iter().map(|e| &e.id).collect()
    }

    /// Events on a calendar day, in collection order.
    pub fn for_day(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.is_on(date)).collect()
    }

    pub fn to_vec(&self) -> Vec<Event> {
        self.events.clone()
    }
}

impl From<Vec<Event>> for EventCollection {
    fn from(events: Vec<Event>) -> Self {
        EventCollection::new(events)
    }
}

impl<'a> IntoIterator for &'a EventCollection {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl FromIterator<Event> for EventCollection {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        EventCollection::new(iter.into_iter().collect())
    }
}

/// Drop events whose id was already seen, keeping the first occurrence.
/// Returns the deduplicated events and the ids that were dropped.
pub fn dedup_by_id(events: Vec<Event>) -> (Vec<Event>, Vec<EventId>) {
    let mut seen = HashSet::new();
    let mut dropped = Vec::new();

    let kept = events
        .into_iter()
        .filter(|event| {
            if seen.insert(event.id.clone()) {
                true
            } else {
                dropped.push(event.id.clone());
                false
            }
        })
        .collect();

    (kept, dropped)
}
