//! The event store.
//!
//! [`EventStore`] is the only writer of the event collection. Every
//! mutation builds the complete next collection, publishes it once to all
//! feeds, then writes it through to persistence (client) or the transfer
//! slot (prerender). Subscribers therefore never see a half-applied change.

mod add;
mod relocate;
mod remove;
mod reorder;
mod update;

use std::sync::{Arc, Mutex, PoisonError};

use calgrid_core::{
    CalGridError, CalGridResult, DaySlot, Event, EventCollection, EventId, NewEvent,
};
use chrono::NaiveDate;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::environment::{Environment, InitialEvents, InitialSource};
use crate::feed::EventFeed;
use crate::persistence::Persistence;
use crate::transfer::TransferState;

/// One published version of the collection.
pub type Snapshot = Arc<EventCollection>;

/// Result of a drag move or reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Reordered,
    Moved { from: NaiveDate, to: NaiveDate },
    /// Nothing to do, e.g. a drop on a padding cell
    Ignored,
}

/// Where snapshots go after they are published.
enum Sink {
    Persist(Persistence),
    Transfer(TransferState),
}

pub struct EventStore {
    /// Authoritative state; the lock also orders publishes
    state: Mutex<Snapshot>,
    tx: watch::Sender<Snapshot>,
    sink: Sink,
    source: InitialSource,
}

impl EventStore {
    pub fn new(environment: Environment) -> Self {
        let initial = InitialEvents::resolve(&environment);
        let source = initial.source();
        let snapshot: Snapshot = Arc::new(EventCollection::new(initial.into_events()));

        let sink = match environment {
            Environment::Client { persistence, .. } => Sink::Persist(persistence),
            Environment::Prerender { transfer, .. } => Sink::Transfer(transfer),
        };

        let (tx, _) = watch::channel(Arc::clone(&snapshot));
        let store = EventStore {
            state: Mutex::new(Arc::clone(&snapshot)),
            tx,
            sink,
            source,
        };

        // A seed only lives in the one-shot transfer slot, and the prerender
        // pass must hand its state over even if nothing changes
        let capture = match store.sink {
            Sink::Transfer(_) => true,
            Sink::Persist(_) => source == InitialSource::Seeded,
        };
        if capture {
            store.write_through(&snapshot);
        }
        store
    }

    /// Which origin the first snapshot came from.
    pub fn initialized_from(&self) -> InitialSource {
        self.source
    }

    pub fn subscribe(&self) -> EventFeed {
        EventFeed::new(self.tx.subscribe())
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.state.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Events on a calendar day, in display order.
    pub fn events_for_day(&self, date: NaiveDate) -> Vec<Event> {
        self.snapshot().for_day(date).into_iter().cloned().collect()
    }

    /// Append an event, assigning an id if it has none. Returns the event
    /// as stored.
    pub fn add(&self, event: NewEvent) -> Event {
        self.commit("add", |current| {
            let (next, added) = add::append(current, event);
            (Some(next), added)
        })
    }

    /// Replace the event with the same id, keeping its position.
    pub fn update(&self, event: Event) -> CalGridResult<()> {
        let id = event.id.clone();
        self.commit("update", |current| match update::replace(current, event) {
            Some(next) => (Some(next), Ok(())),
            None => (None, Err(CalGridError::NotFound(id))),
        })
        .inspect_err(|e| warn!(error = %e, "Update ignored"))
    }

    /// Apply a create/edit dialog result: events that carry an id are
    /// edits, the rest are new.
    pub fn submit(&self, event: NewEvent) -> CalGridResult<Event> {
        match event.id.clone() {
            Some(id) => {
                let edited = event.with_id(id);
                self.update(edited.clone())?;
                Ok(edited)
            }
            None => Ok(self.add(event)),
        }
    }

    /// Remove the event with the same id. Removing an absent event does
    /// nothing. Returns whether an event was removed.
    pub fn remove(&self, event: &Event) -> bool {
        self.remove_by_id(&event.id)
    }

    /// An absent id publishes nothing, so feeds see no new snapshot.
    pub fn remove_by_id(&self, id: &EventId) -> bool {
        self.commit("remove", |current| match remove::without(current, id) {
            Some(next) => (Some(next), true),
            None => (None, false),
        })
    }

    /// Move one of a day's events from `from` to `to` within that day.
    /// Returns whether the order changed.
    pub fn reorder_day(&self, day: NaiveDate, from: usize, to: usize) -> bool {
        self.commit("reorder", |current| match reorder::reorder_day(current, day, from, to) {
            Some(next) => (Some(next), true),
            None => (None, false),
        })
    }

    /// Move an event onto a grid cell. Padding cells are not drop targets.
    pub fn move_to_slot(&self, id: &EventId, slot: DaySlot) -> CalGridResult<MoveOutcome> {
        match slot {
            DaySlot::Day(date) => self.move_to_date(id, date),
            DaySlot::Empty => Ok(MoveOutcome::Ignored),
        }
    }

    /// Reassign an event's date. All other fields stay as they are.
    pub fn move_to_date(&self, id: &EventId, date: NaiveDate) -> CalGridResult<MoveOutcome> {
        self.commit("move", |current| match relocate::retarget(current, id, date) {
            Some((next, from)) => (Some(next), Ok(MoveOutcome::Moved { from, to: date })),
            None => (None, Err(CalGridError::NotFound(id.clone()))),
        })
        .inspect_err(|e| warn!(error = %e, "Move ignored"))
    }

    /// Run `mutate` against the current snapshot. If it yields a new
    /// collection, publish it and write it through.
    fn commit<T>(
        &self,
        op: &'static str,
        mutate: impl FnOnce(&EventCollection) -> (Option<EventCollection>, T),
    ) -> T {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let (next, output) = mutate(&**state);

        if let Some(next) = next {
            let next: Snapshot = Arc::new(next);
            *state = Arc::clone(&next);
            self.tx.send_replace(Arc::clone(&next));
            debug!(op, events = next.len(), "Published snapshot");
            self.write_through(&next);
        }
        output
    }

    /// Best effort: failures are logged and never undo the mutation.
    fn write_through(&self, snapshot: &Snapshot) {
        let result = match &self.sink {
            Sink::Persist(persistence) => persistence.save(snapshot),
            Sink::Transfer(transfer) => transfer.set_events(snapshot.as_slice()),
        };
        if let Err(e) = result {
            warn!(error = %e, "Failed to write events through");
        }
    }
}
