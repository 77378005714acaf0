//! Append a new event.

use calgrid_core::{Event, EventCollection, EventId, NewEvent};
use tracing::warn;

/// Append `event` with a unique id. A missing or already-taken id is
/// replaced by a freshly generated one.
pub(super) fn append(current: &EventCollection, event: NewEvent) -> (EventCollection, Event) {
    let id = match event.id.clone() {
        Some(id) if !current.contains(&id) => id,
        Some(taken) => {
            warn!(id = %taken, "Event id already in use, assigning a new one");
            unique_id(current)
        }
        None => unique_id(current),
    };

    let event = event.with_id(id);
    let mut events = current.to_vec();
    events.push(event.clone());
    (EventCollection::new(events), event)
}

fn unique_id(current: &EventCollection) -> EventId {
    loop {
        let id = EventId::generate();
        if !current.contains(&id) {
            return id;
        }
    }
}
