//! Replace an event in place.

use calgrid_core::{Event, EventCollection};

/// Swap in `event` at the position of the event with the same id.
/// `None` if no event has that id.
pub(super) fn replace(current: &EventCollection, event: Event) -> Option<EventCollection> {
    let index = current.position(&event.id)?;
    let mut events = current.to_vec();
    events[index] = event;
    Some(EventCollection::new(events))
}
