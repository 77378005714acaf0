//! Move an event to another day.

use calgrid_core::{EventCollection, EventId};
use chrono::NaiveDate;

/// The collection with only the date of `id` changed, plus the date it
/// moved from. `None` if no event has that id.
pub(super) fn retarget(
    current: &EventCollection,
    id: &EventId,
    date: NaiveDate,
) -> Option<(EventCollection, NaiveDate)> {
    let index = current.position(id)?;
    let mut events = current.to_vec();
    let previous = std::mem::replace(&mut events[index].date, date);
    Some((EventCollection::new(events), previous))
}
