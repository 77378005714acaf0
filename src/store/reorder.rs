//! Reorder the events of one day.

use calgrid_core::EventCollection;
use chrono::NaiveDate;

/// Move the day's `from`-th event to position `to` among that day's events.
///
/// Indices are clamped to the day's list like a drag list clamps a drop
/// past either end. The reordered day is written back into the positions
/// the day's events already occupied, so events of other days keep their
/// exact positions. `None` when the day has no events or nothing moves.
pub(super) fn reorder_day(
    current: &EventCollection,
    day: NaiveDate,
    from: usize,
    to: usize,
) -> Option<EventCollection> {
    let positions: Vec<usize> = current
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_on(day))
        .map(|(i, _)| i)
        .collect();

    let last = positions.len().checked_sub(1)?;
    let (from, to) = (from.min(last), to.min(last));
    if from == to {
        return None;
    }

    let mut day_events: Vec<_> = positions.iter().map(|&i| current.as_slice()[i].clone()).collect();
    let moved = day_events.remove(from);
    day_events.insert(to, moved);

    let mut events = current.to_vec();
    for (slot, event) in positions.into_iter().zip(day_events) {
        events[slot] = event;
    }
    Some(EventCollection::new(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::{Event, EventId, NewEvent};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn event(id: &str, date: NaiveDate) -> Event {
        NewEvent::new(id, date).with_id(EventId::new(id))
    }

    fn ids(collection: &EventCollection) -> Vec<&str> {
        collection.iter().map(|e| e.id.as_str()).collect()
    }

    fn interleaved() -> EventCollection {
        EventCollection::new(vec![
            event("a1", day(20)),
            event("x", day(21)),
            event("a2", day(20)),
            event("y", day(22)),
            event("a3", day(20)),
        ])
    }

    #[test]
    fn test_reorder_leaves_other_days_in_place() {
        let next = reorder_day(&interleaved(), day(20), 0, 2).unwrap();
        assert_eq!(ids(&next), vec!["a2", "x", "a3", "y", "a1"]);
    }

    #[test]
    fn test_reorder_backwards() {
        let next = reorder_day(&interleaved(), day(20), 2, 0).unwrap();
        assert_eq!(ids(&next), vec!["a3", "x", "a1", "y", "a2"]);
    }

    #[test]
    fn test_reorder_clamps_indices() {
        let next = reorder_day(&interleaved(), day(20), 0, 99).unwrap();
        assert_eq!(ids(&next), vec!["a2", "x", "a3", "y", "a1"]);
    }

    #[test]
    fn test_reorder_noops() {
        assert_eq!(reorder_day(&interleaved(), day(20), 1, 1), None);
        assert_eq!(reorder_day(&interleaved(), day(21), 0, 3), None);
        assert_eq!(reorder_day(&interleaved(), day(25), 0, 1), None);
    }

    #[test]
    fn test_reorder_keeps_every_event_exactly_once() {
        let current = interleaved();
        let next = reorder_day(&current, day(20), 1, 0).unwrap();

        let mut before = ids(&current);
        let mut after = ids(&next);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }
}
