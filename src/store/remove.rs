//! Drop an event.

use calgrid_core::{EventCollection, EventId};

/// Everything except the event with `id`. `None` if nothing matched.
pub(super) fn without(current: &EventCollection, id: &EventId) -> Option<EventCollection> {
    if !current.contains(id) {
        return None;
    }
    Some(current.iter().filter(|e| &e.id != id).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::NewEvent;
    use chrono::NaiveDate;

    #[test]
    fn test_without() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let current = EventCollection::new(vec![
            NewEvent::new("Same title", date).with_id(EventId::new("a")),
            NewEvent::new("Same title", date).with_id(EventId::new("b")),
        ]);

        // Same title and day must not take the other event with it
        let next = without(&current, &EventId::new("a")).unwrap();
        assert_eq!(next.len(), 1);
        assert!(next.contains(&EventId::new("b")));

        assert_eq!(without(&next, &EventId::new("a")), None);
    }
}
