//! Server-to-client state handoff.
//!
//! A [`TransferState`] is filled while a page is prerendered, serialized
//! into the rendered output, and restored by the client-side initializer of
//! the same page load. Reading it back avoids recomputing or refetching
//! state across the render boundary.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use calgrid_core::{CalGridError, CalGridResult, Event};
use serde_json::Value;
use tracing::warn;

/// Transfer slot key for the event collection.
pub const EVENTS_STATE_KEY: &str = "calendarEvents";

/// Cloneable handle; clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct TransferState {
    slots: Arc<Mutex<BTreeMap<String, Value>>>,
}

impl TransferState {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> MutexGuard<'_, BTreeMap<String, Value>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, key: &str, value: Value) {
        self.slots().insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.slots().get(key).cloned()
    }

    /// Read and clear a slot.
    pub fn take(&self, key: &str) -> Option<Value> {
        self.slots().remove(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.slots().contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.slots().is_empty()
    }

    /// JSON object to embed in the rendered page.
    pub fn serialize(&self) -> CalGridResult<String> {
        serde_json::to_string(&*self.slots()).map_err(|e| CalGridError::Serialization(e.to_string()))
    }

    pub fn from_serialized(raw: &str) -> CalGridResult<Self> {
        let slots: BTreeMap<String, Value> =
            serde_json::from_str(raw).map_err(|e| CalGridError::Deserialization(e.to_string()))?;
        Ok(TransferState {
            slots: Arc::new(Mutex::new(slots)),
        })
    }

    pub fn set_events(&self, events: &[Event]) -> CalGridResult<()> {
        let value =
            serde_json::to_value(events).map_err(|e| CalGridError::Serialization(e.to_string()))?;
        self.set(EVENTS_STATE_KEY, value);
        Ok(())
    }

    /// Events left in the slot, without consuming them.
    pub fn events(&self) -> Option<Vec<Event>> {
        decode_events(self.get(EVENTS_STATE_KEY)?)
    }

    /// Events left in the slot; the slot is cleared.
    pub fn take_events(&self) -> Option<Vec<Event>> {
        decode_events(self.take(EVENTS_STATE_KEY)?)
    }
}

fn decode_events(value: Value) -> Option<Vec<Event>> {
    match serde_json::from_value::<Option<Vec<Event>>>(value) {
        Ok(events) => events,
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable transferred events");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::{EventId, NewEvent};
    use chrono::NaiveDate;

    fn events() -> Vec<Event> {
        vec![
            NewEvent::new("Team Meeting", NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
                .with_id(EventId::new("1")),
        ]
    }

    #[test]
    fn test_clones_share_slots() {
        let server = TransferState::new();
        let handle = server.clone();

        handle.set_events(&events()).unwrap();
        assert_eq!(server.events(), Some(events()));
        assert!(server.has(EVENTS_STATE_KEY));
    }

    #[test]
    fn test_take_is_one_shot() {
        let state = TransferState::new();
        state.set_events(&events()).unwrap();

        assert_eq!(state.take_events(), Some(events()));
        assert_eq!(state.take_events(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_serialize_survives_render_boundary() {
        let server = TransferState::new();
        server.set_events(&events()).unwrap();
        let embedded = server.serialize().unwrap();

        let client = TransferState::from_serialized(&embedded).unwrap();
        assert_eq!(client.events(), Some(events()));
    }

    #[test]
    fn test_unreadable_slot_yields_none() {
        let state = TransferState::new();
        state.set(EVENTS_STATE_KEY, serde_json::json!({"not": "a list"}));
        assert_eq!(state.events(), None);

        state.set(EVENTS_STATE_KEY, Value::Null);
        assert_eq!(state.events(), None);
    }

    #[test]
    fn test_from_serialized_rejects_garbage() {
        assert!(matches!(
            TransferState::from_serialized("<script>"),
            Err(CalGridError::Deserialization(_))
        ));
    }
}
