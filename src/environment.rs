//! Where the store's first snapshot comes from.
//!
//! The store runs either on a client, where a persistence adapter exists,
//! or while prerendering, where it may be handed a seed. The initial
//! collection is picked once, at construction.

use calgrid_core::collection::dedup_by_id;
use calgrid_core::Event;
use tracing::{info, warn};

use crate::persistence::Persistence;
use crate::transfer::TransferState;

pub enum Environment {
    /// Local persistence is available and authoritative.
    Client {
        persistence: Persistence,
        /// Handoff from a prerender pass of the same page load
        transfer: Option<TransferState>,
    },
    /// No persistence; state is handed to the client through `transfer`.
    Prerender {
        seed: Option<Vec<Event>>,
        transfer: TransferState,
    },
}

impl Environment {
    pub fn client(persistence: Persistence) -> Self {
        Environment::Client {
            persistence,
            transfer: None,
        }
    }

    pub fn prerender(seed: Option<Vec<Event>>, transfer: TransferState) -> Self {
        Environment::Prerender { seed, transfer }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialSource {
    Persisted,
    Seeded,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialEvents {
    Persisted(Vec<Event>),
    Seeded(Vec<Event>),
    Empty,
}

impl InitialEvents {
    /// Pick the initial collection for an environment.
    ///
    /// Client: a stored collection wins, even an empty one. Without one the
    /// transfer slot is consumed as a seed. An unreadable stored blob is
    /// logged and treated as empty.
    ///
    /// Prerender: the injected seed, else whatever the transfer slot holds.
    pub fn resolve(environment: &Environment) -> Self {
        let initial = match environment {
            Environment::Client {
                persistence,
                transfer,
            } => match persistence.load() {
                Ok(Some(events)) => InitialEvents::Persisted(events),
                Ok(None) => transfer
                    .as_ref()
                    .and_then(TransferState::take_events)
                    .map_or(InitialEvents::Empty, InitialEvents::Seeded),
                Err(e) => {
                    warn!(key = persistence.key(), error = %e, "Discarding stored events");
                    InitialEvents::Empty
                }
            },
            Environment::Prerender { seed, transfer } => seed
                .clone()
                .or_else(|| transfer.events())
                .map_or(InitialEvents::Empty, InitialEvents::Seeded),
        };

        info!(source = ?initial.source(), events = initial.len(), "Resolved initial events");
        initial.deduplicated()
    }

    pub fn source(&self) -> InitialSource {
        match self {
            InitialEvents::Persisted(_) => InitialSource::Persisted,
            InitialEvents::Seeded(_) => InitialSource::Seeded,
            InitialEvents::Empty => InitialSource::Empty,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            InitialEvents::Persisted(events) | InitialEvents::Seeded(events) => events.len(),
            InitialEvents::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_events(self) -> Vec<Event> {
        match self {
            InitialEvents::Persisted(events) | InitialEvents::Seeded(events) => events,
            InitialEvents::Empty => Vec::new(),
        }
    }

    /// Ids must be unique from the first snapshot on.
    fn deduplicated(self) -> Self {
        let source = self.source();
        let (events, dropped) = dedup_by_id(self.into_events());
        for id in &dropped {
            warn!(id = %id, "Dropping initial event with duplicate id");
        }

        match source {
            InitialSource::Persisted => InitialEvents::Persisted(events),
            InitialSource::Seeded => InitialEvents::Seeded(events),
            InitialSource::Empty => InitialEvents::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::DEFAULT_STORAGE_KEY;
    use crate::storage::MemoryStorage;
    use calgrid_core::{EventId, NewEvent};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn event(id: &str) -> Event {
        NewEvent::new(format!("Event {id}"), NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
            .with_id(EventId::new(id))
    }

    fn stored(raw: &str) -> Persistence {
        Persistence::with_default_key(Arc::new(MemoryStorage::new().with_item(DEFAULT_STORAGE_KEY, raw)))
    }

    fn empty_storage() -> Persistence {
        Persistence::with_default_key(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_client_prefers_persisted_over_transfer() {
        let transfer = TransferState::new();
        transfer.set_events(&[event("server")]).unwrap();

        let raw = calgrid_core::codec::encode(&[event("local")]).unwrap();
        let environment = Environment::Client {
            persistence: stored(&raw),
            transfer: Some(transfer.clone()),
        };

        assert_eq!(
            InitialEvents::resolve(&environment),
            InitialEvents::Persisted(vec![event("local")])
        );
        assert!(transfer.has(crate::transfer::EVENTS_STATE_KEY));
    }

    #[test]
    fn test_client_stored_empty_list_is_authoritative() {
        let transfer = TransferState::new();
        transfer.set_events(&[event("server")]).unwrap();

        let environment = Environment::Client {
            persistence: stored("[]"),
            transfer: Some(transfer),
        };

        assert_eq!(InitialEvents::resolve(&environment), InitialEvents::Persisted(vec![]));
    }

    #[test]
    fn test_client_falls_back_to_transfer_once() {
        let transfer = TransferState::new();
        transfer.set_events(&[event("server")]).unwrap();

        let environment = Environment::Client {
            persistence: empty_storage(),
            transfer: Some(transfer.clone()),
        };

        assert_eq!(
            InitialEvents::resolve(&environment),
            InitialEvents::Seeded(vec![event("server")])
        );
        assert_eq!(InitialEvents::resolve(&environment), InitialEvents::Empty);
    }

    #[test]
    fn test_client_corrupt_storage_degrades_to_empty() {
        let environment = Environment::client(stored("definitely not json"));
        assert_eq!(InitialEvents::resolve(&environment), InitialEvents::Empty);
    }

    #[test]
    fn test_prerender_seed_then_transfer_then_empty() {
        let transfer = TransferState::new();
        transfer.set_events(&[event("transferred")]).unwrap();

        let seeded = Environment::prerender(Some(vec![event("seed")]), transfer.clone());
        assert_eq!(
            InitialEvents::resolve(&seeded),
            InitialEvents::Seeded(vec![event("seed")])
        );

        let from_transfer = Environment::prerender(None, transfer);
        assert_eq!(
            InitialEvents::resolve(&from_transfer),
            InitialEvents::Seeded(vec![event("transferred")])
        );

        let nothing = Environment::prerender(None, TransferState::new());
        assert_eq!(InitialEvents::resolve(&nothing), InitialEvents::Empty);
    }

    #[test]
    fn test_duplicate_initial_ids_are_dropped() {
        let seeded = Environment::prerender(
            Some(vec![event("a"), event("b"), event("a")]),
            TransferState::new(),
        );

        let initial = InitialEvents::resolve(&seeded);
        assert_eq!(initial.source(), InitialSource::Seeded);
        assert_eq!(initial.len(), 2);
    }
}
