//! Loading and saving the event collection through a [`Storage`].

use std::fmt;
use std::sync::Arc;

use calgrid_core::codec;
use calgrid_core::{CalGridError, CalGridResult, Event, EventCollection};

use crate::storage::Storage;

/// Storage key the collection is saved under.
pub const DEFAULT_STORAGE_KEY: &str = "calendar_events";

#[derive(Clone)]
pub struct Persistence {
    storage: Arc<dyn Storage>,
    key: String,
}

impl Persistence {
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Persistence {
            storage,
            key: key.into(),
        }
    }

    pub fn with_default_key(storage: Arc<dyn Storage>) -> Self {
        Self::new(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored blob as-is.
    pub fn raw(&self) -> CalGridResult<Option<String>> {
        self.storage
            .get_item(&self.key)
            .map_err(|e| CalGridError::Storage(format!("{e:#}")))
    }

    /// `Ok(None)` when nothing was ever saved, `Deserialization` when the
    /// stored blob is unreadable.
    pub fn load(&self) -> CalGridResult<Option<Vec<Event>>> {
        match self.raw()? {
            Some(raw) => codec::decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn save(&self, events: &EventCollection) -> CalGridResult<()> {
        let raw = codec::encode(events.as_slice())?;
        self.storage
            .set_item(&self.key, &raw)
            .map_err(|e| CalGridError::Storage(format!("{e:#}")))
    }
}

impl fmt::Debug for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Persistence").field("key", &self.key).finish()
    }
}
