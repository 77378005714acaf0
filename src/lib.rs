//! Month-grid calendar engine.
//!
//! [`EventStore`] owns the event collection and publishes a new immutable
//! snapshot for every change through [`EventFeed`]s. It starts from
//! locally persisted events on a client, or from a seed while
//! prerendering, and hands prerendered state to the client through a
//! [`TransferState`]. The grid itself comes from [`calgrid_core::generate`].
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use calgrid::{Environment, EventStore, FileStorage, Persistence, StoreConfig};
//! use calgrid_core::{generate, EventDraft};
//! use chrono::NaiveDate;
//!
//! let config = StoreConfig::load()?;
//! let storage = Arc::new(FileStorage::from_config(&config));
//! let store = EventStore::new(Environment::client(Persistence::new(storage, &config.storage_key)));
//!
//! let day = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
//! let mut draft = EventDraft::for_day(day);
//! draft.title = "Team Meeting".to_string();
//! draft.time = "14:00".to_string();
//! store.add(draft.validate(day)?);
//!
//! let grid = generate(day);
//! let snapshot = store.snapshot();
//! for slot in grid.iter().filter_map(|s| s.date()) {
//!     let _events = snapshot.for_day(slot);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod drag;
pub mod environment;
pub mod feed;
pub mod logging;
pub mod persistence;
pub mod seed;
pub mod storage;
pub mod store;
pub mod transfer;

pub use config::StoreConfig;
pub use drag::{Container, DragDrop};
pub use environment::{Environment, InitialEvents, InitialSource};
pub use feed::EventFeed;
pub use persistence::Persistence;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{EventStore, MoveOutcome, Snapshot};
pub use transfer::TransferState;
