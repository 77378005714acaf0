//! Core types for calgrid.
//!
//! This crate holds everything that does no I/O:
//! - `Event` and the create/edit value objects
//! - the 42-cell month grid and month navigation
//! - the persisted JSON format

pub mod codec;
pub mod collection;
pub mod cursor;
pub mod draft;
pub mod error;
pub mod event;
pub mod grid;
pub mod month;

pub use collection::EventCollection;
pub use cursor::MonthCursor;
pub use draft::EventDraft;
pub use error::{CalGridError, CalGridResult, ValidationError};
pub use event::{Event, EventId, NewEvent, Urgency};
pub use grid::{generate, DaySlot, MonthGrid, GRID_CELLS};
pub use month::MonthRange;
