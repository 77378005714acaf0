//! Error types for calgrid.

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur in calgrid operations.
#[derive(Error, Debug)]
pub enum CalGridError {
    #[error("Event not found: {0}")]
    NotFound(EventId),

    #[error("Could not read stored events: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Rejections raised while turning user input into an event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Invalid time '{0}'. Expected HH:MM (24h)")]
    InvalidTime(String),

    #[error("Invalid month {0}. Expected 1-12")]
    InvalidMonth(u32),
}

/// Result type alias for calgrid operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
