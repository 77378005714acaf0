//! Prerender seed carried on a request header.
//!
//! A client that already holds events locally sends them along with the
//! page request so the prerender pass can render the same collection.

use calgrid_core::{codec, Event};
use tracing::warn;

use crate::persistence::Persistence;

pub const SEED_HEADER: &str = "X-Calendar-Events";

/// Header value for an outgoing request: the stored blob, percent-encoded.
/// `None` when nothing is stored.
pub fn header_value(persistence: &Persistence) -> Option<String> {
    match persistence.raw() {
        Ok(Some(raw)) if !raw.is_empty() => Some(urlencoding::encode(&raw).into_owned()),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "Could not read stored events for the seed header");
            None
        }
    }
}

/// Decode a seed header into events for the prerender pass.
pub fn seed_from_header(value: &str) -> Option<Vec<Event>> {
    let decoded = match urlencoding::decode(value) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(header = SEED_HEADER, error = %e, "Seed header is not valid UTF-8");
            return None;
        }
    };

    match codec::decode(&decoded) {
        Ok(events) => Some(events),
        Err(e) => {
            warn!(header = SEED_HEADER, error = %e, "Ignoring unreadable seed header");
            None
        }
    }
}
