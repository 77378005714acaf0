//! Live feed of event collection snapshots.

use tokio::sync::watch;

use crate::store::Snapshot;

/// A subscription to the store.
///
/// The first delivery is the snapshot current at subscription time, then
/// every later snapshot in publish order. A slow reader may skip
/// intermediate snapshots but always ends on the latest one.
#[derive(Debug, Clone)]
pub struct EventFeed {
    rx: watch::Receiver<Snapshot>,
}

impl EventFeed {
    pub(crate) fn new(mut rx: watch::Receiver<Snapshot>) -> Self {
        rx.mark_changed();
        EventFeed { rx }
    }

    /// The latest snapshot, without marking it delivered.
    pub fn current(&self) -> Snapshot {
        self.rx.borrow().clone()
    }

    /// Wait for the next undelivered snapshot. `None` once the store is
    /// gone and everything was delivered.
    pub async fn next(&mut self) -> Option<Snapshot> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// The next undelivered snapshot, if one is ready.
    pub fn try_next(&mut self) -> Option<Snapshot> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }
}
