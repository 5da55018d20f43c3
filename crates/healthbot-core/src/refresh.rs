//! Latest-wins refresh coordination.
//!
//! Every profile change triggers a full recomputation of the classified
//! menu and the notification catalog. Recomputations have no cancellation,
//! so a slow run can finish after a newer one started. The guard keys each
//! run with a monotonically increasing ticket and discards any result whose
//! ticket is not the latest issued: results install in issue order, never in
//! completion order, and the stored value is always replaced whole.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Ticket identifying one refresh run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Holder for the most recently issued refresh result.
pub struct RefreshGuard<T> {
    latest_issued: AtomicU64,
    slot: Mutex<Slot<T>>,
}

struct Slot<T> {
    committed: u64,
    value: Option<T>,
}

impl<T> RefreshGuard<T> {
    pub fn new() -> Self {
        Self {
            latest_issued: AtomicU64::new(0),
            slot: Mutex::new(Slot {
                committed: 0,
                value: None,
            }),
        }
    }

    /// Start a refresh run; invalidates every earlier ticket.
    pub fn begin(&self) -> RefreshTicket {
        RefreshTicket(self.latest_issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Install `value` if `ticket` is still the latest issued. Returns
    /// whether the value was installed.
    pub fn commit(&self, ticket: RefreshTicket, value: T) -> bool {
        if ticket.0 != self.latest_issued.load(Ordering::SeqCst) {
            return false;
        }
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if ticket.0 < slot.committed {
            return false;
        }
        slot.committed = ticket.0;
        slot.value = Some(value);
        true
    }

    /// The most recently committed value, if any run has completed.
    pub fn current(&self) -> Option<T>
    where
        T: Clone,
    {
        self.slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .value
            .clone()
    }
}

impl<T> Default for RefreshGuard<T> {
    fn default() -> Self {
        Self::new()
    }
}
