//! Single-slot buffer for the most recent unconsumed deep link.

use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
/// The pending deep-link slot.
///
/// Writable by the intake path, cleared by consume, last write wins with no
/// history. This is the only shared mutable state in the bridge; the mutex
/// gives consume its read-then-clear atomicity across the host UI and
/// webview threads.
pub struct PendingDeepLink {
    slot: Mutex<Option<String>>,
}

impl PendingDeepLink {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `url`, replacing any unconsumed prior value.
    pub fn store(&self, url: impl Into<String>) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(url.into());
    }

    /// Takes the pending URL, leaving the slot empty.
    pub fn take(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_clears_the_slot() {
        let slot = PendingDeepLink::new();
        slot.store("myapp://open?id=42");
        assert_eq!(slot.take(), Some("myapp://open?id=42".to_string()));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn later_store_overwrites_an_unconsumed_value() {
        let slot = PendingDeepLink::new();
        slot.store("myapp://a");
        slot.store("myapp://b");
        assert_eq!(slot.take(), Some("myapp://b".to_string()));
    }

    #[test]
    fn take_on_an_empty_slot_is_idempotent() {
        let slot = PendingDeepLink::new();
        assert_eq!(slot.take(), None);
        assert_eq!(slot.take(), None);
    }
}
