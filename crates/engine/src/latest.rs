//! Stale-while-revalidating slot for values pushed by an observable.
//!
//! The observable yields `None` while it is (re)loading. Rather than
//! rendering an empty page in that window, readers keep using the last
//! value that did arrive.

/// Holds the most recent value an upstream source produced.
#[derive(Debug, Clone)]
pub struct LatestValue<T> {
    slot: Option<T>,
}

impl<T> LatestValue<T> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Record the upstream's current emission and return what should be used.
    ///
    /// `Some` replaces the slot; `None` leaves the previous value in place.
    pub fn observe(&mut self, current: Option<T>) -> Option<&T> {
        if let Some(value) = current {
            self.slot = Some(value);
        } else if self.slot.is_some() {
            tracing::trace!("Upstream has no value, serving previous one");
        }
        self.slot.as_ref()
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// True until the first value has arrived.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

impl<T> Default for LatestValue<T> {
    fn default() -> Self {
        Self::new()
    }
}
