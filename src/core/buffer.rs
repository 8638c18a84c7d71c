//! Bounded most-recent-first event retention.
//!
//! [`EventBuffer`] keeps the newest `capacity` events in arrival order, newest
//! first, evicting from the tail on overflow. Consumers that need to react to
//! feed changes register an observer instead of polling; the buffer notifies
//! observers on every `push` and `clear`.

use std::collections::VecDeque;

use crate::core::event::Event;
use crate::util::error::{invalid_config, Result};

/// Change notification delivered to buffer observers.
#[derive(Debug)]
pub enum BufferChange<'a> {
    /// A new event was inserted at the front. Eviction of the oldest event,
    /// if any, has already happened when the observer runs.
    Pushed(&'a Event),
    /// The buffer was emptied.
    Cleared,
}

/// Handle returned by [`EventBuffer::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(BufferChange<'_>) + Send>;

/// Holds the most recent `capacity` events, newest first.
///
/// Ordering contract: index 0 of [`all`](EventBuffer::all) is always the most
/// recently pushed event, matching direct feed display. `len() <= capacity()`
/// holds after every operation.
pub struct EventBuffer {
    events: VecDeque<Event>,
    capacity: usize,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl std::fmt::Debug for EventBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBuffer")
            .field("len", &self.events.len())
            .field("capacity", &self.capacity)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl EventBuffer {
    /// Create a buffer retaining at most `capacity` events.
    ///
    /// # Errors
    /// Returns [`crate::util::error::NetSentryError::InvalidConfiguration`]
    /// when `capacity` is zero. Construction fails fast rather than clamping.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(invalid_config("event buffer capacity must be at least 1"));
        }
        Ok(Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Insert `event` at the front, evicting the oldest entry when the
    /// buffer is full. Amortised O(1).
    pub fn push(&mut self, event: Event) {
        self.events.push_front(event);
        while self.events.len() > self.capacity {
            if let Some(evicted) = self.events.pop_back() {
                tracing::trace!(id = %evicted.id, "evicted oldest event");
            }
        }
        // Notify after the invariant is restored so observers see a
        // consistent buffer.
        if let Some(newest) = self.events.front() {
            for (_, observer) in &mut self.observers {
                observer(BufferChange::Pushed(newest));
            }
        }
    }

    /// Empty the buffer. Idempotent.
    pub fn clear(&mut self) {
        self.events.clear();
        for (_, observer) in &mut self.observers {
            observer(BufferChange::Cleared);
        }
    }

    /// Owned snapshot of the buffer contents, newest first.
    ///
    /// The returned vector does not alias the buffer: later mutations do not
    /// affect it.
    pub fn all(&self) -> Vec<Event> {
        self.events.iter().cloned().collect()
    }

    /// Number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` when no events are retained.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Maximum number of retained events, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Register an observer called on every `push` and `clear`.
    ///
    /// The caller owns the subscription lifecycle and should
    /// [`unsubscribe`](EventBuffer::unsubscribe) on teardown.
    pub fn subscribe(&mut self, observer: impl FnMut(BufferChange<'_>) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(existing, _)| *existing != id);
    }
}
