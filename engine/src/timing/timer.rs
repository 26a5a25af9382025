//! Timer Queue
//!
//! Deferred actions scheduled against accumulated tick time. Nothing sleeps:
//! the owner calls [`TimerQueue::advance`] once per tick and applies
//! whatever actions come due.
//!
//! Each entry has a key. Scheduling with a key that is already pending
//! replaces the pending entry in place, so at most one timer per key is
//! ever in flight.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut timers = TimerQueue::new();
//! timers.schedule("unlock", 0.3, Unlock);
//!
//! // Each tick:
//! for action in timers.advance(delta_time) {
//!     apply(action);
//! }
//! ```

/// Cancellation token returned by [`TimerQueue::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct TimerEntry<K, A> {
    handle: TimerHandle,
    key: K,
    due_at: f64,
    action: A,
}

/// Keyed, cancellable queue of actions due at a future tick time.
#[derive(Debug, Clone)]
pub struct TimerQueue<K, A> {
    /// Accumulated time since creation (seconds)
    now: f64,
    next_handle: u64,
    entries: Vec<TimerEntry<K, A>>,
}

impl<K: PartialEq, A> Default for TimerQueue<K, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, A> TimerQueue<K, A> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            next_handle: 0,
            entries: Vec::new(),
        }
    }

    /// Accumulated time in seconds.
    pub fn now(&self) -> f32 {
        self.now as f32
    }

    /// Schedule `action` to fire `delay` seconds from now.
    ///
    /// A pending entry with the same key is replaced and its action dropped.
    pub fn schedule(&mut self, key: K, delay: f32, action: A) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        let entry = TimerEntry {
            handle,
            key,
            due_at: self.now + f64::from(delay.max(0.0)),
            action,
        };

        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
        handle
    }

    /// Cancel by handle. Returns the dropped action if it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<A> {
        let index = self.entries.iter().position(|e| e.handle == handle)?;
        Some(self.entries.remove(index).action)
    }

    /// Cancel whatever is pending under `key`.
    pub fn cancel_key(&mut self, key: &K) -> Option<A> {
        let index = self.entries.iter().position(|e| &e.key == key)?;
        Some(self.entries.remove(index).action)
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.entries.iter().any(|e| &e.key == key)
    }

    /// Seconds until the entry under `key` fires.
    pub fn remaining(&self, key: &K) -> Option<f32> {
        self.entries
            .iter()
            .find(|e| &e.key == key)
            .map(|e| (e.due_at - self.now).max(0.0) as f32)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Advance time by `delta_time` and return the actions that came due,
    /// earliest first. Entries due at the same time keep scheduling order.
    pub fn advance(&mut self, delta_time: f32) -> Vec<A> {
        self.now += f64::from(delta_time.max(0.0));

        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|e| e.due_at <= now);
        self.entries = pending;

        due.sort_by(|a, b| {
            a.due_at
                .total_cmp(&b.due_at)
                .then(a.handle.0.cmp(&b.handle.0))
        });
        due.into_iter().map(|e| e.action).collect()
    }
}
