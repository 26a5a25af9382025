//! Notification Events
//!
//! Fire-and-forget listener lists. A component owns an [`Event`], outside
//! code registers callbacks on it, and the component invokes it
//! synchronously when something happens. The event never owns the
//! subscribers' state beyond the boxed closure.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut on_crouch: Event<bool> = Event::new();
//! let id = on_crouch.add_listener(|crouching| println!("crouching: {crouching}"));
//! on_crouch.invoke(true);
//! on_crouch.remove_listener(id);
//! ```

/// Callback type stored by [`Event`].
pub type Listener<T> = Box<dyn FnMut(T)>;

/// Handle returned by [`Event::add_listener`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered list of listeners receiving a `T` on each invoke.
pub struct Event<T> {
    listeners: Vec<(ListenerId, Listener<T>)>,
    next_id: u64,
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> std::fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: Clone> Event<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners run in registration order.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(T) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn remove_all_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Call every listener with a clone of `payload`.
    pub fn invoke(&mut self, payload: T) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(payload.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_invoke_reaches_all_listeners_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut event: Event<u32> = Event::new();

        let a = Rc::clone(&log);
        event.add_listener(move |v| a.borrow_mut().push(("a", v)));
        let b = Rc::clone(&log);
        event.add_listener(move |v| b.borrow_mut().push(("b", v)));

        event.invoke(7);
        assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_remove_listener() {
        let count = Rc::new(RefCell::new(0));
        let mut event: Event<()> = Event::new();

        let c = Rc::clone(&count);
        let id = event.add_listener(move |_| *c.borrow_mut() += 1);
        event.invoke(());
        assert!(event.remove_listener(id));
        assert!(!event.remove_listener(id));
        event.invoke(());

        assert_eq!(*count.borrow(), 1);
        assert_eq!(event.listener_count(), 0);
    }

    #[test]
    fn test_invoke_without_listeners() {
        let mut event: Event<bool> = Event::new();
        event.invoke(true);
        assert_eq!(format!("{event:?}"), "Event { listeners: 0 }");
    }
}
