//! In-memory stores and their change notification.
//!
//! # Responsibility
//! - Own task rows and settings for the lifetime of a session.
//! - Tell bound observers about every applied mutation.
//!
//! # Invariants
//! - Observers are registered explicitly on a store instance; there is no
//!   process-wide signal bus.
//! - Callbacks run synchronously after the state change is applied, in
//!   subscription order.

use std::fmt::{Debug, Formatter};

pub mod list_store;
pub mod settings_store;

/// Handle returned by `subscribe`, used to detach an observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback<E> = Box<dyn FnMut(&E)>;

/// Ordered set of change callbacks for one event type.
pub struct Notifier<E> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<E>)>,
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }
}

impl<E> Debug for Notifier<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback and returns its handle.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Detaches a callback. Returns `false` when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Delivers one event to every subscriber.
    pub fn emit(&mut self, event: &E) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Notifier;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_reaches_subscribers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::<u32>::new();

        let first = Rc::clone(&seen);
        notifier.subscribe(move |event| first.borrow_mut().push(("first", *event)));
        let second = Rc::clone(&seen);
        notifier.subscribe(move |event| second.borrow_mut().push(("second", *event)));

        notifier.emit(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn unsubscribe_detaches_only_that_callback() {
        let hits = Rc::new(RefCell::new(0));
        let mut notifier = Notifier::<()>::new();

        let counter = Rc::clone(&hits);
        let id = notifier.subscribe(move |_| *counter.borrow_mut() += 1);
        let counter = Rc::clone(&hits);
        notifier.subscribe(move |_| *counter.borrow_mut() += 10);

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.emit(&());

        assert_eq!(*hits.borrow(), 10);
    }
}
