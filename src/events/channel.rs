use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::trace;

pub type Callback<T> = Rc<dyn Fn(&T)>;
pub type SubscriptionId = u64;

/// Listeners are called in subscription order.
struct Listeners<T> {
    callbacks: RefCell<Vec<(SubscriptionId, Callback<T>)>>,
    next_id: Cell<SubscriptionId>,
}

/// Single-threaded publish/subscribe pair. The emitter side is held by whoever produces
/// events, the observer side is handed to whoever consumes them.
pub struct Channel;

impl Channel {
    #[allow(clippy::new_ret_no_self)]
    pub fn new<T: std::fmt::Debug>() -> (EventEmitter<T>, EventObserver<T>) {
        let listeners = Rc::new(Listeners {
            callbacks: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        });
        (
            EventEmitter {
                listeners: Rc::clone(&listeners),
            },
            EventObserver { listeners },
        )
    }
}

pub struct EventEmitter<T> {
    listeners: Rc<Listeners<T>>,
}

impl<T> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<T: std::fmt::Debug> EventEmitter<T> {
    pub fn emit(&self, data: &T) {
        // Snapshot the callbacks so a listener may subscribe or unsubscribe while handling
        let callbacks: Vec<Callback<T>> = self
            .listeners
            .callbacks
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        trace!(target: "events", "Emitting event to {} listeners: {:?}", callbacks.len(), data);
        for callback in callbacks {
            callback(data);
        }
    }
}

pub struct EventObserver<T> {
    listeners: Rc<Listeners<T>>,
}

impl<T> Clone for EventObserver<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<T> EventObserver<T> {
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = self.listeners.next_id.get();
        self.listeners.next_id.set(id + 1);
        self.listeners
            .callbacks
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut callbacks = self.listeners.callbacks.borrow_mut();
        let before = callbacks.len();
        callbacks.retain(|(listener_id, _)| *listener_id != id);
        callbacks.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let (emitter, observer) = Channel::new::<i32>();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            observer.subscribe(move |data: &i32| seen.borrow_mut().push((tag, *data)));
        }

        emitter.emit(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_clones_share_listeners() {
        let (emitter, observer) = Channel::new::<i32>();
        let counter = Rc::new(Cell::new(0));

        let counter_clone = Rc::clone(&counter);
        observer
            .clone()
            .subscribe(move |_| counter_clone.set(counter_clone.get() + 1));

        emitter.clone().emit(&1);
        emitter.emit(&2);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let (emitter, observer) = Channel::new::<i32>();
        let counter = Rc::new(Cell::new(0));
        let counter_clone = Rc::clone(&counter);

        let id = observer.subscribe(move |_| counter_clone.set(counter_clone.get() + 1));
        emitter.emit(&1);
        assert!(observer.unsubscribe(id));
        emitter.emit(&1);

        assert_eq!(counter.get(), 1);
        assert!(!observer.unsubscribe(id));
    }

    #[test]
    fn test_listener_can_unsubscribe_while_handling() {
        let (emitter, observer) = Channel::new::<i32>();
        let counter = Rc::new(Cell::new(0));
        let id_slot = Rc::new(Cell::new(None));

        let observer_clone = observer.clone();
        let counter_clone = Rc::clone(&counter);
        let id_clone = Rc::clone(&id_slot);
        let id = observer.subscribe(move |_| {
            counter_clone.set(counter_clone.get() + 1);
            if let Some(id) = id_clone.get() {
                observer_clone.unsubscribe(id);
            }
        });
        id_slot.set(Some(id));

        emitter.emit(&1);
        emitter.emit(&1);
        assert_eq!(counter.get(), 1);
    }
}
