//! Change notification for state objects.
//!
//! Observers are plain `Fn(&E)` closures. [`ObserverRegistry::notify`]
//! snapshots the observer list before calling out, so an observer may
//! subscribe or unsubscribe from inside its own callback.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Observer<E> = Rc<dyn Fn(&E)>;

struct ObserverList<E> {
    next_id: u64,
    observers: Vec<(u64, Observer<E>)>,
}

pub struct ObserverRegistry<E> {
    inner: Rc<RefCell<ObserverList<E>>>,
}

impl<E: 'static> ObserverRegistry<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObserverList {
                next_id: 1,
                observers: Vec::new(),
            })),
        }
    }

    /// Register `observer`. It stays registered until the returned
    /// [`Subscription`] is dropped or unsubscribed.
    pub fn subscribe(&self, observer: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut list = self.inner.borrow_mut();
            let id = list.next_id;
            list.next_id += 1;
            list.observers.push((id, Rc::new(observer)));
            id
        };
        let weak: Weak<RefCell<ObserverList<E>>> = Rc::downgrade(&self.inner);
        Subscription {
            id,
            remove: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .borrow_mut()
                        .observers
                        .retain(|(observer_id, _)| *observer_id != id);
                }
            })),
        }
    }

    pub fn notify(&self, event: &E) {
        let snapshot: Vec<Observer<E>> = self
            .inner
            .borrow()
            .observers
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in snapshot {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for ObserverRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ObserverRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.inner.borrow().observers.len())
            .finish()
    }
}

/// Keeps an observer registered. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    remove: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn unsubscribe(mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }

    /// Keep the observer registered for the registry's whole lifetime.
    pub fn detach(mut self) {
        self.remove = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.remove.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notifies_all_observers() {
        let registry = ObserverRegistry::<u32>::new();
        let total = Rc::new(Cell::new(0));

        let a = {
            let total = Rc::clone(&total);
            registry.subscribe(move |value| total.set(total.get() + value))
        };
        let b = {
            let total = Rc::clone(&total);
            registry.subscribe(move |value| total.set(total.get() + value * 10))
        };

        registry.notify(&2);
        assert_eq!(total.get(), 22);
        assert_eq!(registry.len(), 2);
        drop((a, b));
        assert!(registry.is_empty());
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let registry = ObserverRegistry::<()>::new();
        let calls = Rc::new(Cell::new(0));
        let subscription = {
            let calls = Rc::clone(&calls);
            registry.subscribe(move |_| calls.set(calls.get() + 1))
        };

        registry.notify(&());
        drop(subscription);
        registry.notify(&());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn detached_subscription_stays_registered() {
        let registry = ObserverRegistry::<()>::new();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = Rc::clone(&calls);
            registry
                .subscribe(move |_| calls.set(calls.get() + 1))
                .detach();
        }
        registry.notify(&());
        registry.notify(&());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn observer_may_subscribe_during_notify() {
        let registry = Rc::new(ObserverRegistry::<()>::new());
        let nested: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));
        let _outer = {
            let registry_for_observer = Rc::downgrade(&registry);
            let nested = Rc::clone(&nested);
            registry.subscribe(move |_| {
                if let Some(registry) = registry_for_observer.upgrade() {
                    nested.borrow_mut().push(registry.subscribe(|_| {}));
                }
            })
        };

        registry.notify(&());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn subscription_outliving_registry_is_harmless() {
        let registry = ObserverRegistry::<()>::new();
        let subscription = registry.subscribe(|_| {});
        drop(registry);
        subscription.unsubscribe();
    }
}
