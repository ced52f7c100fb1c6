//! Captures deck callbacks and events for later inspection.

use cardstack::{CardItem, CardStack, DeckEvent, Subscription};
use cardstack_core::Clock;
use cardstack_foundation::SwipeDirection;
use std::cell::RefCell;
use std::rc::Rc;

/// Records every `on_swipe`, `on_undo` and [`DeckEvent`] of one deck.
///
/// Attaching replaces any callbacks already installed on the deck. Events
/// stop being recorded when the recorder is dropped.
pub struct CallbackRecorder<T> {
    swipes: Rc<RefCell<Vec<(T, SwipeDirection)>>>,
    undos: Rc<RefCell<Vec<T>>>,
    events: Rc<RefCell<Vec<DeckEvent>>>,
    _subscription: Subscription,
}

impl<T: CardItem + Clone + 'static> CallbackRecorder<T> {
    pub fn attach<C: Clock>(stack: &mut CardStack<T, C>) -> Self {
        let swipes = Rc::new(RefCell::new(Vec::new()));
        let undos = Rc::new(RefCell::new(Vec::new()));
        let events = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&swipes);
        stack.on_swipe(move |item: &T, direction| sink.borrow_mut().push((item.clone(), direction)));
        let sink = Rc::clone(&undos);
        stack.on_undo(move |item: &T| sink.borrow_mut().push(item.clone()));
        let sink = Rc::clone(&events);
        let subscription = stack.subscribe(move |event| sink.borrow_mut().push(*event));

        Self {
            swipes,
            undos,
            events,
            _subscription: subscription,
        }
    }

    pub fn swipes(&self) -> Vec<(T, SwipeDirection)> {
        self.swipes.borrow().clone()
    }

    pub fn undos(&self) -> Vec<T> {
        self.undos.borrow().clone()
    }

    pub fn events(&self) -> Vec<DeckEvent> {
        self.events.borrow().clone()
    }

    pub fn swipe_count(&self) -> usize {
        self.swipes.borrow().len()
    }

    pub fn undo_count(&self) -> usize {
        self.undos.borrow().len()
    }

    pub fn clear(&self) {
        self.swipes.borrow_mut().clear();
        self.undos.borrow_mut().clear();
        self.events.borrow_mut().clear();
    }
}
