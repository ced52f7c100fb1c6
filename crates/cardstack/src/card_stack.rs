use crate::config::DeckConfig;
use crate::coordinator::GestureCoordinator;
use crate::deck_state::DeckState;
use crate::error::ConfigError;
use crate::event::DeckEvent;
use crate::item::CardItem;
use crate::transition::TransitionRecord;
use crate::view::{compose_visuals, CardVisual};
use cardstack_core::{Clock, Subscription, SystemClock};
use cardstack_foundation::{DragPhase, GestureEvent, SwipeDirection};
use cardstack_graphics::{Point, Size};
use web_time::Instant;

/// A swipeable deck: state machine plus gesture handling behind one handle.
///
/// ```no_run
/// use cardstack::prelude::*;
///
/// let mut stack = CardStack::new(vec!["a", "b", "c"], DeckConfig::default())?;
/// stack.set_container_size(Size::new(360.0, 640.0));
/// stack.on_swipe(|card, direction| println!("{card} went {direction:?}"));
/// stack.swipe(SwipeDirection::Right);
/// while stack.tick() {
///     // draw stack.visuals(), wait for the next frame
/// }
/// # Ok::<(), cardstack::ConfigError>(())
/// ```
pub struct CardStack<T: CardItem, C: Clock = SystemClock> {
    deck: DeckState<T, C>,
    gestures: GestureCoordinator,
}

impl<T: CardItem> CardStack<T, SystemClock> {
    pub fn new(items: Vec<T>, config: DeckConfig) -> Result<Self, ConfigError> {
        Self::with_clock(items, config, SystemClock)
    }
}

impl<T: CardItem, C: Clock> CardStack<T, C> {
    /// Build a deck that reads time from `clock`. Fails only on an invalid
    /// configuration.
    pub fn with_clock(items: Vec<T>, config: DeckConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!("card stack created with {} cards", items.len());
        Ok(Self {
            deck: DeckState::new(items, config, clock),
            gestures: GestureCoordinator::new(),
        })
    }

    /// Route a gesture from the host. Returns `true` if the deck changed.
    pub fn handle(&mut self, event: GestureEvent) -> bool {
        match event {
            GestureEvent::Drag(drag) => match drag.phase {
                DragPhase::Changed => {
                    self.on_drag_changed(drag.translation);
                    false
                }
                DragPhase::Ended => self
                    .on_drag_ended(drag.translation, drag.predicted_end)
                    .is_some(),
                DragPhase::Cancelled => {
                    self.on_drag_cancelled();
                    false
                }
            },
            GestureEvent::Tap => self.on_tap(),
        }
    }

    pub fn on_drag_changed(&mut self, translation: Point) -> bool {
        self.gestures.on_drag_changed(&mut self.deck, translation)
    }

    pub fn on_drag_ended(
        &mut self,
        translation: Point,
        predicted_end: Option<Point>,
    ) -> Option<SwipeDirection> {
        self.gestures
            .on_drag_ended(&mut self.deck, translation, predicted_end)
    }

    pub fn on_drag_cancelled(&mut self) {
        self.gestures.on_drag_cancelled(&mut self.deck);
    }

    pub fn on_tap(&mut self) -> bool {
        self.gestures.on_tap(&mut self.deck)
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> bool {
        self.gestures.swipe(&mut self.deck, direction)
    }

    pub fn undo(&mut self) -> bool {
        self.gestures.undo(&mut self.deck)
    }

    /// Advance every animation and timer. Keep ticking while this returns
    /// `true`.
    pub fn tick(&mut self) -> bool {
        let deck_busy = self.deck.tick();
        let gestures_busy = self.gestures.tick(&mut self.deck);
        deck_busy || gestures_busy
    }

    /// Earliest timer deadline across the deck and the gesture layer.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.deck.next_deadline(), self.gestures.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn visuals(&self) -> Vec<CardVisual> {
        compose_visuals(&self.deck, &self.gestures)
    }

    pub fn renderable_window(&self) -> Vec<(&T, usize)> {
        self.deck.renderable_window()
    }

    pub fn current_transition(&self, index: usize) -> Option<&TransitionRecord> {
        self.deck.transition(index)
    }

    pub fn top_item(&self) -> Option<&T> {
        self.deck.top_item()
    }

    pub fn can_interact(&self, item: &T) -> bool {
        self.deck.can_interact(item)
    }

    pub fn current_index(&self) -> usize {
        self.deck.current_index()
    }

    pub fn on_swipe(&mut self, callback: impl FnMut(&T, SwipeDirection) + 'static) {
        self.deck.set_on_swipe(callback);
    }

    pub fn on_undo(&mut self, callback: impl FnMut(&T) + 'static) {
        self.deck.set_on_undo(callback);
    }

    pub fn subscribe(&self, observer: impl Fn(&DeckEvent) + 'static) -> Subscription {
        self.deck.subscribe(observer)
    }

    pub fn set_items(&mut self, items: Vec<T>) -> bool {
        self.deck.set_items(items)
    }

    pub fn set_container_size(&mut self, size: Size) {
        self.deck.set_container_size(size);
    }

    pub fn deck(&self) -> &DeckState<T, C> {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut DeckState<T, C> {
        &mut self.deck
    }

    pub fn gestures(&self) -> &GestureCoordinator {
        &self.gestures
    }
}

impl<T: CardItem, C: Clock> std::fmt::Debug for CardStack<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardStack")
            .field("deck", &self.deck)
            .field("gestures", &self.gestures)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstack_core::ManualClock;
    use cardstack_foundation::DragEvent;

    fn stack() -> (CardStack<&'static str, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let mut stack = CardStack::with_clock(
            vec!["ace", "king", "queen", "jack"],
            DeckConfig::default().with_tap_to_undo(true),
            clock.clone(),
        )
        .expect("default config is valid");
        stack.set_container_size(Size::new(320.0, 480.0));
        (stack, clock)
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = CardStack::new(vec![1u32], DeckConfig::default().with_visible_count(0));
        assert!(matches!(
            err,
            Err(ConfigError::Invalid {
                field: "visible_count",
                ..
            })
        ));
    }

    #[test]
    fn gesture_events_route_to_coordinator() {
        let (mut stack, clock) = stack();

        assert!(!stack.handle(DragEvent::changed(Point::new(-120.0, 0.0)).into()));
        assert!(stack.handle(DragEvent::ended(Point::new(-120.0, 0.0)).into()));
        assert_eq!(stack.top_item(), Some(&"king"));

        clock.advance_millis(300);
        assert!(stack.handle(GestureEvent::Tap));
        assert_eq!(stack.top_item(), Some(&"ace"));
        assert!(!stack.can_interact(&"ace"));
    }

    #[test]
    fn tick_reports_until_everything_settles() {
        let (mut stack, clock) = stack();
        stack.swipe(SwipeDirection::Down);
        assert!(stack.next_deadline().is_some());
        clock.advance_millis(150);
        assert!(stack.tick());
        clock.advance_millis(150);
        assert!(!stack.tick());
        assert!(stack.current_transition(0).is_none());
        assert_eq!(
            stack
                .renderable_window()
                .into_iter()
                .map(|(card, _)| *card)
                .collect::<Vec<_>>(),
            vec!["king", "queen", "jack"]
        );
    }
}
