//! Drag and tap handling for the top card.
//!
//! The coordinator owns only what belongs to an in-progress gesture: the
//! live drag offset, the hold timer and the snap-back animation. Everything
//! that outlives the gesture goes through [`DeckState`].

use crate::deck_state::DeckState;
use crate::event::DeckEvent;
use crate::item::CardItem;
use cardstack_animation::{Animatable, FlingCalculator};
use cardstack_core::{Clock, TimerHandle, TimerRegistry};
use cardstack_foundation::{
    classify_active, classify_commit, escape_vector, programmatic_target, SwipeDirection,
    VelocityTracker,
};
use cardstack_graphics::Point;
use web_time::Instant;

#[derive(Clone, Copy, Debug)]
struct HoldTimeout;

#[derive(Debug)]
pub struct GestureCoordinator {
    drag_offset: Animatable<Point>,
    dragging: bool,
    /// The deck changed under a live drag; its remaining events are dropped.
    abandoned: bool,
    holding: bool,
    hold_timer: Option<TimerHandle>,
    hold_timers: TimerRegistry<HoldTimeout>,
    velocity: VelocityTracker,
    drag_started_at: Option<Instant>,
    fling: FlingCalculator,
}

impl Default for GestureCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureCoordinator {
    pub fn new() -> Self {
        Self::with_fling(FlingCalculator::default())
    }

    /// Use a fling model tuned for the host's pixel density.
    pub fn with_fling(fling: FlingCalculator) -> Self {
        Self {
            drag_offset: Animatable::new(Point::ZERO),
            dragging: false,
            abandoned: false,
            holding: false,
            hold_timer: None,
            hold_timers: TimerRegistry::new(),
            velocity: VelocityTracker::new(),
            drag_started_at: None,
            fling,
        }
    }

    /// Current offset of the top card: the finger position while dragging,
    /// the snap-back position afterwards.
    pub fn drag_offset(&self) -> Point {
        self.drag_offset.value()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The press-and-hold timer fired during the current drag.
    pub fn is_holding(&self) -> bool {
        self.holding
    }

    pub fn is_snapping_back(&self) -> bool {
        !self.dragging && self.drag_offset.is_running()
    }

    pub fn on_drag_changed<T: CardItem, C: Clock>(
        &mut self,
        deck: &mut DeckState<T, C>,
        translation: Point,
    ) -> bool {
        if self.abandoned || !top_is_draggable(deck) {
            return false;
        }
        let now = deck.now();
        if !self.dragging {
            self.dragging = true;
            self.drag_started_at = Some(now);
            self.velocity.reset();
            if deck.config().detail_enabled {
                let deadline = now + deck.config().hold_duration();
                self.hold_timer = Some(self.hold_timers.schedule(deadline, HoldTimeout));
            }
        }
        self.drag_offset.snap_to(translation);
        self.track(now, translation);
        true
    }

    /// Finish a drag. Returns the committed direction, if any.
    ///
    /// The commit decision always uses the raw release offset. A predicted
    /// end, supplied by the host or derived from tracked velocity when
    /// `fling_prediction` is on, only shapes the exit trajectory, and only
    /// when it points the same way as the commit.
    pub fn on_drag_ended<T: CardItem, C: Clock>(
        &mut self,
        deck: &mut DeckState<T, C>,
        translation: Point,
        predicted_end: Option<Point>,
    ) -> Option<SwipeDirection> {
        if std::mem::take(&mut self.abandoned) {
            log::debug!("release of an abandoned drag ignored");
            return None;
        }
        let now = deck.now();
        if !self.dragging {
            self.velocity.reset();
        }
        self.track(now, translation);
        self.end_drag(deck);
        self.drag_offset.snap_to(translation);

        let index = match deck.top_index() {
            Some(index) if deck.transition(index).is_none() => index,
            _ => {
                self.snap_back(deck);
                return None;
            }
        };
        let container = deck.container_size();
        if container.is_empty() {
            log::debug!("drag released before the container was measured");
            self.snap_back(deck);
            return None;
        }

        let threshold = deck.config().swipe_threshold(container.width);
        let Some(direction) = classify_commit(translation, threshold)
            .filter(|direction| deck.config().allowed_directions.contains(*direction))
        else {
            self.snap_back(deck);
            return None;
        };

        let predicted = predicted_end.or_else(|| {
            deck.config()
                .fling_prediction
                .then(|| self.projected_end(translation))
        });
        let trajectory = match predicted {
            Some(end) if classify_active(end) == Some(direction) => end,
            _ => translation,
        };
        let final_point = escape_vector(trajectory, container);

        if deck.commit_swipe(index, direction, translation, final_point, false) {
            self.reset_offset();
            Some(direction)
        } else {
            self.snap_back(deck);
            None
        }
    }

    pub fn on_drag_cancelled<T: CardItem, C: Clock>(&mut self, deck: &mut DeckState<T, C>) {
        if std::mem::take(&mut self.abandoned) {
            return;
        }
        self.end_drag(deck);
        self.snap_back(deck);
    }

    /// A tap undoes the last swipe when `tap_to_undo` is on.
    pub fn on_tap<T: CardItem, C: Clock>(&mut self, deck: &mut DeckState<T, C>) -> bool {
        deck.config().tap_to_undo && self.undo(deck)
    }

    /// Commanded swipe of the top card. A card that is being dragged leaves
    /// from where the finger left it.
    pub fn swipe<T: CardItem, C: Clock>(
        &mut self,
        deck: &mut DeckState<T, C>,
        direction: SwipeDirection,
    ) -> bool {
        let Some(index) = deck.top_index() else {
            return false;
        };
        let target = programmatic_target(direction, deck.container_size());
        let live = self.drag_offset.value();
        if !deck.commit_swipe(index, direction, live, target, true) {
            return false;
        }
        self.abandon_drag(deck);
        true
    }

    /// Restore the last swiped card. A drag in progress belonged to the card
    /// that is now covered, so it is dropped.
    pub fn undo<T: CardItem, C: Clock>(&mut self, deck: &mut DeckState<T, C>) -> bool {
        if !deck.undo() {
            return false;
        }
        self.abandon_drag(deck);
        true
    }

    /// Fire the hold timer and step the snap-back animation. Returns `true`
    /// while either is still pending.
    pub fn tick<T: CardItem, C: Clock>(&mut self, deck: &mut DeckState<T, C>) -> bool {
        let now = deck.now();
        for _ in self.hold_timers.drain_due(now) {
            if self.dragging && !self.holding {
                self.holding = true;
                log::debug!("hold detected; showing detail");
                deck.emit(DeckEvent::DetailVisibilityChanged(true));
            }
        }
        let snapping = self.drag_offset.tick(now);
        snapping || self.hold_timers.has_pending()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.hold_timers.next_deadline()
    }

    fn track(&mut self, now: Instant, translation: Point) {
        let started = *self.drag_started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started).as_millis() as i64;
        self.velocity.add_position(elapsed, translation);
    }

    fn projected_end(&self, translation: Point) -> Point {
        let velocity = self.velocity.velocity();
        Point::new(
            self.fling.projected_end(translation.x, velocity.x),
            self.fling.projected_end(translation.y, velocity.y),
        )
    }

    fn end_drag<T: CardItem, C: Clock>(&mut self, deck: &DeckState<T, C>) {
        if let Some(timer) = self.hold_timer.take() {
            timer.cancel();
        }
        if self.holding {
            self.holding = false;
            deck.emit(DeckEvent::DetailVisibilityChanged(false));
        }
        self.dragging = false;
        self.drag_started_at = None;
    }

    fn snap_back<T: CardItem, C: Clock>(&mut self, deck: &DeckState<T, C>) {
        if self.drag_offset.value() == Point::ZERO {
            self.drag_offset.snap_to(Point::ZERO);
            return;
        }
        self.drag_offset
            .animate_to(Point::ZERO, deck.config().snap_back_animation, deck.now());
    }

    /// A commanded swipe or undo replaced the card under the finger.
    fn abandon_drag<T: CardItem, C: Clock>(&mut self, deck: &DeckState<T, C>) {
        if self.dragging {
            log::debug!("deck changed during drag; drag abandoned");
            self.abandoned = true;
        }
        self.end_drag(deck);
        self.reset_offset();
    }

    fn reset_offset(&mut self) {
        self.drag_offset.snap_to(Point::ZERO);
        self.velocity.reset();
    }
}

/// Drags only move a top card that is not already animating.
fn top_is_draggable<T: CardItem, C: Clock>(deck: &DeckState<T, C>) -> bool {
    deck.top_index()
        .is_some_and(|index| deck.transition(index).is_none())
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
