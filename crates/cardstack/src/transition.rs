use cardstack_animation::{Animatable, AnimationType};
use cardstack_core::TimerHandle;
use cardstack_foundation::SwipeDirection;
use cardstack_graphics::Point;
use web_time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    /// Swiped away and animating off-screen.
    Leaving,
    /// Brought back by undo and animating back to rest.
    Incoming,
}

/// Bookkeeping for one card that is mid-animation.
///
/// A deck holds at most one record per index. The record stays in the
/// renderable window until its cleanup timer fires.
#[derive(Debug, Clone)]
pub struct TransitionRecord {
    direction: SwipeDirection,
    phase: TransitionPhase,
    target: Point,
    programmatic: bool,
    translation: Animatable<Point>,
    cleanup: TimerHandle,
}

impl TransitionRecord {
    pub(crate) fn new(
        direction: SwipeDirection,
        phase: TransitionPhase,
        from: Point,
        programmatic: bool,
        cleanup: TimerHandle,
    ) -> Self {
        Self {
            direction,
            phase,
            target: from,
            programmatic,
            translation: Animatable::new(from),
            cleanup,
        }
    }

    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Where the card is right now.
    pub fn translation(&self) -> Point {
        self.translation.value()
    }

    /// Where the card is headed.
    pub fn target(&self) -> Point {
        self.target
    }

    /// Started by a commanded swipe rather than a drag.
    pub fn is_programmatic(&self) -> bool {
        self.programmatic
    }

    pub fn is_animating(&self) -> bool {
        self.translation.is_running()
    }

    pub fn cleanup(&self) -> &TimerHandle {
        &self.cleanup
    }

    /// Point the record at a new phase and target, continuing from the
    /// current translation. The previous cleanup timer is cancelled.
    pub(crate) fn retarget(
        &mut self,
        direction: SwipeDirection,
        phase: TransitionPhase,
        target: Point,
        programmatic: bool,
        animation: AnimationType,
        cleanup: TimerHandle,
        now: Instant,
    ) {
        self.cleanup.cancel();
        self.direction = direction;
        self.phase = phase;
        self.programmatic = programmatic;
        self.cleanup = cleanup;
        self.animate_to(target, animation, now);
    }

    pub(crate) fn animate_to(&mut self, target: Point, animation: AnimationType, now: Instant) {
        self.target = target;
        self.translation.animate_to(target, animation, now);
    }

    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        self.translation.tick(now)
    }
}
