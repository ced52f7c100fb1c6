//! Robot-style driver for deck tests.
//!
//! A [`DeckRobot`] owns a [`CardStack`] on a [`ManualClock`] and performs
//! gestures the way a finger would: drags arrive as a series of frames,
//! each advancing the clock and ticking the deck.
//!
//! # Example
//!
//! ```
//! use cardstack::{DeckConfig, Point, Size, SwipeDirection};
//! use cardstack_testing::DeckRobot;
//!
//! let mut robot = DeckRobot::new((0..10u32).collect(), DeckConfig::default(), Size::new(300.0, 400.0));
//! robot.drag_to(Point::new(150.0, 0.0));
//! assert_eq!(robot.release(), Some(SwipeDirection::Right));
//! robot.settle();
//! robot.assert_window(&[1, 2, 3]);
//! ```

use cardstack::{CardItem, CardStack, DeckConfig, TransitionPhase};
use cardstack_core::ManualClock;
use cardstack_foundation::SwipeDirection;
use cardstack_graphics::{Point, Size};

/// One display frame at 60 Hz, rounded down.
pub const FRAME_MILLIS: u64 = 16;

/// Frames used to move between two drag positions.
const DRAG_STEPS: usize = 8;

/// Upper bound for [`DeckRobot::settle`] so a stuck animation fails the test
/// instead of hanging it.
const MAX_SETTLE_FRAMES: usize = 1_000;

pub struct DeckRobot<T: CardItem> {
    stack: CardStack<T, ManualClock>,
    clock: ManualClock,
    position: Point,
}

impl<T: CardItem> DeckRobot<T> {
    /// Panics if `config` is invalid.
    pub fn new(items: Vec<T>, config: DeckConfig, container: Size) -> Self {
        let clock = ManualClock::new();
        let mut stack = match CardStack::with_clock(items, config, clock.clone()) {
            Ok(stack) => stack,
            Err(err) => panic!("robot needs a valid deck config: {err}"),
        };
        stack.set_container_size(container);
        Self {
            stack,
            clock,
            position: Point::ZERO,
        }
    }

    pub fn stack(&self) -> &CardStack<T, ManualClock> {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut CardStack<T, ManualClock> {
        &mut self.stack
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Current finger translation.
    pub fn position(&self) -> Point {
        self.position
    }

    // ========== Gestures ==========

    /// Move the finger to `target` over a few frames.
    pub fn drag_to(&mut self, target: Point) {
        let from = self.position;
        for step in 1..=DRAG_STEPS {
            let t = step as f32 / DRAG_STEPS as f32;
            let point = Point::new(
                from.x + (target.x - from.x) * t,
                from.y + (target.y - from.y) * t,
            );
            self.stack.on_drag_changed(point);
            self.frame();
        }
        self.position = target;
    }

    pub fn drag_by(&mut self, dx: f32, dy: f32) {
        let target = Point::new(self.position.x + dx, self.position.y + dy);
        self.drag_to(target);
    }

    /// Lift the finger where it is.
    pub fn release(&mut self) -> Option<SwipeDirection> {
        let translation = std::mem::replace(&mut self.position, Point::ZERO);
        self.stack.on_drag_ended(translation, None)
    }

    /// Lift the finger with a platform-predicted end translation.
    pub fn release_with_predicted(&mut self, predicted_end: Point) -> Option<SwipeDirection> {
        let translation = std::mem::replace(&mut self.position, Point::ZERO);
        self.stack.on_drag_ended(translation, Some(predicted_end))
    }

    /// Drag to `translation` and release there.
    pub fn fling(&mut self, translation: Point) -> Option<SwipeDirection> {
        self.drag_to(translation);
        self.release()
    }

    pub fn cancel(&mut self) {
        self.position = Point::ZERO;
        self.stack.on_drag_cancelled();
    }

    pub fn tap(&mut self) -> bool {
        self.stack.on_tap()
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> bool {
        self.stack.swipe(direction)
    }

    pub fn undo(&mut self) -> bool {
        self.stack.undo()
    }

    // ========== Time ==========

    /// Advance by one frame and tick. Returns whether the deck is still busy.
    pub fn frame(&mut self) -> bool {
        self.clock.advance_millis(FRAME_MILLIS);
        self.stack.tick()
    }

    /// Advance by `millis`, ticking once per frame and once at the end.
    pub fn advance_millis(&mut self, millis: u64) {
        let frames = millis / FRAME_MILLIS;
        for _ in 0..frames {
            self.frame();
        }
        let rest = millis % FRAME_MILLIS;
        if rest > 0 {
            self.clock.advance_millis(rest);
            self.stack.tick();
        }
    }

    /// Tick frame by frame until nothing is animating or pending.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.frame() {
                return;
            }
        }
        panic!("deck did not settle within {MAX_SETTLE_FRAMES} frames");
    }

    // ========== Assertions ==========

    pub fn assert_current_index(&self, expected: usize) {
        assert_eq!(self.stack.current_index(), expected, "current index");
    }

    pub fn assert_window(&self, expected: &[usize]) {
        let window: Vec<usize> = self
            .stack
            .renderable_window()
            .into_iter()
            .map(|(_, index)| index)
            .collect();
        assert_eq!(window, expected, "renderable window");
    }

    pub fn assert_phase(&self, index: usize, expected: Option<TransitionPhase>) {
        let phase = self
            .stack
            .current_transition(index)
            .map(|record| record.phase());
        assert_eq!(phase, expected, "transition phase of card {index}");
    }

    pub fn assert_history_len(&self, expected: usize) {
        assert_eq!(self.stack.deck().history().len(), expected, "history length");
    }
}
