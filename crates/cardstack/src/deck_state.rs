//! The swipe/undo state machine.
//!
//! [`DeckState`] is the only owner of the current index, the per-index
//! transition records and the undo history. Every operation is a local,
//! synchronous transition: bad indices, throttled calls and empty-history
//! undos return `false` and leave the deck untouched.
//!
//! Leaving cards stay in the renderable window until their cleanup timer
//! fires. Cleanup timers are driven by [`DeckState::tick`]; a timer whose
//! record has since changed phase is ignored.

use crate::config::DeckConfig;
use crate::event::DeckEvent;
use crate::history::{HistoryEntry, UndoHistory};
use crate::item::CardItem;
use crate::throttle::{Throttle, ThrottledAction};
use crate::transition::{TransitionPhase, TransitionRecord};
use cardstack_core::collections::{map::Entry, IndexMap};
use cardstack_core::{Clock, ObserverRegistry, Subscription, SystemClock, TimerId, TimerRegistry};
use cardstack_foundation::{programmatic_target, undo_entry_vector, SwipeDirection};
use cardstack_graphics::{Point, Size};
use smallvec::SmallVec;
use web_time::Instant;

type SwipeCallback<T> = Box<dyn FnMut(&T, SwipeDirection)>;
type UndoCallback<T> = Box<dyn FnMut(&T)>;

/// Scheduled removal of a transition record.
#[derive(Clone, Copy, Debug)]
struct Cleanup {
    index: usize,
    phase: TransitionPhase,
}

pub struct DeckState<T: CardItem, C: Clock = SystemClock> {
    items: Vec<T>,
    current_index: usize,
    transitions: IndexMap<TransitionRecord>,
    history: UndoHistory,
    throttle: Throttle,
    cleanups: TimerRegistry<Cleanup>,
    config: DeckConfig,
    container: Size,
    clock: C,
    on_swipe: Option<SwipeCallback<T>>,
    on_undo: Option<UndoCallback<T>>,
    observers: ObserverRegistry<DeckEvent>,
}

impl<T: CardItem> DeckState<T, SystemClock> {
    pub fn with_system_clock(items: Vec<T>, config: DeckConfig) -> Self {
        Self::new(items, config, SystemClock)
    }
}

impl<T: CardItem, C: Clock> DeckState<T, C> {
    pub fn new(items: Vec<T>, config: DeckConfig, clock: C) -> Self {
        Self {
            items,
            current_index: 0,
            transitions: IndexMap::default(),
            history: UndoHistory::new(),
            throttle: Throttle::new(),
            cleanups: TimerRegistry::new(),
            config,
            container: Size::ZERO,
            clock,
            on_swipe: None,
            on_undo: None,
            observers: ObserverRegistry::new(),
        }
    }

    // ========== Actions ==========

    /// Send the card at `index` off-screen.
    ///
    /// The leaving record animates from `live_offset` to `final_point`. A
    /// card that is already leaving is retargeted and its history entry
    /// replaced; an incoming card turns around and leaves again.
    pub fn commit_swipe(
        &mut self,
        index: usize,
        direction: SwipeDirection,
        live_offset: Point,
        final_point: Point,
        programmatic: bool,
    ) -> bool {
        let len = self.items.len();
        if index >= len {
            log::warn!("commit_swipe ignored: index {index} out of range for {len} items");
            return false;
        }
        let now = self.clock.now();
        if !self
            .throttle
            .try_acquire(ThrottledAction::Swipe, now, self.config.swipe_throttle())
        {
            log::debug!("swipe on card {index} throttled");
            return false;
        }

        let entry = HistoryEntry {
            index,
            direction,
            last_offset: final_point,
        };
        let cleanup = self.cleanups.schedule(
            now + self.config.swipe_duration(),
            Cleanup {
                index,
                phase: TransitionPhase::Leaving,
            },
        );
        let animation = self.config.swipe_animation;

        match self.transitions.entry(index) {
            Entry::Occupied(mut slot) => {
                let record = slot.get_mut();
                let retrigger = record.phase() == TransitionPhase::Leaving;
                record.retarget(
                    direction,
                    TransitionPhase::Leaving,
                    final_point,
                    programmatic,
                    animation,
                    cleanup,
                    now,
                );
                if !(retrigger && self.history.replace_latest_for(entry)) {
                    self.history.push(entry);
                }
            }
            Entry::Vacant(slot) => {
                let mut record = TransitionRecord::new(
                    direction,
                    TransitionPhase::Leaving,
                    live_offset,
                    programmatic,
                    cleanup,
                );
                record.animate_to(final_point, animation, now);
                slot.insert(record);
                self.history.push(entry);
            }
        }

        self.current_index = self.current_index.max((index + 1).min(len));
        log::debug!(
            "card {index} swiped {direction:?}; current index {}",
            self.current_index
        );

        if let Some(on_swipe) = self.on_swipe.as_mut() {
            on_swipe(&self.items[index], direction);
        }
        self.emit(DeckEvent::Swiped { index, direction });
        true
    }

    /// Swipe the top card towards a fixed off-screen point.
    pub fn swipe(&mut self, direction: SwipeDirection) -> bool {
        let Some(index) = self.top_index() else {
            log::debug!("swipe {direction:?} ignored: deck exhausted");
            return false;
        };
        let target = programmatic_target(direction, self.container);
        self.commit_swipe(index, direction, Point::ZERO, target, true)
    }

    /// Bring back the most recently swiped card.
    pub fn undo(&mut self) -> bool {
        let Some(&entry) = self.history.peek() else {
            log::debug!("undo ignored: history empty");
            return false;
        };
        let index = entry.index;
        if index >= self.items.len() {
            log::warn!("undo ignored: history entry for card {index} is out of range");
            return false;
        }
        let now = self.clock.now();
        if !self
            .throttle
            .try_acquire(ThrottledAction::Undo, now, self.config.undo_throttle())
        {
            log::debug!("undo throttled");
            return false;
        }
        self.history.pop();

        self.current_index = index;
        let cleanup = self.cleanups.schedule(
            now + self.config.undo_duration(),
            Cleanup {
                index,
                phase: TransitionPhase::Incoming,
            },
        );
        let animation = self.config.undo_animation;

        match self.transitions.entry(index) {
            Entry::Occupied(mut slot) => {
                let record = slot.get_mut();
                let programmatic = record.is_programmatic();
                record.retarget(
                    entry.direction,
                    TransitionPhase::Incoming,
                    Point::ZERO,
                    programmatic,
                    animation,
                    cleanup,
                    now,
                );
            }
            Entry::Vacant(slot) => {
                let seed = undo_entry_vector(entry.direction, entry.last_offset, self.container);
                let mut record = TransitionRecord::new(
                    entry.direction,
                    TransitionPhase::Incoming,
                    seed,
                    false,
                    cleanup,
                );
                record.animate_to(Point::ZERO, animation, now);
                slot.insert(record);
            }
        }
        log::debug!("card {index} restored; {} left in history", self.history.len());

        if let Some(on_undo) = self.on_undo.as_mut() {
            on_undo(&self.items[index]);
        }
        self.emit(DeckEvent::Undone { index });
        true
    }

    /// Advance animations and fire due cleanups. Returns `true` while
    /// anything is still moving or waiting to be cleaned up.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut animating = false;
        for record in self.transitions.values_mut() {
            animating |= record.tick(now);
        }
        for (id, cleanup) in self.cleanups.drain_due(now) {
            self.settle(id, cleanup);
        }
        animating || self.cleanups.has_pending()
    }

    fn settle(&mut self, id: TimerId, cleanup: Cleanup) {
        let current = self
            .transitions
            .get(&cleanup.index)
            .is_some_and(|record| record.phase() == cleanup.phase && record.cleanup().id() == id);
        if !current {
            log::trace!("stale cleanup for card {} ignored", cleanup.index);
            return;
        }
        self.transitions.remove(&cleanup.index);
        self.emit(DeckEvent::TransitionSettled {
            index: cleanup.index,
            phase: cleanup.phase,
        });
    }

    // ========== Collection & layout ==========

    /// Replace the collection. An equal collection is ignored; a shorter one
    /// clamps the index and drops records and history past the end.
    pub fn set_items(&mut self, items: Vec<T>) -> bool {
        if items == self.items {
            return false;
        }
        let len = items.len();
        self.items = items;
        self.current_index = self.current_index.min(len);
        self.transitions.retain(|index, record| {
            let keep = *index < len;
            if !keep {
                record.cleanup().cancel();
            }
            keep
        });
        self.history.retain(|entry| entry.index < len);
        log::debug!("items replaced: {len} cards, current index {}", self.current_index);
        self.emit(DeckEvent::ItemsReplaced { count: len });
        true
    }

    pub fn set_container_size(&mut self, size: Size) {
        self.container = size;
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    // ========== Callbacks ==========

    pub fn set_on_swipe(&mut self, callback: impl FnMut(&T, SwipeDirection) + 'static) {
        self.on_swipe = Some(Box::new(callback));
    }

    pub fn set_on_undo(&mut self, callback: impl FnMut(&T) + 'static) {
        self.on_undo = Some(Box::new(callback));
    }

    pub fn subscribe(&self, observer: impl Fn(&DeckEvent) + 'static) -> Subscription {
        self.observers.subscribe(observer)
    }

    pub(crate) fn emit(&self, event: DeckEvent) {
        self.observers.notify(&event);
    }

    // ========== Queries ==========

    /// Indices the view must keep mounted, ascending and without repeats.
    pub fn renderable_indices(&self) -> Vec<usize> {
        let len = self.items.len();
        let end = self
            .current_index
            .saturating_add(self.config.visible_count)
            .min(len);
        let mut indices: SmallVec<[usize; 8]> = (self.current_index..end).collect();
        indices.extend(self.transitions.keys().copied().filter(|index| *index < len));
        indices.sort_unstable();
        indices.dedup();
        indices.into_vec()
    }

    pub fn renderable_window(&self) -> Vec<(&T, usize)> {
        self.renderable_indices()
            .into_iter()
            .map(|index| (&self.items[index], index))
            .collect()
    }

    pub fn transition(&self, index: usize) -> Option<&TransitionRecord> {
        self.transitions.get(&index)
    }

    pub fn transitions(&self) -> impl Iterator<Item = (usize, &TransitionRecord)> + '_ {
        self.transitions.iter().map(|(index, record)| (*index, record))
    }

    pub fn top_index(&self) -> Option<usize> {
        (self.current_index < self.items.len()).then_some(self.current_index)
    }

    pub fn top_item(&self) -> Option<&T> {
        self.items.get(self.current_index)
    }

    /// Whether `item` is the top card and nothing is animating it.
    pub fn can_interact(&self, item: &T) -> bool {
        match self.top_item() {
            Some(top) => {
                top.id() == item.id() && !self.transitions.contains_key(&self.current_index)
            }
            None => false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.items.len()
    }

    pub fn is_animating(&self) -> bool {
        self.transitions.values().any(TransitionRecord::is_animating) || self.cleanups.has_pending()
    }

    /// Earliest pending cleanup. Hosts that don't tick every frame can
    /// sleep until then once animations have finished.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.cleanups.next_deadline()
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }
}

impl<T: CardItem, C: Clock> std::fmt::Debug for DeckState<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckState")
            .field("items", &self.items.len())
            .field("current_index", &self.current_index)
            .field("transitions", &self.transitions.len())
            .field("history", &self.history.len())
            .field("container", &self.container)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/deck_state_tests.rs"]
mod tests;
