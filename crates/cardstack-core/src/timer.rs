//! Deadline timers with explicit cancel handles.
//!
//! A [`TimerRegistry`] owns the pending events; the caller that scheduled a
//! timer keeps a [`TimerHandle`] to cancel it. Cancellation is idempotent and
//! a cancelled or already fired timer never fires (again). The registry never
//! runs anything by itself: the owner drains due events from its own tick.

use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;
use web_time::Instant;

pub type TimerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

/// Owned handle to a scheduled timer.
#[derive(Clone, Debug)]
pub struct TimerHandle {
    id: TimerId,
    state: Rc<Cell<TimerState>>,
}

impl TimerHandle {
    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn state(&self) -> TimerState {
        self.state.get()
    }

    pub fn is_pending(&self) -> bool {
        self.state.get() == TimerState::Pending
    }

    /// Cancel the timer. Returns `true` only if it was still pending.
    pub fn cancel(&self) -> bool {
        if self.state.get() == TimerState::Pending {
            self.state.set(TimerState::Cancelled);
            log::trace!("timer {} cancelled", self.id);
            true
        } else {
            false
        }
    }
}

struct TimerEntry<E> {
    id: TimerId,
    deadline: Instant,
    event: E,
    state: Rc<Cell<TimerState>>,
}

pub struct TimerRegistry<E> {
    entries: Vec<TimerEntry<E>>,
    next_id: TimerId,
}

impl<E> TimerRegistry<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Schedule `event` to fire once `deadline` has been reached.
    pub fn schedule(&mut self, deadline: Instant, event: E) -> TimerHandle {
        self.purge_inactive();
        let id = self.next_id;
        self.next_id += 1;
        let state = Rc::new(Cell::new(TimerState::Pending));
        self.entries.push(TimerEntry {
            id,
            deadline,
            event,
            state: Rc::clone(&state),
        });
        log::trace!("timer {id} scheduled");
        TimerHandle { id, state }
    }

    /// Remove and return every pending event whose deadline is `<= now`,
    /// earliest deadline first (ties in scheduling order).
    pub fn drain_due(&mut self, now: Instant) -> SmallVec<[(TimerId, E); 4]> {
        let mut due: Vec<TimerEntry<E>> = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            let entry = &self.entries[index];
            if entry.state.get() != TimerState::Pending {
                self.entries.swap_remove(index);
            } else if entry.deadline <= now {
                due.push(self.entries.swap_remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.id.cmp(&b.id)));
        due.into_iter()
            .map(|entry| {
                entry.state.set(TimerState::Fired);
                log::trace!("timer {} fired", entry.id);
                (entry.id, entry.event)
            })
            .collect()
    }

    /// Earliest deadline among pending timers.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries
            .iter()
            .filter(|entry| entry.state.get() == TimerState::Pending)
            .map(|entry| entry.deadline)
            .min()
    }

    pub fn pending_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.state.get() == TimerState::Pending)
            .count()
    }

    pub fn has_pending(&self) -> bool {
        self.pending_count() > 0
    }

    /// Cancel everything still pending.
    pub fn cancel_all(&mut self) {
        for entry in self.entries.drain(..) {
            if entry.state.get() == TimerState::Pending {
                entry.state.set(TimerState::Cancelled);
            }
        }
    }

    fn purge_inactive(&mut self) {
        self.entries
            .retain(|entry| entry.state.get() == TimerState::Pending);
    }
}

impl<E> Default for TimerRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for TimerRegistry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerRegistry")
            .field("pending", &self.pending_count())
            .field("next_id", &self.next_id)
            .finish()
    }
}
