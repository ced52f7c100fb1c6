use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrottledAction {
    Swipe,
    Undo,
}

/// Minimum spacing between repeated actions of the same kind.
///
/// Swipe and undo are throttled independently, so an undo right after a
/// swipe is never rejected because of the swipe.
#[derive(Clone, Copy, Debug, Default)]
pub struct Throttle {
    last_swipe: Option<Instant>,
    last_undo: Option<Instant>,
}

impl Throttle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `action` at `now` unless the previous one was less than
    /// `min_interval` ago.
    pub fn try_acquire(
        &mut self,
        action: ThrottledAction,
        now: Instant,
        min_interval: Duration,
    ) -> bool {
        let last = match action {
            ThrottledAction::Swipe => &mut self.last_swipe,
            ThrottledAction::Undo => &mut self.last_undo,
        };
        if let Some(previous) = *last {
            if now.saturating_duration_since(previous) < min_interval {
                return false;
            }
        }
        *last = Some(now);
        true
    }

    pub fn last(&self, action: ThrottledAction) -> Option<Instant> {
        match action {
            ThrottledAction::Swipe => self.last_swipe,
            ThrottledAction::Undo => self.last_undo,
        }
    }
}
