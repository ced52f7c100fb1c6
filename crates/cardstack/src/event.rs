use crate::transition::TransitionPhase;
use cardstack_foundation::SwipeDirection;

/// Change notification sent to deck subscribers once the deck is consistent
/// again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckEvent {
    Swiped {
        index: usize,
        direction: SwipeDirection,
    },
    Undone {
        index: usize,
    },
    /// A cleanup timer fired and the record at `index` was removed.
    TransitionSettled {
        index: usize,
        phase: TransitionPhase,
    },
    ItemsReplaced {
        count: usize,
    },
    DetailVisibilityChanged(bool),
}
