//! Swipeable card deck
//!
//! The deck is split the same way the gesture pipeline is:
//!
//! - [`DeckState`] owns the current index, in-flight transitions, undo
//!   history and throttles. It is the only thing that mutates them.
//! - [`GestureCoordinator`] turns drag/tap input into state-machine calls
//!   and keeps the live drag offset, hold timer and snap-back animation.
//! - [`compose_visuals`] derives per-card transforms for the renderer.
//!
//! [`CardStack`] bundles the three behind one handle.

mod card_stack;
mod config;
mod coordinator;
mod deck_state;
mod error;
mod event;
mod history;
mod item;
mod throttle;
mod transition;
mod view;

pub use card_stack::CardStack;
pub use config::DeckConfig;
pub use coordinator::GestureCoordinator;
pub use deck_state::DeckState;
pub use error::ConfigError;
pub use event::DeckEvent;
pub use history::{HistoryEntry, UndoHistory};
pub use item::CardItem;
pub use throttle::{Throttle, ThrottledAction};
pub use transition::{TransitionPhase, TransitionRecord};
pub use view::{compose_visuals, CardVisual, Overlay};

pub use cardstack_animation::{AnimationSpec, AnimationType, Easing, SpringSpec};
pub use cardstack_core::{Clock, ManualClock, Subscription, SystemClock};
pub use cardstack_foundation::{DirectionSet, DragEvent, DragPhase, GestureEvent, SwipeDirection};
pub use cardstack_graphics::{GraphicsLayer, Point, Size};

pub mod prelude {
    pub use crate::card_stack::CardStack;
    pub use crate::config::DeckConfig;
    pub use crate::event::DeckEvent;
    pub use crate::item::CardItem;
    pub use crate::transition::TransitionPhase;
    pub use cardstack_foundation::{DirectionSet, SwipeDirection};
    pub use cardstack_graphics::{Point, Size};
}
