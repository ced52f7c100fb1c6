//! Swipe physics, directions and drag input handling for the card stack
//!
//! Everything in this crate is stateless apart from the velocity tracker:
//! pure functions from a drag vector and a container size to directions,
//! trajectories and overlay strength.

pub mod direction;
pub mod gesture_constants;
pub mod input;
pub mod swipe_physics;
pub mod velocity_tracker;

pub use direction::{Axis, DirectionSet, SwipeDirection};
pub use input::{DragEvent, DragPhase, GestureEvent};
pub use swipe_physics::{
    classify_active, classify_commit, escape_vector, overlay_opacity, programmatic_target,
    rotation_for, undo_entry_vector,
};
pub use velocity_tracker::{VelocityTracker, VelocityTracker1D};

pub mod prelude {
    pub use crate::direction::{DirectionSet, SwipeDirection};
    pub use crate::input::{DragEvent, DragPhase, GestureEvent};
    pub use crate::swipe_physics::*;
}
