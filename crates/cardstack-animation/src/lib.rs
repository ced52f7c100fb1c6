//! Animation primitives for the card stack
//!
//! Provides easing curves, tween and spring specifications, a clock-driven
//! [`Animatable`] and the fling decay used to project a release gesture.

pub mod animation;
pub mod decay_spec;

pub use animation::*;
pub use decay_spec::{FlingCalculator, FlingInfo};

pub mod prelude {
    pub use crate::animation::{Animatable, AnimationSpec, AnimationType, Easing, Lerp, SpringSpec};
    pub use crate::decay_spec::FlingCalculator;
}
