//! Testing utilities and harness for cardstack decks

pub mod recorder;
pub mod robot;
pub mod robot_assertions;

pub use recorder::CallbackRecorder;
pub use robot::DeckRobot;
pub use robot_assertions::{assert_approx_eq, assert_point_approx_eq};

pub use cardstack_core::ManualClock;

pub mod prelude {
    pub use crate::recorder::CallbackRecorder;
    pub use crate::robot::DeckRobot;
    pub use crate::robot_assertions;
    pub use cardstack_core::ManualClock;
}
