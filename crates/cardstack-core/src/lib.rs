//! Runtime services for the card stack: clocks, cancellable timers and
//! change notification.
//!
//! Everything here is single-threaded. Hosts drive time forward by calling
//! `tick` on the owning state object; nothing in this crate spawns threads
//! or blocks.

pub mod collections;
pub mod observer;
pub mod platform;
pub mod timer;

pub use collections::map;
pub use observer::{ObserverRegistry, Subscription};
pub use platform::{Clock, ManualClock, SystemClock};
pub use timer::{TimerHandle, TimerId, TimerRegistry, TimerState};

pub use web_time::{Duration, Instant};

pub mod prelude {
    pub use crate::observer::{ObserverRegistry, Subscription};
    pub use crate::platform::{Clock, ManualClock, SystemClock};
    pub use crate::timer::{TimerHandle, TimerRegistry};
}
