pub mod types;

pub use types::{DragEvent, DragPhase, GestureEvent};
