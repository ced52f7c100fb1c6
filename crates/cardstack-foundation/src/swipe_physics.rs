//! Pure swipe physics.
//!
//! Maps drag vectors to directions, exit trajectories and overlay strength.
//! No function here keeps state; all sizes are the container's logical size.

use crate::direction::{Axis, SwipeDirection};
use crate::gesture_constants::{
    ACTIVE_DEADZONE, ESCAPE_DIAGONAL_FACTOR, MIN_ESCAPE_DIVISOR, PROGRAMMATIC_CROSS_OFFSET,
    PROGRAMMATIC_DISTANCE_FACTOR, UNDO_CROSS_DAMPING,
};
use cardstack_graphics::{Point, Size};

/// Dominant axis of `offset`; ties go to horizontal.
fn dominant(offset: Point) -> (Axis, f32) {
    if offset.x.abs() >= offset.y.abs() {
        (Axis::Horizontal, offset.x)
    } else {
        (Axis::Vertical, offset.y)
    }
}

/// Scale `offset` to `1.5 ×` the container diagonal, keeping its direction.
///
/// Offsets shorter than one unit are divided by one instead of their own
/// length, so a zero offset yields a zero vector rather than NaN.
pub fn escape_vector(offset: Point, size: Size) -> Point {
    let distance = ESCAPE_DIAGONAL_FACTOR * size.diagonal();
    let magnitude = offset.length().max(MIN_ESCAPE_DIVISOR);
    offset.scale(distance / magnitude)
}

/// Fixed off-screen point for a commanded swipe.
pub fn programmatic_target(direction: SwipeDirection, size: Size) -> Point {
    let distance = PROGRAMMATIC_DISTANCE_FACTOR * size.max_dimension();
    let cross = PROGRAMMATIC_CROSS_OFFSET;
    match direction {
        SwipeDirection::Right => Point::new(distance, -cross),
        SwipeDirection::Left => Point::new(-distance, -cross),
        SwipeDirection::Up => Point::new(cross, -distance),
        SwipeDirection::Down => Point::new(-cross, distance),
    }
}

/// Direction a release at `offset` commits to, if any.
///
/// The dominant axis must reach `threshold`; otherwise the card snaps back.
pub fn classify_commit(offset: Point, threshold: f32) -> Option<SwipeDirection> {
    let (axis, value) = dominant(offset);
    if value.abs() >= threshold && value != 0.0 {
        Some(SwipeDirection::from_axis(axis, value))
    } else {
        None
    }
}

/// Direction currently being dragged towards, for live overlay feedback.
pub fn classify_active(offset: Point) -> Option<SwipeDirection> {
    let (axis, value) = dominant(offset);
    if value.abs() > ACTIVE_DEADZONE {
        Some(SwipeDirection::from_axis(axis, value))
    } else {
        None
    }
}

/// Overlay strength in `[0, 1]`: the dominant magnitude over `threshold`.
pub fn overlay_opacity(offset: Point, threshold: f32) -> f32 {
    let magnitude = offset.max_abs_component();
    if threshold <= 0.0 {
        return if magnitude > 0.0 { 1.0 } else { 0.0 };
    }
    (magnitude / threshold).min(1.0)
}

/// Off-screen seed for a card coming back on undo.
///
/// The main axis sits a full escape distance out along `direction`; the
/// cross axis follows the recorded exit point but never strays more than
/// [`UNDO_CROSS_DAMPING`] of that distance.
pub fn undo_entry_vector(direction: SwipeDirection, last_offset: Point, size: Size) -> Point {
    let distance = ESCAPE_DIAGONAL_FACTOR * size.diagonal();
    let cross_limit = UNDO_CROSS_DAMPING * distance;
    let main = direction.sign() * distance;
    match direction.axis() {
        Axis::Horizontal => Point::new(main, last_offset.y.clamp(-cross_limit, cross_limit)),
        Axis::Vertical => Point::new(last_offset.x.clamp(-cross_limit, cross_limit), main),
    }
}

/// Tilt for a horizontal offset, proportional to how far across the
/// container it is and clamped to `±max_degrees`.
pub fn rotation_for(offset_x: f32, width: f32, max_degrees: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    (offset_x / width * max_degrees).clamp(-max_degrees.abs(), max_degrees.abs())
}

#[cfg(test)]
#[path = "tests/swipe_physics_tests.rs"]
mod tests;
