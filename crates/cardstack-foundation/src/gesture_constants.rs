//! Shared gesture and physics constants.
//!
//! Values are in logical pixels (or milliseconds where named so). They are
//! the defaults behind the physics functions; anything a host may want to
//! tune lives in the deck configuration instead.

/// Dominant-axis magnitude a drag must pass before an overlay starts to show.
///
/// Much smaller than any commit threshold so the overlay fades in well before
/// a release would actually swipe the card.
pub const ACTIVE_DEADZONE: f32 = 5.0;

/// Escape vectors are this many container diagonals long, which is enough
/// to clear the container from any starting offset and rotation.
pub const ESCAPE_DIAGONAL_FACTOR: f32 = 1.5;

/// Offsets shorter than this are treated as having this length when scaled
/// into an escape vector.
pub const MIN_ESCAPE_DIVISOR: f32 = 1.0;

/// Programmatic swipes travel this many times the larger container side.
pub const PROGRAMMATIC_DISTANCE_FACTOR: f32 = 2.0;

/// Orthogonal nudge for programmatic targets so consecutive exits fan out.
pub const PROGRAMMATIC_CROSS_OFFSET: f32 = 40.0;

/// Cross-axis share of the off-screen distance kept when an undone card
/// re-enters.
pub const UNDO_CROSS_DAMPING: f32 = 0.15;

/// Default long-press duration before the detail view fades in.
pub const LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// Maximum fling velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity on a baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
