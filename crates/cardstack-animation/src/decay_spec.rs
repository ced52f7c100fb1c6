//! Fling decay: how far a released card would keep travelling.
//!
//! Uses the Android `Scroller` deceleration model so that a card released
//! with velocity lands where a platform fling would have stopped. Only the
//! closed-form distance and duration are needed here; the card itself is
//! animated by the exit tween, not by the decay curve.

/// Tension curve inflection point.
const INFLECTION: f64 = 0.35;
/// Earth's gravity in SI units (m/s²).
const GRAVITY_EARTH: f32 = 9.80665;
const INCHES_PER_METER: f32 = 39.37;
/// `(ln(0.78) / ln(0.9)).abs()`
const DECELERATION_RATE: f64 = 2.358_201_6;

fn physical_coefficient(density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * 0.84
}

/// Summary of a fling for a given initial velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingInfo {
    /// Initial velocity in px/sec.
    pub initial_velocity: f32,
    /// Unsigned distance the fling travels.
    pub distance: f32,
    /// Duration in milliseconds.
    pub duration_millis: u64,
}

impl FlingInfo {
    /// Signed displacement at the end of the fling.
    pub fn displacement(&self) -> f32 {
        self.distance * self.initial_velocity.signum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingCalculator {
    friction: f32,
    magic_physical_coefficient: f32,
}

impl FlingCalculator {
    /// Android's default scroll friction.
    pub const DEFAULT_FRICTION: f32 = 0.015;

    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            magic_physical_coefficient: physical_coefficient(density),
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        let friction = (self.friction * self.magic_physical_coefficient) as f64;
        (INFLECTION * velocity.abs() as f64 / friction).ln()
    }

    pub fn fling_duration_millis(&self, velocity: f32) -> u64 {
        if velocity == 0.0 || !velocity.is_finite() {
            return 0;
        }
        let l = self.spline_deceleration(velocity);
        (1000.0 * (l / (DECELERATION_RATE - 1.0)).exp()) as u64
    }

    pub fn fling_distance(&self, velocity: f32) -> f32 {
        if velocity == 0.0 || !velocity.is_finite() {
            return 0.0;
        }
        let l = self.spline_deceleration(velocity);
        let scale = (self.friction * self.magic_physical_coefficient) as f64;
        (scale * (DECELERATION_RATE / (DECELERATION_RATE - 1.0) * l).exp()) as f32
    }

    pub fn fling_info(&self, velocity: f32) -> FlingInfo {
        FlingInfo {
            initial_velocity: velocity,
            distance: self.fling_distance(velocity),
            duration_millis: self.fling_duration_millis(velocity),
        }
    }

    /// Where a value released at `position` with `velocity` comes to rest.
    pub fn projected_end(&self, position: f32, velocity: f32) -> f32 {
        position + self.fling_info(velocity).displacement()
    }
}

impl Default for FlingCalculator {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}
