//! Time-based animations with easing curves and spring physics.
//!
//! Unlike a frame-callback driven animation, [`Animatable`] never schedules
//! anything on its own: the owner calls [`Animatable::tick`] with the current
//! instant and reads the value back. This keeps card transitions fully
//! deterministic under a manual clock.

use cardstack_graphics::Point;
use serde::{Deserialize, Serialize};
use web_time::Instant;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}

/// Easing curves, named after their Material counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve.
    FastOutSlowIn,
    LinearOutSlowIn,
    FastOutLinearIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Solves a CSS-style cubic bezier for `y` at the given `x` fraction.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson first; bisection when the slope flattens out.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let error = curve(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            solved = true;
            break;
        }
        let dx = slope(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - error / dx).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..16 {
            let delta = curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    curve(ay, by, cy, t)
}

/// Tween specification: duration, easing and an optional start delay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    #[serde(default)]
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringSpec {
    /// 1.0 is critically damped, below 1.0 overshoots.
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Settle threshold for velocity, in progress units per second.
    pub velocity_threshold: f32,
    /// Settle threshold for distance to target, in progress units.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Either a tween or a spring.
///
/// Serialized with a `kind` tag so presets read naturally:
///
/// ```toml
/// kind = "tween"
/// duration_millis = 250
/// easing = "ease_out"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Integration step for spring physics, roughly one 60 Hz frame.
const SPRING_TIMESTEP_SECS: f32 = 0.016;

/// A value animated between a start and a target under an explicit clock.
///
/// Springs integrate a scalar progress (0 at start, 1 at target) so any
/// [`Lerp`] type can be driven by the same physics.
#[derive(Debug, Clone)]
pub struct Animatable<T: Lerp + Clone> {
    current: T,
    start: T,
    target: T,
    animation_type: AnimationType,
    start_time: Option<Instant>,
    last_frame: Option<Instant>,
    progress: f32,
    velocity: f32,
    running: bool,
}

impl<T: Lerp + Clone> Animatable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            start_time: None,
            last_frame: None,
            progress: 1.0,
            velocity: 0.0,
            running: false,
        }
    }

    /// Start animating from the current value towards `target`.
    ///
    /// Any running animation is replaced; spring velocity is reset because
    /// progress is measured against the new start/target pair.
    pub fn animate_to(&mut self, target: T, animation: AnimationType, now: Instant) {
        self.start = self.current.clone();
        self.target = target;
        self.animation_type = animation;
        self.start_time = Some(now);
        self.last_frame = Some(now);
        self.progress = 0.0;
        self.velocity = 0.0;
        self.running = true;
    }

    /// Jump to `value` and stop any running animation.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.start = value.clone();
        self.target = value;
        self.start_time = None;
        self.last_frame = None;
        self.progress = 1.0;
        self.velocity = 0.0;
        self.running = false;
    }

    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn animation_type(&self) -> AnimationType {
        self.animation_type
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the animation to `now`. Returns `true` while still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        match self.animation_type {
            AnimationType::Tween(spec) => self.tick_tween(spec, now),
            AnimationType::Spring(spec) => self.tick_spring(spec, now),
        }
        self.running
    }

    fn tick_tween(&mut self, spec: AnimationSpec, now: Instant) {
        let start = *self.start_time.get_or_insert(now);
        let elapsed = now.saturating_duration_since(start).as_millis() as u64;
        if elapsed < spec.delay_millis {
            return;
        }
        let duration = spec.duration_millis.max(1);
        let linear = ((elapsed - spec.delay_millis) as f32 / duration as f32).clamp(0.0, 1.0);
        self.progress = spec.easing.transform(linear);
        if linear >= 1.0 {
            self.finish();
        } else {
            self.current = self.start.lerp(&self.target, self.progress);
        }
    }

    fn tick_spring(&mut self, spec: SpringSpec, now: Instant) {
        let last = *self.last_frame.get_or_insert(now);
        let dt = now.saturating_duration_since(last).as_secs_f32();
        if dt <= 0.0 {
            return;
        }
        self.last_frame = Some(now);

        // Damped harmonic oscillator on progress, semi-implicit Euler.
        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let mut simulated = 0.0f32;
        while simulated < dt {
            let step = SPRING_TIMESTEP_SECS.min(dt - simulated);
            let displacement = self.progress - 1.0;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.progress = (self.progress + self.velocity * step).clamp(-1.0, 2.0);
            simulated += step;
        }

        let at_rest = self.velocity.abs() < spec.velocity_threshold;
        let near_target = (self.progress - 1.0).abs() < spec.position_threshold;
        if at_rest && near_target {
            self.finish();
        } else {
            self.current = self.start.lerp(&self.target, self.progress);
        }
    }

    fn finish(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.start_time = None;
        self.last_frame = None;
        self.progress = 1.0;
        self.velocity = 0.0;
        self.running = false;
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
