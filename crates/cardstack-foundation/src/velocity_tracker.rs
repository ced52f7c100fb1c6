//! Release velocity estimation for drags.
//!
//! Samples are kept in a small ring buffer; velocity is the slope of a
//! recency-weighted linear regression over the last [`HORIZON_MS`].

use crate::gesture_constants::MAX_FLING_VELOCITY;
use cardstack_graphics::Point;

const HISTORY_SIZE: usize = 20;

/// Only samples this recent contribute to the estimate.
const HORIZON_MS: i64 = 100;

/// A pointer that moved less than [`MIN_MOVEMENT`] over this span is at rest.
const ASSUME_STOPPED_MS: i64 = 40;

const MIN_MOVEMENT: f32 = 2.0;

/// Per-sample weight decay; newer samples count more.
const RECENCY_DECAY: f32 = 0.95;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Velocity along a single axis, in units per second.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        if let Some(newest) = self.samples[self.index] {
            if time_ms < newest.time_ms {
                log::trace!("dropping out-of-order velocity sample at {time_ms}ms");
                return;
            }
        }
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut oldest = newest;
        let mut cursor = self.index;

        while count < HISTORY_SIZE {
            let Some(sample) = self.samples[cursor] else {
                break;
            };
            let age = newest.time_ms - sample.time_ms;
            if age > HORIZON_MS {
                break;
            }
            oldest = sample;
            positions[count] = sample.position;
            times[count] = -(age as f32);
            count += 1;
            cursor = if cursor == 0 { HISTORY_SIZE - 1 } else { cursor - 1 };
        }

        if count < 2 {
            return 0.0;
        }

        let span_ms = newest.time_ms - oldest.time_ms;
        if span_ms > ASSUME_STOPPED_MS && (newest.position - oldest.position).abs() < MIN_MOVEMENT {
            return 0.0;
        }

        let per_ms = weighted_slope(&positions[..count], &times[..count]);
        (per_ms * 1000.0).clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Slope of `position = a + b * time` with exponentially decaying weights.
fn weighted_slope(positions: &[f32], times: &[f32]) -> f32 {
    let mut sum_w = 0.0f32;
    let mut sum_t = 0.0f32;
    let mut sum_x = 0.0f32;
    let mut sum_tt = 0.0f32;
    let mut sum_tx = 0.0f32;

    for (i, (&x, &t)) in positions.iter().zip(times).enumerate() {
        let w = RECENCY_DECAY.powi(i as i32);
        sum_w += w;
        sum_t += w * t;
        sum_x += w * x;
        sum_tt += w * t * t;
        sum_tx += w * t * x;
    }

    let denom = sum_w * sum_tt - sum_t * sum_t;
    if denom.abs() < f32::EPSILON {
        return 0.0;
    }
    (sum_w * sum_tx - sum_t * sum_x) / denom
}

/// Two-axis tracker fed with drag translations.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, time_ms: i64, position: Point) {
        self.x.add_data_point(time_ms, position.x);
        self.y.add_data_point(time_ms, position.y);
    }

    /// Velocity in units per second on each axis.
    pub fn velocity(&self) -> Point {
        Point::new(self.x.calculate_velocity(), self.y.calculate_velocity())
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}
