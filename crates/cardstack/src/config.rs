//! Per-deck configuration.
//!
//! Every field has a default, so a preset file only needs the values it
//! changes:
//!
//! ```toml
//! swipe_threshold_fraction = 0.3
//! allowed_directions = ["left", "right"]
//!
//! [undo_animation]
//! kind = "tween"
//! duration_millis = 200
//! easing = "ease_out"
//! ```

use crate::error::ConfigError;
use cardstack_animation::{AnimationSpec, AnimationType, Easing, SpringSpec};
use cardstack_foundation::{gesture_constants::LONG_PRESS_TIMEOUT_MS, DirectionSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use web_time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Commit distance as a fraction of the container width.
    pub swipe_threshold_fraction: f32,
    /// Tilt at a full-width drag.
    pub max_rotation_degrees: f32,
    /// Tilt used for commanded swipes, which travel further.
    pub programmatic_rotation_degrees: f32,
    /// How long a leaving card stays in the renderable window.
    pub swipe_duration_millis: u64,
    /// How long an incoming card stays marked as incoming.
    pub undo_duration_millis: u64,
    pub swipe_throttle_millis: u64,
    pub undo_throttle_millis: u64,
    /// Cards kept mounted from the current index onwards.
    pub visible_count: usize,
    pub hold_duration_millis: u64,
    /// Arm the press-and-hold detail timer while dragging.
    pub detail_enabled: bool,
    pub tap_to_undo: bool,
    /// Directions a drag may commit to. Commanded swipes ignore this.
    pub allowed_directions: DirectionSet,
    /// Derive a predicted end from tracked velocity when the host gives none.
    pub fling_prediction: bool,
    pub stack_scale_step: f32,
    pub stack_offset: f32,
    pub swipe_animation: AnimationType,
    pub undo_animation: AnimationType,
    pub snap_back_animation: AnimationType,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_fraction: 0.25,
            max_rotation_degrees: 12.0,
            programmatic_rotation_degrees: 6.0,
            swipe_animation: AnimationType::Tween(AnimationSpec::tween(300, Easing::FastOutSlowIn)),
            undo_animation: AnimationType::Tween(AnimationSpec::tween(300, Easing::FastOutSlowIn)),
            snap_back_animation: AnimationType::Spring(SpringSpec::bouncy()),
            swipe_duration_millis: 300,
            undo_duration_millis: 300,
            swipe_throttle_millis: 250,
            undo_throttle_millis: 250,
            visible_count: 3,
            hold_duration_millis: LONG_PRESS_TIMEOUT_MS,
            detail_enabled: false,
            tap_to_undo: false,
            allowed_directions: DirectionSet::ALL,
            fling_prediction: false,
            stack_scale_step: 0.05,
            stack_offset: 8.0,
        }
    }
}

impl DeckConfig {
    pub fn with_swipe_threshold_fraction(mut self, fraction: f32) -> Self {
        self.swipe_threshold_fraction = fraction;
        self
    }

    pub fn with_visible_count(mut self, count: usize) -> Self {
        self.visible_count = count;
        self
    }

    pub fn with_allowed_directions(mut self, directions: DirectionSet) -> Self {
        self.allowed_directions = directions;
        self
    }

    pub fn with_detail_enabled(mut self, enabled: bool) -> Self {
        self.detail_enabled = enabled;
        self
    }

    pub fn with_tap_to_undo(mut self, enabled: bool) -> Self {
        self.tap_to_undo = enabled;
        self
    }

    pub fn with_fling_prediction(mut self, enabled: bool) -> Self {
        self.fling_prediction = enabled;
        self
    }

    pub fn with_throttle_millis(mut self, swipe: u64, undo: u64) -> Self {
        self.swipe_throttle_millis = swipe;
        self.undo_throttle_millis = undo;
        self
    }

    pub fn with_durations_millis(mut self, swipe: u64, undo: u64) -> Self {
        self.swipe_duration_millis = swipe;
        self.undo_duration_millis = undo;
        self
    }

    pub fn with_swipe_animation(mut self, animation: AnimationType) -> Self {
        self.swipe_animation = animation;
        self
    }

    pub fn with_undo_animation(mut self, animation: AnimationType) -> Self {
        self.undo_animation = animation;
        self
    }

    pub fn with_snap_back_animation(mut self, animation: AnimationType) -> Self {
        self.snap_back_animation = animation;
        self
    }

    pub fn with_hold_duration_millis(mut self, millis: u64) -> Self {
        self.hold_duration_millis = millis;
        self
    }

    pub fn swipe_duration(&self) -> Duration {
        Duration::from_millis(self.swipe_duration_millis)
    }

    pub fn undo_duration(&self) -> Duration {
        Duration::from_millis(self.undo_duration_millis)
    }

    pub fn swipe_throttle(&self) -> Duration {
        Duration::from_millis(self.swipe_throttle_millis)
    }

    pub fn undo_throttle(&self) -> Duration {
        Duration::from_millis(self.undo_throttle_millis)
    }

    pub fn hold_duration(&self) -> Duration {
        Duration::from_millis(self.hold_duration_millis)
    }

    /// Commit distance for a container of the given width.
    pub fn swipe_threshold(&self, width: f32) -> f32 {
        self.swipe_threshold_fraction * width
    }

    /// Check values no deck could work with. Reports the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.swipe_threshold_fraction.is_finite() || self.swipe_threshold_fraction <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "swipe_threshold_fraction",
                reason: "must be a positive finite number",
            });
        }
        if self.visible_count == 0 {
            return Err(ConfigError::Invalid {
                field: "visible_count",
                reason: "must be at least 1",
            });
        }
        for (field, degrees) in [
            ("max_rotation_degrees", self.max_rotation_degrees),
            (
                "programmatic_rotation_degrees",
                self.programmatic_rotation_degrees,
            ),
        ] {
            if !degrees.is_finite() || degrees < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a non-negative finite number",
                });
            }
        }
        if !self.stack_scale_step.is_finite() || !self.stack_offset.is_finite() {
            return Err(ConfigError::Invalid {
                field: "stack_scale_step",
                reason: "stack spacing must be finite",
            });
        }
        for (field, animation) in [
            ("swipe_animation", self.swipe_animation),
            ("undo_animation", self.undo_animation),
            ("snap_back_animation", self.snap_back_animation),
        ] {
            if let AnimationType::Spring(spring) = animation {
                if !spring_settles(&spring) {
                    return Err(ConfigError::Invalid {
                        field,
                        reason: "spring needs positive finite stiffness, damping and thresholds",
                    });
                }
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML preset. Missing fields take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: DeckConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("loaded deck config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = self.to_toml_string()?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A spring with any of these at zero, negative or NaN never comes to rest.
fn spring_settles(spring: &SpringSpec) -> bool {
    [
        spring.stiffness,
        spring.damping_ratio,
        spring.velocity_threshold,
        spring.position_threshold,
    ]
    .iter()
    .all(|value| value.is_finite() && *value > 0.0)
}
