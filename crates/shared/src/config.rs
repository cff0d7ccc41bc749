use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::SimError;

/// Motion limits for the pursuer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Forward speed at full throttle, units/s.
    pub move_speed: f32,
    /// Yaw rate at full rotation input, rad/s.
    pub rotate_speed: f32,
    /// Hard cap on velocity magnitude, units/s.
    pub max_speed: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            rotate_speed: ROTATE_SPEED,
            max_speed: MAX_SPEED,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        ensure_positive("move_speed", self.move_speed)?;
        ensure_positive("rotate_speed", self.rotate_speed)?;
        ensure_positive("max_speed", self.max_speed)?;
        Ok(())
    }
}

/// Weights and thresholds for the shaped reward. Immutable for an episode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RewardConfig {
    pub facing_reward_multiplier: f32,
    pub moving_toward_reward_multiplier: f32,
    pub reaching_reward: f32,
    pub falling_penalty: f32,
    pub rotation_penalty_multiplier: f32,
    pub movement_bonus: f32,
    pub timeout_penalty: f32,
    pub max_steps_without_progress: u32,
    pub reach_radius: f32,
    /// Minimum facing alignment (cosine) for the facing reward.
    pub facing_threshold: f32,
    /// Minimum per-tick distance reduction that counts as progress.
    pub progress_threshold: f32,
    /// Extra multiplier applied on top of `moving_toward_reward_multiplier`.
    pub progress_scale: f32,
    /// When set, the progress reward additionally requires the facing +
    /// throttle condition of the facing reward.
    pub require_facing_for_progress: bool,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            facing_reward_multiplier: FACING_REWARD_MULTIPLIER,
            moving_toward_reward_multiplier: MOVING_TOWARD_REWARD_MULTIPLIER,
            reaching_reward: REACHING_REWARD,
            falling_penalty: FALLING_PENALTY,
            rotation_penalty_multiplier: ROTATION_PENALTY_MULTIPLIER,
            movement_bonus: MOVEMENT_BONUS,
            timeout_penalty: TIMEOUT_PENALTY,
            max_steps_without_progress: MAX_STEPS_WITHOUT_PROGRESS,
            reach_radius: REACH_RADIUS,
            facing_threshold: FACING_THRESHOLD,
            progress_threshold: PROGRESS_THRESHOLD,
            progress_scale: PROGRESS_SCALE,
            require_facing_for_progress: false,
        }
    }
}

impl RewardConfig {
    /// The stricter shaping variant: progress only pays out while facing the
    /// target under throttle.
    pub fn strict() -> Self {
        Self {
            require_facing_for_progress: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        ensure_finite("facing_reward_multiplier", self.facing_reward_multiplier)?;
        ensure_finite(
            "moving_toward_reward_multiplier",
            self.moving_toward_reward_multiplier,
        )?;
        ensure_finite("reaching_reward", self.reaching_reward)?;
        ensure_finite("falling_penalty", self.falling_penalty)?;
        ensure_finite("rotation_penalty_multiplier", self.rotation_penalty_multiplier)?;
        ensure_finite("movement_bonus", self.movement_bonus)?;
        ensure_finite("timeout_penalty", self.timeout_penalty)?;
        ensure_positive("reach_radius", self.reach_radius)?;
        ensure_finite("progress_threshold", self.progress_threshold)?;
        if self.progress_threshold < 0.0 {
            return Err(SimError::InvalidConfig(
                "progress_threshold must be non-negative".into(),
            ));
        }
        ensure_positive("progress_scale", self.progress_scale)?;
        if !self.facing_threshold.is_finite()
            || self.facing_threshold < -1.0
            || self.facing_threshold > 1.0
        {
            return Err(SimError::InvalidConfig(format!(
                "facing_threshold must be a cosine in [-1, 1], got {}",
                self.facing_threshold
            )));
        }
        Ok(())
    }
}

/// Scripted wander behavior of the target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetConfig {
    pub start_position: Vec3,
    pub base_speed: f32,
    pub speed_variation: f32,
    /// Seconds between random direction/speed redraws.
    pub redirect_interval: f32,
    /// Rectangular bound half extents around the start position.
    pub half_width: f32,
    pub half_length: f32,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, SPAWN_HEIGHT, 0.0),
            base_speed: TARGET_SPEED,
            speed_variation: TARGET_SPEED_VARIATION,
            redirect_interval: REDIRECT_INTERVAL_SECS,
            half_width: PLANE_HALF_WIDTH,
            half_length: PLANE_HALF_LENGTH,
        }
    }
}

impl TargetConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.base_speed.is_finite() || self.base_speed < 0.0 {
            return Err(SimError::InvalidConfig(
                "base_speed must be non-negative".into(),
            ));
        }
        if !self.speed_variation.is_finite()
            || self.speed_variation < 0.0
            || self.speed_variation > self.base_speed
        {
            return Err(SimError::InvalidConfig(
                "speed_variation must be in [0, base_speed]".into(),
            ));
        }
        ensure_positive("redirect_interval", self.redirect_interval)?;
        ensure_positive("half_width", self.half_width)?;
        ensure_positive("half_length", self.half_length)?;
        Ok(())
    }
}

fn ensure_finite(name: &str, value: f32) -> Result<(), SimError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

fn ensure_positive(name: &str, value: f32) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )))
    }
}
