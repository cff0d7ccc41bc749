use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::{MotionConfig, RewardConfig, TargetConfig};
use crate::constants::DEFAULT_MAX_TICKS;

/// Pose and velocity of the pursuer.
///
/// `heading` is kept unit-length by every operation that touches it; hosts
/// constructing states by hand must supply a unit vector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KinematicState {
    pub position: Vec3,
    pub heading: Vec3,
    pub velocity: Vec3,
}

impl KinematicState {
    /// State at rest at `position`, facing +Z.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            heading: Vec3::Z,
            velocity: Vec3::ZERO,
        }
    }

    /// Heading yaw in the horizontal plane, radians, measured from +Z toward +X.
    pub fn yaw(&self) -> f32 {
        self.heading.x.atan2(self.heading.z)
    }
}

/// Normalized control input for one tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Action {
    pub rotate: f32,
    pub throttle: f32,
}

impl Action {
    pub fn none() -> Self {
        Self {
            rotate: 0.0,
            throttle: 0.0,
        }
    }

    /// Build from raw policy output, clamping both components to [-1, 1].
    pub fn from_raw(raw: [f32; 2]) -> Self {
        Self {
            rotate: raw[0].clamp(-1.0, 1.0),
            throttle: raw[1].clamp(-1.0, 1.0),
        }
    }

    pub fn to_raw(&self) -> [f32; 2] {
        [self.rotate, self.throttle]
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::none()
    }
}

/// Terminal outcome of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Reached,
    TimedOut,
    Fell,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Reached)
    }
}

/// Per-episode bookkeeping, owned and mutated exclusively by the controller.
#[derive(Debug, Clone, Copy)]
pub struct EpisodeState {
    pub last_distance: f32,
    pub steps_without_progress: u32,
    pub outcome: Option<Outcome>,
}

/// Everything needed to reproduce an episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeConfig {
    pub seed: u64,
    pub policy_name: String,
    pub max_ticks: u32,
    pub motion: MotionConfig,
    pub reward: RewardConfig,
    pub target: TargetConfig,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            policy_name: "seeker".into(),
            max_ticks: DEFAULT_MAX_TICKS,
            motion: MotionConfig::default(),
            reward: RewardConfig::default(),
            target: TargetConfig::default(),
        }
    }
}

/// How an episode ended.
///
/// `outcome` is `None` when the tick budget ran out before any terminal
/// condition fired.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EpisodeResult {
    pub outcome: Option<Outcome>,
    pub final_tick: u32,
    pub total_reward: f32,
    pub final_distance: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PursuerSnapshot {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub yaw: f32,
    pub speed: f32,
}

impl From<&KinematicState> for PursuerSnapshot {
    fn from(s: &KinematicState) -> Self {
        Self {
            x: s.position.x,
            y: s.position.y,
            z: s.position.z,
            yaw: s.yaw(),
            speed: s.velocity.length(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetSnapshot {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for TargetSnapshot {
    fn from(p: Vec3) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayFrame {
    pub tick: u32,
    pub pursuer: PursuerSnapshot,
    pub target: TargetSnapshot,
    pub reward: f32,
    pub total_reward: f32,
}

/// Full record of one episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replay {
    pub config: EpisodeConfig,
    pub frames: Vec<ReplayFrame>,
    pub result: EpisodeResult,
}
