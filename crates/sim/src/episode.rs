use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg64;

use pursuit_shared::*;

use crate::pursuer;
use crate::reward;

/// Per-tick report handed to the external reward accumulator / trainer.
#[derive(Debug, Clone, Copy)]
pub struct StepReport {
    pub reward: f32,
    pub distance: f32,
    pub outcome: Option<Outcome>,
}

/// Owns the episode bookkeeping and drives the pursuer and the reward
/// evaluator once per tick.
///
/// The target itself stays external; its position is read fresh each tick.
#[derive(Debug)]
pub struct EpisodeController {
    motion: MotionConfig,
    reward: RewardConfig,
    pub state: KinematicState,
    episode: EpisodeState,
}

impl EpisodeController {
    /// Validates both configs up front; bad configuration is fatal here, not
    /// at runtime.
    pub fn new(motion: MotionConfig, reward: RewardConfig) -> Result<Self, SimError> {
        motion.validate()?;
        reward.validate()?;
        Ok(Self {
            motion,
            reward,
            state: KinematicState::at(Vec3::new(0.0, SPAWN_HEIGHT, 0.0)),
            episode: EpisodeState {
                last_distance: 0.0,
                steps_without_progress: 0,
                outcome: None,
            },
        })
    }

    /// Start a new episode: spawn at a random offset near the target, zero
    /// the velocity, reset the bookkeeping. The heading carries over.
    pub fn begin(&mut self, rng: &mut Pcg64, target_pos: Vec3) {
        let dx = rng.gen_range(-SPAWN_OFFSET..SPAWN_OFFSET);
        let dz = rng.gen_range(-SPAWN_OFFSET..SPAWN_OFFSET);
        self.begin_at(target_pos + Vec3::new(dx, SPAWN_HEIGHT, dz), target_pos);
    }

    /// Start a new episode at an explicit spawn position, for hosts (and
    /// tests) that own placement themselves.
    pub fn begin_at(&mut self, position: Vec3, target_pos: Vec3) {
        self.state.position = position;
        self.state.velocity = Vec3::ZERO;
        self.episode = EpisodeState {
            last_distance: position.distance(target_pos),
            steps_without_progress: 0,
            outcome: None,
        };
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.episode.outcome
    }

    pub fn last_distance(&self) -> f32 {
        self.episode.last_distance
    }

    pub fn steps_without_progress(&self) -> u32 {
        self.episode.steps_without_progress
    }

    /// Advance one tick: apply the action, integrate the position (standing in
    /// for the host physics step), evaluate the reward, update bookkeeping.
    ///
    /// Errors if the episode already hit a terminal outcome; callers must
    /// `begin` again first.
    pub fn step(&mut self, action: Action, target_pos: Vec3, dt: f32) -> Result<StepReport, SimError> {
        if self.episode.outcome.is_some() {
            return Err(SimError::EpisodeTerminated);
        }

        self.state = pursuer::apply_action(&self.state, action, &self.motion, dt);
        self.state.position += self.state.velocity * dt;

        let eval = reward::evaluate(
            self.episode.last_distance,
            &self.state,
            target_pos,
            action,
            self.episode.steps_without_progress,
            &self.reward,
            dt,
        );

        self.episode.last_distance = eval.distance;
        self.episode.steps_without_progress = eval.steps_without_progress;
        self.episode.outcome = eval.outcome;

        Ok(StepReport {
            reward: eval.reward,
            distance: eval.distance,
            outcome: eval.outcome,
        })
    }
}
