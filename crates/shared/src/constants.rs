use std::f32::consts::PI;

// Tick rate
pub const TICK_RATE: u32 = 50;
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// Episode
pub const EPISODE_DURATION_SECS: u32 = 60;
pub const DEFAULT_MAX_TICKS: u32 = TICK_RATE * EPISODE_DURATION_SECS; // 3000
pub const MAX_STEPS_WITHOUT_PROGRESS: u32 = 100;

// Pursuer motion
pub const MOVE_SPEED: f32 = 1.5;
pub const ROTATE_SPEED: f32 = 200.0 * (PI / 180.0); // rad/s
pub const MAX_SPEED: f32 = 3.0;

// Spawn placement relative to the target
pub const SPAWN_OFFSET: f32 = 2.0;
pub const SPAWN_HEIGHT: f32 = 0.5;

// Reward shaping
pub const FACING_REWARD_MULTIPLIER: f32 = 0.1;
pub const MOVING_TOWARD_REWARD_MULTIPLIER: f32 = 0.5;
pub const REACHING_REWARD: f32 = 10.0;
pub const FALLING_PENALTY: f32 = -1.0;
pub const ROTATION_PENALTY_MULTIPLIER: f32 = 0.01;
pub const MOVEMENT_BONUS: f32 = 0.05;
pub const TIMEOUT_PENALTY: f32 = -0.5;
pub const REACH_RADIUS: f32 = 1.0;
pub const FACING_THRESHOLD: f32 = 0.5;
pub const PROGRESS_THRESHOLD: f32 = 0.01;
pub const PROGRESS_SCALE: f32 = 2.0;
pub const THROTTLE_DEADZONE: f32 = 0.1;

// Target wander
pub const TARGET_SPEED: f32 = 2.0;
pub const TARGET_SPEED_VARIATION: f32 = 0.5;
pub const REDIRECT_INTERVAL_SECS: f32 = 2.0;
pub const PLANE_HALF_WIDTH: f32 = 10.0;
pub const PLANE_HALF_LENGTH: f32 = 10.0;

// Observation
pub const OBS_SIZE: usize = 8;
pub const ACTION_SIZE: usize = 2;
pub const DISTANCE_NORM: f32 = 20.0;
