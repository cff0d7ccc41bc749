use std::f32::consts::PI;

use pursuit_shared::*;

use crate::observation::Observation;

pub trait Policy: Send {
    fn name(&self) -> &str;
    fn act(&mut self, obs: &Observation) -> Action;
}

/// Policy that does nothing - useful for testing.
pub struct DoNothingPolicy;

impl Policy for DoNothingPolicy {
    fn name(&self) -> &str {
        "do_nothing"
    }

    fn act(&mut self, _obs: &Observation) -> Action {
        Action::none()
    }
}

/// Scripted stand-in for a trained policy: steer toward the target with a
/// proportional yaw controller and hold full throttle.
pub struct SeekerPolicy {
    yaw_gain: f32,
}

impl SeekerPolicy {
    pub fn new() -> Self {
        Self { yaw_gain: 2.0 }
    }
}

impl Default for SeekerPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for SeekerPolicy {
    fn name(&self) -> &str {
        "seeker"
    }

    fn act(&mut self, obs: &Observation) -> Action {
        let d = &obs.data;
        let target_yaw = d[0].atan2(d[2]);

        // The observation carries no heading, only the normalized velocity.
        // While stationary, push forward so the next tick reveals it.
        let (vel_x, vel_z) = (d[3], d[5]);
        if vel_x == 0.0 && vel_z == 0.0 {
            return Action {
                rotate: 0.0,
                throttle: 1.0,
            };
        }

        let my_yaw = vel_x.atan2(vel_z);
        let rotate = (angle_diff(target_yaw, my_yaw) * self.yaw_gain).clamp(-1.0, 1.0);
        Action {
            rotate,
            throttle: 1.0,
        }
    }
}

/// Shortest angular difference (signed), result in [-PI, PI].
fn angle_diff(target: f32, current: f32) -> f32 {
    let mut diff = target - current;
    while diff > PI {
        diff -= 2.0 * PI;
    }
    while diff < -PI {
        diff += 2.0 * PI;
    }
    diff
}
