use glam::Vec3;
use pursuit_shared::*;

/// Fixed-size observation vector handed to policies.
///
/// Layout: direction to target (3), normalized velocity (3), raw distance (1),
/// distance clamped to [0, 1] against `DISTANCE_NORM` (1).
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    pub data: [f32; OBS_SIZE],
}

/// Encode the pursuer-relative view of the scene.
pub fn observe(state: &KinematicState, target_pos: Vec3) -> Observation {
    let direction = (target_pos - state.position).normalize_or_zero();
    let velocity = state.velocity.normalize_or_zero();
    let distance = state.position.distance(target_pos);

    let mut data = [0.0f32; OBS_SIZE];
    data[0] = direction.x;
    data[1] = direction.y;
    data[2] = direction.z;
    data[3] = velocity.x;
    data[4] = velocity.y;
    data[5] = velocity.z;
    data[6] = distance;
    data[7] = (distance / DISTANCE_NORM).clamp(0.0, 1.0);

    Observation { data }
}
