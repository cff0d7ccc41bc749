use glam::Quat;
use pursuit_shared::*;

/// Apply one tick's control input to the pursuer.
///
/// The heading spins about the vertical axis by
/// `rotate * rotate_speed * dt` radians and the velocity is overridden to
/// `heading * throttle * move_speed` (no inertia), then clamped to
/// `max_speed` preserving direction. Pure function; position integration is
/// left to the caller.
pub fn apply_action(
    state: &KinematicState,
    action: Action,
    motion: &MotionConfig,
    dt: f32,
) -> KinematicState {
    let rotate = action.rotate.clamp(-1.0, 1.0);
    let throttle = action.throttle.clamp(-1.0, 1.0);

    let angle = rotate * motion.rotate_speed * dt;
    let heading = (Quat::from_rotation_y(angle) * state.heading).normalize();

    let velocity = (heading * throttle * motion.move_speed).clamp_length_max(motion.max_speed);

    KinematicState {
        position: state.position,
        heading,
        velocity,
    }
}
