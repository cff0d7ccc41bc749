use glam::Vec3;
use pursuit_shared::*;

/// Result of evaluating one tick.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    pub reward: f32,
    pub steps_without_progress: u32,
    pub outcome: Option<Outcome>,
    /// Distance to the target after this tick, for the controller's bookkeeping.
    pub distance: f32,
    /// Cosine between heading and direction to target; 0 when on top of it.
    pub facing_alignment: f32,
}

/// Evaluate the shaped reward for one tick.
///
/// Clauses apply in fixed order: facing reward, rotation penalty, movement
/// bonus, progress reward (with the no-progress counter update), then the
/// terminal checks timeout -> reached -> fell. At most one terminal condition
/// fires per tick; once one does, the remaining checks are skipped.
pub fn evaluate(
    prev_distance: f32,
    state: &KinematicState,
    target_pos: Vec3,
    action: Action,
    steps_without_progress: u32,
    config: &RewardConfig,
    dt: f32,
) -> Evaluation {
    let rotate = action.rotate.clamp(-1.0, 1.0);
    let throttle = action.throttle.clamp(-1.0, 1.0);

    // Zero-length direction (pursuer on top of the target) falls back to the
    // zero vector; a reward tick must never fail.
    let direction = (target_pos - state.position).normalize_or_zero();
    let facing_alignment = state.heading.dot(direction);
    let distance = state.position.distance(target_pos);

    let moving = throttle > THROTTLE_DEADZONE;
    let facing = facing_alignment > config.facing_threshold;

    let mut reward = 0.0f32;

    // Facing the target while under way
    if facing && moving {
        reward += facing_alignment * config.facing_reward_multiplier * dt;
    }

    // Steering cost, unconditional
    reward -= rotate.abs() * config.rotation_penalty_multiplier;

    // Keep-moving bonus
    if moving {
        reward += config.movement_bonus * dt;
    }

    // Progress toward the target
    let distance_change = prev_distance - distance;
    let progress_gate = !config.require_facing_for_progress || (facing && moving);
    let steps_without_progress = if distance_change > config.progress_threshold && progress_gate {
        reward += distance_change * config.moving_toward_reward_multiplier * config.progress_scale;
        0
    } else {
        steps_without_progress + 1
    };

    // Terminal checks; first hit wins
    let outcome = if steps_without_progress > config.max_steps_without_progress {
        reward += config.timeout_penalty;
        Some(Outcome::TimedOut)
    } else if distance < config.reach_radius {
        reward += config.reaching_reward;
        Some(Outcome::Reached)
    } else if state.position.y < 0.0 {
        reward += config.falling_penalty;
        Some(Outcome::Fell)
    } else {
        None
    };

    Evaluation {
        reward,
        steps_without_progress,
        outcome,
        distance,
        facing_alignment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RewardConfig {
        RewardConfig::default()
    }

    /// Pursuer at the origin plane height, facing +Z.
    fn state_at(position: Vec3) -> KinematicState {
        KinematicState::at(position)
    }

    /// Target 5 units ahead along the heading.
    fn target_ahead(state: &KinematicState) -> Vec3 {
        state.position + Vec3::new(0.0, 0.0, 5.0)
    }

    #[test]
    fn test_facing_reward_requires_throttle() {
        let c = cfg();
        let state = state_at(Vec3::new(0.0, 0.5, 0.0));
        let target = target_ahead(&state);

        // Perfect alignment but no throttle: no facing reward, no movement bonus.
        let eval = evaluate(5.0, &state, target, Action::none(), 0, &c, DT);
        assert!(eval.reward.abs() < 1e-7, "got {}", eval.reward);

        // Same geometry under throttle: facing reward + movement bonus.
        let eval = evaluate(
            5.0,
            &state,
            target,
            Action {
                rotate: 0.0,
                throttle: 1.0,
            },
            0,
            &c,
            DT,
        );
        let expected = 1.0 * c.facing_reward_multiplier * DT + c.movement_bonus * DT;
        assert!((eval.reward - expected).abs() < 1e-6);
        assert!((eval.facing_alignment - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_facing_threshold_boundary() {
        // Alignment is exactly 1.0 here; a threshold of exactly 1.0 must
        // exclude it (strict >), anything below includes it.
        let state = state_at(Vec3::new(0.0, 0.5, 0.0));
        let target = target_ahead(&state);
        let action = Action {
            rotate: 0.0,
            throttle: 1.0,
        };

        let at = RewardConfig {
            facing_threshold: 1.0,
            ..cfg()
        };
        let eval = evaluate(5.0, &state, target, action, 0, &at, DT);
        assert!(
            (eval.reward - at.movement_bonus * DT).abs() < 1e-7,
            "threshold met exactly must not pay facing reward, got {}",
            eval.reward
        );

        let below = RewardConfig {
            facing_threshold: 0.99,
            ..cfg()
        };
        let eval = evaluate(5.0, &state, target, action, 0, &below, DT);
        let expected = 1.0 * below.facing_reward_multiplier * DT + below.movement_bonus * DT;
        assert!((eval.reward - expected).abs() < 1e-7);
    }

    #[test]
    fn test_rotation_penalty_always_applies() {
        let c = cfg();
        // Facing away so no other clause contributes.
        let state = KinematicState {
            heading: Vec3::NEG_Z,
            ..state_at(Vec3::new(0.0, 0.5, 0.0))
        };
        let target = Vec3::new(0.0, 0.5, 5.0);
        let eval = evaluate(
            5.0,
            &state,
            target,
            Action {
                rotate: -0.5,
                throttle: 0.0,
            },
            0,
            &c,
            DT,
        );
        assert!((eval.reward + 0.5 * c.rotation_penalty_multiplier).abs() < 1e-7);
    }

    #[test]
    fn test_movement_bonus_deadzone_boundary() {
        let c = cfg();
        // Facing away so the facing clause stays out of the sum.
        let state = KinematicState {
            heading: Vec3::NEG_Z,
            ..state_at(Vec3::new(0.0, 0.5, 0.0))
        };
        let target = Vec3::new(0.0, 0.5, 5.0);

        let at = evaluate(
            5.0,
            &state,
            target,
            Action {
                rotate: 0.0,
                throttle: THROTTLE_DEADZONE,
            },
            0,
            &c,
            DT,
        );
        assert!(at.reward.abs() < 1e-7, "throttle at the deadzone pays nothing");

        let above = evaluate(
            5.0,
            &state,
            target,
            Action {
                rotate: 0.0,
                throttle: 0.11,
            },
            0,
            &c,
            DT,
        );
        assert!((above.reward - c.movement_bonus * DT).abs() < 1e-7);
    }

    #[test]
    fn test_progress_resets_counter_and_pays() {
        let c = cfg();
        let state = state_at(Vec3::new(0.0, 0.5, 0.0));
        let target = target_ahead(&state); // distance 5.0

        let eval = evaluate(5.5, &state, target, Action::none(), 7, &c, DT);
        assert_eq!(eval.steps_without_progress, 0);
        let expected = 0.5 * c.moving_toward_reward_multiplier * c.progress_scale;
        assert!((eval.reward - expected).abs() < 1e-6);
    }

    #[test]
    fn test_progress_threshold_boundary_increments() {
        // distance_change is exactly 0.5; a threshold of exactly 0.5 must not
        // count as progress.
        let c = RewardConfig {
            progress_threshold: 0.5,
            ..cfg()
        };
        let state = state_at(Vec3::new(0.0, 0.5, 0.0));
        let target = target_ahead(&state);

        let eval = evaluate(5.5, &state, target, Action::none(), 3, &c, DT);
        assert_eq!(eval.steps_without_progress, 4);
        assert!(eval.reward.abs() < 1e-7);

        let c = RewardConfig {
            progress_threshold: 0.25,
            ..cfg()
        };
        let eval = evaluate(5.5, &state, target, Action::none(), 3, &c, DT);
        assert_eq!(eval.steps_without_progress, 0);
    }

    #[test]
    fn test_no_progress_increments_by_one() {
        let c = cfg();
        let state = state_at(Vec3::new(0.0, 0.5, 0.0));
        let target = target_ahead(&state);
        let eval = evaluate(5.0, &state, target, Action::none(), 41, &c, DT);
        assert_eq!(eval.steps_without_progress, 42);
        assert_eq!(eval.outcome, None);
    }

    #[test]
    fn test_timeout_fires_on_first_exceed() {
        let c = cfg(); // max_steps_without_progress = 100
        let state = state_at(Vec3::new(0.0, 0.5, 0.0));
        let target = target_ahead(&state);

        // Counter reaches exactly the max: still running.
        let eval = evaluate(5.0, &state, target, Action::none(), 99, &c, DT);
        assert_eq!(eval.steps_without_progress, 100);
        assert_eq!(eval.outcome, None);

        // One more stalled tick pushes it over: timeout, with its penalty.
        let eval = evaluate(5.0, &state, target, Action::none(), 100, &c, DT);
        assert_eq!(eval.steps_without_progress, 101);
        assert_eq!(eval.outcome, Some(Outcome::TimedOut));
        assert!((eval.reward - c.timeout_penalty).abs() < 1e-6);
    }

    #[test]
    fn test_reached_adds_exactly_reaching_reward() {
        let c = cfg();
        let state = state_at(Vec3::new(0.0, 0.5, 0.0));
        let target = state.position + Vec3::new(0.0, 0.0, 0.5); // inside reach radius

        let eval = evaluate(0.5, &state, target, Action::none(), 0, &c, DT);
        assert_eq!(eval.outcome, Some(Outcome::Reached));
        assert!((eval.reward - c.reaching_reward).abs() < 1e-6);
    }

    #[test]
    fn test_fell_below_plane() {
        let c = cfg();
        let state = state_at(Vec3::new(0.0, -0.1, 0.0));
        let target = state.position + Vec3::new(0.0, 0.0, 5.0);

        let eval = evaluate(5.0, &state, target, Action::none(), 0, &c, DT);
        assert_eq!(eval.outcome, Some(Outcome::Fell));
        assert!((eval.reward - c.falling_penalty).abs() < 1e-6);
    }

    #[test]
    fn test_at_most_one_terminal_timeout_wins() {
        let c = cfg();
        // Within reach radius AND stalled past the limit AND below the plane:
        // only the timeout fires.
        let state = state_at(Vec3::new(0.0, -0.1, 0.0));
        let target = state.position + Vec3::new(0.0, 0.0, 0.5);

        let eval = evaluate(0.5, &state, target, Action::none(), 100, &c, DT);
        assert_eq!(eval.outcome, Some(Outcome::TimedOut));
        assert!(
            (eval.reward - c.timeout_penalty).abs() < 1e-6,
            "reach/fall rewards must be skipped after the timeout, got {}",
            eval.reward
        );
    }

    #[test]
    fn test_at_most_one_terminal_reached_beats_fell() {
        let c = cfg();
        let state = state_at(Vec3::new(0.0, -0.1, 0.0));
        let target = state.position + Vec3::new(0.0, 0.0, 0.5);

        let eval = evaluate(0.5, &state, target, Action::none(), 0, &c, DT);
        assert_eq!(eval.outcome, Some(Outcome::Reached));
        assert!((eval.reward - c.reaching_reward).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_direction_is_safe() {
        let c = cfg();
        let state = state_at(Vec3::new(0.0, 0.5, 0.0));
        let eval = evaluate(
            0.1,
            &state,
            state.position,
            Action {
                rotate: 0.0,
                throttle: 1.0,
            },
            0,
            &c,
            DT,
        );
        assert!(eval.reward.is_finite());
        assert!((eval.facing_alignment).abs() < 1e-7);
        assert_eq!(eval.outcome, Some(Outcome::Reached));
    }

    #[test]
    fn test_strict_gating_blocks_unfaced_progress() {
        let state = KinematicState {
            heading: Vec3::NEG_Z, // facing away from the target
            ..state_at(Vec3::new(0.0, 0.5, 0.0))
        };
        let target = Vec3::new(0.0, 0.5, 5.0); // distance 5.0, approached from 6.0
        let action = Action {
            rotate: 0.0,
            throttle: 1.0,
        };

        let strict = RewardConfig::strict();
        let eval = evaluate(6.0, &state, target, action, 0, &strict, DT);
        assert_eq!(eval.steps_without_progress, 1, "gated progress must not reset");
        assert!((eval.reward - strict.movement_bonus * DT).abs() < 1e-6);

        let lenient = cfg();
        let eval = evaluate(6.0, &state, target, action, 0, &lenient, DT);
        assert_eq!(eval.steps_without_progress, 0);
        let expected = lenient.movement_bonus * DT
            + 1.0 * lenient.moving_toward_reward_multiplier * lenient.progress_scale;
        assert!((eval.reward - expected).abs() < 1e-6);
    }

    #[test]
    fn test_strict_gating_pays_faced_progress() {
        let strict = RewardConfig::strict();
        let state = state_at(Vec3::new(0.0, 0.5, 0.0));
        let target = target_ahead(&state);
        let action = Action {
            rotate: 0.0,
            throttle: 1.0,
        };

        let eval = evaluate(6.0, &state, target, action, 5, &strict, DT);
        assert_eq!(eval.steps_without_progress, 0);
        let expected = 1.0 * strict.facing_reward_multiplier * DT
            + strict.movement_bonus * DT
            + 1.0 * strict.moving_toward_reward_multiplier * strict.progress_scale;
        assert!((eval.reward - expected).abs() < 1e-6);
    }
}
