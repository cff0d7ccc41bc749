use rand::SeedableRng;
use rand_pcg::Pcg64;

use pursuit_shared::*;

use crate::episode::EpisodeController;
use crate::observation::observe;
use crate::policy::Policy;
use crate::target::WanderTarget;

/// Run one deterministic episode of a policy chasing the wander target.
///
/// Same config + same policy implementation give a bit-identical replay.
pub fn run_episode(config: &EpisodeConfig, policy: &mut dyn Policy) -> Result<Replay, SimError> {
    let mut rng = Pcg64::seed_from_u64(config.seed);
    let mut target = WanderTarget::new(config.target, &mut rng)?;
    let mut controller = EpisodeController::new(config.motion, config.reward)?;
    controller.begin(&mut rng, target.position());

    let mut frames = Vec::new();
    let mut total_reward = 0.0f32;
    let mut final_tick = 0;
    let mut final_distance = controller.last_distance();

    frames.push(ReplayFrame {
        tick: 0,
        pursuer: (&controller.state).into(),
        target: target.position().into(),
        reward: 0.0,
        total_reward: 0.0,
    });

    for tick in 1..=config.max_ticks {
        target.advance(&mut rng, DT);

        let obs = observe(&controller.state, target.position());
        let action = policy.act(&obs);
        let report = controller.step(action, target.position(), DT)?;

        total_reward += report.reward;
        final_distance = report.distance;
        final_tick = tick;

        frames.push(ReplayFrame {
            tick,
            pursuer: (&controller.state).into(),
            target: target.position().into(),
            reward: report.reward,
            total_reward,
        });

        if report.outcome.is_some() {
            break;
        }
    }

    Ok(Replay {
        config: config.clone(),
        frames,
        result: EpisodeResult {
            outcome: controller.outcome(),
            final_tick,
            total_reward,
            final_distance,
        },
    })
}
