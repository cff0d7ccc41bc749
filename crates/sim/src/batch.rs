use rayon::prelude::*;

use pursuit_shared::*;

use crate::episode_loop::run_episode;
use crate::policy::Policy;

/// Run many independent episodes in parallel.
///
/// Each episode owns its own controller, target, and RNG, so there is no
/// shared mutable state to synchronize. Results come back in input order.
pub fn run_batch<F>(configs: &[EpisodeConfig], make_policy: F) -> Result<Vec<Replay>, SimError>
where
    F: Fn(&EpisodeConfig) -> Box<dyn Policy> + Sync,
{
    configs
        .par_iter()
        .map(|config| {
            let mut policy = make_policy(config);
            run_episode(config, policy.as_mut())
        })
        .collect()
}
