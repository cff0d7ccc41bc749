use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pursuit_shared::*;
use pursuit_sim::{run_batch, run_episode, DoNothingPolicy, Policy, SeekerPolicy};

#[derive(Parser)]
#[command(name = "pursuit", about = "Pursuit control-and-reward sim CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single episode
    Run {
        /// Policy driving the pursuer (seeker, do_nothing)
        #[arg(long, default_value = "seeker")]
        policy: String,

        /// Random seed for spawn placement and target wander
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Tick budget for the episode
        #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
        ticks: u32,

        /// Use the strict shaping variant (progress requires facing + throttle)
        #[arg(long)]
        strict: bool,

        /// Output path for replay JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Evaluate policies over many seeded episodes
    Eval {
        /// Comma-separated list of policy names
        #[arg(long, default_value = "seeker,do_nothing")]
        policies: String,

        /// Episodes per policy (seeds 0..N)
        #[arg(long, default_value_t = 20)]
        episodes: u32,

        /// Use the strict shaping variant
        #[arg(long)]
        strict: bool,
    },
}

/// Resolve a policy name to a boxed Policy trait object.
fn resolve_policy(name: &str) -> Result<Box<dyn Policy>, SimError> {
    match name {
        "seeker" => Ok(Box::new(SeekerPolicy::new())),
        "do_nothing" => Ok(Box::new(DoNothingPolicy)),
        other => Err(SimError::UnknownPolicy(other.to_string())),
    }
}

fn resolve_policy_or_exit(name: &str) -> Box<dyn Policy> {
    resolve_policy(name).unwrap_or_else(|e| {
        eprintln!("{}. Valid options: seeker, do_nothing.", e);
        std::process::exit(1);
    })
}

fn reward_config(strict: bool) -> RewardConfig {
    if strict {
        RewardConfig::strict()
    } else {
        RewardConfig::default()
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            policy,
            seed,
            ticks,
            strict,
            output,
        } => cmd_run(&policy, seed, ticks, strict, output),

        Commands::Eval {
            policies,
            episodes,
            strict,
        } => cmd_eval(&policies, episodes, strict),
    }
}

fn cmd_run(policy_name: &str, seed: u64, ticks: u32, strict: bool, output: Option<PathBuf>) {
    let mut policy = resolve_policy_or_exit(policy_name);

    let config = EpisodeConfig {
        seed,
        policy_name: policy.name().to_string(),
        max_ticks: ticks,
        reward: reward_config(strict),
        ..Default::default()
    };

    println!("Running episode: {} (seed={})", policy.name(), seed);

    let replay = match run_episode(&config, policy.as_mut()) {
        Ok(replay) => replay,
        Err(e) => {
            eprintln!("Episode failed: {}", e);
            std::process::exit(1);
        }
    };
    let result = &replay.result;

    println!();
    println!("=== Episode Result ===");
    match result.outcome {
        Some(outcome) => println!("Outcome:        {:?}", outcome),
        None => println!("Outcome:        none (tick budget exhausted)"),
    }
    println!(
        "Final tick:     {} ({:.1}s)",
        result.final_tick,
        result.final_tick as f32 / TICK_RATE as f32
    );
    println!("Total reward:   {:.3}", result.total_reward);
    println!("Final distance: {:.3}", result.final_distance);

    if let Some(path) = output {
        match serde_json::to_string_pretty(&replay) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => println!("\nReplay written to {}", path.display()),
                Err(e) => eprintln!("\nFailed to write replay: {}", e),
            },
            Err(e) => eprintln!("\nFailed to serialize replay: {}", e),
        }
    }
}

fn cmd_eval(policies_str: &str, episodes: u32, strict: bool) {
    let policy_names: Vec<&str> = policies_str.split(',').map(|s| s.trim()).collect();

    // Fail fast on a bad name before spending time on episodes.
    for name in &policy_names {
        let _ = resolve_policy_or_exit(name);
    }

    println!(
        "Evaluating {} policies over {} episodes each{}",
        policy_names.len(),
        episodes,
        if strict { " (strict shaping)" } else { "" }
    );
    println!();
    println!(
        "{:<12} {:>8} {:>12} {:>14}",
        "Policy", "Reached", "MeanReward", "MeanTicksHit"
    );
    println!("{:-<12} {:-<8} {:-<12} {:-<14}", "", "", "", "");

    for name in &policy_names {
        let configs: Vec<EpisodeConfig> = (0..episodes)
            .map(|i| EpisodeConfig {
                seed: i as u64,
                policy_name: name.to_string(),
                reward: reward_config(strict),
                ..Default::default()
            })
            .collect();

        let replays = match run_batch(&configs, |cfg| {
            resolve_policy(&cfg.policy_name).expect("names validated above")
        }) {
            Ok(replays) => replays,
            Err(e) => {
                eprintln!("Evaluation failed for {}: {}", name, e);
                std::process::exit(1);
            }
        };

        let reached: Vec<&Replay> = replays
            .iter()
            .filter(|r| r.result.outcome == Some(Outcome::Reached))
            .collect();
        let mean_reward =
            replays.iter().map(|r| r.result.total_reward).sum::<f32>() / replays.len() as f32;
        let mean_ticks_hit = if reached.is_empty() {
            "-".to_string()
        } else {
            let mean =
                reached.iter().map(|r| r.result.final_tick).sum::<u32>() as f32 / reached.len() as f32;
            format!("{:.0}", mean)
        };

        println!(
            "{:<12} {:>5}/{:<2} {:>12.3} {:>14}",
            name,
            reached.len(),
            episodes,
            mean_reward,
            mean_ticks_hit
        );
    }
}
