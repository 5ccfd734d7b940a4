//! Runs fixed policies on the quadrotor hover task.
mod policy;
mod step_record;
use anyhow::Result;
use clap::Parser;
use log::info;
use policy::{HoverPolicy, PolicyKind, RandomPolicy};
use rotor_core::{
    record::{BufferedRecorder, NullRecorder},
    DefaultEvaluator, Policy, DEFAULT_MAX_STEPS,
};
use rotor_env::{TaskConfig, TaskEnv};
use std::path::PathBuf;

/// Run episodes of the quadrotor hover task with a fixed policy
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file of the task configuration, defaults are used if omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of episodes
    #[arg(long, default_value_t = 5)]
    episodes: usize,

    /// Policy issuing rotor speeds
    #[arg(long, value_enum, default_value_t = PolicyKind::Hover)]
    policy: PolicyKind,

    /// Seed of the random policy
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Upper limit of decision steps in an episode
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Write per-step records to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Save the task configuration in effect to this YAML file
    #[arg(long)]
    save_config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<TaskConfig> {
    let config = match &args.config {
        Some(path) => TaskConfig::load(path)?,
        None => TaskConfig::default(),
    };
    config.check()?;
    if let Some(path) = &args.save_config {
        config.save(path)?;
        info!("Saved task configuration to {:?}", path);
    }
    Ok(config)
}

fn run_policy<P>(config: &TaskConfig, policy: &mut P, args: &Args) -> Result<Vec<f64>>
where
    P: Policy<TaskEnv>,
{
    let mut evaluator = DefaultEvaluator::<TaskEnv>::new(config, args.seed as _, args.episodes)?
        .max_steps(args.max_steps);
    match &args.csv {
        Some(path) => {
            let mut recorder = BufferedRecorder::new();
            let returns = evaluator.evaluate_with_recorder(policy, &mut recorder)?;
            step_record::write_csv(path, recorder.iter())?;
            info!("Wrote {} step records to {:?}", recorder.len(), path);
            Ok(returns)
        }
        None => evaluator.evaluate_with_recorder(policy, &mut NullRecorder::new()),
    }
}

fn run(args: &Args) -> Result<Vec<f64>> {
    let config = load_config(args)?;
    fastrand::seed(args.seed);

    let (low, high) = (config.action_low, config.action_high);
    let returns = match args.policy {
        PolicyKind::Hover => run_policy(&config, &mut HoverPolicy::midpoint(low, high), args)?,
        PolicyKind::Random => run_policy(&config, &mut RandomPolicy::new(low, high), args)?,
    };

    for (i, r) in returns.iter().enumerate() {
        info!("Episode {}: return = {:.4}", i, r);
    }

    Ok(returns)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)?;
    Ok(())
}
