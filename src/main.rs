use anyhow::Result;
use clap::Parser;
use log::debug;
use std::path::Path;

use pose_probe::args::Args;
use pose_probe::config::ProbeConfig;
use pose_probe::prober::{battery_specs, Prober};
use pose_probe::report;
use pose_probe::runtime::OrtRuntime;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // 0. Load Config
    let mut config = ProbeConfig::load(Path::new(&args.config))?;
    if let Some(model) = args.model {
        config.model.path = model;
    }

    // 1. Load Model (fatal on failure, no trials attempted)
    println!("Probing model: {}", config.model.path);
    let runtime = OrtRuntime::load(Path::new(&config.model.path), &config.session)?;
    println!("Model loaded successfully.");
    debug!("trial input shape: {:?}", config.input.shape);

    // 2. Report declared tensor metadata
    let mut prober = Prober::new(runtime);
    let (inputs, outputs) = prober.describe();
    report::print_tensor_group("Inputs", &inputs);
    report::print_tensor_group("Outputs", &outputs);

    if args.describe_only {
        return Ok(());
    }

    // 3. Trial battery. Each trial's failure is captured in its result so
    // the remaining trials always run.
    println!("\nTesting input dtypes...");
    let mut results = Vec::new();
    for (i, spec) in battery_specs(&config.input.shape).iter().enumerate() {
        let result = prober.probe(spec);
        report::print_trial(i, &result);
        results.push(result);
    }

    report::print_summary(&results);

    Ok(())
}
