use anyhow::Result;
use std::env;
use std::path::Path;

use pose_probe::config::SessionConfig;
use pose_probe::report;
use pose_probe::runtime::{InferenceRuntime, OrtRuntime};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: inspect_model <path_to_model.onnx>");
        return Ok(());
    }

    let model_path = &args[1];
    println!("Inspecting model: {}", model_path);

    let runtime = OrtRuntime::load(Path::new(model_path), &SessionConfig::default())?;
    report::print_tensor_group("Inputs", runtime.inputs());
    report::print_tensor_group("Outputs", runtime.outputs());

    Ok(())
}
