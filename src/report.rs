//! Console rendering of descriptors and trial results. The printed text is
//! the product of a probe run, so this stays on stdout rather than the log.

use crate::types::{ProbeOutcome, ProbeResult, TensorDescriptor};

/// Prints one group of tensor descriptors in declaration order.
pub fn print_tensor_group(heading: &str, tensors: &[TensorDescriptor]) {
    println!("\n--- {} ---", heading);
    for (i, tensor) in tensors.iter().enumerate() {
        println!("#{}: Name: {}", i, tensor.name);
        println!("    Shape: {:?}", tensor.shape);
        println!("    Signature: {}", tensor.shape_signature());
        println!("    Dtype: {}", tensor.dtype);
        match tensor.quantization {
            Some(q) => println!(
                "    Quantization: scale={}, zero_point={}",
                q.scale, q.zero_point
            ),
            None => println!("    Quantization: none"),
        }
    }
}

pub fn print_trial(index: usize, result: &ProbeResult) {
    println!("\nTrial {}: {}", index + 1, result.label);
    match &result.outcome {
        ProbeOutcome::Success {
            output_shape,
            output_dtype,
        } => println!(
            "  ok: output shape {:?}, dtype {}",
            output_shape, output_dtype
        ),
        ProbeOutcome::Failure { message } => println!("  failed: {}", message),
    }
}

pub fn print_summary(results: &[ProbeResult]) {
    let succeeded = results.iter().filter(|r| r.succeeded()).count();
    println!(
        "\nProbe complete: {}/{} trials succeeded.",
        succeeded,
        results.len()
    );
}
