use anyhow::Result;
use log::debug;
use rand::Rng;

use crate::error::ProbeError;
use crate::runtime::InferenceRuntime;
use crate::types::{
    ElementType, ProbeOutcome, ProbeResult, SyntheticInput, TensorDescriptor, TensorValues,
    TrialSpec,
};

/// Drives the input-dtype compatibility battery against one loaded model.
pub struct Prober<R: InferenceRuntime> {
    runtime: R,
}

impl<R: InferenceRuntime> Prober<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Snapshot of the declared input and output tensors. Reflection only;
    /// never touches tensor buffers.
    pub fn describe(&self) -> (Vec<TensorDescriptor>, Vec<TensorDescriptor>) {
        (
            self.runtime.inputs().to_vec(),
            self.runtime.outputs().to_vec(),
        )
    }

    /// One forward pass with a synthetic input. Any error from synthesis or
    /// execution is captured in the result so the next trial still runs.
    pub fn probe(&mut self, spec: &TrialSpec) -> ProbeResult {
        debug!("trial '{}' starting", spec.label);
        let outcome = match self.try_probe(spec) {
            Ok((output_shape, output_dtype)) => ProbeOutcome::Success {
                output_shape,
                output_dtype,
            },
            Err(e) => ProbeOutcome::Failure {
                message: format!("{e:#}"),
            },
        };
        ProbeResult {
            label: spec.label.clone(),
            dtype: spec.dtype,
            outcome,
        }
    }

    fn try_probe(&mut self, spec: &TrialSpec) -> Result<(Vec<i64>, ElementType)> {
        let input = synthesize(spec)?;
        self.runtime.invoke(input)
    }

    /// Runs the fixed battery in order. Trials share no state and execute
    /// exactly once each, whether or not earlier ones failed.
    pub fn run_battery(&mut self, shape: &[i64]) -> Vec<ProbeResult> {
        battery_specs(shape)
            .iter()
            .map(|spec| self.probe(spec))
            .collect()
    }
}

/// The three input trials, in reporting order.
pub fn battery_specs(shape: &[i64]) -> Vec<TrialSpec> {
    [
        ElementType::Uint8,
        ElementType::Int32,
        ElementType::Float32,
    ]
    .into_iter()
    .map(|dtype| TrialSpec {
        label: format!("{} input", dtype),
        dtype,
        shape: shape.to_vec(),
    })
    .collect()
}

/// Fills a tensor for the trial: integers uniform over the dtype's full
/// representable range, floats uniform on [0, 1).
pub fn synthesize(spec: &TrialSpec) -> Result<SyntheticInput, ProbeError> {
    let count = element_count(&spec.shape)?;
    let mut rng = rand::thread_rng();

    let values = match spec.dtype {
        ElementType::Uint8 => TensorValues::Uint8((0..count).map(|_| rng.gen()).collect()),
        ElementType::Int32 => TensorValues::Int32((0..count).map(|_| rng.gen()).collect()),
        ElementType::Float32 => TensorValues::Float32((0..count).map(|_| rng.gen()).collect()),
        other => return Err(ProbeError::UnsupportedDtype(other)),
    };

    Ok(SyntheticInput {
        shape: spec.shape.clone(),
        values,
    })
}

fn element_count(shape: &[i64]) -> Result<usize, ProbeError> {
    if shape.is_empty() || shape.iter().any(|&dim| dim <= 0) {
        return Err(ProbeError::UnresolvedShape(shape.to_vec()));
    }
    Ok(shape.iter().product::<i64>() as usize)
}
