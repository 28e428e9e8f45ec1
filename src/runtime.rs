use anyhow::Result;
use log::debug;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::tensor::TensorElementType;
use ort::value::{DynValue, Tensor, ValueType};
use std::path::Path;

use crate::config::SessionConfig;
use crate::error::ProbeError;
use crate::types::{ElementType, SyntheticInput, TensorDescriptor, TensorValues};

/// A loaded inference graph the prober can reflect over and invoke.
///
/// The probe only needs reflection and single forward passes, so the ONNX
/// Runtime session sits behind this trait and tests can substitute a
/// scripted fixture.
pub trait InferenceRuntime {
    /// Declared input tensors, in graph order.
    fn inputs(&self) -> &[TensorDescriptor];

    /// Declared output tensors, in graph order.
    fn outputs(&self) -> &[TensorDescriptor];

    /// Binds `input` to the first declared input, runs one forward pass,
    /// and returns the realized shape and dtype of the first declared
    /// output.
    fn invoke(&mut self, input: SyntheticInput) -> Result<(Vec<i64>, ElementType)>;
}

pub struct OrtRuntime {
    session: Session,
    inputs: Vec<TensorDescriptor>,
    outputs: Vec<TensorDescriptor>,
}

impl OrtRuntime {
    /// Loads the model and snapshots its tensor metadata.
    ///
    /// A missing file and a file the runtime rejects are distinct failures;
    /// both abort the run before any trial executes.
    pub fn load(path: &Path, opts: &SessionConfig) -> Result<Self, ProbeError> {
        if !path.exists() {
            return Err(ProbeError::ModelNotFound(path.to_path_buf()));
        }

        let session = Session::builder()
            .and_then(|b| b.with_optimization_level(graph_level(opts.optimization_level)))
            .and_then(|b| b.with_intra_threads(opts.intra_threads))
            .and_then(|b| b.commit_from_file(path))
            .map_err(|e| ProbeError::Load(e.to_string()))?;

        let inputs: Vec<TensorDescriptor> = session
            .inputs
            .iter()
            .map(|i| describe_tensor(&i.name, &i.input_type))
            .collect();
        let outputs: Vec<TensorDescriptor> = session
            .outputs
            .iter()
            .map(|o| describe_tensor(&o.name, &o.output_type))
            .collect();

        if inputs.is_empty() {
            return Err(ProbeError::NoInputs);
        }
        if outputs.is_empty() {
            return Err(ProbeError::NoOutputs);
        }

        debug!(
            "session ready: {} input(s), {} output(s)",
            inputs.len(),
            outputs.len()
        );

        Ok(Self {
            session,
            inputs,
            outputs,
        })
    }
}

impl InferenceRuntime for OrtRuntime {
    fn inputs(&self) -> &[TensorDescriptor] {
        &self.inputs
    }

    fn outputs(&self) -> &[TensorDescriptor] {
        &self.outputs
    }

    fn invoke(&mut self, input: SyntheticInput) -> Result<(Vec<i64>, ElementType)> {
        let SyntheticInput { shape, values } = input;
        debug!("invoking with {} {} value(s)", values.len(), values.dtype());

        let value: DynValue = match values {
            TensorValues::Uint8(data) => Tensor::from_array((shape, data))?.into_dyn(),
            TensorValues::Int32(data) => Tensor::from_array((shape, data))?.into_dyn(),
            TensorValues::Float32(data) => Tensor::from_array((shape, data))?.into_dyn(),
        };

        let outputs = self.session.run(ort::inputs![value])?;

        // The declared dtype of the first output decides how we read the
        // realized tensor back.
        let realized = match self.outputs[0].dtype {
            ElementType::Uint8 => {
                let (s, _) = outputs[0].try_extract_tensor::<u8>()?;
                (s.to_vec(), ElementType::Uint8)
            }
            ElementType::Int8 => {
                let (s, _) = outputs[0].try_extract_tensor::<i8>()?;
                (s.to_vec(), ElementType::Int8)
            }
            ElementType::Int32 => {
                let (s, _) = outputs[0].try_extract_tensor::<i32>()?;
                (s.to_vec(), ElementType::Int32)
            }
            ElementType::Int64 => {
                let (s, _) = outputs[0].try_extract_tensor::<i64>()?;
                (s.to_vec(), ElementType::Int64)
            }
            ElementType::Float32 => {
                let (s, _) = outputs[0].try_extract_tensor::<f32>()?;
                (s.to_vec(), ElementType::Float32)
            }
            ElementType::Float64 => {
                let (s, _) = outputs[0].try_extract_tensor::<f64>()?;
                (s.to_vec(), ElementType::Float64)
            }
            other => anyhow::bail!("cannot read back output tensor of type {}", other),
        };

        Ok(realized)
    }
}

fn describe_tensor(name: &str, value_type: &ValueType) -> TensorDescriptor {
    match value_type {
        ValueType::Tensor {
            ty,
            shape,
            dimension_symbols,
        } => TensorDescriptor {
            name: name.to_string(),
            shape: shape.to_vec(),
            dim_symbols: dimension_symbols.clone(),
            dtype: element_type_from(*ty),
            // ONNX Runtime keeps quantization inside the graph; session
            // metadata never carries per-tensor scale/zero_point.
            quantization: None,
        },
        _ => TensorDescriptor {
            name: name.to_string(),
            shape: Vec::new(),
            dim_symbols: Vec::new(),
            dtype: ElementType::Other,
            quantization: None,
        },
    }
}

fn element_type_from(ty: TensorElementType) -> ElementType {
    match ty {
        TensorElementType::Uint8 => ElementType::Uint8,
        TensorElementType::Int8 => ElementType::Int8,
        TensorElementType::Int32 => ElementType::Int32,
        TensorElementType::Int64 => ElementType::Int64,
        TensorElementType::Float16 => ElementType::Float16,
        TensorElementType::Float32 => ElementType::Float32,
        TensorElementType::Float64 => ElementType::Float64,
        TensorElementType::Bool => ElementType::Bool,
        _ => ElementType::Other,
    }
}

fn graph_level(level: u8) -> GraphOptimizationLevel {
    match level {
        0 => GraphOptimizationLevel::Disable,
        1 => GraphOptimizationLevel::Level1,
        2 => GraphOptimizationLevel::Level2,
        _ => GraphOptimizationLevel::Level3,
    }
}
