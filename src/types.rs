use std::fmt;

/// Tensor element types the probe can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Uint8,
    Int8,
    Int32,
    Int64,
    Float16,
    Float32,
    Float64,
    Bool,
    Other,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::Uint8 => "uint8",
            ElementType::Int8 => "int8",
            ElementType::Int32 => "int32",
            ElementType::Int64 => "int64",
            ElementType::Float16 => "float16",
            ElementType::Float32 => "float32",
            ElementType::Float64 => "float64",
            ElementType::Bool => "bool",
            ElementType::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// (scale, zero_point) pair mapping quantized integer values to reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantization {
    pub scale: f32,
    pub zero_point: i32,
}

/// Declared metadata for one graph input or output.
/// Read once at load time; never changes across trials within a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorDescriptor {
    pub name: String,
    /// Dimensions as declared; -1 marks a dynamic size.
    pub shape: Vec<i64>,
    /// Per-dimension symbol names, where the graph declares them.
    pub dim_symbols: Vec<Option<String>>,
    pub dtype: ElementType,
    pub quantization: Option<Quantization>,
}

impl TensorDescriptor {
    /// Renders the shape with dynamic dims as their symbol (or `?`),
    /// e.g. `1x192x192x3` or `batchx192x192x3`.
    pub fn shape_signature(&self) -> String {
        self.shape
            .iter()
            .enumerate()
            .map(|(i, &dim)| {
                if dim >= 0 {
                    dim.to_string()
                } else {
                    match self.dim_symbols.get(i) {
                        Some(Some(symbol)) => symbol.clone(),
                        _ => "?".to_string(),
                    }
                }
            })
            .collect::<Vec<_>>()
            .join("x")
    }
}

/// One entry of the trial battery.
#[derive(Debug, Clone)]
pub struct TrialSpec {
    pub label: String,
    pub dtype: ElementType,
    pub shape: Vec<i64>,
}

/// Synthetic payload for one trial, matching the trial dtype.
#[derive(Debug, Clone)]
pub enum TensorValues {
    Uint8(Vec<u8>),
    Int32(Vec<i32>),
    Float32(Vec<f32>),
}

impl TensorValues {
    pub fn dtype(&self) -> ElementType {
        match self {
            TensorValues::Uint8(_) => ElementType::Uint8,
            TensorValues::Int32(_) => ElementType::Int32,
            TensorValues::Float32(_) => ElementType::Float32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TensorValues::Uint8(v) => v.len(),
            TensorValues::Int32(v) => v.len(),
            TensorValues::Float32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct SyntheticInput {
    pub shape: Vec<i64>,
    pub values: TensorValues,
}

/// What happened when one trial ran.
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    Success {
        output_shape: Vec<i64>,
        output_dtype: ElementType,
    },
    Failure {
        message: String,
    },
}

/// Result of a single trial. Created once, never mutated.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub label: String,
    pub dtype: ElementType,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Success { .. })
    }
}
