//! Error types for the fatal-to-run tier.
//!
//! Per-trial errors never appear here: the prober captures them as
//! `ProbeOutcome::Failure` values so the remaining trials still run.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::ElementType;

#[derive(Error, Debug)]
pub enum ProbeError {
    /// The model file does not exist on disk.
    #[error("model file not found: {}", .0.display())]
    ModelNotFound(PathBuf),

    /// The runtime rejected the file during session creation.
    #[error("failed to load model: {0}")]
    Load(String),

    #[error("model declares no input tensors")]
    NoInputs,

    #[error("model declares no output tensors")]
    NoOutputs,

    /// The battery has no synthetic fill for this dtype.
    #[error("no synthetic fill for dtype {0}")]
    UnsupportedDtype(ElementType),

    /// Trial shapes must be concrete; dynamic markers cannot be allocated.
    #[error("trial shape {0:?} is not fully specified")]
    UnresolvedShape(Vec<i64>),
}
