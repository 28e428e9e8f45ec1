#[cfg(test)]
mod tests {
    use anyhow::{bail, Result};

    use crate::prober::{battery_specs, synthesize, Prober};
    use crate::runtime::InferenceRuntime;
    use crate::types::{
        ElementType, ProbeOutcome, Quantization, SyntheticInput, TensorDescriptor, TensorValues,
        TrialSpec,
    };

    // =========================================================================
    // Fixture: scripted stand-in for a loaded session.
    // `accepts` lists the input dtypes the fake runtime executes; everything
    // else gets the runtime's type-mismatch error. Whether a real runtime
    // casts mismatched inputs is a property of the runtime, so both behaviors
    // are modeled here and nothing in the prober assumes either.
    // =========================================================================

    struct MockRuntime {
        inputs: Vec<TensorDescriptor>,
        outputs: Vec<TensorDescriptor>,
        accepts: Vec<ElementType>,
        invocations: usize,
    }

    impl MockRuntime {
        /// Pose-model fixture: uint8 input (1,192,192,3), float32 output
        /// (1,1,17,3), quantized input tensor.
        fn pose_fixture(accepts: Vec<ElementType>) -> Self {
            Self {
                inputs: vec![TensorDescriptor {
                    name: "serving_default_input:0".to_string(),
                    shape: vec![1, 192, 192, 3],
                    dim_symbols: vec![None; 4],
                    dtype: ElementType::Uint8,
                    quantization: Some(Quantization {
                        scale: 1.0 / 255.0,
                        zero_point: 0,
                    }),
                }],
                outputs: vec![TensorDescriptor {
                    name: "StatefulPartitionedCall:0".to_string(),
                    shape: vec![1, 1, 17, 3],
                    dim_symbols: vec![None; 4],
                    dtype: ElementType::Float32,
                    quantization: None,
                }],
                accepts,
                invocations: 0,
            }
        }
    }

    impl InferenceRuntime for MockRuntime {
        fn inputs(&self) -> &[TensorDescriptor] {
            &self.inputs
        }

        fn outputs(&self) -> &[TensorDescriptor] {
            &self.outputs
        }

        fn invoke(&mut self, input: SyntheticInput) -> Result<(Vec<i64>, ElementType)> {
            self.invocations += 1;
            if self.accepts.contains(&input.values.dtype()) {
                Ok((self.outputs[0].shape.clone(), self.outputs[0].dtype))
            } else {
                bail!(
                    "tensor element type {} does not match the expected uint8",
                    input.values.dtype()
                )
            }
        }
    }

    fn full_shape() -> Vec<i64> {
        vec![1, 192, 192, 3]
    }

    #[test]
    fn strict_model_accepts_only_uint8() {
        let runtime = MockRuntime::pose_fixture(vec![ElementType::Uint8]);
        let mut prober = Prober::new(runtime);

        let results = prober.run_battery(&full_shape());
        assert_eq!(results.len(), 3);

        match &results[0].outcome {
            ProbeOutcome::Success {
                output_shape,
                output_dtype,
            } => {
                assert_eq!(output_shape, &vec![1, 1, 17, 3]);
                assert_eq!(*output_dtype, ElementType::Float32);
            }
            ProbeOutcome::Failure { message } => panic!("uint8 trial failed: {}", message),
        }

        for result in &results[1..] {
            match &result.outcome {
                ProbeOutcome::Failure { message } => {
                    assert!(
                        message.contains("does not match"),
                        "unexpected failure message: {}",
                        message
                    );
                }
                ProbeOutcome::Success { .. } => panic!("{} should have failed", result.label),
            }
        }
    }

    #[test]
    fn casting_model_accepts_all_dtypes() {
        let runtime = MockRuntime::pose_fixture(vec![
            ElementType::Uint8,
            ElementType::Int32,
            ElementType::Float32,
        ]);
        let mut prober = Prober::new(runtime);

        let results = prober.run_battery(&full_shape());
        assert!(results.iter().all(|r| r.succeeded()));
    }

    #[test]
    fn battery_completes_when_every_trial_fails() {
        let runtime = MockRuntime::pose_fixture(Vec::new());
        let mut prober = Prober::new(runtime);

        let results = prober.run_battery(&full_shape());
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| !r.succeeded()));
        // One execution per trial, no retries, no early exit.
        assert_eq!(prober.runtime().invocations, 3);
    }

    #[test]
    fn describe_is_idempotent() {
        let runtime = MockRuntime::pose_fixture(vec![ElementType::Uint8]);
        let prober = Prober::new(runtime);

        let first = prober.describe();
        let second = prober.describe();
        assert_eq!(first, second);
        assert_eq!(first.0[0].shape_signature(), "1x192x192x3");
    }

    #[test]
    fn battery_order_is_fixed() {
        let specs = battery_specs(&full_shape());
        let dtypes: Vec<ElementType> = specs.iter().map(|s| s.dtype).collect();
        assert_eq!(
            dtypes,
            vec![
                ElementType::Uint8,
                ElementType::Int32,
                ElementType::Float32
            ]
        );
        assert_eq!(specs[0].label, "uint8 input");
        assert_eq!(specs[2].label, "float32 input");
    }

    #[test]
    fn float_fill_stays_in_unit_interval() {
        let spec = TrialSpec {
            label: "float32 input".to_string(),
            dtype: ElementType::Float32,
            shape: vec![1, 4, 4, 3],
        };
        let input = synthesize(&spec).expect("float synthesis should succeed");
        assert_eq!(input.values.len(), 48);
        match input.values {
            TensorValues::Float32(values) => {
                assert!(values.iter().all(|&v| (0.0..1.0).contains(&v)));
            }
            other => panic!("expected float32 values, got {}", other.dtype()),
        }
    }

    #[test]
    fn synthesis_rejects_unsupported_dtype() {
        let spec = TrialSpec {
            label: "int64 input".to_string(),
            dtype: ElementType::Int64,
            shape: vec![1, 2, 2, 3],
        };
        assert!(synthesize(&spec).is_err());
    }

    #[test]
    fn dynamic_trial_shape_is_captured_as_failure() {
        let runtime = MockRuntime::pose_fixture(vec![ElementType::Uint8]);
        let mut prober = Prober::new(runtime);

        let spec = TrialSpec {
            label: "uint8 input".to_string(),
            dtype: ElementType::Uint8,
            shape: vec![-1, 192, 192, 3],
        };
        let result = prober.probe(&spec);
        match result.outcome {
            ProbeOutcome::Failure { message } => {
                assert!(message.contains("not fully specified"));
            }
            ProbeOutcome::Success { .. } => panic!("dynamic shape should not synthesize"),
        }
        // The failing trial never reached the runtime.
        assert_eq!(prober.runtime().invocations, 0);
    }
}
