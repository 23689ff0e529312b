//! Model interpreter
//!
//! Loads a TFLite model, plans memory for its tensors and answers metadata
//! queries about them. Operators are never executed; allocation exists to
//! validate the model structure and to fix tensor shapes before they are
//! reported.
//!
//! Descriptors are only available after [`Interpreter::allocate_tensors`]
//! has succeeded:
//!
//! ```no_run
//! use tflite_inspect::Interpreter;
//!
//! let mut interpreter = Interpreter::from_path("model.tflite")?;
//! interpreter.allocate_tensors()?;
//! for input in interpreter.input_details()? {
//!     println!("{} {:?} {}", input.name, input.shape, input.dtype);
//! }
//! # Ok::<(), tflite_inspect::InterpreterError>(())
//! ```

mod allocation;
mod details;
mod error;

pub use allocation::{element_count, AllocationPlan, TensorAllocation, TENSOR_ALIGNMENT};
pub use details::{QuantizationParameters, SignatureInfo, TensorDetails};
pub use error::InterpreterError;

use std::collections::BTreeMap;
use std::path::Path;

use crate::tflite::{ModelData, TfliteFile};

pub struct Interpreter {
    model: TfliteFile,
    /// Current shape of every tensor of the primary subgraph
    shapes: Vec<Vec<i32>>,
    plan: Option<AllocationPlan>,
}

impl Interpreter {
    /// Construct an interpreter from a model file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InterpreterError> {
        Ok(Self::new(TfliteFile::open(path)?))
    }

    /// Construct an interpreter from an in-memory model
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, InterpreterError> {
        Ok(Self::new(TfliteFile::from_bytes(bytes)?))
    }

    pub fn new(model: TfliteFile) -> Self {
        let shapes = model
            .data()
            .primary_subgraph()
            .tensors
            .iter()
            .map(|t| t.shape.clone())
            .collect();

        Self {
            model,
            shapes,
            plan: None,
        }
    }

    pub fn model(&self) -> &TfliteFile {
        &self.model
    }

    fn data(&self) -> &ModelData {
        self.model.data()
    }

    /// Plan memory for every tensor, validating the model structure
    pub fn allocate_tensors(&mut self) -> Result<&AllocationPlan, InterpreterError> {
        let plan = AllocationPlan::new(self.model.data(), &self.shapes)?;

        tracing::info!(
            tensors = plan.tensors().len(),
            constants = plan.constant_count(),
            arena_bytes = plan.arena_bytes(),
            "allocated tensors"
        );

        Ok(self.plan.insert(plan))
    }

    /// The current allocation, if tensors are allocated
    pub fn allocation(&self) -> Option<&AllocationPlan> {
        self.plan.as_ref()
    }

    fn ensure_allocated(&self) -> Result<(), InterpreterError> {
        match self.plan {
            Some(_) => Ok(()),
            None => Err(InterpreterError::TensorsNotAllocated),
        }
    }

    fn details_for(&self, indices: &[i32]) -> Result<Vec<TensorDetails>, InterpreterError> {
        self.ensure_allocated()?;
        let subgraph = self.data().primary_subgraph();

        indices
            .iter()
            .map(|&index| -> Result<TensorDetails, InterpreterError> {
                let tensor = subgraph.get_tensor(index).ok_or(
                    InterpreterError::TensorIndexOutOfRange {
                        index: index as i64,
                        count: subgraph.tensors.len(),
                    },
                )?;
                let index = index as usize;
                Ok(TensorDetails::new(index, tensor, &self.shapes[index]))
            })
            .collect()
    }

    /// Descriptors of the subgraph inputs, in subgraph order
    pub fn input_details(&self) -> Result<Vec<TensorDetails>, InterpreterError> {
        self.details_for(&self.data().primary_subgraph().inputs)
    }

    /// Descriptors of the subgraph outputs, in subgraph order
    pub fn output_details(&self) -> Result<Vec<TensorDetails>, InterpreterError> {
        self.details_for(&self.data().primary_subgraph().outputs)
    }

    /// Descriptors of every tensor in the subgraph
    pub fn tensor_details(&self) -> Result<Vec<TensorDetails>, InterpreterError> {
        self.ensure_allocated()?;
        let subgraph = self.data().primary_subgraph();

        Ok(subgraph
            .tensors
            .iter()
            .zip(&self.shapes)
            .enumerate()
            .map(|(index, (tensor, shape))| TensorDetails::new(index, tensor, shape))
            .collect())
    }

    /// Change the shape of an input tensor
    ///
    /// `index` is the tensor index reported in the input details. In strict
    /// mode only dimensions that are `-1` in the shape signature may change.
    /// Tensors must be allocated again afterwards.
    pub fn resize_tensor_input(
        &mut self,
        index: usize,
        dims: &[i32],
        strict: bool,
    ) -> Result<(), InterpreterError> {
        let subgraph = self.model.data().primary_subgraph();
        let is_input = i32::try_from(index)
            .map(|i| subgraph.inputs.contains(&i))
            .unwrap_or(false);
        if !is_input {
            return Err(InterpreterError::NotAnInput(index));
        }
        let tensor =
            subgraph
                .tensors
                .get(index)
                .ok_or(InterpreterError::TensorIndexOutOfRange {
                    index: index as i64,
                    count: subgraph.tensors.len(),
                })?;

        if dims.iter().any(|&d| d < 0) {
            return Err(InterpreterError::InvalidShape {
                tensor: index,
                shape: dims.to_vec(),
            });
        }

        if strict {
            let signature = tensor
                .shape_signature
                .clone()
                .unwrap_or_else(|| tensor.shape.clone());
            let compatible = signature.len() == dims.len()
                && signature
                    .iter()
                    .zip(dims)
                    .all(|(&sig, &dim)| sig == -1 || sig == dim);
            if !compatible {
                return Err(InterpreterError::StrictResize {
                    tensor: index,
                    signature,
                    requested: dims.to_vec(),
                });
            }
        }

        tracing::debug!(tensor = index, shape = ?dims, "resized input");
        self.shapes[index] = dims.to_vec();
        self.plan = None;
        Ok(())
    }

    /// Input and output names of every signature, keyed by signature key
    pub fn signature_list(&self) -> BTreeMap<String, SignatureInfo> {
        self.data()
            .signature_defs
            .iter()
            .map(|def| {
                let mut inputs: Vec<String> = def.inputs.iter().map(|m| m.name.clone()).collect();
                let mut outputs: Vec<String> =
                    def.outputs.iter().map(|m| m.name.clone()).collect();
                inputs.sort();
                outputs.sort();
                (def.signature_key.clone(), SignatureInfo { inputs, outputs })
            })
            .collect()
    }
}
