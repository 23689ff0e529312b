//! Tensor memory planning

use serde::Serialize;

use super::error::InterpreterError;
use crate::tensor::DType;
use crate::tflite::ModelData;

/// Alignment of every tensor placed in the arena
pub const TENSOR_ALIGNMENT: usize = 64;

/// Where a tensor's bytes live once tensors are allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TensorAllocation {
    /// Read-write memory inside the shared arena
    Arena { offset: usize, size: usize },
    /// Read-only data backed by a model buffer
    Constant { buffer: u32, size: usize },
    /// Size only known once the tensor is written (strings, resources, variants)
    Dynamic,
}

/// Memory layout of all tensors of the primary subgraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan {
    arena_bytes: usize,
    tensors: Vec<TensorAllocation>,
}

impl AllocationPlan {
    /// Validate the subgraph and lay out its tensors
    ///
    /// `shapes` holds the current shape of every tensor, which differs from
    /// the model's shapes after an input resize.
    pub(crate) fn new(model: &ModelData, shapes: &[Vec<i32>]) -> Result<Self, InterpreterError> {
        let subgraph = model.primary_subgraph();
        let count = subgraph.tensors.len();

        for &index in subgraph.inputs.iter().chain(&subgraph.outputs) {
            if subgraph.get_tensor(index).is_none() {
                return Err(InterpreterError::TensorIndexOutOfRange {
                    index: index as i64,
                    count,
                });
            }
        }

        let mut arena_bytes = 0usize;
        let mut tensors = Vec::with_capacity(count);

        for (index, (tensor, shape)) in subgraph.tensors.iter().zip(shapes).enumerate() {
            let invalid_shape = || InterpreterError::InvalidShape {
                tensor: index,
                shape: shape.clone(),
            };

            let buffer =
                model
                    .get_buffer(tensor.buffer)
                    .ok_or(InterpreterError::BufferIndexOutOfRange {
                        tensor: index,
                        buffer: tensor.buffer,
                        count: model.buffers.len(),
                    })?;

            let numel = element_count(shape).ok_or_else(invalid_shape)?;
            let dtype = DType::from(tensor.tensor_type);

            let allocation = if !buffer.is_empty() {
                // Sparse constants are stored compressed
                if let Some(expected) = dtype.size_for_elements(numel) {
                    if tensor.sparsity.is_none() && buffer.len() != expected {
                        return Err(InterpreterError::ConstantSizeMismatch {
                            tensor: index,
                            expected,
                            got: buffer.len(),
                        });
                    }
                }
                TensorAllocation::Constant {
                    buffer: tensor.buffer,
                    size: buffer.len(),
                }
            } else {
                match dtype.size_for_elements(numel) {
                    Some(size) => {
                        let offset = align_offset(arena_bytes, TENSOR_ALIGNMENT)
                            .ok_or_else(invalid_shape)?;
                        arena_bytes = offset.checked_add(size).ok_or_else(invalid_shape)?;
                        TensorAllocation::Arena { offset, size }
                    }
                    None if dtype.is_dynamic() => TensorAllocation::Dynamic,
                    None => return Err(invalid_shape()),
                }
            };
            tensors.push(allocation);
        }

        Ok(Self {
            arena_bytes,
            tensors,
        })
    }

    /// Total arena size in bytes
    pub fn arena_bytes(&self) -> usize {
        self.arena_bytes
    }

    pub fn tensor(&self, index: usize) -> Option<&TensorAllocation> {
        self.tensors.get(index)
    }

    pub fn tensors(&self) -> &[TensorAllocation] {
        &self.tensors
    }

    pub fn constant_count(&self) -> usize {
        self.tensors
            .iter()
            .filter(|t| matches!(t, TensorAllocation::Constant { .. }))
            .count()
    }
}

/// Number of elements of a shape; `None` for negative dimensions or overflow
pub fn element_count(shape: &[i32]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &dim| {
        let dim = usize::try_from(dim).ok()?;
        acc.checked_mul(dim)
    })
}

/// Round an offset up to the given alignment; `None` on overflow
fn align_offset(offset: usize, alignment: usize) -> Option<usize> {
    offset.div_ceil(alignment).checked_mul(alignment)
}
