//! Tensor descriptors returned by the interpreter

use serde::Serialize;

use crate::tensor::DType;
use crate::tflite::{SparsityParameters, TensorInfo};

/// Snapshot of one tensor's metadata
///
/// Owned by the caller; resizing or reallocating the interpreter afterwards
/// does not update it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TensorDetails {
    pub name: String,
    pub index: usize,
    pub shape: Vec<i32>,
    pub shape_signature: Vec<i32>,
    pub dtype: DType,
    /// `(scale, zero_point)` for per-tensor quantization, `(0.0, 0)` otherwise
    pub quantization: (f32, i64),
    pub quantization_parameters: QuantizationParameters,
    pub sparsity_parameters: Option<SparsityParameters>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuantizationParameters {
    pub scales: Vec<f32>,
    pub zero_points: Vec<i64>,
    pub quantized_dimension: i32,
}

impl TensorDetails {
    pub(crate) fn new(index: usize, tensor: &TensorInfo, shape: &[i32]) -> Self {
        let quantization_parameters = tensor
            .quantization
            .as_ref()
            .map(|q| QuantizationParameters {
                scales: q.scale.clone(),
                zero_points: q.zero_point.clone(),
                quantized_dimension: q.quantized_dimension,
            })
            .unwrap_or_default();

        let quantization = match (
            quantization_parameters.scales.as_slice(),
            quantization_parameters.zero_points.as_slice(),
        ) {
            ([scale], [zero_point]) => (*scale, *zero_point),
            _ => (0.0, 0),
        };

        Self {
            name: tensor.name.clone(),
            index,
            shape: shape.to_vec(),
            shape_signature: tensor
                .shape_signature
                .clone()
                .unwrap_or_else(|| shape.to_vec()),
            dtype: DType::from(tensor.tensor_type),
            quantization,
            quantization_parameters,
            sparsity_parameters: tensor.sparsity.clone(),
        }
    }

    /// True if the tensor carries per-tensor or per-channel quantization
    pub fn is_quantized(&self) -> bool {
        !self.quantization_parameters.scales.is_empty()
    }
}

/// Input and output names of one signature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignatureInfo {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}
