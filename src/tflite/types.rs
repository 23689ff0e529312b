//! Decoded TFLite model structures

use std::ops::Range;

use serde::Serialize;

use super::constants::{DimensionType, TensorType};

/// Everything decoded from a model file, detached from the file bytes
///
/// Only [`TfliteReader::read`](super::TfliteReader::read) builds one, so
/// `subgraphs` is never empty.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ModelData {
    pub version: u32,
    pub description: Option<String>,
    pub operator_codes: Vec<OperatorCode>,
    pub subgraphs: Vec<SubGraph>,
    pub buffers: Vec<BufferInfo>,
    pub metadata: Vec<MetadataEntry>,
    pub signature_defs: Vec<SignatureDef>,
}

impl ModelData {
    /// The subgraph the interpreter runs (index 0)
    pub fn primary_subgraph(&self) -> &SubGraph {
        &self.subgraphs[0]
    }

    pub fn get_metadata(&self, name: &str) -> Option<&MetadataEntry> {
        self.metadata.iter().find(|m| m.name == name)
    }

    pub fn get_buffer(&self, index: u32) -> Option<&BufferInfo> {
        self.buffers.get(index as usize)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorCode {
    /// Resolved builtin code (the larger of the deprecated and current fields)
    pub builtin_code: i32,
    pub custom_code: Option<String>,
    pub version: i32,
}

#[derive(Debug, Clone)]
pub struct SubGraph {
    pub name: Option<String>,
    pub tensors: Vec<TensorInfo>,
    pub inputs: Vec<i32>,
    pub outputs: Vec<i32>,
    /// Number of operators; only logged, operators are never run
    pub operator_count: usize,
}

impl SubGraph {
    pub fn get_tensor(&self, index: i32) -> Option<&TensorInfo> {
        usize::try_from(index).ok().and_then(|i| self.tensors.get(i))
    }
}

/// Tensor entry of a subgraph
#[derive(Debug, Clone, PartialEq)]
pub struct TensorInfo {
    pub name: String,
    pub shape: Vec<i32>,
    /// Present only when the model has dynamic dimensions (`-1`)
    pub shape_signature: Option<Vec<i32>>,
    pub tensor_type: TensorType,
    pub buffer: u32,
    pub quantization: Option<QuantizationInfo>,
    pub sparsity: Option<SparsityParameters>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantizationInfo {
    pub scale: Vec<f32>,
    pub zero_point: Vec<i64>,
    pub quantized_dimension: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparsityParameters {
    pub traversal_order: Vec<i32>,
    pub block_map: Vec<i32>,
    pub dim_metadata: Vec<DimensionMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionMetadata {
    pub format: DimensionType,
    pub dense_size: i32,
    pub array_segments: Vec<i32>,
    pub array_indices: Vec<i32>,
}

/// Location of a buffer's bytes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BufferInfo {
    /// Inline data range within the model file
    pub data: Option<Range<usize>>,
    /// External data offset from the start of the file (models over 2 GiB)
    pub offset: u64,
    pub size: u64,
}

impl BufferInfo {
    /// Number of bytes the buffer holds, inline or external
    pub fn len(&self) -> usize {
        match &self.data {
            Some(range) => range.len(),
            None if self.offset > 1 => self.size as usize,
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub name: String,
    pub buffer: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureDef {
    pub signature_key: String,
    pub subgraph_index: u32,
    pub inputs: Vec<TensorMap>,
    pub outputs: Vec<TensorMap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorMap {
    pub name: String,
    pub tensor_index: u32,
}
