//! Tensor data types

use std::fmt;

use serde::Serialize;

use crate::tflite::TensorType;

/// Data type for tensor elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    // Floating point types
    Float32,
    Float16,
    BFloat16,
    Float64,
    // Integer types
    Int4,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Bool,
    // Complex types
    Complex64,
    Complex128,
    // Dynamically sized types
    String,
    Resource,
    Variant,
}

impl DType {
    /// Size of one element in bits, or `None` for dynamically sized types
    pub const fn element_bits(&self) -> Option<usize> {
        match self {
            Self::Int4 => Some(4),
            Self::Int8 | Self::Uint8 | Self::Bool => Some(8),
            Self::Float16 | Self::BFloat16 | Self::Int16 | Self::Uint16 => Some(16),
            Self::Float32 | Self::Int32 | Self::Uint32 => Some(32),
            Self::Float64 | Self::Int64 | Self::Uint64 | Self::Complex64 => Some(64),
            Self::Complex128 => Some(128),
            Self::String | Self::Resource | Self::Variant => None,
        }
    }

    /// Returns true if the byte size of a tensor is only known at runtime
    pub const fn is_dynamic(&self) -> bool {
        self.element_bits().is_none()
    }

    /// Calculate the byte size needed for a given number of elements
    ///
    /// Sub-byte types are packed and rounded up to whole bytes. Returns `None`
    /// for dynamically sized types or on overflow.
    pub fn size_for_elements(&self, n_elements: usize) -> Option<usize> {
        let bits = self.element_bits()?;
        Some(n_elements.checked_mul(bits)?.div_ceil(8))
    }

    /// Lowercase name of the type, as used in reports
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Float32 => "float32",
            Self::Float16 => "float16",
            Self::BFloat16 => "bfloat16",
            Self::Float64 => "float64",
            Self::Int4 => "int4",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Bool => "bool",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::Resource => "resource",
            Self::Variant => "variant",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<TensorType> for DType {
    fn from(tensor_type: TensorType) -> Self {
        match tensor_type {
            TensorType::Float32 => DType::Float32,
            TensorType::Float16 => DType::Float16,
            TensorType::Int32 => DType::Int32,
            TensorType::Uint8 => DType::Uint8,
            TensorType::Int64 => DType::Int64,
            TensorType::String => DType::String,
            TensorType::Bool => DType::Bool,
            TensorType::Int16 => DType::Int16,
            TensorType::Complex64 => DType::Complex64,
            TensorType::Int8 => DType::Int8,
            TensorType::Float64 => DType::Float64,
            TensorType::Complex128 => DType::Complex128,
            TensorType::Uint64 => DType::Uint64,
            TensorType::Resource => DType::Resource,
            TensorType::Variant => DType::Variant,
            TensorType::Uint32 => DType::Uint32,
            TensorType::Uint16 => DType::Uint16,
            TensorType::Int4 => DType::Int4,
            TensorType::BFloat16 => DType::BFloat16,
        }
    }
}
