//! TFLite schema constants and enums

/// File identifier stored at bytes 4..8 of every model buffer
pub const TFLITE_FILE_IDENTIFIER: &[u8; 4] = b"TFL3";

/// Schema version written by current converters
pub const TFLITE_SCHEMA_VERSION: u32 = 3;

/// Metadata entry holding the minimum runtime version string
pub const MIN_RUNTIME_VERSION_KEY: &str = "min_runtime_version";

/// Element type of a tensor as stored in the model (`TensorType` in the schema)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum TensorType {
    Float32 = 0,
    Float16 = 1,
    Int32 = 2,
    Uint8 = 3,
    Int64 = 4,
    String = 5,
    Bool = 6,
    Int16 = 7,
    Complex64 = 8,
    Int8 = 9,
    Float64 = 10,
    Complex128 = 11,
    Uint64 = 12,
    Resource = 13,
    Variant = 14,
    Uint32 = 15,
    Uint16 = 16,
    Int4 = 17,
    BFloat16 = 18,
}

impl TryFrom<i8> for TensorType {
    type Error = i8;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Float32),
            1 => Ok(Self::Float16),
            2 => Ok(Self::Int32),
            3 => Ok(Self::Uint8),
            4 => Ok(Self::Int64),
            5 => Ok(Self::String),
            6 => Ok(Self::Bool),
            7 => Ok(Self::Int16),
            8 => Ok(Self::Complex64),
            9 => Ok(Self::Int8),
            10 => Ok(Self::Float64),
            11 => Ok(Self::Complex128),
            12 => Ok(Self::Uint64),
            13 => Ok(Self::Resource),
            14 => Ok(Self::Variant),
            15 => Ok(Self::Uint32),
            16 => Ok(Self::Uint16),
            17 => Ok(Self::Int4),
            18 => Ok(Self::BFloat16),
            _ => Err(value),
        }
    }
}

/// Storage format of one dimension of a sparse tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionType {
    Dense,
    SparseCsr,
}

impl TryFrom<i8> for DimensionType {
    type Error = i8;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Dense),
            1 => Ok(Self::SparseCsr),
            _ => Err(value),
        }
    }
}

/// Union tag of the `array_segments`/`array_indices` fields of sparse dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseIndexVectorType {
    None,
    Int32Vector,
    Uint16Vector,
    Uint8Vector,
}

impl TryFrom<u8> for SparseIndexVectorType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Int32Vector),
            2 => Ok(Self::Uint16Vector),
            3 => Ok(Self::Uint8Vector),
            _ => Err(value),
        }
    }
}
