//! TFLite model file parser

mod constants;
mod error;
mod reader;
mod schema;
mod types;

pub use constants::{
    DimensionType, SparseIndexVectorType, TensorType, MIN_RUNTIME_VERSION_KEY,
    TFLITE_FILE_IDENTIFIER, TFLITE_SCHEMA_VERSION,
};
pub use error::TfliteError;
pub use reader::TfliteReader;
pub use types::{
    BufferInfo, DimensionMetadata, MetadataEntry, ModelData, OperatorCode, QuantizationInfo,
    SignatureDef, SparsityParameters, SubGraph, TensorInfo, TensorMap,
};

use std::ops::Deref;
use std::path::Path;

/// Backing bytes of a model: a read-only mapping or an owned buffer
enum ModelBytes {
    Mapped(memmap2::Mmap),
    Owned(Vec<u8>),
}

impl Deref for ModelBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => mmap,
            Self::Owned(bytes) => bytes,
        }
    }
}

/// High-level TFLite model handle with memory-mapped buffer data
pub struct TfliteFile {
    data: ModelData,
    bytes: ModelBytes,
}

impl TfliteFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TfliteError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let len = file.metadata()?.len() as usize;
        if len < 8 {
            return Err(TfliteError::TooSmall(len));
        }
        // SAFETY: the mapping is read-only and owned by this struct. Modifying
        // the file while it is mapped is undefined behavior, as documented in
        // memmap2.
        let mmap = unsafe { memmap2::Mmap::map(&file)? };
        let data = TfliteReader::new(&mmap)?.read()?;

        tracing::debug!(
            path = %path.display(),
            bytes = len,
            version = data.version,
            subgraphs = data.subgraphs.len(),
            operators = data.primary_subgraph().operator_count,
            buffers = data.buffers.len(),
            "loaded TFLite model"
        );

        Ok(Self {
            data,
            bytes: ModelBytes::Mapped(mmap),
        })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, TfliteError> {
        let data = TfliteReader::new(&bytes)?.read()?;
        Ok(Self {
            data,
            bytes: ModelBytes::Owned(bytes),
        })
    }

    /// The decoded model; always holds at least one subgraph
    pub fn data(&self) -> &ModelData {
        &self.data
    }

    /// Size of the model in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw bytes of a buffer, inline or stored after the flatbuffer
    pub fn buffer_data(&self, index: u32) -> Option<&[u8]> {
        let info = self.data.get_buffer(index)?;
        let range = match &info.data {
            Some(range) => range.clone(),
            None if info.offset > 1 => {
                let start = usize::try_from(info.offset).ok()?;
                start..start.checked_add(usize::try_from(info.size).ok()?)?
            }
            None => return Some(&[]),
        };
        self.bytes.get(range)
    }

    /// The `min_runtime_version` metadata string, if the converter wrote one
    pub fn min_runtime_version(&self) -> Option<&str> {
        let entry = self.data.get_metadata(MIN_RUNTIME_VERSION_KEY)?;
        let raw = self.buffer_data(entry.buffer)?;
        // Stored as a fixed-width, NUL-padded field
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        std::str::from_utf8(&raw[..end]).ok()
    }
}
