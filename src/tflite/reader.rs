//! TFLite model reader implementation

use super::constants::{DimensionType, TensorType, TFLITE_FILE_IDENTIFIER, TFLITE_SCHEMA_VERSION};
use super::error::TfliteError;
use super::schema::{self, to_vec};
use super::types::{
    BufferInfo, DimensionMetadata, MetadataEntry, ModelData, OperatorCode, QuantizationInfo,
    SignatureDef, SparsityParameters, SubGraph, TensorInfo, TensorMap,
};

/// Root offset plus file identifier
const MIN_MODEL_SIZE: usize = 8;

/// TFLite flatbuffer reader
pub struct TfliteReader<'a> {
    model: schema::Model<'a>,
}

impl<'a> TfliteReader<'a> {
    /// Check the file identifier and verify the flatbuffer
    pub fn new(buf: &'a [u8]) -> Result<Self, TfliteError> {
        if buf.len() < MIN_MODEL_SIZE {
            return Err(TfliteError::TooSmall(buf.len()));
        }

        let identifier = &buf[4..8];
        if identifier != TFLITE_FILE_IDENTIFIER {
            return Err(TfliteError::InvalidIdentifier(
                String::from_utf8_lossy(identifier).into_owned(),
            ));
        }

        Ok(Self {
            model: schema::root_as_model(buf)?,
        })
    }

    /// Decode the complete model
    pub fn read(self) -> Result<ModelData, TfliteError> {
        let model = self.model;

        let version = model.version();
        if version != TFLITE_SCHEMA_VERSION {
            return Err(TfliteError::UnsupportedVersion(version));
        }

        let operator_codes = model
            .operator_codes()
            .into_iter()
            .flatten()
            .map(read_operator_code)
            .collect();

        let subgraphs = model
            .subgraphs()
            .into_iter()
            .flatten()
            .map(read_subgraph)
            .collect::<Result<Vec<_>, _>>()?;
        if subgraphs.is_empty() {
            return Err(TfliteError::NoSubgraphs);
        }

        let buffers = model
            .buffers()
            .into_iter()
            .flatten()
            .map(read_buffer)
            .collect();

        let metadata = model
            .metadata()
            .into_iter()
            .flatten()
            .map(|m| MetadataEntry {
                name: m.name().unwrap_or_default().to_owned(),
                buffer: m.buffer(),
            })
            .collect();

        let signature_defs = model
            .signature_defs()
            .into_iter()
            .flatten()
            .map(read_signature_def)
            .collect();

        Ok(ModelData {
            version,
            description: model.description().map(str::to_owned),
            operator_codes,
            subgraphs,
            buffers,
            metadata,
            signature_defs,
        })
    }
}

fn read_operator_code(code: schema::OperatorCode<'_>) -> OperatorCode {
    OperatorCode {
        // Older converters only fill the deprecated byte field
        builtin_code: i32::from(code.deprecated_builtin_code()).max(code.builtin_code()),
        custom_code: code.custom_code().map(str::to_owned),
        version: code.version(),
    }
}

fn read_subgraph(subgraph: schema::SubGraph<'_>) -> Result<SubGraph, TfliteError> {
    let tensors = subgraph
        .tensors()
        .into_iter()
        .flatten()
        .map(read_tensor)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SubGraph {
        name: subgraph.name().map(str::to_owned),
        tensors,
        inputs: to_vec(subgraph.inputs()),
        outputs: to_vec(subgraph.outputs()),
        operator_count: subgraph.operators().map_or(0, |ops| ops.len()),
    })
}

fn read_tensor(tensor: schema::Tensor<'_>) -> Result<TensorInfo, TfliteError> {
    let tensor_type =
        TensorType::try_from(tensor.type_()).map_err(TfliteError::InvalidTensorType)?;

    Ok(TensorInfo {
        name: tensor.name().unwrap_or_default().to_owned(),
        shape: to_vec(tensor.shape()),
        shape_signature: tensor.shape_signature().map(|s| s.iter().collect()),
        tensor_type,
        buffer: tensor.buffer(),
        quantization: tensor.quantization().map(|q| QuantizationInfo {
            scale: to_vec(q.scale()),
            zero_point: to_vec(q.zero_point()),
            quantized_dimension: q.quantized_dimension(),
        }),
        sparsity: tensor.sparsity().map(read_sparsity).transpose()?,
    })
}

fn read_sparsity(sparsity: schema::SparsityParameters<'_>) -> Result<SparsityParameters, TfliteError> {
    let dim_metadata = sparsity
        .dim_metadata()
        .into_iter()
        .flatten()
        .map(read_dimension_metadata)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SparsityParameters {
        traversal_order: to_vec(sparsity.traversal_order()),
        block_map: to_vec(sparsity.block_map()),
        dim_metadata,
    })
}

fn read_dimension_metadata(
    dim: schema::DimensionMetadata<'_>,
) -> Result<DimensionMetadata, TfliteError> {
    let format = DimensionType::try_from(dim.format()).map_err(TfliteError::InvalidDimensionType)?;

    Ok(DimensionMetadata {
        format,
        dense_size: dim.dense_size(),
        array_segments: dim
            .array_segments()
            .map_err(TfliteError::InvalidSparseIndexType)?,
        array_indices: dim
            .array_indices()
            .map_err(TfliteError::InvalidSparseIndexType)?,
    })
}

fn read_buffer(buffer: schema::Buffer<'_>) -> BufferInfo {
    BufferInfo {
        data: buffer.data_range().filter(|range| !range.is_empty()),
        offset: buffer.offset(),
        size: buffer.size(),
    }
}

fn read_signature_def(def: schema::SignatureDef<'_>) -> SignatureDef {
    SignatureDef {
        signature_key: def.signature_key().unwrap_or_default().to_owned(),
        subgraph_index: def.subgraph_index(),
        inputs: read_tensor_maps(def.inputs().into_iter().flatten()),
        outputs: read_tensor_maps(def.outputs().into_iter().flatten()),
    }
}

fn read_tensor_maps<'a>(maps: impl Iterator<Item = schema::TensorMap<'a>>) -> Vec<TensorMap> {
    maps.map(|m| TensorMap {
        name: m.name().unwrap_or_default().to_owned(),
        tensor_index: m.tensor_index(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_small() {
        let result = TfliteReader::new(&[0u8; 4]);
        assert!(matches!(result, Err(TfliteError::TooSmall(4))));
    }

    #[test]
    fn test_invalid_identifier() {
        let mut data = vec![0u8; 16];
        data[4..8].copy_from_slice(b"GGUF");
        let result = TfliteReader::new(&data);
        assert!(matches!(result, Err(TfliteError::InvalidIdentifier(ref id)) if id == "GGUF"));
    }

    #[test]
    fn test_garbage_after_identifier() {
        let mut data = vec![0xffu8; 16];
        data[4..8].copy_from_slice(b"TFL3");
        let result = TfliteReader::new(&data);
        assert!(matches!(result, Err(TfliteError::InvalidFlatbuffer(_))));
    }
}
