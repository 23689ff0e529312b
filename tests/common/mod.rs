//! In-memory TFLite model construction for tests

#![allow(dead_code)]

use flatbuffers::{FlatBufferBuilder, TableFinishedWIPOffset, WIPOffset};

/// TensorType values from the schema
pub const UINT8: i8 = 3;
pub const FLOAT32: i8 = 0;
pub const INT8: i8 = 9;
pub const STRING: i8 = 5;

fn slot(field: u16) -> u16 {
    4 + 2 * field
}

#[derive(Debug, Clone, Default)]
pub struct QuantSpec {
    pub scale: Vec<f32>,
    pub zero_point: Vec<i64>,
    pub quantized_dimension: i32,
}

#[derive(Debug, Clone)]
pub struct DimSpec {
    pub format: i8,
    pub dense_size: i32,
    pub segments: Vec<i32>,
    pub indices: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct SparsitySpec {
    pub traversal_order: Vec<i32>,
    pub block_map: Vec<i32>,
    pub dims: Vec<DimSpec>,
    /// Union tag written for `array_indices`; `Uint8Vector` (3) when unset
    pub indices_tag: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct TensorSpec {
    pub name: String,
    pub shape: Vec<i32>,
    pub shape_signature: Option<Vec<i32>>,
    pub tensor_type: i8,
    pub buffer: u32,
    pub quantization: Option<QuantSpec>,
    pub sparsity: Option<SparsitySpec>,
}

impl TensorSpec {
    pub fn new(name: &str, shape: &[i32], tensor_type: i8, buffer: u32) -> Self {
        Self {
            name: name.to_string(),
            shape: shape.to_vec(),
            shape_signature: None,
            tensor_type,
            buffer,
            quantization: None,
            sparsity: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignatureSpec {
    pub key: String,
    pub inputs: Vec<(String, u32)>,
    pub outputs: Vec<(String, u32)>,
}

#[derive(Debug, Clone, Default)]
pub struct ModelSpec {
    pub description: Option<String>,
    pub tensors: Vec<TensorSpec>,
    pub inputs: Vec<i32>,
    pub outputs: Vec<i32>,
    pub buffers: Vec<Vec<u8>>,
    pub operator_codes: Vec<(i8, i32)>,
    /// Opcode index of each operator in the subgraph
    pub operators: Vec<u32>,
    pub metadata: Vec<(String, u32)>,
    pub signatures: Vec<SignatureSpec>,
    /// Emit a model without any subgraph
    pub no_subgraph: bool,
    /// Schema version to write; 3 when unset
    pub schema_version: Option<u32>,
}

impl ModelSpec {
    /// A small quantized image classifier:
    ///
    /// - tensor 0: uint8 input `[1, 224, 224, 3]`, batch dimension dynamic
    /// - tensor 1: int8 per-channel quantized constant weights `[10, 4]`
    /// - tensor 2: float32 output `[1, 10]`
    pub fn image_classifier() -> Self {
        let mut input = TensorSpec::new("serving_default_input:0", &[1, 224, 224, 3], UINT8, 1);
        input.shape_signature = Some(vec![-1, 224, 224, 3]);
        input.quantization = Some(QuantSpec {
            scale: vec![0.007843138],
            zero_point: vec![127],
            quantized_dimension: 0,
        });

        let mut weights = TensorSpec::new("sequential/dense/MatMul", &[10, 4], INT8, 2);
        weights.quantization = Some(QuantSpec {
            scale: (1..=10).map(|i| i as f32 * 0.01).collect(),
            zero_point: vec![0; 10],
            quantized_dimension: 0,
        });

        let output = TensorSpec::new("StatefulPartitionedCall:0", &[1, 10], FLOAT32, 3);

        let mut min_runtime = b"1.14.0".to_vec();
        min_runtime.resize(16, 0);

        Self {
            description: Some("MLIR Converted.".to_string()),
            tensors: vec![input, weights, output],
            inputs: vec![0],
            outputs: vec![2],
            buffers: vec![vec![], vec![], vec![1u8; 40], vec![], min_runtime],
            // FULLY_CONNECTED via the deprecated byte field, DEQUANTIZE via the new field
            operator_codes: vec![(9, 0), (0, 6)],
            operators: vec![1, 0],
            metadata: vec![("min_runtime_version".to_string(), 4)],
            signatures: vec![SignatureSpec {
                key: "serving_default".to_string(),
                inputs: vec![("input".to_string(), 0)],
                outputs: vec![("output_0".to_string(), 2)],
            }],
            no_subgraph: false,
            schema_version: None,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut fbb = FlatBufferBuilder::new();

        let mut buffers = Vec::new();
        for data in &self.buffers {
            let data = if data.is_empty() {
                None
            } else {
                Some(fbb.create_vector(data.as_slice()))
            };
            let start = fbb.start_table();
            if let Some(data) = data {
                fbb.push_slot_always(slot(0), data);
            }
            buffers.push(fbb.end_table(start));
        }

        let mut tensors = Vec::new();
        for tensor in &self.tensors {
            tensors.push(build_tensor(&mut fbb, tensor));
        }

        let mut operators = Vec::new();
        for &opcode_index in &self.operators {
            let start = fbb.start_table();
            fbb.push_slot(slot(0), opcode_index, 0u32);
            operators.push(fbb.end_table(start));
        }

        let mut subgraphs = Vec::new();
        if !self.no_subgraph {
            let tensors = fbb.create_vector(tensors.as_slice());
            let operators = fbb.create_vector(operators.as_slice());
            let inputs = fbb.create_vector(self.inputs.as_slice());
            let outputs = fbb.create_vector(self.outputs.as_slice());
            let name = fbb.create_string("main");
            let start = fbb.start_table();
            fbb.push_slot_always(slot(0), tensors);
            fbb.push_slot_always(slot(1), inputs);
            fbb.push_slot_always(slot(2), outputs);
            fbb.push_slot_always(slot(3), operators);
            fbb.push_slot_always(slot(4), name);
            subgraphs.push(fbb.end_table(start));
        }

        let mut operator_codes = Vec::new();
        for &(deprecated, builtin) in &self.operator_codes {
            let start = fbb.start_table();
            fbb.push_slot(slot(0), deprecated, 0i8);
            fbb.push_slot(slot(2), 1i32, 0i32);
            fbb.push_slot(slot(3), builtin, 0i32);
            operator_codes.push(fbb.end_table(start));
        }

        let mut metadata = Vec::new();
        for (name, buffer) in &self.metadata {
            let name = fbb.create_string(name);
            let start = fbb.start_table();
            fbb.push_slot_always(slot(0), name);
            fbb.push_slot(slot(1), *buffer, 0u32);
            metadata.push(fbb.end_table(start));
        }

        let mut signatures = Vec::new();
        for signature in &self.signatures {
            let inputs = build_tensor_maps(&mut fbb, &signature.inputs);
            let outputs = build_tensor_maps(&mut fbb, &signature.outputs);
            let key = fbb.create_string(&signature.key);
            let start = fbb.start_table();
            fbb.push_slot_always(slot(0), inputs);
            fbb.push_slot_always(slot(1), outputs);
            fbb.push_slot_always(slot(2), key);
            signatures.push(fbb.end_table(start));
        }

        let operator_codes = fbb.create_vector(operator_codes.as_slice());
        let subgraphs = fbb.create_vector(subgraphs.as_slice());
        let buffers = fbb.create_vector(buffers.as_slice());
        let metadata = fbb.create_vector(metadata.as_slice());
        let signatures = fbb.create_vector(signatures.as_slice());
        let description = self
            .description
            .as_deref()
            .map(|d| fbb.create_string(d));

        let start = fbb.start_table();
        fbb.push_slot(slot(0), self.schema_version.unwrap_or(3), 0u32);
        fbb.push_slot_always(slot(1), operator_codes);
        fbb.push_slot_always(slot(2), subgraphs);
        if let Some(description) = description {
            fbb.push_slot_always(slot(3), description);
        }
        fbb.push_slot_always(slot(4), buffers);
        fbb.push_slot_always(slot(6), metadata);
        fbb.push_slot_always(slot(7), signatures);
        let model = fbb.end_table(start);

        fbb.finish(model, Some("TFL3"));
        fbb.finished_data().to_vec()
    }
}

fn build_tensor(
    fbb: &mut FlatBufferBuilder<'static>,
    tensor: &TensorSpec,
) -> WIPOffset<TableFinishedWIPOffset> {
    let name = fbb.create_string(&tensor.name);
    let shape = fbb.create_vector(tensor.shape.as_slice());
    let signature = tensor
        .shape_signature
        .as_ref()
        .map(|s| fbb.create_vector(s.as_slice()));

    let quantization = tensor.quantization.as_ref().map(|q| {
        let scale = fbb.create_vector(q.scale.as_slice());
        let zero_point = fbb.create_vector(q.zero_point.as_slice());
        let start = fbb.start_table();
        fbb.push_slot_always(slot(2), scale);
        fbb.push_slot_always(slot(3), zero_point);
        fbb.push_slot(slot(6), q.quantized_dimension, 0i32);
        fbb.end_table(start)
    });

    let sparsity = tensor
        .sparsity
        .as_ref()
        .map(|s| build_sparsity(fbb, s));

    let start = fbb.start_table();
    fbb.push_slot_always(slot(0), shape);
    fbb.push_slot(slot(1), tensor.tensor_type, 0i8);
    fbb.push_slot(slot(2), tensor.buffer, 0u32);
    fbb.push_slot_always(slot(3), name);
    if let Some(quantization) = quantization {
        fbb.push_slot_always(slot(4), quantization);
    }
    if let Some(sparsity) = sparsity {
        fbb.push_slot_always(slot(6), sparsity);
    }
    if let Some(signature) = signature {
        fbb.push_slot_always(slot(7), signature);
    }
    fbb.end_table(start)
}

fn build_sparsity(
    fbb: &mut FlatBufferBuilder<'static>,
    sparsity: &SparsitySpec,
) -> WIPOffset<TableFinishedWIPOffset> {
    let mut dims = Vec::new();
    for dim in &sparsity.dims {
        // Int32Vector { values } for segments, Uint8Vector { values } for indices
        let segment_values = fbb.create_vector(dim.segments.as_slice());
        let start = fbb.start_table();
        fbb.push_slot_always(slot(0), segment_values);
        let segments = fbb.end_table(start);

        let index_values = fbb.create_vector(dim.indices.as_slice());
        let start = fbb.start_table();
        fbb.push_slot_always(slot(0), index_values);
        let indices = fbb.end_table(start);

        let start = fbb.start_table();
        fbb.push_slot(slot(0), dim.format, 0i8);
        fbb.push_slot(slot(1), dim.dense_size, 0i32);
        fbb.push_slot(slot(2), 1u8, 0u8);
        fbb.push_slot_always(slot(3), segments);
        fbb.push_slot(slot(4), sparsity.indices_tag.unwrap_or(3), 0u8);
        fbb.push_slot_always(slot(5), indices);
        dims.push(fbb.end_table(start));
    }

    let traversal_order = fbb.create_vector(sparsity.traversal_order.as_slice());
    let block_map = fbb.create_vector(sparsity.block_map.as_slice());
    let dims = fbb.create_vector(dims.as_slice());

    let start = fbb.start_table();
    fbb.push_slot_always(slot(0), traversal_order);
    fbb.push_slot_always(slot(1), block_map);
    fbb.push_slot_always(slot(2), dims);
    fbb.end_table(start)
}

fn build_tensor_maps(
    fbb: &mut FlatBufferBuilder<'static>,
    maps: &[(String, u32)],
) -> WIPOffset<flatbuffers::Vector<'static, flatbuffers::ForwardsUOffset<TableFinishedWIPOffset>>>
{
    let mut tables = Vec::new();
    for (name, index) in maps {
        let name = fbb.create_string(name);
        let start = fbb.start_table();
        fbb.push_slot_always(slot(0), name);
        fbb.push_slot(slot(1), *index, 0u32);
        tables.push(fbb.end_table(start));
    }
    fbb.create_vector(tables.as_slice())
}
