use crate::tflite::TfliteError;

#[derive(thiserror::Error, Debug)]
pub enum InterpreterError {
    #[error("Failed to load model: {0}")]
    Model(#[from] TfliteError),

    #[error("Tensors are not allocated; call allocate_tensors() first")]
    TensorsNotAllocated,

    #[error("Tensor index {index} out of range ({count} tensors)")]
    TensorIndexOutOfRange { index: i64, count: usize },

    #[error("Tensor {tensor} references buffer {buffer}, but the model has {count} buffers")]
    BufferIndexOutOfRange {
        tensor: usize,
        buffer: u32,
        count: usize,
    },

    #[error("Tensor {tensor} has invalid shape {shape:?}")]
    InvalidShape { tensor: usize, shape: Vec<i32> },

    #[error("Constant tensor {tensor} needs {expected} bytes, buffer holds {got}")]
    ConstantSizeMismatch {
        tensor: usize,
        expected: usize,
        got: usize,
    },

    #[error("Tensor {0} is not an input of the subgraph")]
    NotAnInput(usize),

    #[error("Cannot resize tensor {tensor} from signature {signature:?} to {requested:?} in strict mode")]
    StrictResize {
        tensor: usize,
        signature: Vec<i32>,
        requested: Vec<i32>,
    },
}
