#[derive(thiserror::Error, Debug)]
pub enum TfliteError {
    #[error("File too small to be a TFLite model: {0} bytes")]
    TooSmall(usize),
    #[error("Invalid file identifier: expected \"TFL3\", got {0:?}")]
    InvalidIdentifier(String),
    #[error("Unsupported TFLite schema version: {0}")]
    UnsupportedVersion(u32),
    #[error("Malformed model flatbuffer: {0}")]
    InvalidFlatbuffer(#[from] flatbuffers::InvalidFlatbuffer),
    #[error("Invalid tensor type: {0}")]
    InvalidTensorType(i8),
    #[error("Invalid dimension type: {0}")]
    InvalidDimensionType(i8),
    #[error("Invalid sparse index vector type: {0}")]
    InvalidSparseIndexType(u8),
    #[error("Model has no subgraphs")]
    NoSubgraphs,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
