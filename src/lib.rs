//! tflite-inspect: load TensorFlow Lite models and report their tensor metadata

pub mod interpreter;
pub mod report;
pub mod tensor;
pub mod tflite;

pub use interpreter::{Interpreter, InterpreterError, TensorDetails};
pub use report::{OutputFormat, Report};
pub use tensor::DType;
pub use tflite::{TfliteError, TfliteFile};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TFLite error: {0}")]
    Tflite(#[from] tflite::TfliteError),
    #[error("{0}")]
    Interpreter(#[from] interpreter::InterpreterError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
