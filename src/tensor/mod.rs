//! Tensor element types
//!
//! Element types as seen by the interpreter, with byte sizes used when
//! planning tensor memory.

mod dtype;

pub use dtype::DType;
