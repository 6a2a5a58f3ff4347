//! error types for table conversion

use thiserror::Error;

use super::types::InputEncoding;

/// result type for table stuff
pub type TableResult<T> = Result<T, TableError>;

/// everything the pipeline can reject
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("unsupported bit width: {0} (expected 8, 16 or 32)")]
    UnsupportedBitWidth(u32),

    #[error("unknown input encoding '{0}' (expected int or float)")]
    UnknownEncoding(String),

    /// float input only exists as 32-bit IEEE-754
    #[error("unsupported input format: {encoding} at {bits} bits")]
    UnsupportedFormat { encoding: InputEncoding, bits: u32 },

    /// integer samples are passed through, so they must fit the table type
    #[error("{input_bits}-bit integer input does not fit a {output_bits}-bit table")]
    NarrowingPassThrough { input_bits: u32, output_bits: u32 },

    #[error("invalid table name '{0}': must be a C identifier")]
    InvalidTableName(String),

    #[error("sample rate must be greater than zero")]
    InvalidSampleRate,
}
