//! common types for the table conversion pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{TableError, TableResult};

// input description

/// how the raw input bytes are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    /// signed two's complement integers
    #[default]
    Int,
    /// IEEE-754 floats, nominally in [-1.0, 1.0]
    Float,
}

impl fmt::Display for InputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEncoding::Int => f.write_str("int"),
            InputEncoding::Float => f.write_str("float"),
        }
    }
}

impl FromStr for InputEncoding {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" | "integer" => Ok(InputEncoding::Int),
            "float" => Ok(InputEncoding::Float),
            other => Err(TableError::UnknownEncoding(other.to_string())),
        }
    }
}

/// sample width in bits
///
/// | Value | C type    | maxOut       |
/// |-------|-----------|--------------|
/// | 8     | `int8_t`  | 128          |
/// | 16    | `int16_t` | 32768        |
/// | 32    | `int32_t` | 2147483648   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum BitWidth {
    #[default]
    Bits8 = 8,
    Bits16 = 16,
    Bits32 = 32,
}

impl BitWidth {
    /// number of bits
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// C integer type for a table of this width
    pub fn c_type(self) -> &'static str {
        match self {
            BitWidth::Bits8 => "int8_t",
            BitWidth::Bits16 => "int16_t",
            BitWidth::Bits32 => "int32_t",
        }
    }
}

impl TryFrom<u8> for BitWidth {
    type Error = TableError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            8 => Ok(BitWidth::Bits8),
            16 => Ok(BitWidth::Bits16),
            32 => Ok(BitWidth::Bits32),
            other => Err(TableError::UnsupportedBitWidth(other as u32)),
        }
    }
}

impl From<BitWidth> for u8 {
    fn from(w: BitWidth) -> u8 {
        w as u8
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// declared input format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputSpec {
    pub encoding: InputEncoding,
    pub bits: BitWidth,
}

impl InputSpec {
    pub fn new(encoding: InputEncoding, bits: BitWidth) -> Self {
        InputSpec { encoding, bits }
    }

    /// resolve to a concrete sample format, rejecting float at 8 or 16 bits
    pub fn format(&self) -> TableResult<SampleFormat> {
        match (self.encoding, self.bits) {
            (InputEncoding::Int, BitWidth::Bits8) => Ok(SampleFormat::Int8),
            (InputEncoding::Int, BitWidth::Bits16) => Ok(SampleFormat::Int16),
            (InputEncoding::Int, BitWidth::Bits32) => Ok(SampleFormat::Int32),
            (InputEncoding::Float, BitWidth::Bits32) => Ok(SampleFormat::Float32),
            (InputEncoding::Float, bits) => Err(TableError::UnsupportedFormat {
                encoding: InputEncoding::Float,
                bits: bits.bits(),
            }),
        }
    }
}

/// declared output table format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputSpec {
    pub bits: BitWidth,
}

impl OutputSpec {
    pub fn new(bits: BitWidth) -> Self {
        OutputSpec { bits }
    }
}

/// concrete decode target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Int8,
    Int16,
    Int32,
    Float32,
}

impl SampleFormat {
    /// bytes per encoded sample
    pub fn width(self) -> usize {
        match self {
            SampleFormat::Int8 => 1,
            SampleFormat::Int16 => 2,
            SampleFormat::Int32 | SampleFormat::Float32 => 4,
        }
    }
}

// data

/// decoded samples, in playback order
#[derive(Debug, Clone, PartialEq)]
pub enum SampleSequence {
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Float32(Vec<f32>),
}

impl SampleSequence {
    pub fn len(&self) -> usize {
        match self {
            SampleSequence::Int8(v) => v.len(),
            SampleSequence::Int16(v) => v.len(),
            SampleSequence::Int32(v) => v.len(),
            SampleSequence::Float32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn format(&self) -> SampleFormat {
        match self {
            SampleSequence::Int8(_) => SampleFormat::Int8,
            SampleSequence::Int16(_) => SampleFormat::Int16,
            SampleSequence::Int32(_) => SampleFormat::Int32,
            SampleSequence::Float32(_) => SampleFormat::Float32,
        }
    }

    /// every sample widened to f64
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            SampleSequence::Int8(v) => v.iter().map(|&s| s as f64).collect(),
            SampleSequence::Int16(v) => v.iter().map(|&s| s as f64).collect(),
            SampleSequence::Int32(v) => v.iter().map(|&s| s as f64).collect(),
            SampleSequence::Float32(v) => v.iter().map(|&s| s as f64).collect(),
        }
    }
}

/// what ends up in the header besides the values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    /// identifier used for the guard, macros and array
    pub name: String,
    pub num_cells: usize,
    pub sample_rate: u32,
    pub output_bits: BitWidth,
}

/// counters collected while converting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// samples decoded from the input
    pub decoded_samples: usize,
    /// trailing bytes too short to form a sample
    pub dropped_bytes: usize,
    /// values appended by the dither pass
    pub dither_insertions: usize,
    /// whether the symmetry remap ran
    pub normalized: bool,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

/// finished table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub metadata: TableMetadata,
    pub values: Vec<i64>,
    pub stats: ConversionStats,
}
