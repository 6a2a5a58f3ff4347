//! Conversion of raw audio samples into Mozzi lookup tables.
//!
//! The pipeline is a straight line: decode the raw bytes, rescale to the
//! table width, break up runs of `33` that upset the Mega2560 bootloader,
//! optionally make the range symmetrical, then format a C header.

pub mod converter;
pub mod core;
pub mod dither;
pub mod normalize;
pub mod rescale;

mod reader;
mod writer;

pub use crate::core::{
    max_output_value, min_output_value, BitWidth, ConversionResult, ConversionStats,
    InputEncoding, InputSpec, OutputSpec, SampleFormat, SampleSequence, TableError,
    TableMetadata, TableResult, DEFAULT_SAMPLE_RATE, DITHER_CHOICES, DITHER_TRIGGER, LINE_WIDTH,
};
pub use converter::{validate_table_name, Converter};
pub use dither::{dither, DitherSource, FixedDither, RngDither};
pub use normalize::{make_symmetrical, map_range};
pub use reader::{Decoded, Reader};
pub use rescale::{rescale, rescale_float};
pub use writer::{fill, Writer};

use serde::Serialize;

// raw input info

/// what a raw buffer holds, before any conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawInfo {
    pub format: String,
    pub byte_len: usize,
    pub sample_count: usize,
    pub dropped_bytes: usize,
    /// duration at the declared sample rate
    pub duration_secs: f64,
    pub min_sample: Option<f64>,
    pub max_sample: Option<f64>,
}

// api functions

/// Inspect a raw buffer without converting it.
///
/// # Arguments
/// * `data` - raw sample bytes
/// * `input` - declared input format
/// * `sample_rate` - rate used to report a duration
pub fn info(data: &[u8], input: InputSpec, sample_rate: u32) -> TableResult<RawInfo> {
    let reader = Reader::new(input)?;
    let decoded = reader.read(data);
    let samples = decoded.samples.to_f64();

    let duration_secs = if sample_rate > 0 {
        samples.len() as f64 / sample_rate as f64
    } else {
        0.0
    };

    Ok(RawInfo {
        format: format!("{} {}-bit", input.encoding, input.bits),
        byte_len: data.len(),
        sample_count: samples.len(),
        dropped_bytes: decoded.dropped_bytes,
        duration_secs,
        min_sample: samples.iter().copied().reduce(f64::min),
        max_sample: samples.iter().copied().reduce(f64::max),
    })
}

/// Convert raw bytes into a table, dithering from the given source.
pub fn convert<D: DitherSource + ?Sized>(
    data: &[u8],
    converter: &Converter,
    table_name: &str,
    source: &mut D,
) -> TableResult<ConversionResult> {
    converter.convert(table_name, data, source)
}

/// Render a converted table as header text.
pub fn to_header(result: &ConversionResult) -> String {
    Writer::new().write(result)
}

/// get lib version
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
