//! audio2mozzi - raw audio to Mozzi table converter library
//!
//! Turns headerless sample files (as exported by Audacity's "RAW
//! (headerless)" option or `sox -t raw`) into C headers that Mozzi sketches
//! can include directly. It works on native targets and can be compiled to
//! WebAssembly.
//!

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Re-export libmozzi types
pub use libmozzi_table::{
    BitWidth, ConversionResult, ConversionStats, InputEncoding, InputSpec, OutputSpec, RawInfo,
    TableMetadata, DEFAULT_SAMPLE_RATE,
};

pub use libmozzi_table::{DitherSource, FixedDither, RngDither};

use libmozzi_table::Converter;

/// Conversion options, one field per command-line flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Declared format of the raw input
    pub input: InputSpec,
    /// Width of each table element
    pub output_bits: BitWidth,
    /// Where to write the header (defaults to the input with `.h`)
    pub output_file: Option<PathBuf>,
    /// Table identifier (defaults to the output file stem)
    pub table_name: Option<String>,
    /// Sample rate written to the `_SAMPLERATE` macro
    pub sample_rate: u32,
    /// Remap to a symmetrical range when the table reaches `-max - 1`
    pub make_symmetrical: bool,
    /// Fixed dither seed for reproducible output
    pub seed: Option<u64>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: InputSpec::default(),
            output_bits: BitWidth::Bits8,
            output_file: None,
            table_name: None,
            sample_rate: DEFAULT_SAMPLE_RATE,
            make_symmetrical: false,
            seed: None,
        }
    }
}

impl ConvertOptions {
    /// Options for a given input and output format, everything else default
    pub fn new(input: InputSpec, output_bits: BitWidth) -> Self {
        Self {
            input,
            output_bits,
            ..Default::default()
        }
    }

    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = Some(name.into());
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_symmetry(mut self, make_symmetrical: bool) -> Self {
        self.make_symmetrical = make_symmetrical;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The pipeline these options describe
    pub fn converter(&self) -> Converter {
        Converter::new(self.input, OutputSpec::new(self.output_bits))
            .with_sample_rate(self.sample_rate)
            .with_symmetry(self.make_symmetrical)
    }

    /// Check the parameter combination, without touching any file
    pub fn validate(&self) -> Result<()> {
        self.converter()
            .validate()
            .context("Invalid conversion parameters")
    }

    /// Output path, explicit or derived from the input path
    pub fn output_path(&self, input: &Path) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| default_output_path(input))
    }

    /// Table name, explicit or derived from the output path
    pub fn table_name_for(&self, output: &Path) -> String {
        match &self.table_name {
            Some(name) => name.replace('-', "_"),
            None => derive_table_name(output),
        }
    }

    fn dither_source(&self) -> Box<dyn DitherSource> {
        match self.seed {
            Some(seed) => Box::new(RngDither::seeded(seed)),
            None => Box::new(RngDither::from_entropy()),
        }
    }
}

/// `input` with its extension replaced by `.h`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("h")
}

/// Table name from an output path: the file stem, uppercased, with hyphens
/// (and anything else a C identifier can't hold) turned into underscores.
pub fn derive_table_name(output: &Path) -> String {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if !name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        name.insert(0, '_');
    }
    name
}

/// Everything a conversion run produced, for display or JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ConvertOptions,
    pub table: TableMetadata,
    pub stats: ConversionStats,
}

/// Convert raw sample bytes into a table
///
/// # Arguments
/// * `bytes` - Raw sample data
/// * `options` - Conversion options
/// * `table_name` - Identifier for the generated table
pub fn convert_bytes(
    bytes: &[u8],
    options: &ConvertOptions,
    table_name: &str,
) -> Result<ConversionResult> {
    let mut source = options.dither_source();
    convert_bytes_with(bytes, options, table_name, &mut *source)
}

/// Like [`convert_bytes`], with the dither choice supplied by the caller
pub fn convert_bytes_with<D: DitherSource + ?Sized>(
    bytes: &[u8],
    options: &ConvertOptions,
    table_name: &str,
    source: &mut D,
) -> Result<ConversionResult> {
    libmozzi_table::convert(bytes, &options.converter(), table_name, source)
        .with_context(|| format!("Failed to convert samples into table {}", table_name))
}

/// Render a converted table as C header text
pub fn render_header(result: &ConversionResult) -> String {
    libmozzi_table::to_header(result)
}

/// Convert a raw sample file and write the header
///
/// Parameters are checked before the input is opened; the header is only
/// written once conversion has succeeded.
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<ConversionReport> {
    options.validate()?;

    let output = options.output_path(input);
    let table_name = options.table_name_for(&output);
    libmozzi_table::validate_table_name(&table_name).with_context(|| match options.table_name {
        Some(_) => "Invalid table name".to_string(),
        None => format!(
            "Cannot derive a table name from {}, pass one explicitly",
            output.display()
        ),
    })?;

    let bytes = fs::read(input)
        .with_context(|| format!("Failed to read input file {}", input.display()))?;

    let result = convert_bytes(&bytes, options, &table_name)?;
    write_header(&output, &render_header(&result))?;

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output,
        options: options.clone(),
        table: result.metadata,
        stats: result.stats,
    })
}

/// Inspect a raw sample file without converting it
///
/// Only the input format matters here, the output width is ignored.
pub fn inspect_file(input: &Path, options: &ConvertOptions) -> Result<RawInfo> {
    options.input.format().context("Invalid input format")?;

    let bytes = fs::read(input)
        .with_context(|| format!("Failed to read input file {}", input.display()))?;

    libmozzi_table::info(&bytes, options.input, options.sample_rate)
        .context("Failed to decode input samples")
}

/// Write header text, removing the file again if the write fails halfway
fn write_header(path: &Path, text: &str) -> Result<()> {
    if let Err(e) = fs::write(path, text) {
        let _ = fs::remove_file(path);
        return Err(e).with_context(|| format!("Failed to write header file {}", path.display()));
    }
    Ok(())
}

