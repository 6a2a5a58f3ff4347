use crate::core::{
    BitWidth, ConversionResult, ConversionStats, InputEncoding, InputSpec, OutputSpec, TableError,
    TableMetadata, TableResult, DEFAULT_SAMPLE_RATE,
};
use crate::dither::{dither, DitherSource};
use crate::normalize::make_symmetrical;
use crate::reader::Reader;
use crate::rescale::rescale;

/// raw samples -> table values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    input: InputSpec,
    output: OutputSpec,
    sample_rate: u32,
    make_symmetrical: bool,
}

impl Converter {
    pub fn new(input: InputSpec, output: OutputSpec) -> Self {
        Converter {
            input,
            output,
            sample_rate: DEFAULT_SAMPLE_RATE,
            make_symmetrical: false,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_symmetry(mut self, make_symmetrical: bool) -> Self {
        self.make_symmetrical = make_symmetrical;
        self
    }

    /// Reject parameter combinations the pipeline can't honour.
    ///
    /// Cheap enough to call before touching any file.
    pub fn validate(&self) -> TableResult<()> {
        self.input.format()?;

        if self.sample_rate == 0 {
            return Err(TableError::InvalidSampleRate);
        }

        // integers pass through unscaled, so they need a table at least as wide
        if self.input.encoding == InputEncoding::Int
            && self.input.bits.bits() > self.output.bits.bits()
        {
            return Err(TableError::NarrowingPassThrough {
                input_bits: self.input.bits.bits(),
                output_bits: self.output.bits.bits(),
            });
        }

        Ok(())
    }

    /// convert raw bytes into a named table
    pub fn convert<D: DitherSource + ?Sized>(
        &self,
        table_name: &str,
        data: &[u8],
        source: &mut D,
    ) -> TableResult<ConversionResult> {
        self.validate()?;
        validate_table_name(table_name)?;

        let reader = Reader::new(self.input)?;
        let decoded = reader.read(data);

        let values = rescale(&decoded.samples, self.output.bits);
        let (values, dither_insertions) = dither(&values, source);
        let (values, normalized) = if self.make_symmetrical {
            make_symmetrical(values, self.output.bits)
        } else {
            (values, false)
        };

        let stats = ConversionStats {
            decoded_samples: decoded.samples.len(),
            dropped_bytes: decoded.dropped_bytes,
            dither_insertions,
            normalized,
            min_value: values.iter().copied().min(),
            max_value: values.iter().copied().max(),
        };

        Ok(ConversionResult {
            metadata: TableMetadata {
                name: table_name.to_string(),
                num_cells: values.len(),
                sample_rate: self.sample_rate,
                output_bits: self.output.bits,
            },
            values,
            stats,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(InputSpec::default(), OutputSpec::new(BitWidth::Bits8))
    }
}

/// table names end up as C identifiers
pub fn validate_table_name(name: &str) -> TableResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(TableError::InvalidTableName(name.to_string()))
    }
}
