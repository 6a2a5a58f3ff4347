use crate::core::{InputSpec, SampleFormat, SampleSequence, TableResult};

/// samples pulled out of a raw buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub samples: SampleSequence,
    /// trailing bytes that did not make a whole sample
    pub dropped_bytes: usize,
}

/// little-endian reader for headerless sample data
pub struct Reader {
    format: SampleFormat,
}

impl Reader {
    /// new reader, fails for formats that don't exist (float at 8/16 bits)
    pub fn new(spec: InputSpec) -> TableResult<Self> {
        Ok(Reader {
            format: spec.format()?,
        })
    }

    pub fn format(&self) -> SampleFormat {
        self.format
    }

    /// number of whole samples in `len` bytes
    pub fn sample_count(&self, len: usize) -> usize {
        len / self.format.width()
    }

    /// decode every whole sample; a trailing partial sample is dropped
    pub fn read(&self, data: &[u8]) -> Decoded {
        let count = self.sample_count(data.len());
        let dropped_bytes = data.len() - count * self.format.width();
        let mut cursor = Cursor::new(&data[..count * self.format.width()]);

        let samples = match self.format {
            SampleFormat::Int8 => {
                SampleSequence::Int8(std::iter::from_fn(|| cursor.read_i8()).collect())
            }
            SampleFormat::Int16 => {
                SampleSequence::Int16(std::iter::from_fn(|| cursor.read_i16_le()).collect())
            }
            SampleFormat::Int32 => {
                SampleSequence::Int32(std::iter::from_fn(|| cursor.read_i32_le()).collect())
            }
            SampleFormat::Float32 => {
                SampleSequence::Float32(std::iter::from_fn(|| cursor.read_f32_le()).collect())
            }
        };

        Decoded {
            samples,
            dropped_bytes,
        }
    }
}

// cursor helper

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?;
        self.pos += N;
        bytes.try_into().ok()
    }

    fn read_i8(&mut self) -> Option<i8> {
        self.read_array::<1>().map(i8::from_le_bytes)
    }

    fn read_i16_le(&mut self) -> Option<i16> {
        self.read_array::<2>().map(i16::from_le_bytes)
    }

    fn read_i32_le(&mut self) -> Option<i32> {
        self.read_array::<4>().map(i32::from_le_bytes)
    }

    fn read_f32_le(&mut self) -> Option<f32> {
        self.read_array::<4>().map(f32::from_le_bytes)
    }
}
