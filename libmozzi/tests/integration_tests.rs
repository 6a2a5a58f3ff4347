//! High-level tests that run raw bytes through the whole pipeline.

use libmozzi_table::{
    convert, info, to_header, version, BitWidth, Converter, FixedDither, InputEncoding,
    InputSpec, OutputSpec, RngDither,
};

fn float_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn array_values(header: &str) -> Vec<i64> {
    let start = header.find('{').unwrap() + 1;
    let end = header.find('}').unwrap();
    let body = header[start..end].trim();
    if body.is_empty() {
        return vec![];
    }
    body.split(',').map(|s| s.trim().parse().unwrap()).collect()
}

// ============================================================================
// Version Tests
// ============================================================================

#[test]
fn test_version() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_int8_with_triple_33() {
    let data = [10u8, (-5i8) as u8, 33, 33, 33];
    let converter = Converter::default();

    for pick in [32, 34] {
        let result = convert(&data, &converter, "SAMPLE", &mut FixedDither(pick)).unwrap();
        let header = to_header(&result);

        assert!(header.contains("#define SAMPLE_NUM_CELLS 6\n"), "{}", header);
        assert_eq!(array_values(&header), vec![10, -5, 33, 33, 33, pick]);
        assert_eq!(result.stats.decoded_samples, 5);
        assert_eq!(result.stats.dither_insertions, 1);
        assert_eq!(result.metadata.num_cells, 6);
    }
}

#[test]
fn test_int8_with_triple_33_random_dither() {
    let data = [10u8, (-5i8) as u8, 33, 33, 33];
    let result = convert(&data, &Converter::default(), "SAMPLE", &mut RngDither::from_entropy())
        .unwrap();

    let values = array_values(&to_header(&result));
    assert_eq!(values.len(), 6);
    assert_eq!(values[4], 33);
    assert!(values[5] == 32 || values[5] == 34);
}

#[test]
fn test_runs_without_triple_33_are_identical() {
    let data: Vec<u8> = (0u8..=255).filter(|&b| b != 33).collect();
    let converter = Converter::default();

    let first = to_header(
        &convert(&data, &converter, "RAMP", &mut RngDither::from_entropy()).unwrap(),
    );
    let second = to_header(
        &convert(&data, &converter, "RAMP", &mut RngDither::from_entropy()).unwrap(),
    );
    assert_eq!(first, second);
}

#[test]
fn test_float_to_8bit_table() {
    let data = float_bytes(&[0.0, 0.5, 1.0, -0.5, -1.0]);
    let converter = Converter::new(
        InputSpec::new(InputEncoding::Float, BitWidth::Bits32),
        OutputSpec::new(BitWidth::Bits8),
    );

    let result = convert(&data, &converter, "WAVE", &mut FixedDither(32)).unwrap();
    assert_eq!(result.values, vec![0, 64, 128, -63, -127]);
    assert!(!result.stats.normalized);
    assert_eq!(result.stats.min_value, Some(-127));
    assert_eq!(result.stats.max_value, Some(128));
}

#[test]
fn test_float_to_16bit_table_with_symmetry() {
    // -1.5 clamps to -32769, which triggers the remap
    let data = float_bytes(&[-1.5, 0.0, 1.0]);
    let converter = Converter::new(
        InputSpec::new(InputEncoding::Float, BitWidth::Bits32),
        OutputSpec::new(BitWidth::Bits16),
    )
    .with_symmetry(true);

    let result = convert(&data, &converter, "WAVE", &mut FixedDither(32)).unwrap();
    assert!(result.stats.normalized);
    assert_eq!(result.values, vec![-32768, 0, 32768]);
}

#[test]
fn test_symmetry_flag_off_keeps_trigger_value() {
    let data = float_bytes(&[-1.5, 1.0]);
    let converter = Converter::new(
        InputSpec::new(InputEncoding::Float, BitWidth::Bits32),
        OutputSpec::new(BitWidth::Bits8),
    );

    let result = convert(&data, &converter, "WAVE", &mut FixedDither(32)).unwrap();
    assert_eq!(result.values, vec![-129, 128]);
}

#[test]
fn test_float_that_rescales_to_33_is_dithered() {
    // 33 / 128 = 0.2578125, exact in f32
    let data = float_bytes(&[0.257_812_5; 3]);
    let converter = Converter::new(
        InputSpec::new(InputEncoding::Float, BitWidth::Bits32),
        OutputSpec::new(BitWidth::Bits8),
    );

    let result = convert(&data, &converter, "WAVE", &mut FixedDither(34)).unwrap();
    assert_eq!(result.values, vec![33, 33, 33, 34]);
}

#[test]
fn test_int16_into_32bit_table() {
    let data: Vec<u8> = [-32768i16, 33, 33, 33, 32767]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    let converter = Converter::new(
        InputSpec::new(InputEncoding::Int, BitWidth::Bits16),
        OutputSpec::new(BitWidth::Bits32),
    )
    .with_sample_rate(8192);

    let result = convert(&data, &converter, "BASS", &mut FixedDither(32)).unwrap();
    let header = to_header(&result);
    assert!(header.contains("#define BASS_SAMPLERATE 8192\n"));
    assert!(header.contains("CONSTTABLE_STORAGE(int32_t) BASS_DATA [] = {"));
    assert_eq!(array_values(&header), vec![-32768, 33, 33, 33, 32, 32767]);
}

#[test]
fn test_trailing_bytes_are_reported() {
    let data = [1u8, 0, 2, 0, 3];
    let converter = Converter::new(
        InputSpec::new(InputEncoding::Int, BitWidth::Bits16),
        OutputSpec::new(BitWidth::Bits16),
    );

    let result = convert(&data, &converter, "T", &mut FixedDither(32)).unwrap();
    assert_eq!(result.values, vec![1, 2]);
    assert_eq!(result.stats.dropped_bytes, 1);
}

// ============================================================================
// Info Tests
// ============================================================================

#[test]
fn test_info_reports_counts_and_duration() {
    let data = vec![0u8; 16384 + 1];
    let raw = info(&data, InputSpec::default(), 16384).unwrap();

    assert_eq!(raw.sample_count, 16385);
    assert_eq!(raw.dropped_bytes, 0);
    assert!((raw.duration_secs - 16385.0 / 16384.0).abs() < 1e-9);
    assert_eq!(raw.min_sample, Some(0.0));
    assert_eq!(raw.max_sample, Some(0.0));
    assert_eq!(raw.format, "int 8-bit");
}

#[test]
fn test_info_float_range() {
    let data = float_bytes(&[-0.75, 0.25, 0.5]);
    let raw = info(
        &data,
        InputSpec::new(InputEncoding::Float, BitWidth::Bits32),
        16384,
    )
    .unwrap();

    assert_eq!(raw.min_sample, Some(-0.75));
    assert_eq!(raw.max_sample, Some(0.5));
}

#[test]
fn test_info_empty() {
    let raw = info(&[], InputSpec::default(), 16384).unwrap();
    assert_eq!(raw.sample_count, 0);
    assert_eq!(raw.min_sample, None);
}
