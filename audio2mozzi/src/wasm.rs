use wasm_bindgen::prelude::*;

use crate::{BitWidth, ConvertOptions, InputEncoding, InputSpec};

fn to_js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

fn options_from_args(
    encoding: &str,
    input_bits: u8,
    output_bits: u8,
    sample_rate: u32,
    make_symmetrical: bool,
) -> Result<ConvertOptions, JsValue> {
    let encoding: InputEncoding = encoding
        .parse()
        .map_err(|e: libmozzi_table::TableError| JsValue::from_str(&e.to_string()))?;
    let input_bits =
        BitWidth::try_from(input_bits).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let output_bits =
        BitWidth::try_from(output_bits).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let options = ConvertOptions::new(InputSpec::new(encoding, input_bits), output_bits)
        .with_sample_rate(sample_rate)
        .with_symmetry(make_symmetrical);
    options.validate().map_err(to_js_err)?;
    Ok(options)
}

/// Convert raw sample bytes straight to header text
#[wasm_bindgen]
pub fn convert_raw_to_header(
    raw_bytes: &[u8],
    encoding: &str,
    input_bits: u8,
    output_bits: u8,
    table_name: &str,
    sample_rate: u32,
    make_symmetrical: bool,
) -> Result<String, JsValue> {
    let options = options_from_args(
        encoding,
        input_bits,
        output_bits,
        sample_rate,
        make_symmetrical,
    )?;
    let table_name = table_name.replace('-', "_");

    let result = crate::convert_bytes(raw_bytes, &options, &table_name).map_err(to_js_err)?;
    Ok(crate::render_header(&result))
}

/// Convert raw sample bytes to table values, for previewing the waveform
#[wasm_bindgen]
pub fn convert_raw_to_values(
    raw_bytes: &[u8],
    encoding: &str,
    input_bits: u8,
    output_bits: u8,
    make_symmetrical: bool,
) -> Result<js_sys::Float64Array, JsValue> {
    let options = options_from_args(
        encoding,
        input_bits,
        output_bits,
        crate::DEFAULT_SAMPLE_RATE,
        make_symmetrical,
    )?;

    let result = crate::convert_bytes(raw_bytes, &options, "PREVIEW").map_err(to_js_err)?;
    let values: Vec<f64> = result.values.iter().map(|&v| v as f64).collect();
    Ok(js_sys::Float64Array::from(&values[..]))
}

/// Describe raw sample bytes as a JS object
#[wasm_bindgen]
pub fn raw_info(
    raw_bytes: &[u8],
    encoding: &str,
    input_bits: u8,
    sample_rate: u32,
) -> Result<JsValue, JsValue> {
    let options = options_from_args(encoding, input_bits, 32, sample_rate, false)?;
    let info = libmozzi_table::info(raw_bytes, options.input, sample_rate)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&info).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Suggested table name for a file name, as the CLI would derive it
#[wasm_bindgen]
pub fn table_name_for_file(file_name: &str) -> String {
    crate::derive_table_name(std::path::Path::new(file_name))
}

// Initialize wasm-bindgen panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
