//! Example: Build a single-cycle sine wavetable for Mozzi's Oscil
//!
//! Run with: cargo run --example sine_wavetable [output.h]

use audio2mozzi::{convert_bytes, render_header, BitWidth, ConvertOptions, InputEncoding, InputSpec};
use std::env;
use std::fs;

const NUM_CELLS: usize = 2048;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    // One cycle, as float32 raw bytes, like a "RAW (headerless)" export
    let raw: Vec<u8> = (0..NUM_CELLS)
        .map(|i| (i as f32 / NUM_CELLS as f32 * 2.0 * std::f32::consts::PI).sin())
        .flat_map(|s| s.to_le_bytes())
        .collect();

    let options = ConvertOptions::new(
        InputSpec::new(InputEncoding::Float, BitWidth::Bits32),
        BitWidth::Bits8,
    )
    .with_seed(2048);

    let result = convert_bytes(&raw, &options, "SIN2048")?;
    println!("  Cells:    {}", result.metadata.num_cells);
    println!("  Dithered: {}", result.stats.dither_insertions);

    let header = render_header(&result);
    match args.get(1) {
        Some(path) => {
            fs::write(path, &header)?;
            println!("Wrote {}", path);
        }
        None => println!("\n{}", header),
    }

    Ok(())
}
